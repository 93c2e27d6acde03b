//! Voice recording lifecycle
//!
//! A small state machine for capturing a voice note: start, feed chunks,
//! then stop to obtain a clip or cancel to discard everything. Transcription
//! is simulated with a fixed delay and transcript, standing in for a real
//! speech-to-text backend.

use std::time::{Duration, Instant};

use tracing::debug;

/// Delay of the simulated transcription engine
const TRANSCRIPTION_DELAY: Duration = Duration::from_secs(2);

/// Transcript the simulated engine always produces
const SAMPLE_TRANSCRIPT: &str = "വാഴയിൽ ഇലപ്പുള്ളി രോഗം കാണുന്നു";

/// A finished voice recording
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Captured audio bytes
    pub data: Vec<u8>,
    /// Recording length in seconds
    pub duration_seconds: u64,
}

/// Recorder state machine
#[derive(Debug)]
pub struct VoiceRecorder {
    session: Option<RecordingSession>,
}

#[derive(Debug)]
struct RecordingSession {
    started_at: Instant,
    chunks: Vec<u8>,
}

impl VoiceRecorder {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Whether a recording is in progress
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Seconds elapsed in the current recording, 0 when idle
    pub fn elapsed_seconds(&self) -> u64 {
        self.session
            .as_ref()
            .map(|session| session.started_at.elapsed().as_secs())
            .unwrap_or(0)
    }

    /// Begin a new recording; a recording already in progress is discarded
    pub fn start(&mut self) {
        debug!("Recording started");
        self.session = Some(RecordingSession {
            started_at: Instant::now(),
            chunks: Vec::new(),
        });
    }

    /// Append captured audio bytes; ignored when idle
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        if let Some(session) = self.session.as_mut() {
            session.chunks.extend_from_slice(chunk);
        }
    }

    /// Finish the recording and hand back the clip, or None when idle
    pub fn stop(&mut self) -> Option<AudioClip> {
        let session = self.session.take()?;
        let clip = AudioClip {
            duration_seconds: session.started_at.elapsed().as_secs(),
            data: session.chunks,
        };
        debug!("Recording stopped after {}s", clip.duration_seconds);

        Some(clip)
    }

    /// Throw the current recording away with no side effect
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("Recording cancelled");
        }
    }
}

impl Default for VoiceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulate speech-to-text for a recorded clip
pub async fn transcribe_clip(_clip: &AudioClip) -> String {
    tokio::time::sleep(TRANSCRIPTION_DELAY).await;
    SAMPLE_TRANSCRIPT.to_string()
}

/// Format a recording duration as m:ss for display
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_preserves_chunks() {
        let mut recorder = VoiceRecorder::new();
        recorder.start();
        recorder.push_chunk(&[1, 2, 3]);
        recorder.push_chunk(&[4, 5]);

        let clip = recorder.stop().unwrap();
        assert_eq!(clip.data, vec![1, 2, 3, 4, 5]);
        assert!(!recorder.is_recording());
    }

    #[test]
    fn test_cancel_discards_everything() {
        let mut recorder = VoiceRecorder::new();
        recorder.start();
        recorder.push_chunk(&[9, 9, 9]);
        recorder.cancel();

        assert!(!recorder.is_recording());
        assert_eq!(recorder.elapsed_seconds(), 0);
        assert_eq!(recorder.stop(), None);
    }

    #[test]
    fn test_chunks_ignored_while_idle() {
        let mut recorder = VoiceRecorder::new();
        recorder.push_chunk(&[1]);
        recorder.start();

        let clip = recorder.stop().unwrap();
        assert!(clip.data.is_empty());
    }

    #[test]
    fn test_restart_discards_previous_session() {
        let mut recorder = VoiceRecorder::new();
        recorder.start();
        recorder.push_chunk(&[1, 2]);
        recorder.start();

        let clip = recorder.stop().unwrap();
        assert!(clip.data.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_transcription_is_simulated() {
        let clip = AudioClip {
            data: vec![0; 16],
            duration_seconds: 3,
        };

        let transcript = transcribe_clip(&clip).await;
        assert_eq!(transcript, SAMPLE_TRANSCRIPT);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(7), "0:07");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }
}
