//! Query composer
//!
//! Client-side submission flow for advisory queries: drafting content as
//! text, voice, or photos, validating it, and submitting it to the answer
//! endpoint while a ticker simulates upload progress.

pub mod client;
pub mod progress;
pub mod recorder;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::locale::Language;
use crate::models::query::{QueryContext, QueryRequest};

pub use client::AnswerClient;
pub use progress::{ProgressTicker, PROGRESS_CAP};
pub use recorder::{format_duration, transcribe_clip, AudioClip, VoiceRecorder};

/// Longest answer preview shown after a submission, in characters
const PREVIEW_LIMIT: usize = 200;

/// A photo attached to a draft
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    /// Attachment id, assigned on attach
    pub id: Uuid,
    /// Original file name
    pub name: String,
    /// MIME type, always `image/*`
    pub media_type: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

/// Everything the farmer has entered but not yet submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDraft {
    /// Typed question text
    pub text: String,
    /// Transcript of the recorded voice clip, if any
    pub transcription: String,
    /// Attached photos
    pub images: Vec<ImageAttachment>,
    /// Finished voice recording, if any
    pub audio: Option<AudioClip>,
    /// Crop the question is about
    pub crop: String,
    /// Plot or field identifier
    pub plot: String,
    /// Farm location
    pub location: String,
    /// Season hint
    pub season: String,
    /// Free-form problem notes
    pub problem_description: String,
    /// Answer language
    pub language: Language,
    /// Whether the farmer agreed to share farm details
    pub consent_given: bool,
}

impl QueryDraft {
    /// Whether the draft carries anything answerable
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
            || !self.transcription.trim().is_empty()
            || !self.images.is_empty()
            || self.audio.is_some()
    }

    /// Whether submission is blocked until consent is given.
    ///
    /// Images and location reveal farm details, so either one requires
    /// consent. Text alone does not.
    pub fn needs_consent(&self) -> bool {
        (!self.images.is_empty() || !self.location.is_empty()) && !self.consent_given
    }

    /// Check the draft is submittable. Content is checked before consent.
    pub fn validate(&self) -> Result<(), ComposerError> {
        if !self.has_content() {
            return Err(ComposerError::MissingContent);
        }
        if self.needs_consent() {
            return Err(ComposerError::ConsentRequired);
        }
        Ok(())
    }

    /// Build the wire query from the draft.
    ///
    /// Typed text wins over the transcription; empty context fields are
    /// left out entirely.
    pub fn to_request(&self) -> QueryRequest {
        let text = self.text.trim();
        let prompt = if text.is_empty() {
            self.transcription.trim()
        } else {
            text
        };

        QueryRequest {
            prompt: prompt.to_string(),
            language: self.language.code().to_string(),
            context: QueryContext {
                crop: Some(self.crop.clone()).filter(|value| !value.is_empty()),
                season: Some(self.season.clone()).filter(|value| !value.is_empty()),
                location: Some(self.location.clone()).filter(|value| !value.is_empty()),
                extra: serde_json::Map::new(),
            },
        }
    }

    /// Attach a photo. Files without an `image/` media type are refused.
    pub fn attach_image(
        &mut self,
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: Vec<u8>,
    ) -> bool {
        let media_type = media_type.into();
        if !media_type.starts_with("image/") {
            return false;
        }

        self.images.push(ImageAttachment {
            id: Uuid::new_v4(),
            name: name.into(),
            media_type,
            data,
        });
        true
    }

    /// Remove a previously attached photo by id
    pub fn remove_image(&mut self, id: Uuid) {
        self.images.retain(|image| image.id != id);
    }

    /// Clear submitted content while keeping the farm context.
    ///
    /// Crop, plot, location, season, consent, and language survive so the
    /// next question starts from the same situation.
    pub fn reset_content(&mut self) {
        self.text.clear();
        self.transcription.clear();
        self.images.clear();
        self.audio = None;
        self.problem_description.clear();
    }
}

/// Why a draft could not be submitted
#[derive(Debug, Error, PartialEq)]
pub enum ComposerError {
    /// Draft has no text, transcription, photos, or audio
    #[error("Please type a question, upload an image, or record voice")]
    MissingContent,
    /// Draft shares photos or location without consent
    #[error("Please provide consent for data sharing")]
    ConsentRequired,
    /// The answer endpoint rejected the query or was unreachable
    #[error("Submission failed. Please try again")]
    SubmitFailed,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// Full answer text
    pub answer: String,
    /// Short form of the answer for immediate display
    pub preview: String,
    /// True when the answer is a canned placeholder
    pub mocked: bool,
}

/// Clip an answer for display, keeping at most [`PREVIEW_LIMIT`] characters
pub fn preview_text(answer: &str) -> String {
    if answer.chars().count() > PREVIEW_LIMIT {
        let clipped: String = answer.chars().take(PREVIEW_LIMIT).collect();
        format!("{}…", clipped)
    } else {
        answer.to_string()
    }
}

/// Drives the draft-validate-submit cycle against an answer endpoint
pub struct Composer {
    client: AnswerClient,
    /// Draft under edit, mutated directly by the caller
    pub draft: QueryDraft,
    recorder: VoiceRecorder,
    progress: Arc<watch::Sender<u8>>,
}

impl Composer {
    /// Create a composer against a service base URL
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client: AnswerClient::new(base_url)?,
            draft: QueryDraft::default(),
            recorder: VoiceRecorder::new(),
            progress: Arc::new(watch::channel(0).0),
        })
    }

    /// Subscribe to upload progress updates (0 to 100)
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Seconds the running recording has lasted so far
    pub fn recording_seconds(&self) -> u64 {
        self.recorder.elapsed_seconds()
    }

    /// Start (or restart) a voice recording
    pub fn start_recording(&mut self) {
        self.recorder.start();
    }

    /// Feed captured audio into the running recording
    pub fn push_audio_chunk(&mut self, chunk: &[u8]) {
        self.recorder.push_chunk(chunk);
    }

    /// Stop recording, transcribe the clip, and store both on the draft
    pub async fn stop_recording(&mut self) {
        if let Some(clip) = self.recorder.stop() {
            let transcript = transcribe_clip(&clip).await;
            debug!(
                "Transcribed {}s clip ({} chars)",
                clip.duration_seconds,
                transcript.chars().count()
            );
            self.draft.transcription = transcript;
            self.draft.audio = Some(clip);
        }
    }

    /// Abandon the running recording and any transcript it produced
    pub fn cancel_recording(&mut self) {
        self.recorder.cancel();
        self.draft.transcription.clear();
        self.draft.audio = None;
    }

    /// Validate the draft and submit it to the answer endpoint.
    ///
    /// Progress is published on the watch channel: reset to 0, ticked up
    /// to 90 while the request is in flight, pushed to 100 on success,
    /// and settled back at 0 once the submission finishes either way. On
    /// success the draft content is cleared; on failure it is kept so the
    /// farmer can retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ComposerError> {
        self.draft.validate()?;

        let query = self.draft.to_request();
        info!(
            "🚀 Submitting advisory query ({} chars, language: {})",
            query.prompt.chars().count(),
            query.language
        );

        self.progress.send_replace(0);
        let ticker = ProgressTicker::start(Arc::clone(&self.progress));

        let result = self.client.ask(&query).await;
        ticker.stop();

        match result {
            Ok(answer) => {
                self.progress.send_replace(100);

                let preview = preview_text(&answer.answer);
                let mocked = answer.mocked.unwrap_or(false);
                debug!(
                    "📝 Advisory answer received ({} chars, mocked: {})",
                    answer.answer.chars().count(),
                    mocked
                );

                self.draft.reset_content();
                self.progress.send_replace(0);

                Ok(SubmitOutcome {
                    answer: answer.answer,
                    preview,
                    mocked,
                })
            }
            Err(err) => {
                warn!("Advisory query failed: {:#}", err);
                self.progress.send_replace(0);
                Err(ComposerError::SubmitFailed)
            }
        }
    }
}
