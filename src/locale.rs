//! Advisory locale table
//!
//! Maps supported interface languages to the system instruction sent to the
//! chat model and to the canned placeholder answer used when no upstream
//! credential is configured. Unknown language codes resolve to English.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Languages the advisory surface speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Malayalam
    Ml,
    /// Hindi
    Hi,
    /// English (baseline)
    En,
}

impl Language {
    /// Resolve a locale code, falling back to English for anything unrecognized
    pub fn from_code(code: &str) -> Self {
        match code {
            "ml" => Language::Ml,
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ml => "ml",
            Language::Hi => "hi",
            Language::En => "en",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Per-language strings for the advisory exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalePack {
    /// System message sent ahead of the farmer's prompt
    pub system_instruction: &'static str,
    /// Canned answer returned when the service runs without a credential
    pub placeholder_answer: &'static str,
}

/// Baseline English pack, also the fallback when a language has no entry
const FALLBACK_PACK: LocalePack = LocalePack {
    system_instruction: "You are a helpful agricultural advisor. Respond concisely and clearly.",
    placeholder_answer: "This is a sample answer. For your crop issue, consider the weather and symptoms and take appropriate action.",
};

static ADVISORY_LOCALES: Lazy<HashMap<Language, LocalePack>> = Lazy::new(|| {
    let mut packs = HashMap::new();
    packs.insert(
        Language::Ml,
        LocalePack {
            system_instruction:
                "നിങ്ങൾ ഒരു സഹായകരമായ കാർഷിക ഉപദേഷ്ടാവാണ്. ചുരുക്കമായി, വ്യക്തമായി പ്രതികരിക്കുക.",
            placeholder_answer:
                "ഇതൊരു മാതൃക മറുപടിയാണ്. നിങ്ങളുടെ വിള സംബന്ധിച്ച പ്രശ്നങ്ങൾക്ക് നിലവിലുള്ള കാലാവസ്ഥയും രോഗലക്ഷണങ്ങളും പരിഗണിച്ച് നടപടി സ്വീകരിക്കുക.",
        },
    );
    packs.insert(
        Language::Hi,
        LocalePack {
            system_instruction: "आप एक सहायक कृषि सलाहकार हैं। संक्षिप्त और स्पष्ट उत्तर दें।",
            placeholder_answer:
                "यह एक नमूना उत्तर है। अपने फसल संबंधी मुद्दों के लिए मौसम और लक्षणों के आधार पर उचित कदम उठाएँ।",
        },
    );
    packs.insert(Language::En, FALLBACK_PACK);
    packs
});

/// Look up the locale pack for a language
pub fn advisory_pack(language: Language) -> &'static LocalePack {
    ADVISORY_LOCALES.get(&language).unwrap_or(&FALLBACK_PACK)
}
