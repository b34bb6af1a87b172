//! Name validation over the kana alphabet.
//!
//! A name is valid when it has at least one character and every character is
//! hiragana or katakana (the prolonged sound mark ー is part of the katakana
//! block). There is no normalization: half-width katakana, kanji, spaces and
//! combining marks outside the two blocks all reject the whole string.

use serde::Serialize;

use crate::unicode::{is_kana, Script};

/// Returns `true` if `name` is non-empty and consists solely of kana.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_kana)
}

/// Script makeup of a name that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameScript {
    Hiragana,
    Katakana,
    Mixed,
}

impl NameScript {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Mixed => "mixed",
        }
    }

    fn with(self, script: Script) -> Self {
        match (self, script) {
            (Self::Hiragana, Script::Hiragana) => Self::Hiragana,
            (Self::Katakana, Script::Katakana) => Self::Katakana,
            _ => Self::Mixed,
        }
    }
}

impl From<Script> for NameScript {
    fn from(script: Script) -> Self {
        match script {
            Script::Hiragana => Self::Hiragana,
            Script::Katakana => Self::Katakana,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,
    #[error("invalid character {ch:?} (U+{:04X}) at index {index}", code_point(.ch))]
    InvalidChar {
        ch: char,
        /// Index in chars.
        index: usize,
        /// Byte offset into the name.
        position: usize,
    },
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

/// Validate `name`, reporting the first character outside the kana alphabet.
///
/// Agrees with [`is_valid_name`]: `validate_name(s).is_ok() == is_valid_name(s)`.
pub fn validate_name(name: &str) -> Result<NameScript, NameError> {
    let mut script: Option<NameScript> = None;
    for (index, (position, ch)) in name.char_indices().enumerate() {
        let Some(s) = Script::of(ch) else {
            return Err(NameError::InvalidChar {
                ch,
                index,
                position,
            });
        };
        script = Some(match script {
            None => s.into(),
            Some(acc) => acc.with(s),
        });
    }
    script.ok_or(NameError::Empty)
}
