//! Character-level Unicode classification for kana.

use std::ops::RangeInclusive;

/// The full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098); the block-level check accepts them too.
pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';

/// The full Katakana block (U+30A0..U+30FF), including ゠ U+30A0 and ヿ U+30FF.
pub const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';

/// Prolonged sound mark ー (U+30FC). Lies inside [`KATAKANA`].
pub const LONG_VOWEL_MARK: char = '\u{30FC}';

/// Every code point a name may contain.
pub const KANA_ALPHABET: [RangeInclusive<char>; 2] = [HIRAGANA, KATAKANA];

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA.contains(&c)
}

pub fn is_kana(c: char) -> bool {
    KANA_ALPHABET.iter().any(|r| r.contains(&c))
}

/// Which kana block a single character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn of(c: char) -> Option<Self> {
        if is_hiragana(c) {
            Some(Self::Hiragana)
        } else if is_katakana(c) {
            Some(Self::Katakana)
        } else {
            None
        }
    }
}
