//! Compact card tokens as the game logic emits them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyphs the game logic uses for the four suits.
pub const SUIT_GLYPHS: [char; 4] = ['♣', '♦', '♥', '♠'];

/// A card as a two-character code: a rank character followed by a suit glyph,
/// e.g. `"A♠"`, `"T♦"`, `"9♣"`.
///
/// The token is kept verbatim. Nothing is validated here; tokens that do not
/// follow the rank+glyph shape still travel unchanged and are left to the
/// renderer to interpret.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardToken(pub String);

impl CardToken {
    pub fn new(code: impl Into<String>) -> Self {
        CardToken(code.into())
    }

    /// The rank character (first char), if any.
    pub fn rank_char(&self) -> Option<char> {
        self.0.chars().next()
    }

    /// The suit glyph (second char), if any.
    pub fn suit_char(&self) -> Option<char> {
        self.0.chars().nth(1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardToken {
    fn from(code: &str) -> Self {
        CardToken(code.to_string())
    }
}

impl From<String> for CardToken {
    fn from(code: String) -> Self {
        CardToken(code)
    }
}

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_rank_and_multibyte_suit() {
        let t = CardToken::from("T♠");
        assert_eq!(t.rank_char(), Some('T'));
        assert_eq!(t.suit_char(), Some('♠'));
    }

    #[test]
    fn short_tokens_have_missing_parts() {
        let t = CardToken::from("A");
        assert_eq!(t.rank_char(), Some('A'));
        assert_eq!(t.suit_char(), None);
        assert_eq!(CardToken::from("").rank_char(), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&CardToken::from("9♥")).unwrap();
        assert_eq!(json, "\"9♥\"");
    }
}
