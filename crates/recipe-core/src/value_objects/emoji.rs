//! Reaction emoji set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emoji a user can react with. Stored and serialized as its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emoji {
    Like,
    Dislike,
    AngryFace,
    Heart,
    Fire,
}

impl Emoji {
    pub const ALL: [Emoji; 5] = [
        Emoji::Like,
        Emoji::Dislike,
        Emoji::AngryFace,
        Emoji::Heart,
        Emoji::Fire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emoji::Like => "like",
            Emoji::Dislike => "dislike",
            Emoji::AngryFace => "angry_face",
            Emoji::Heart => "heart",
            Emoji::Fire => "fire",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emoji: {0}")]
pub struct EmojiParseError(pub String);

impl FromStr for Emoji {
    type Err = EmojiParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emoji::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| EmojiParseError(s.to_string()))
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
