//! The thing a reaction points at

use super::Snowflake;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a reaction can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Recipe,
    Comment,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Recipe => "recipe",
            TargetKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe" => Ok(TargetKind::Recipe),
            "comment" => Ok(TargetKind::Comment),
            other => Err(format!("unknown reaction target kind: {other}")),
        }
    }
}

/// Tagged reference to a reactable object.
///
/// Persisted as a `(target_kind, target_id)` pair; the feed aggregator only
/// ever counts reactions whose kind is [`TargetKind::Recipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionTarget {
    pub kind: TargetKind,
    pub id: Snowflake,
}

impl ReactionTarget {
    pub fn recipe(id: Snowflake) -> Self {
        Self {
            kind: TargetKind::Recipe,
            id,
        }
    }

    pub fn comment(id: Snowflake) -> Self {
        Self {
            kind: TargetKind::Comment,
            id,
        }
    }

    pub fn is_recipe(&self) -> bool {
        self.kind == TargetKind::Recipe
    }
}
