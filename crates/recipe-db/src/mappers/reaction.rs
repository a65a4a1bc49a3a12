//! Reaction models -> entity mappers

use recipe_core::entities::{Reaction, ReactionCount};
use recipe_core::error::DomainError;
use recipe_core::value_objects::{Emoji, ReactionTarget, Snowflake, TargetKind};

use crate::models::{ReactionCountModel, ReactionModel};

fn parse_emoji(raw: &str) -> Result<Emoji, DomainError> {
    raw.parse::<Emoji>()
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind: TargetKind = model
            .target_kind
            .parse()
            .map_err(DomainError::DatabaseError)?;

        Ok(Reaction {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            target: ReactionTarget {
                kind,
                id: Snowflake::new(model.target_id),
            },
            emoji: parse_emoji(&model.emoji)?,
            pub_date: model.pub_date,
            is_deleted: model.is_deleted,
        })
    }
}

impl TryFrom<ReactionCountModel> for ReactionCount {
    type Error = DomainError;

    fn try_from(model: ReactionCountModel) -> Result<Self, Self::Error> {
        Ok(ReactionCount {
            emoji: parse_emoji(&model.emoji)?,
            count: model.count,
        })
    }
}
