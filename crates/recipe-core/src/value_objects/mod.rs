//! Value objects - immutable types that represent domain concepts

mod emoji;
mod reaction_target;
mod snowflake;

pub use emoji::{Emoji, EmojiParseError};
pub use reaction_target::{ReactionTarget, TargetKind};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
