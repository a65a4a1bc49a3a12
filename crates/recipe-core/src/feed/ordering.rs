//! Feed sort orders

use std::fmt;

/// Sort order of the feed. Every variant is followed by `id ASC` so equal
/// primary keys still paginate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedOrdering {
    /// Newest first
    #[default]
    PubDateDesc,
    /// Most active first
    ActivityDesc,
    /// Least active first
    ActivityAsc,
}

impl FeedOrdering {
    /// Parse the `ordering` parameter. Unrecognized values yield the default.
    pub fn parse(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("-activity_count") => Self::ActivityDesc,
            Some("activity_count") => Self::ActivityAsc,
            _ => Self::PubDateDesc,
        }
    }

    /// Query parameter form, used when building pagination links
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::PubDateDesc => "-pub_date",
            Self::ActivityDesc => "-activity_count",
            Self::ActivityAsc => "activity_count",
        }
    }
}

impl fmt::Display for FeedOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}
