//! Engagement counters for one recipe

/// All-time and windowed engagement counts.
///
/// Every `latest_*` value counts rows whose timestamp is at or after the
/// activity window start, so it never exceeds its all-time counterpart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub latest_reactions: i64,
    pub latest_views: i64,
    pub latest_comments: i64,
    pub reactions: i64,
    pub views: i64,
    pub comments: i64,
}

impl ActivityCounts {
    /// Activity score: recent reactions + recent views + recent comments
    #[inline]
    pub fn activity_count(&self) -> i64 {
        self.latest_reactions + self.latest_views + self.latest_comments
    }

    /// True when no windowed count exceeds its all-time count
    pub fn is_consistent(&self) -> bool {
        self.latest_reactions <= self.reactions
            && self.latest_views <= self.views
            && self.latest_comments <= self.comments
    }
}
