//! Per-activity streak and score records, and the store that persists them.
//!
//! This crate never reads or writes the store itself; the application owns it and updates
//! the records after grading.

#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(rename_all = "kebab-case"))]
pub enum ActivityId {
    TflSubproof,
    FolChecklist,
    ErrorSpotting,
    NestedQuantifiers,
}

impl ActivityId {
    pub const ALL: [ActivityId; 4] = [
        ActivityId::TflSubproof,
        ActivityId::FolChecklist,
        ActivityId::ErrorSpotting,
        ActivityId::NestedQuantifiers,
    ];

    /// The key under which the activity is stored
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityId::TflSubproof => "tfl-subproof",
            ActivityId::FolChecklist => "fol-checklist",
            ActivityId::ErrorSpotting => "error-spotting",
            ActivityId::NestedQuantifiers => "nested-quantifiers",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(rename_all = "camelCase", default))]
pub struct ActivityStats {
    pub streak: u32,
    pub max_streak: u32,
    pub score: i64,
}

pub type StatsMap = BTreeMap<ActivityId, ActivityStats>;

/// Zeroed stats for every activity
pub fn default_stats() -> StatsMap {
    ActivityId::ALL
        .iter()
        .map(|id| (*id, ActivityStats::default()))
        .collect()
}

/// Overlays stored entries on [`default_stats`], so every activity is present.
pub fn merge_with_defaults(stored: StatsMap) -> StatsMap {
    let mut stats = default_stats();
    stats.extend(stored);
    stats
}

/// Where the application keeps its [`StatsMap`]
pub trait StatsStore {
    /// Returns the stored stats, with defaults for activities never stored.
    fn load(&self) -> StatsMap;

    fn save(&mut self, stats: &StatsMap);
}

/// A [`StatsStore`] that lives only as long as the value
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    stored: StatsMap,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> StatsMap {
        merge_with_defaults(self.stored.clone())
    }

    fn save(&mut self, stats: &StatsMap) {
        self.stored = stats.clone();
    }
}
