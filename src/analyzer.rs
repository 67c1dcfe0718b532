use crate::loader::LogCollection;
use crate::parser::LogRecord;
use rustc_hash::FxHashMap;

/// Occurrences per level, keyed by the level token exactly as it appeared.
///
/// `ERROR` and `error` are separate keys here; case only stops mattering
/// when filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: FxHashMap<String, usize>,
}

impl LevelCounts {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct level keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, level: &str) -> Option<usize> {
        self.counts.get(level).copied()
    }

    /// Sum of all counts, equal to the number of records counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries by descending count, ties broken by ascending raw key.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(level, count)| (level.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(String, usize)> for LevelCounts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        LevelCounts {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Count records per level in one pass.
pub fn count_by_level(logs: &LogCollection) -> LevelCounts {
    // Most logs have ~5 levels
    let mut counts = FxHashMap::with_capacity_and_hasher(5, Default::default());

    for record in logs {
        *counts.entry(record.level.clone()).or_insert(0) += 1;
    }

    LevelCounts { counts }
}

/// Records whose level equals `level` ignoring case, in file order.
pub fn filter_by_level<'a>(logs: &'a LogCollection, level: &str) -> Vec<&'a LogRecord> {
    logs.iter()
        .filter(|record| record.level_matches(level))
        .collect()
}
