//! Component index comparison.
//!
//! This module compares two [`ComponentIndex`] values and produces a
//! structured report of discrepancies in three categories: version
//! mismatches, components only in the first index, and components only
//! in the second. Findings within each category follow the insertion
//! order of the index they came from, so output is stable across runs.
//!
//! # Examples
//!
//! ```
//! use sbomcmp::{compare, ComponentIndex};
//!
//! let first: ComponentIndex =
//!     [(Some("libX".to_string()), Some("1.0".to_string()))].into_iter().collect();
//! let second: ComponentIndex =
//!     [(Some("libX".to_string()), Some("2.0".to_string()))].into_iter().collect();
//!
//! let report = compare(&first, &second);
//! assert_eq!(report.stats.mismatched, 1);
//! ```

use crate::model::ComponentIndex;

/// The category a finding belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// Name present in both indices with differing versions.
    VersionMismatch {
        first: Option<String>,
        second: Option<String>,
    },
    /// Name present only in the first index.
    OnlyInFirst { version: Option<String> },
    /// Name present only in the second index.
    OnlyInSecond { version: Option<String> },
}

/// A single discrepancy between the two indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Component name (`None` for a component indexed without a name).
    pub name: Option<String>,
    pub kind: FindingKind,
}

/// Per-category discrepancy counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareStats {
    pub mismatched: usize,
    pub only_in_first: usize,
    pub only_in_second: usize,
}

impl CompareStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of discrepancies.
    pub fn total(&self) -> usize {
        self.mismatched + self.only_in_first + self.only_in_second
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The complete comparison result.
#[derive(Debug, Clone)]
pub struct CompareReport {
    /// Findings, ordered mismatches first, then only-in-first, then
    /// only-in-second.
    pub findings: Vec<Finding>,
    /// Summary counts.
    pub stats: CompareStats,
    /// Size of the first index (for the accuracy metric).
    pub first_len: usize,
    /// Size of the second index (for the accuracy metric).
    pub second_len: usize,
}

impl CompareReport {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Returns the accuracy percentage:
    /// `|max(first_len, second_len) - total| / max(first_len, second_len) * 100`.
    ///
    /// When both indices are empty there is nothing to be inaccurate
    /// about, so this returns 100.0.
    pub fn accuracy(&self) -> f64 {
        let max_components = self.first_len.max(self.second_len);
        if max_components == 0 {
            return 100.0;
        }
        let delta = (max_components as f64 - self.stats.total() as f64).abs();
        delta / max_components as f64 * 100.0
    }
}

/// Compares two component indices.
///
/// Produces three ordered categories:
/// 1. Version mismatches, in the first index's insertion order.
/// 2. Components only in the first index, in its insertion order.
/// 3. Components only in the second index, in its insertion order.
///
/// A `None` version is an ordinary value here: it compares unequal to
/// every real version string, so a component with a null version on one
/// side and a real version on the other is reported as a mismatch.
///
/// # Examples
///
/// ```
/// use sbomcmp::{compare, ComponentIndex};
///
/// let first: ComponentIndex =
///     [(Some("a".to_string()), Some("1".to_string()))].into_iter().collect();
/// let second = ComponentIndex::new();
///
/// let report = compare(&first, &second);
/// assert_eq!(report.stats.only_in_first, 1);
/// ```
pub fn compare(first: &ComponentIndex, second: &ComponentIndex) -> CompareReport {
    let mut findings = Vec::new();
    let mut stats = CompareStats::new();

    for (name, version) in first.iter() {
        if let Some(other_version) = second.get(name) {
            if version != other_version {
                findings.push(Finding {
                    name: name.clone(),
                    kind: FindingKind::VersionMismatch {
                        first: version.clone(),
                        second: other_version.clone(),
                    },
                });
                stats.mismatched += 1;
            }
        }
    }

    for (name, version) in first.iter() {
        if !second.contains(name) {
            findings.push(Finding {
                name: name.clone(),
                kind: FindingKind::OnlyInFirst {
                    version: version.clone(),
                },
            });
            stats.only_in_first += 1;
        }
    }

    for (name, version) in second.iter() {
        if !first.contains(name) {
            findings.push(Finding {
                name: name.clone(),
                kind: FindingKind::OnlyInSecond {
                    version: version.clone(),
                },
            });
            stats.only_in_second += 1;
        }
    }

    CompareReport {
        findings,
        stats,
        first_len: first.len(),
        second_len: second.len(),
    }
}
