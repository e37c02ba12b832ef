//! Place type frequency ranking
//!
//! Counts how often each place category label occurs across a set of
//! search results and ranks the labels by occurrence.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::errors::DomainError;

/// A place category label with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// Category label as reported by the provider (e.g. "cafe")
    pub label: String,
    /// Number of occurrences, always at least 1
    pub count: u32,
}

impl fmt::Display for TypeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Count: {}, Type: {}", self.count, self.label)
    }
}

/// Labels ranked by descending count
///
/// Labels are unique. Labels with equal counts keep the order in which
/// they were first seen in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeFrequency {
    entries: Vec<TypeCount>,
}

impl TypeFrequency {
    /// Count labels across results and rank them
    ///
    /// Each item is one result's label list; `None` marks a result without
    /// a label list and is skipped. Every label in a list is counted
    /// verbatim, including empty strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyResult` if no label was found at all.
    pub fn aggregate<I, L, S>(results: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Option<L>>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<TypeCount> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for labels in results.into_iter().flatten() {
            for label in labels {
                let label = label.as_ref();
                if let Some(&position) = positions.get(label) {
                    let entry = &mut entries[position];
                    entry.count = entry.count.saturating_add(1);
                } else {
                    positions.insert(label.to_owned(), entries.len());
                    entries.push(TypeCount {
                        label: label.to_owned(),
                        count: 1,
                    });
                }
            }
        }

        if entries.is_empty() {
            return Err(DomainError::EmptyResult);
        }

        // slice::sort_by is stable, so first-seen order survives among ties
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(Self { entries })
    }

    /// Ranked entries
    #[must_use]
    pub fn entries(&self) -> &[TypeCount] {
        &self.entries
    }

    /// Number of distinct labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for an aggregated ranking
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of a label, if it was seen
    #[must_use]
    pub fn count_of(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.count)).sum()
    }

    /// The `n` most frequent labels
    #[must_use]
    pub fn top(&self, n: usize) -> &[TypeCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Iterate over entries in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, TypeCount> {
        self.entries.iter()
    }

    /// Consume into `(label, count)` pairs in rank order
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, u32)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.label, entry.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TypeFrequency {
    type Item = &'a TypeCount;
    type IntoIter = std::slice::Iter<'a, TypeCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for TypeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(frequency: &TypeFrequency) -> Vec<(&str, u32)> {
        frequency
            .iter()
            .map(|entry| (entry.label.as_str(), entry.count))
            .collect()
    }

    #[test]
    fn counts_and_ranks_labels() {
        let results = vec![Some(vec!["bar", "cafe"]), Some(vec!["bar"])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(pairs(&frequency), vec![("bar", 2), ("cafe", 1)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let results = vec![
            Some(vec!["a"]),
            Some(vec!["b"]),
            Some(vec!["a"]),
            Some(vec!["b"]),
        ];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(pairs(&frequency), vec![("a", 2), ("b", 2)]);
    }

    #[test]
    fn ties_keep_first_seen_order_after_higher_count() {
        let results = vec![
            Some(vec!["point_of_interest", "establishment", "food"]),
            Some(vec!["restaurant", "food", "establishment"]),
            Some(vec!["cafe"]),
        ];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(
            pairs(&frequency),
            vec![
                ("establishment", 2),
                ("food", 2),
                ("point_of_interest", 1),
                ("restaurant", 1),
                ("cafe", 1),
            ]
        );
    }

    #[test]
    fn empty_results_fail() {
        let results: Vec<Option<Vec<&str>>> = Vec::new();
        assert_eq!(
            TypeFrequency::aggregate(results),
            Err(DomainError::EmptyResult)
        );
    }

    #[test]
    fn results_without_types_fail() {
        let results: Vec<Option<Vec<&str>>> = vec![None, Some(vec![]), None];
        assert_eq!(
            TypeFrequency::aggregate(results),
            Err(DomainError::EmptyResult)
        );
    }

    #[test]
    fn missing_type_lists_are_skipped() {
        let results = vec![None, Some(vec!["park"]), None, Some(vec!["park"])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(pairs(&frequency), vec![("park", 2)]);
    }

    #[test]
    fn empty_labels_are_counted() {
        let results = vec![Some(vec!["park", ""]), Some(vec![""])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(pairs(&frequency), vec![("", 2), ("park", 1)]);
        assert_eq!(frequency.total(), 3);
    }

    #[test]
    fn duplicate_label_within_result_counts_twice() {
        let results = vec![Some(vec!["store", "store"])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(frequency.count_of("store"), Some(2));
    }

    #[test]
    fn accepts_owned_strings() {
        let results: Vec<Option<Vec<String>>> =
            vec![Some(vec!["bank".to_string(), "atm".to_string()])];
        let frequency = TypeFrequency::aggregate(results.iter().map(Option::as_deref)).unwrap();
        assert_eq!(frequency.len(), 2);
        assert!(!frequency.is_empty());
    }

    #[test]
    fn accessors() {
        let results = vec![
            Some(vec!["bar", "cafe"]),
            Some(vec!["bar", "night_club"]),
            Some(vec!["bar"]),
        ];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(frequency.total(), 5);
        assert_eq!(frequency.count_of("bar"), Some(3));
        assert_eq!(frequency.count_of("museum"), None);
        assert_eq!(frequency.top(1).len(), 1);
        assert_eq!(frequency.top(1)[0].label, "bar");
        assert_eq!(frequency.top(10).len(), 3);
    }

    #[test]
    fn into_pairs_preserves_rank() {
        let results = vec![Some(vec!["x", "y"]), Some(vec!["y"])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(
            frequency.into_pairs(),
            vec![("y".to_string(), 2), ("x".to_string(), 1)]
        );
    }

    #[test]
    fn display_lists_one_entry_per_line() {
        let results = vec![Some(vec!["bar", "cafe"]), Some(vec!["bar"])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        assert_eq!(
            frequency.to_string(),
            "Count: 2, Type: bar\nCount: 1, Type: cafe"
        );
    }

    #[test]
    fn serializes_as_array() {
        let results = vec![Some(vec!["bar"])];
        let frequency = TypeFrequency::aggregate(results).unwrap();
        let json = serde_json::to_string(&frequency).unwrap();
        assert_eq!(json, r#"[{"label":"bar","count":1}]"#);
    }
}
