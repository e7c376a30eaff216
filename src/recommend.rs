// MIT License
//
// Copyright (c) 2026 Raja Lehtihet & Wael El Oraiby
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
//
//! Similarity-weighted recommendations of items a target has not rated.
//!
//! For every other entity with a positive similarity `sim` to the target,
//! each item the target has not seen accumulates `rating * sim` into its
//! total and `sim` into its similarity sum. An item's score is
//! `total / similarity_sum`, i.e. the similarity-weighted average rating
//! similar entities gave it.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::Result;
use crate::ranking::{Scored, sort_ranked};
use crate::ratings::RatingsTable;
use crate::similarity::Similarity;

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    weighted_total: f64,
    similarity_sum: f64,
}

/// Recommends every item `target` has not rated, best first.
///
/// An item counts as unseen when `target` has no rating for it or rated it
/// exactly `0.0`. Entities with a similarity `<= 0` contribute nothing, so
/// negatively correlated tastes are ignored rather than penalized. The list
/// is sorted by [`Scored::rank_order`] and is not truncated.
///
/// # Errors
/// Returns [`crate::TastesError::EntityNotFound`] when `target` is absent.
///
/// # Example
/// ```rust
/// use tastes::ratings::RatingsTable;
/// use tastes::recommend::recommendations;
/// use tastes::similarity::Euclidean;
///
/// let table = RatingsTable::from_triples([
///     ("ann", "x", 4.0),
///     ("bob", "x", 4.0),
///     ("bob", "y", 2.0),
/// ])
/// .unwrap();
///
/// let picks = recommendations(&table, "ann", &Euclidean).unwrap();
/// assert_eq!(picks.len(), 1);
/// assert_eq!(picks[0].id, "y");
/// assert_eq!(picks[0].score, 2.0);
/// ```
pub fn recommendations<S>(
    table: &RatingsTable,
    target: &str,
    similarity: &S,
) -> Result<Vec<Scored>>
where
    S: Similarity + ?Sized,
{
    let seen = table.ratings(target)?;
    debug!(entity = target, seen = seen.len(), "computing recommendations");

    let mut others: Vec<&str> = table.entities().filter(|other| *other != target).collect();
    others.sort_unstable();

    let mut accumulators: HashMap<&str, Accumulator> = HashMap::new();
    let mut contributors = 0_usize;
    for other in others {
        let sim = similarity.similarity(table, target, other)?;
        if sim <= 0.0 {
            trace!(entity = target, other, sim, "skipping non-positive similarity");
            continue;
        }
        contributors += 1;

        for (item, rating) in table.ratings(other)? {
            let unseen = seen.get(item).is_none_or(|own| *own == 0.0);
            if unseen {
                let entry = accumulators.entry(item.as_str()).or_default();
                entry.weighted_total += rating * sim;
                entry.similarity_sum += sim;
            }
        }
    }

    // Only positive similarities are accumulated, so every sum is > 0.
    let mut rankings: Vec<Scored> = accumulators
        .into_iter()
        .map(|(item, acc)| Scored::new(acc.weighted_total / acc.similarity_sum, item))
        .collect();
    sort_ranked(&mut rankings);

    debug!(
        entity = target,
        contributors,
        recommended = rankings.len(),
        "computed recommendations"
    );
    Ok(rankings)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::recommendations;
    use crate::fixtures::{capture_logs, critics};
    use crate::ratings::RatingsTable;
    use crate::similarity::{Euclidean, Pearson};
    use crate::{Result, TastesError};

    fn fixed(score: f64) -> impl Fn(&RatingsTable, &str, &str) -> Result<f64> {
        move |_: &RatingsTable, _: &str, _: &str| -> Result<f64> { Ok(score) }
    }

    #[test]
    fn critics_recommendations_for_toby() {
        let table = critics();

        let pearson = recommendations(&table, "Toby", &Pearson).unwrap();
        let expected = [
            ("The Night Listener", 3.347_789_5),
            ("Lady in the Water", 2.832_549_9),
            ("Just My Luck", 2.530_980_7),
        ];
        assert_eq!(pearson.len(), expected.len());
        for (entry, (item, score)) in pearson.iter().zip(expected) {
            assert_eq!(entry.id, item);
            assert_abs_diff_eq!(entry.score, score, epsilon = 1e-6);
        }

        let distance = recommendations(&table, "Toby", &Euclidean).unwrap();
        let expected = [
            ("The Night Listener", 3.457_128_7),
            ("Lady in the Water", 2.778_584_0),
            ("Just My Luck", 2.422_482_0),
        ];
        for (entry, (item, score)) in distance.iter().zip(expected) {
            assert_eq!(entry.id, item);
            assert_abs_diff_eq!(entry.score, score, epsilon = 1e-6);
        }
    }

    #[test]
    fn single_contributor_keeps_its_rating() {
        let table = RatingsTable::from_triples([
            ("target", "X", 3.0),
            ("other", "X", 1.0),
            ("other", "Z", 4.0),
        ])
        .unwrap();
        let picks = recommendations(&table, "target", &fixed(0.8)).unwrap();
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, "Z");
        assert_abs_diff_eq!(picks[0].score, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn weighted_average_across_contributors() {
        let table = RatingsTable::from_triples([
            ("target", "X", 3.0),
            ("near", "X", 3.0),
            ("near", "Z", 5.0),
            ("far", "X", 1.0),
            ("far", "Z", 1.0),
        ])
        .unwrap();
        let weights = |_: &RatingsTable, _: &str, other: &str| -> Result<f64> {
            Ok(if other == "near" { 0.75 } else { 0.25 })
        };
        let picks = recommendations(&table, "target", &weights).unwrap();
        assert_abs_diff_eq!(picks[0].score, (5.0 * 0.75 + 1.0 * 0.25) / 1.0, epsilon = 1e-12);
    }

    #[test]
    fn non_positive_similarity_contributes_nothing() {
        let table = RatingsTable::from_triples([
            ("target", "X", 3.0),
            ("other", "Z", 4.0),
        ])
        .unwrap();
        assert!(recommendations(&table, "target", &fixed(0.0)).unwrap().is_empty());
        assert!(recommendations(&table, "target", &fixed(-0.7)).unwrap().is_empty());
    }

    #[test]
    fn zero_rating_counts_as_unseen() {
        let table = RatingsTable::from_triples([
            ("target", "X", 3.0),
            ("target", "Y", 0.0),
            ("other", "X", 2.0),
            ("other", "Y", 4.5),
        ])
        .unwrap();
        let picks = recommendations(&table, "target", &fixed(1.0)).unwrap();
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, "Y");
        assert_eq!(picks[0].score, 4.5);
    }

    #[test]
    fn ties_break_by_ascending_item() {
        let table = RatingsTable::from_triples([
            ("target", "X", 3.0),
            ("other", "b", 2.0),
            ("other", "a", 2.0),
            ("other", "c", 5.0),
        ])
        .unwrap();
        let picks = recommendations(&table, "target", &fixed(1.0)).unwrap();
        let ids: Vec<_> = picks.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_target_is_an_error() {
        let table = critics();
        assert!(matches!(
            recommendations(&table, "Nobody", &Pearson),
            Err(TastesError::EntityNotFound(_))
        ));
    }

    #[test]
    fn similarity_errors_propagate() {
        let table = critics();
        let failing = |_: &RatingsTable, _: &str, _: &str| -> Result<f64> {
            Err(TastesError::InvalidParameter("unavailable"))
        };
        assert!(recommendations(&table, "Toby", &failing).is_err());
    }

    #[test]
    fn logs_entry_and_summary_events() {
        let table = critics();
        let (picks, logs) = capture_logs(|| recommendations(&table, "Toby", &Pearson));
        assert_eq!(picks.unwrap().len(), 3);

        let start = logs.find("computing recommendations").expect("entry event");
        let end = logs.find("computed recommendations").expect("summary event");
        assert!(start < end, "{logs}");
        assert!(logs.contains("entity=\"Toby\""), "{logs}");
    }

    proptest! {
        #[test]
        fn never_recommends_rated_items(
            triples in prop::collection::vec(("[a-d]", "[p-w]", 0.5_f64..5.0), 1..40),
        ) {
            let mut table = RatingsTable::from_triples(triples).unwrap();
            table.insert("target", "p", 3.0).unwrap();
            table.insert("target", "q", 1.0).unwrap();

            let picks = recommendations(&table, "target", &Euclidean).unwrap();
            let seen = table.ratings("target").unwrap();
            for entry in &picks {
                prop_assert!(seen.get(&entry.id).is_none_or(|own| *own == 0.0));
                prop_assert!((0.5..5.0 + 1e-9).contains(&entry.score));
            }
            prop_assert!(picks.windows(2).all(|pair| pair[0].score >= pair[1].score));
        }
    }
}
