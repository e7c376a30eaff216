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
//! Pairwise similarity between two entities of a [`RatingsTable`].
//!
//! Both metrics only look at the items the two entities have rated in
//! common. With no shared item they return `0.0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ratings::RatingsTable;
use crate::{Result, TastesError};

/// Common API for strategies scoring how alike two entities are.
///
/// Higher means more alike. Closures with the same signature implement the
/// trait too, so custom strategies plug into ranking and recommendation.
///
/// # Example
/// ```rust
/// use tastes::ratings::RatingsTable;
/// use tastes::similarity::{Euclidean, Pearson, Similarity};
///
/// fn compare<S: Similarity>(metric: &S, table: &RatingsTable) -> f64 {
///     metric.similarity(table, "Lisa", "Gene").unwrap()
/// }
///
/// let table = RatingsTable::from_triples([
///     ("Lisa", "X", 2.5),
///     ("Lisa", "Y", 3.5),
///     ("Gene", "X", 3.0),
///     ("Gene", "Y", 3.5),
/// ])
/// .unwrap();
///
/// assert!((compare(&Euclidean, &table) - 2.0 / 3.0).abs() < 1e-9);
/// // Both rise from X to Y, so their ratings are perfectly correlated.
/// assert!((compare(&Pearson, &table) - 1.0).abs() < 1e-9);
/// ```
pub trait Similarity {
    /// Scores `left` against `right`.
    ///
    /// # Errors
    /// Returns [`TastesError::EntityNotFound`] when either entity is absent.
    fn similarity(&self, table: &RatingsTable, left: &str, right: &str) -> Result<f64>;
}

impl<F> Similarity for F
where
    F: Fn(&RatingsTable, &str, &str) -> Result<f64>,
{
    fn similarity(&self, table: &RatingsTable, left: &str, right: &str) -> Result<f64> {
        self(table, left, right)
    }
}

/// Distance-based similarity: `1 / (1 + sqrt(sum of squared differences))`.
///
/// Identical ratings on every shared item score `1.0`; the score tends
/// towards `0.0` as disagreement grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Similarity for Euclidean {
    fn similarity(&self, table: &RatingsTable, left: &str, right: &str) -> Result<f64> {
        let shared = table.shared_ratings(left, right)?;
        if shared.is_empty() {
            return Ok(0.0);
        }

        let sum_of_squares: f64 = shared.iter().map(|(a, b)| (a - b).powi(2)).sum();
        Ok(1.0 / (1.0 + sum_of_squares.sqrt()))
    }
}

/// Pearson correlation coefficient over shared items, in `[-1, 1]`.
///
/// Unlike [`Euclidean`], Pearson is insensitive to one entity rating
/// everything systematically higher than the other. Zero variance on either
/// side yields `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pearson;

impl Similarity for Pearson {
    fn similarity(&self, table: &RatingsTable, left: &str, right: &str) -> Result<f64> {
        let shared = table.shared_ratings(left, right)?;
        if shared.is_empty() {
            return Ok(0.0);
        }

        let n = shared.len() as f64;
        let (mut sum1, mut sum2) = (0.0, 0.0);
        let (mut sum1_sq, mut sum2_sq) = (0.0, 0.0);
        let mut product_sum = 0.0;
        for &(a, b) in &shared {
            sum1 += a;
            sum2 += b;
            sum1_sq += a * a;
            sum2_sq += b * b;
            product_sum += a * b;
        }

        let numerator = product_sum - (sum1 * sum2 / n);
        let denominator = ((sum1_sq - sum1 * sum1 / n) * (sum2_sq - sum2 * sum2 / n)).sqrt();
        // Cancellation can leave a tiny negative variance, so NaN counts as zero too.
        if denominator == 0.0 || denominator.is_nan() {
            return Ok(0.0);
        }

        Ok((numerator / denominator).clamp(-1.0, 1.0))
    }
}

/// Built-in metric selectable by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Pearson,
    #[serde(alias = "distance")]
    Euclidean,
}

impl Similarity for Metric {
    fn similarity(&self, table: &RatingsTable, left: &str, right: &str) -> Result<f64> {
        match self {
            Self::Pearson => Pearson.similarity(table, left, right),
            Self::Euclidean => Euclidean.similarity(table, left, right),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pearson => f.write_str("pearson"),
            Self::Euclidean => f.write_str("euclidean"),
        }
    }
}

impl FromStr for Metric {
    type Err = TastesError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(Self::Pearson),
            "euclidean" | "distance" => Ok(Self::Euclidean),
            _ => Err(TastesError::InvalidParameter(
                "metric must be one of: pearson, euclidean",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    use super::{Euclidean, Metric, Pearson, Similarity};
    use crate::fixtures::critics;
    use crate::ratings::RatingsTable;
    use crate::{Result, TastesError};

    fn pair(left: &[(&str, f64)], right: &[(&str, f64)]) -> RatingsTable {
        let mut table = RatingsTable::new();
        for (item, rating) in left {
            table.insert("left", *item, *rating).unwrap();
        }
        for (item, rating) in right {
            table.insert("right", *item, *rating).unwrap();
        }
        table
    }

    #[test]
    fn euclidean_matches_worked_example() {
        let table = RatingsTable::from_triples([
            ("Lisa", "X", 2.5),
            ("Lisa", "Y", 3.5),
            ("Gene", "X", 3.0),
            ("Gene", "Y", 3.5),
        ])
        .unwrap();
        let score = Euclidean.similarity(&table, "Lisa", "Gene").unwrap();
        assert_abs_diff_eq!(score, 0.6667, epsilon = 1e-4);
    }

    #[test]
    fn two_items_moving_together_correlate_fully() {
        let table = RatingsTable::from_triples([
            ("Lisa", "X", 2.5),
            ("Lisa", "Y", 3.5),
            ("Gene", "X", 3.0),
            ("Gene", "Y", 3.5),
        ])
        .unwrap();
        let score = Pearson.similarity(&table, "Lisa", "Gene").unwrap();
        assert_abs_diff_eq!(score, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn critics_reference_scores() {
        let table = critics();
        let distance = Euclidean
            .similarity(&table, "Lisa Rose", "Gene Seymour")
            .unwrap();
        assert_relative_eq!(distance, 0.294_298_055_085_549_5, epsilon = 1e-9);

        let pearson = Pearson
            .similarity(&table, "Lisa Rose", "Gene Seymour")
            .unwrap();
        assert_relative_eq!(pearson, 0.396_059_017_190_669_8, epsilon = 1e-9);
    }

    #[test]
    fn no_shared_items_scores_zero() {
        let table = pair(&[("a", 1.0), ("b", 2.0)], &[("c", 1.0)]);
        assert_eq!(Euclidean.similarity(&table, "left", "right").unwrap(), 0.0);
        assert_eq!(Pearson.similarity(&table, "left", "right").unwrap(), 0.0);
    }

    #[test]
    fn zero_variance_scores_zero() {
        let table = pair(&[("a", 3.0), ("b", 3.0)], &[("a", 1.0), ("b", 5.0)]);
        assert_eq!(Pearson.similarity(&table, "left", "right").unwrap(), 0.0);

        let single = pair(&[("a", 3.0)], &[("a", 4.0)]);
        assert_eq!(Pearson.similarity(&single, "left", "right").unwrap(), 0.0);
    }

    #[test]
    fn pearson_ignores_rating_offsets() {
        let table = pair(
            &[("a", 1.0), ("b", 2.0), ("c", 3.0)],
            &[("a", 3.0), ("b", 4.0), ("c", 5.0)],
        );
        assert_relative_eq!(Pearson.similarity(&table, "left", "right").unwrap(), 1.0);
        assert!(Euclidean.similarity(&table, "left", "right").unwrap() < 0.5);

        let inverted = pair(
            &[("a", 1.0), ("b", 2.0), ("c", 3.0)],
            &[("a", 3.0), ("b", 2.0), ("c", 1.0)],
        );
        assert_relative_eq!(
            Pearson.similarity(&inverted, "left", "right").unwrap(),
            -1.0
        );
    }

    #[test]
    fn missing_entity_is_an_error() {
        let table = critics();
        assert!(matches!(
            Pearson.similarity(&table, "Toby", "Nobody"),
            Err(TastesError::EntityNotFound(_))
        ));
        assert!(Euclidean.similarity(&table, "Nobody", "Toby").is_err());
    }

    #[test]
    fn metric_dispatches_to_strategies() {
        let table = critics();
        for (metric, expected) in [
            (Metric::Pearson, Pearson.similarity(&table, "Toby", "Lisa Rose").unwrap()),
            (
                Metric::Euclidean,
                Euclidean.similarity(&table, "Toby", "Lisa Rose").unwrap(),
            ),
        ] {
            assert_eq!(metric.similarity(&table, "Toby", "Lisa Rose").unwrap(), expected);
        }
    }

    #[test]
    fn metric_names_parse() {
        assert_eq!("pearson".parse::<Metric>().unwrap(), Metric::Pearson);
        assert_eq!(" Euclidean ".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("distance".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert!("cosine".parse::<Metric>().is_err());
        assert_eq!(Metric::Euclidean.to_string(), "euclidean");

        let parsed: Metric = serde_json::from_str("\"distance\"").unwrap();
        assert_eq!(parsed, Metric::Euclidean);
        assert_eq!(serde_json::to_string(&Metric::Pearson).unwrap(), "\"pearson\"");
    }

    #[test]
    fn closures_are_strategies() {
        let table = critics();
        let constant = |_: &RatingsTable, _: &str, _: &str| -> Result<f64> { Ok(0.25) };
        assert_eq!(constant.similarity(&table, "Toby", "Lisa Rose").unwrap(), 0.25);
    }

    fn ratings_pair() -> impl Strategy<Value = RatingsTable> {
        let ratings = || prop::collection::hash_map("[a-f]", 0.0_f64..5.0, 0..6);
        (ratings(), ratings()).prop_map(|(left, right)| {
            let mut table = RatingsTable::new();
            table.insert("left", "anchor", 1.0).unwrap();
            table.insert("right", "other", 1.0).unwrap();
            for (item, rating) in left {
                table.insert("left", item, rating).unwrap();
            }
            for (item, rating) in right {
                table.insert("right", item, rating).unwrap();
            }
            table
        })
    }

    proptest! {
        #[test]
        fn euclidean_is_symmetric_and_bounded(table in ratings_pair()) {
            let forward = Euclidean.similarity(&table, "left", "right").unwrap();
            let backward = Euclidean.similarity(&table, "right", "left").unwrap();
            prop_assert_eq!(forward, backward);
            prop_assert!((0.0..=1.0).contains(&forward));
        }

        #[test]
        fn euclidean_self_similarity_is_one(table in ratings_pair()) {
            prop_assert_eq!(Euclidean.similarity(&table, "left", "left").unwrap(), 1.0);
        }

        #[test]
        fn pearson_is_symmetric_and_bounded(table in ratings_pair()) {
            let forward = Pearson.similarity(&table, "left", "right").unwrap();
            let backward = Pearson.similarity(&table, "right", "left").unwrap();
            prop_assert!((forward - backward).abs() < 1e-9);
            prop_assert!((-1.0..=1.0).contains(&forward));
        }
    }
}
