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
//! Ranking of the entities most similar to a target.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::ratings::RatingsTable;
use crate::similarity::Similarity;

/// Number of matches returned when the caller does not ask for a size.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A score paired with the entity or item it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub score: f64,
    pub id: String,
}

impl Scored {
    pub fn new(score: f64, id: impl Into<String>) -> Self {
        Self {
            score,
            id: id.into(),
        }
    }

    /// Highest score first; equal scores fall back to ascending `id`.
    pub fn rank_order(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Sorts `scores` with [`Scored::rank_order`].
pub(crate) fn sort_ranked(scores: &mut [Scored]) {
    scores.sort_unstable_by(Scored::rank_order);
}

/// Returns up to `max_results` entities most similar to `target`.
///
/// Every other entity of `table` is scored with `similarity`; the target
/// itself never appears in the output. The list is sorted by
/// [`Scored::rank_order`] and holds `min(max_results, table.len() - 1)`
/// entries.
///
/// # Errors
/// Returns [`crate::TastesError::EntityNotFound`] when `target` is absent.
///
/// # Example
/// ```rust
/// use tastes::ranking::top_matches;
/// use tastes::ratings::RatingsTable;
/// use tastes::similarity::Euclidean;
///
/// let table = RatingsTable::from_triples([
///     ("ann", "x", 1.0),
///     ("bob", "x", 1.5),
///     ("cat", "x", 4.0),
/// ])
/// .unwrap();
///
/// let matches = top_matches(&table, "ann", 1, &Euclidean).unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].id, "bob");
/// ```
pub fn top_matches<S>(
    table: &RatingsTable,
    target: &str,
    max_results: usize,
    similarity: &S,
) -> Result<Vec<Scored>>
where
    S: Similarity + ?Sized,
{
    table.ratings(target)?;
    debug!(entity = target, max_results, "ranking top matches");

    let mut scores = table
        .entities()
        .filter(|other| *other != target)
        .map(|other| {
            similarity
                .similarity(table, target, other)
                .map(|score| Scored::new(score, other))
        })
        .collect::<Result<Vec<_>>>()?;

    let candidates = scores.len();
    sort_ranked(&mut scores);
    scores.truncate(max_results);
    debug!(
        entity = target,
        candidates,
        returned = scores.len(),
        "ranked top matches"
    );
    Ok(scores)
}
