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
//! A ratings table bundled with the settings used to query it.

use std::sync::OnceLock;

use crate::Result;
use crate::config::RecommenderConfig;
use crate::ranking::{Scored, top_matches};
use crate::ratings::RatingsTable;
use crate::recommend::recommendations;
use crate::similarity::Similarity;
use crate::transpose::transpose;

/// User-based and item-based queries over one ratings table.
///
/// The table is never modified, so the transposed (item-keyed) view is
/// built on first use and reused afterwards.
///
/// # Example
/// ```rust
/// use tastes::config::RecommenderConfig;
/// use tastes::ratings::RatingsTable;
/// use tastes::recommender::Recommender;
///
/// let table = RatingsTable::from_triples([
///     ("ann", "x", 4.0),
///     ("ann", "y", 2.0),
///     ("bob", "x", 4.5),
///     ("bob", "y", 2.5),
///     ("bob", "z", 5.0),
/// ])
/// .unwrap();
///
/// let recommender = Recommender::new(table, RecommenderConfig::default()).unwrap();
/// let picks = recommender.recommendations("ann").unwrap();
/// assert_eq!(picks[0].id, "z");
/// ```
#[derive(Debug)]
pub struct Recommender {
    table: RatingsTable,
    config: RecommenderConfig,
    transposed: OnceLock<RatingsTable>,
}

impl Recommender {
    /// Creates a recommender over `table`.
    ///
    /// # Errors
    /// Returns [`crate::TastesError::InvalidParameter`] when `config` does
    /// not validate.
    pub fn new(table: RatingsTable, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table,
            config,
            transposed: OnceLock::new(),
        })
    }

    pub fn table(&self) -> &RatingsTable {
        &self.table
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Returns the item-keyed view of the table.
    pub fn items(&self) -> &RatingsTable {
        self.transposed.get_or_init(|| transpose(&self.table))
    }

    /// Scores two entities with the configured metric.
    ///
    /// # Errors
    /// Returns [`crate::TastesError::EntityNotFound`] when either is absent.
    pub fn similarity(&self, left: &str, right: &str) -> Result<f64> {
        self.config.metric.similarity(&self.table, left, right)
    }

    /// Entities most similar to `entity`, at most `max_results` of them.
    ///
    /// # Errors
    /// Returns [`crate::TastesError::EntityNotFound`] when `entity` is absent.
    pub fn top_matches(&self, entity: &str) -> Result<Vec<Scored>> {
        top_matches(&self.table, entity, self.config.max_results, &self.config.metric)
    }

    /// Items `entity` has not rated, best first.
    ///
    /// # Errors
    /// Returns [`crate::TastesError::EntityNotFound`] when `entity` is absent.
    pub fn recommendations(&self, entity: &str) -> Result<Vec<Scored>> {
        recommendations(&self.table, entity, &self.config.metric)
    }

    /// Items rated most alike to `item`, at most `max_results` of them.
    ///
    /// # Errors
    /// Returns [`crate::TastesError::EntityNotFound`] when nobody rated
    /// `item`.
    pub fn similar_items(&self, item: &str) -> Result<Vec<Scored>> {
        top_matches(self.items(), item, self.config.max_results, &self.config.metric)
    }

    /// Entities who have not rated `item` but are likely to rate it well.
    ///
    /// # Errors
    /// Returns [`crate::TastesError::EntityNotFound`] when nobody rated
    /// `item`.
    pub fn item_recommendations(&self, item: &str) -> Result<Vec<Scored>> {
        recommendations(self.items(), item, &self.config.metric)
    }
}

impl From<RatingsTable> for Recommender {
    fn from(table: RatingsTable) -> Self {
        Self {
            table,
            config: RecommenderConfig::default(),
            transposed: OnceLock::new(),
        }
    }
}
