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
//! Sparse ratings keyed by entity, then by item.
//!
//! An item missing from an entity's ratings means "no opinion", which is
//! not the same thing as a rating of `0.0`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, TastesError};

/// Ratings of a single entity, keyed by item.
pub type ItemRatings = HashMap<String, f64>;

/// Read-only input of every similarity, ranking and recommendation
/// operation.
///
/// Serializes as a plain JSON object of objects:
/// `{"entity": {"item": rating, ...}, ...}`.
///
/// # Example
/// ```rust
/// use tastes::ratings::RatingsTable;
///
/// let table = RatingsTable::from_json(
///     r#"{"Lisa": {"X": 2.5, "Y": 3.5}, "Gene": {"X": 3.0, "Z": 1.0}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rating("Lisa", "Y"), Some(3.5));
/// assert_eq!(table.shared_items("Lisa", "Gene").unwrap(), vec!["X"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsTable {
    entities: HashMap<String, ItemRatings>,
}

impl RatingsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(entity, item, rating)` triples.
    ///
    /// A repeated `(entity, item)` pair keeps the last rating.
    ///
    /// # Errors
    /// Returns [`TastesError::InvalidParameter`] when a rating is not finite.
    pub fn from_triples<E, I, T>(triples: T) -> Result<Self>
    where
        E: Into<String>,
        I: Into<String>,
        T: IntoIterator<Item = (E, I, f64)>,
    {
        let mut table = Self::new();
        for (entity, item, rating) in triples {
            table.insert(entity, item, rating)?;
        }
        Ok(table)
    }

    /// Parses a table from a JSON object of objects.
    ///
    /// # Errors
    /// Returns [`TastesError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validated()
    }

    /// Parses a table from any JSON reader.
    ///
    /// # Errors
    /// Returns [`TastesError::Json`] for malformed input.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let table: Self = serde_json::from_reader(reader)?;
        table.validated()
    }

    /// Loads a table from a JSON file.
    ///
    /// # Errors
    /// Returns [`TastesError::Io`] when the file cannot be opened and
    /// [`TastesError::Json`] for malformed content.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(
            path = %path.display(),
            entities = table.len(),
            "loaded ratings table"
        );
        Ok(table)
    }

    /// Serializes the table back to JSON.
    ///
    /// # Errors
    /// Returns [`TastesError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Records `entity`'s rating for `item`, replacing any previous one.
    ///
    /// # Errors
    /// Returns [`TastesError::InvalidParameter`] when `rating` is NaN or
    /// infinite.
    pub fn insert(
        &mut self,
        entity: impl Into<String>,
        item: impl Into<String>,
        rating: f64,
    ) -> Result<()> {
        if !rating.is_finite() {
            return Err(TastesError::InvalidParameter("rating must be finite"));
        }
        self.insert_validated(entity, item, rating);
        Ok(())
    }

    /// Inserts a rating already known to be finite.
    pub(crate) fn insert_validated(
        &mut self,
        entity: impl Into<String>,
        item: impl Into<String>,
        rating: f64,
    ) {
        self.entities
            .entry(entity.into())
            .or_default()
            .insert(item.into(), rating);
    }

    /// Returns the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` when the table holds no entity.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns `true` when `entity` is a key of the table.
    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    /// Iterates over entity names in unspecified order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    /// Returns every rating of `entity`.
    ///
    /// # Errors
    /// Returns [`TastesError::EntityNotFound`] when `entity` is absent.
    pub fn ratings(&self, entity: &str) -> Result<&ItemRatings> {
        self.entities
            .get(entity)
            .ok_or_else(|| TastesError::EntityNotFound(entity.to_string()))
    }

    /// Returns `entity`'s rating for `item`, if any.
    pub fn rating(&self, entity: &str, item: &str) -> Option<f64> {
        self.entities.get(entity)?.get(item).copied()
    }

    /// Iterates over every `(entity, item, rating)` triple.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.entities.iter().flat_map(|(entity, ratings)| {
            ratings
                .iter()
                .map(move |(item, rating)| (entity.as_str(), item.as_str(), *rating))
        })
    }

    /// Returns the items rated by both `left` and `right`, sorted.
    ///
    /// # Errors
    /// Returns [`TastesError::EntityNotFound`] when either entity is absent.
    pub fn shared_items(&self, left: &str, right: &str) -> Result<Vec<&str>> {
        let left_ratings = self.ratings(left)?;
        let right_ratings = self.ratings(right)?;
        let mut shared: Vec<&str> = left_ratings
            .keys()
            .filter(|item| right_ratings.contains_key(item.as_str()))
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        Ok(shared)
    }

    /// Returns `(left_rating, right_rating)` for every shared item, in item
    /// order.
    ///
    /// # Errors
    /// Returns [`TastesError::EntityNotFound`] when either entity is absent.
    pub fn shared_ratings(&self, left: &str, right: &str) -> Result<Vec<(f64, f64)>> {
        let left_ratings = self.ratings(left)?;
        let right_ratings = self.ratings(right)?;
        Ok(self
            .shared_items(left, right)?
            .into_iter()
            .map(|item| (left_ratings[item], right_ratings[item]))
            .collect())
    }

    fn validated(self) -> Result<Self> {
        if self.triples().any(|(_, _, rating)| !rating.is_finite()) {
            return Err(TastesError::InvalidParameter("rating must be finite"));
        }
        Ok(self)
    }
}

impl TryFrom<HashMap<String, ItemRatings>> for RatingsTable {
    type Error = TastesError;

    fn try_from(entities: HashMap<String, ItemRatings>) -> Result<Self> {
        Self { entities }.validated()
    }
}
