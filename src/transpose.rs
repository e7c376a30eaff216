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
//! Entity/item transposition of a ratings table.
//!
//! Ranking the transposed table answers "which items are most like item X",
//! and recommending on it answers "who else might like item X".

use tracing::debug;

use crate::ratings::RatingsTable;

/// Returns a new table where every `(entity, item, rating)` becomes
/// `(item, entity, rating)`.
///
/// The input is left untouched, and transposing twice yields a table equal
/// to the original.
///
/// # Example
/// ```rust
/// use tastes::ratings::RatingsTable;
/// use tastes::transpose::transpose;
///
/// let table = RatingsTable::from_triples([("ann", "x", 4.0), ("bob", "x", 2.0)]).unwrap();
/// let items = transpose(&table);
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items.rating("x", "bob"), Some(2.0));
/// assert_eq!(transpose(&items), table);
/// ```
pub fn transpose(table: &RatingsTable) -> RatingsTable {
    let mut transposed = RatingsTable::new();
    for (entity, item, rating) in table.triples() {
        transposed.insert_validated(item, entity, rating);
    }
    debug!(
        entities = table.len(),
        items = transposed.len(),
        "transposed ratings table"
    );
    transposed
}

impl RatingsTable {
    /// Shorthand for [`transpose`].
    pub fn transposed(&self) -> RatingsTable {
        transpose(self)
    }
}
