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
//! Tanimoto coefficient between two collections.
//!
//! With `c` the number of elements of `a` also present in `b`, the
//! coefficient is `c / (|a| + |b| - c)`: `1.0` for identical sets, `0.0` for
//! disjoint ones. Elements repeated in `a` are counted once per occurrence,
//! so inputs with duplicates can score above `1.0`.

use std::collections::HashSet;
use std::hash::Hash;

/// Computes the Tanimoto coefficient with a linear membership scan of `b`.
///
/// Two empty inputs carry no information and score `0.0`.
///
/// # Example
/// ```rust
/// use tastes::tanimoto::tanimoto;
///
/// assert_eq!(tanimoto(&["a", "b", "c"], &["b", "c", "d"]), 0.5);
/// assert_eq!(tanimoto::<&str>(&[], &[]), 0.0);
/// ```
pub fn tanimoto<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let shared = a.iter().filter(|value| b.contains(*value)).count();
    coefficient(shared, a.len(), b.len())
}

/// Same as [`tanimoto`], testing membership through a hash set of `b`.
///
/// Preferable when `b` is large.
pub fn tanimoto_hashed<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let lookup: HashSet<&T> = b.iter().collect();
    let shared = a.iter().filter(|value| lookup.contains(value)).count();
    coefficient(shared, a.len(), b.len())
}

fn coefficient(shared: usize, a_len: usize, b_len: usize) -> f64 {
    // `shared <= a_len`, so the denominator is at least `b_len`.
    let denominator = a_len + b_len - shared;
    if denominator == 0 {
        return 0.0;
    }
    shared as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{tanimoto, tanimoto_hashed};

    #[test]
    fn partial_overlap() {
        assert_eq!(tanimoto(&["a", "b", "c"], &["b", "c", "d"]), 0.5);
        assert_eq!(tanimoto_hashed(&["a", "b", "c"], &["b", "c", "d"]), 0.5);
    }

    #[test]
    fn subset_overlap() {
        assert_eq!(tanimoto(&[1, 2], &[1, 2, 3, 4]), 0.5);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(tanimoto::<u32>(&[], &[]), 0.0);
        assert_eq!(tanimoto_hashed::<u32>(&[], &[]), 0.0);
        assert_eq!(tanimoto(&[1], &[]), 0.0);
        assert_eq!(tanimoto(&[], &[1]), 0.0);
    }

    #[test]
    fn duplicates_in_first_input_count_each_time() {
        // c = 2, |a| + |b| - c = 2 + 1 - 2 = 1.
        assert_eq!(tanimoto(&["x", "x"], &["x"]), 2.0);
        assert_eq!(tanimoto_hashed(&["x", "x"], &["x"]), 2.0);
        // c = 1, 1 + 2 - 1 = 2.
        assert_eq!(tanimoto(&["x"], &["x", "x"]), 0.5);
    }

    proptest! {
        #[test]
        fn identical_sets_score_one(set in prop::collection::hash_set(0_u32..1_000, 1..50)) {
            let values: Vec<_> = set.into_iter().collect();
            prop_assert_eq!(tanimoto(&values, &values), 1.0);
        }

        #[test]
        fn disjoint_sets_score_zero(
            a in prop::collection::vec(0_u32..500, 1..30),
            b in prop::collection::vec(500_u32..1_000, 1..30),
        ) {
            prop_assert_eq!(tanimoto(&a, &b), 0.0);
        }

        #[test]
        fn hashed_variant_agrees(
            a in prop::collection::vec(0_u8..20, 0..30),
            b in prop::collection::vec(0_u8..20, 0..30),
        ) {
            prop_assert_eq!(tanimoto(&a, &b), tanimoto_hashed(&a, &b));
        }
    }
}
