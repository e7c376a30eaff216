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
//! Similarity scoring and collaborative-filtering recommendations.
//!
//! The crate works on a sparse [`ratings::RatingsTable`] (entity -> item ->
//! rating) and currently exposes:
//! - [`similarity::Euclidean`] and [`similarity::Pearson`] pairwise metrics
//!   behind the [`similarity::Similarity`] trait.
//! - [`ranking::top_matches`] for the entities closest to a target.
//! - [`recommend::recommendations`] for similarity-weighted item scores.
//! - [`transpose::transpose`] for swapping entities and items, so the same
//!   ranking and recommendation code answers item-to-item questions.
//! - [`tanimoto`] for the set-overlap (Tanimoto) coefficient.
//! - [`recommender::Recommender`], a facade bundling a table with a
//!   [`config::RecommenderConfig`].
//!
//! Every operation is a pure function over a read-only table.

use thiserror::Error;

pub mod config;
pub mod ranking;
pub mod ratings;
pub mod recommend;
pub mod recommender;
pub mod similarity;
pub mod tanimoto;
pub mod transpose;

pub use config::RecommenderConfig;
pub use ranking::{Scored, top_matches};
pub use ratings::{ItemRatings, RatingsTable};
pub use recommend::recommendations;
pub use recommender::Recommender;
pub use similarity::{Euclidean, Metric, Pearson, Similarity};
pub use tanimoto::{tanimoto, tanimoto_hashed};
pub use transpose::transpose;

/// Errors returned by table construction, loading and lookups.
#[derive(Debug, Error)]
pub enum TastesError {
    /// Returned when an entity is not a key of the ratings table.
    #[error("entity not found: {0}")]
    EntityNotFound(String),
    /// Returned when a constructor or loader receives an invalid argument.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TastesError>;
