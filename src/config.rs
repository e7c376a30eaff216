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
//! Recommender settings.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ranking::DEFAULT_MAX_RESULTS;
use crate::similarity::Metric;
use crate::{Result, TastesError};

/// Environment variable overriding [`RecommenderConfig::max_results`].
pub const MAX_RESULTS_ENV: &str = "TASTES_MAX_RESULTS";
/// Environment variable overriding [`RecommenderConfig::metric`].
pub const METRIC_ENV: &str = "TASTES_METRIC";

/// Settings of a [`crate::Recommender`].
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
/// ```rust
/// use tastes::config::RecommenderConfig;
/// use tastes::similarity::Metric;
///
/// let config = RecommenderConfig::from_json(r#"{"metric": "euclidean"}"#).unwrap();
/// assert_eq!(config.metric, Metric::Euclidean);
/// assert_eq!(config.max_results, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Size of the lists returned by match ranking.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Strategy scoring how alike two entities are.
    #[serde(default)]
    pub metric: Metric,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            metric: Metric::default(),
        }
    }
}

impl RecommenderConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    /// Returns [`TastesError::Json`] for malformed input and
    /// [`TastesError::InvalidParameter`] when validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from [`MAX_RESULTS_ENV`] and [`METRIC_ENV`].
    ///
    /// Unset variables keep their default; unparsable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_RESULTS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(max_results) if max_results > 0 => config.max_results = max_results,
                _ => warn!(value = %raw, "ignoring invalid {MAX_RESULTS_ENV}"),
            }
        }
        if let Some(raw) = lookup(METRIC_ENV) {
            match raw.parse::<Metric>() {
                Ok(metric) => config.metric = metric,
                Err(_) => warn!(value = %raw, "ignoring invalid {METRIC_ENV}"),
            }
        }

        config
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    /// Returns [`TastesError::InvalidParameter`] when `max_results == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(TastesError::InvalidParameter(
                "max_results must be greater than zero",
            ));
        }
        Ok(())
    }
}
