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
use tastes::config::RecommenderConfig;
use tastes::ratings::RatingsTable;
use tastes::recommender::Recommender;
use tracing_subscriber::EnvFilter;

const CRITICS: &str = r#"{
    "Lisa Rose": {"Lady in the Water": 2.5, "Snakes on a Plane": 3.5, "Just My Luck": 3.0,
                  "Superman Returns": 3.5, "You, Me, and Dupree": 2.5, "The Night Listener": 3.0},
    "Gene Seymour": {"Lady in the Water": 3.0, "Snakes on a Plane": 3.5, "Just My Luck": 1.5,
                     "Superman Returns": 5.0, "You, Me, and Dupree": 3.5, "The Night Listener": 3.0},
    "Michael Phillips": {"Lady in the Water": 2.5, "Snakes on a Plane": 3.0,
                         "Superman Returns": 3.5, "The Night Listener": 4.0},
    "Claudia Puig": {"Snakes on a Plane": 3.5, "Just My Luck": 3.0, "Superman Returns": 4.0,
                     "You, Me, and Dupree": 2.5, "The Night Listener": 4.5},
    "Mick LaSalle": {"Lady in the Water": 3.0, "Snakes on a Plane": 4.0, "Just My Luck": 2.0,
                     "Superman Returns": 3.0, "You, Me, and Dupree": 2.0, "The Night Listener": 3.0},
    "Jack Matthews": {"Lady in the Water": 3.0, "Snakes on a Plane": 4.0, "Superman Returns": 5.0,
                      "You, Me, and Dupree": 3.5, "The Night Listener": 3.0},
    "Toby": {"Snakes on a Plane": 4.5, "Superman Returns": 4.0, "You, Me, and Dupree": 1.0}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=tastes=debug shows how many critics contributed to each query.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Ratings come from a file when a path is given, the built-in critics otherwise.
    let table = match std::env::args().nth(1) {
        Some(path) => RatingsTable::from_path(path)?,
        None => RatingsTable::from_json(CRITICS)?,
    };

    // TASTES_METRIC / TASTES_MAX_RESULTS tune the queries.
    let recommender = Recommender::new(table, RecommenderConfig::from_env())?;
    println!("metric: {}", recommender.config().metric);

    let target = "Toby";
    println!("\nCritics most like {target}:");
    for entry in recommender.top_matches(target)? {
        println!("  {:>8.4}  {}", entry.score, entry.id);
    }

    println!("\nMovies {target} should watch:");
    for entry in recommender.recommendations(target)? {
        println!("  {:>8.4}  {}", entry.score, entry.id);
    }

    let movie = "Superman Returns";
    println!("\nMovies rated like {movie}:");
    for entry in recommender.similar_items(movie)? {
        println!("  {:>8.4}  {}", entry.score, entry.id);
    }

    Ok(())
}
