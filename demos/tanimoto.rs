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
use tastes::tanimoto::{tanimoto, tanimoto_hashed};

fn main() {
    // Tags attached to three movies.
    let superman = ["action", "comic", "hero", "sequel"];
    let snakes = ["action", "thriller", "plane"];
    let dupree = ["comedy", "romance"];

    println!("superman/snakes: {:.4}", tanimoto(&superman, &snakes));
    println!("superman/dupree: {:.4}", tanimoto(&superman, &dupree));
    println!("superman/itself: {:.4}", tanimoto(&superman, &superman));

    // Large sets: hash the second input instead of scanning it per element.
    let left: Vec<u64> = (0..10_000).collect();
    let right: Vec<u64> = (5_000..15_000).collect();
    println!(
        "large overlap:   {:.4} (exact {:.4})",
        tanimoto_hashed(&left, &right),
        5_000.0 / 15_000.0
    );
}
