// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Verge Search
//!
//! **The delta search engine for epsilon-delta limit claims.**
//!
//! Given a real function, a point of interest `a`, a claimed limit `L`, and
//! a tolerance `epsilon`, the engine finds a `delta` such that both probes
//! `a - delta` and `a + delta` map to within `epsilon` of `L`. It works by
//! geometric shrinking: start at `delta = 1`, test the two probes, and
//! multiply `delta` by the shrink factor (one half by default) until both
//! probes pass or a monitor stops the run.
//!
//! ## Architecture
//!
//! * **`query`**: `DeltaQuery` — the validated `(a, L, epsilon)` triple.
//! * **`search`**: `DeltaSearch` — the engine, plus the [`search_delta`]
//!   convenience entry point.
//! * **`monitor`**: Pluggable lifecycle observers and termination budgets
//!   (iteration limit, wall-clock limit, interrupts, progress logging).
//! * **`certificate`** / **`result`** / **`stats`**: The outcome bundle —
//!   what was certified, why the run ended, and what it cost.
//! * **`error`**: Typed failures for the convenience path.
//!
//! ## Guarantees and limits
//!
//! The returned delta certifies the inequality at the two boundary probes
//! only; the search does not universally verify every point of the
//! interval. For a function discontinuous at `a`, or a wrong claimed
//! limit, no delta exists and the shrink loop would run forever — always
//! attach a budget monitor (the convenience entry point installs an
//! iteration cap for exactly this reason).
//!
//! ## Usage
//!
//! ```rust
//! use verge_functions::catalogue::NamedFunction;
//! use verge_search::search_delta;
//!
//! let delta = search_delta(&NamedFunction::Square, 2.0, 4.0, 0.1).unwrap();
//! assert!(delta > 0.0);
//! assert!(((2.0 + delta) * (2.0 + delta) - 4.0_f64).abs() < 0.1);
//! assert!(((2.0 - delta) * (2.0 - delta) - 4.0_f64).abs() < 0.1);
//! ```

pub mod certificate;
pub mod error;
pub mod monitor;
pub mod query;
pub mod result;
pub mod search;
pub mod stats;

pub use search::{search_delta, DeltaSearch, DEFAULT_ITERATION_LIMIT};
