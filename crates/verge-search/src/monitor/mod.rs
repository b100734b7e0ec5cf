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

//! # Search Monitors
//!
//! Pluggable observers and controllers for the delta search lifecycle.
//! Monitors can log progress, enforce budgets (shrink steps, wall-clock
//! time), and issue termination commands to stop a search that would
//! otherwise shrink forever on an ill-posed query.
//!
//! ## Submodules
//!
//! - `search_monitor`: Core trait (`DeltaSearchMonitor<T>`) and
//!   `SearchCommand` enum, defining lifecycle hooks and control flow.
//! - `composite`: Aggregate multiple monitors into a single composite.
//! - `interrupt`: Atomically-driven interrupt monitor for cross-thread
//!   stops.
//! - `iteration_limit`: Shrink-step budget; the primary defense against
//!   non-convergent queries.
//! - `time_limit`: Wall-clock time budget monitor with step-filtered
//!   checks.
//! - `log`: Throttled progress table for interactive runs.
//!
//! ## Motivation
//!
//! The shrink loop has no self-termination guarantee for discontinuous
//! functions or mismatched limit values. These monitors keep the budget
//! and telemetry concerns orthogonal to the core loop.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod composite;
pub mod interrupt;
pub mod iteration_limit;
pub mod log;
pub mod search_monitor;
pub mod time_limit;
