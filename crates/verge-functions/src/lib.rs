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

//! # Verge Functions
//!
//! **The fixed catalogue of real-valued functions probed by the delta
//! search.**
//!
//! This crate defines the evaluation capability consumed by the search
//! engine (`verge-search`) and the immutable registry of named functions a
//! caller can list and select from.
//!
//! ## Architecture
//!
//! * **`function`**: The `RealFunction<T>` trait — one real in, one real
//!   out, failing with a `DomainError` outside the function's domain — plus
//!   a closure adapter for ad-hoc functions.
//! * **`catalogue`**: The `NamedFunction` enum (fifteen entries with their
//!   domain restrictions) and the `Catalogue` registry mapping snake_case
//!   names to entries.
//! * **`error`**: The `DomainError` type raised at excluded inputs.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: Domain restrictions are checked eagerly before any
//!    arithmetic, so the search never observes a NaN or infinity from an
//!    excluded input.
//! 2. **Immutability**: The catalogue is built once and carries no mutation
//!    API; every consumer sees the same read-only mapping.
//! 3. **Purity**: Evaluation has no side effects and is deterministic, so
//!    repeated probes at the same input yield bit-identical results.

pub mod catalogue;
pub mod error;
pub mod function;
