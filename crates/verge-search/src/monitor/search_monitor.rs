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

use crate::query::DeltaQuery;
use verge_core::num::real::RealNumeric;

/// The command a monitor issues to the search loop after each step.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Lifecycle observer and controller for a delta search run.
///
/// The engine calls the hooks in this order: `on_enter_search` once, then,
/// for every rejected delta, `on_delta_rejected` followed by `on_step` and
/// a `search_command` consultation; finally `on_exit_search` once.
pub trait DeltaSearchMonitor<T>
where
    T: RealNumeric,
{
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, query: &DeltaQuery<T>);
    fn on_exit_search(&mut self);
    fn on_delta_rejected(&mut self, delta: T);
    fn on_step(&mut self);
    fn search_command(&self) -> SearchCommand;
}

impl<T> std::fmt::Debug for dyn DeltaSearchMonitor<T> + '_
where
    T: RealNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DeltaSearchMonitor({})", self.name())
    }
}

/// A monitor that observes nothing and never terminates the search.
///
/// Useful for callers that bound the search by construction (e.g. tests on
/// known-convergent queries).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl<T> DeltaSearchMonitor<T> for NoOpMonitor
where
    T: RealNumeric,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_enter_search(&mut self, _query: &DeltaQuery<T>) {}
    fn on_exit_search(&mut self) {}
    fn on_delta_rejected(&mut self, _delta: T) {}
    fn on_step(&mut self) {}

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_display() {
        assert_eq!(format!("{}", SearchCommand::Continue), "Continue");
        assert_eq!(
            format!("{}", SearchCommand::Terminate("budget".to_string())),
            "Terminate: budget"
        );
    }

    #[test]
    fn test_noop_monitor_always_continues() {
        let monitor = NoOpMonitor;
        assert_eq!(
            DeltaSearchMonitor::<f64>::search_command(&monitor),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_trait_object_debug() {
        let monitor = NoOpMonitor;
        let obj: &dyn DeltaSearchMonitor<f64> = &monitor;
        assert_eq!(format!("{:?}", obj), "DeltaSearchMonitor(NoOpMonitor)");
    }
}
