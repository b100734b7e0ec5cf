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

use crate::{
    monitor::search_monitor::{DeltaSearchMonitor, SearchCommand},
    query::DeltaQuery,
};
use std::time::{Duration, Instant};
use verge_core::num::real::RealNumeric;

/// A monitor that prints a throttled progress table of the shrinking
/// delta, for interactive or long-running searches.
///
/// Log lines are emitted at most once per `log_interval`, gated by a
/// bitmask step filter so the clock is not read on every shrink step.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    last_delta: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: RealNumeric,
{
    /// Creates a new `LogMonitor` with the given line interval and step
    /// filter mask.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            last_delta: None,
        }
    }

    #[inline(always)]
    fn print_header(&self, query: &DeltaQuery<T>) {
        println!("Delta search for {}", query);
        println!(
            "{:<9} | {:<12} | {:<24}",
            "Elapsed", "Shrink Steps", "Rejected Delta"
        );
        println!("{}", "-".repeat(51));
    }

    #[inline(always)]
    fn log_line(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let delta_str = match &self.last_delta {
            Some(delta) => format!("{}", delta),
            None => "-".to_string(),
        };

        let elapsed_field = format!("{:.1}s", elapsed);
        println!(
            "{:<9} | {:<12} | {:<24}",
            elapsed_field, self.steps, delta_str
        );
        self.last_log_time = now;
    }
}

impl<T> DeltaSearchMonitor<T> for LogMonitor<T>
where
    T: RealNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, query: &DeltaQuery<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.last_delta = None;
        self.print_header(query);
    }

    fn on_exit_search(&mut self) {
        self.log_line();
    }

    fn on_delta_rejected(&mut self, delta: T) {
        self.last_delta = Some(delta);
    }

    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line();
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
