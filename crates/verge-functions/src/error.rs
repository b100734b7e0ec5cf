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

/// Details about an evaluation attempted outside a function's domain.
///
/// Carries the function name, the offending input, and a static description
/// of the violated constraint. This is the only failure a catalogue function
/// raises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError<T> {
    /// The snake_case name of the function that rejected the input.
    pub function: &'static str,
    /// The input at which evaluation was attempted.
    pub input: T,
    /// A human-readable statement of the violated domain restriction,
    /// e.g. "x = 0" or "x < 0".
    pub constraint: &'static str,
}

impl<T> DomainError<T> {
    /// Creates a new `DomainError`.
    #[inline]
    pub fn new(function: &'static str, input: T, constraint: &'static str) -> Self {
        Self {
            function,
            input,
            constraint,
        }
    }
}

impl<T> std::fmt::Display for DomainError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Function '{}' is not defined at x = {} (excluded: {})",
            self.function, self.input, self.constraint
        )
    }
}

impl<T> std::error::Error for DomainError<T> where T: std::fmt::Display + std::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::DomainError;

    #[test]
    fn test_display_names_function_input_and_constraint() {
        let err = DomainError::new("reciprocal", 0.0, "x = 0");
        assert_eq!(
            format!("{}", err),
            "Function 'reciprocal' is not defined at x = 0 (excluded: x = 0)"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err = DomainError::new("square_root", -1.0, "x < 0");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().contains("square_root"));
    }
}
