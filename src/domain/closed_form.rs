//! Closed-Form Evaluator
//!
//! Produces a plausible return value for a simulated call without running the
//! recursion, by matching the function name against known numeric patterns.
//! Unrecognized functions fall back to identity, which may be semantically
//! wrong; that is accepted behavior, not an error.

/// One recognized pattern: a predicate over the lower-cased function name and
/// the closed form to evaluate when it matches.
pub struct Pattern {
    pub matches: fn(&str) -> bool,
    pub evaluate: fn(i64) -> i64,
}

/// Ordered pattern table; first match wins.
pub struct ClosedFormTable {
    patterns: Vec<Pattern>,
}

impl Default for ClosedFormTable {
    fn default() -> Self {
        ClosedFormTable {
            patterns: vec![
                Pattern {
                    matches: |name| name.contains("fib"),
                    evaluate: fibonacci,
                },
                Pattern {
                    matches: |name| name.contains("factorial") || name.contains("fact"),
                    evaluate: factorial,
                },
            ],
        }
    }
}

impl ClosedFormTable {
    /// Extend the table with a custom pattern. Later entries lose to earlier
    /// ones, matching the first-match-wins lookup.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Return value for `function_name` called with `input`.
    pub fn evaluate(&self, function_name: &str, input: i64) -> i64 {
        let lowered = function_name.to_lowercase();
        for pattern in &self.patterns {
            if (pattern.matches)(&lowered) {
                return (pattern.evaluate)(input);
            }
        }
        input
    }
}

/// Iterative Fibonacci with fib(0) = 0, fib(1) = 1.
fn fibonacci(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 1..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}

/// Iterative product 1*2*...*n, with n <= 1 yielding 1.
fn factorial(n: i64) -> i64 {
    let mut product = 1i64;
    let mut i = 2;
    while i <= n {
        product = product.saturating_mul(i);
        i += 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_values() {
        let table = ClosedFormTable::default();
        assert_eq!(table.evaluate("fib", 0), 0);
        assert_eq!(table.evaluate("fib", 1), 1);
        assert_eq!(table.evaluate("fib", 2), 1);
        assert_eq!(table.evaluate("fibonacci", 10), 55);
        assert_eq!(table.evaluate("Fibonacci", 6), 8);
    }

    #[test]
    fn test_factorial_values() {
        let table = ClosedFormTable::default();
        assert_eq!(table.evaluate("factorial", 0), 1);
        assert_eq!(table.evaluate("factorial", 1), 1);
        assert_eq!(table.evaluate("factorial", 5), 120);
        assert_eq!(table.evaluate("fact", 4), 24);
        assert_eq!(table.evaluate("compute_fact", 3), 6);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let table = ClosedFormTable::default();
        assert_eq!(table.evaluate("MyFib", 7), 13);
        assert_eq!(table.evaluate("FACTORIAL", 4), 24);
    }

    #[test]
    fn test_unrecognized_name_is_identity() {
        let table = ClosedFormTable::default();
        assert_eq!(table.evaluate("countdown", 9), 9);
        assert_eq!(table.evaluate("main", 0), 0);
    }

    #[test]
    fn test_custom_pattern_extends_table() {
        let table = ClosedFormTable::default().with_pattern(Pattern {
            matches: |name| name.contains("double"),
            evaluate: |n| n * 2,
        });
        assert_eq!(table.evaluate("double_it", 21), 42);
        // Built-ins still match first.
        assert_eq!(table.evaluate("fib_double", 10), 55);
    }
}
