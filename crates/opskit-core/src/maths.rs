//! Small math helpers

/// The Fibonacci number at the given position, starting from 0, 1, 1, 2, …
///
/// Exact up to position 93, the largest Fibonacci number that fits in a
/// `u64`; higher positions saturate at `u64::MAX` instead of overflowing.
pub fn fibonacci(position: u64) -> u64 {
    let mut pair = (0u64, 1u64);
    for _ in 0..position {
        pair = (pair.1, pair.0.saturating_add(pair.1));
    }
    pair.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fibonacci_values() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        for (position, value) in expected.into_iter().enumerate() {
            assert_eq!(fibonacci(position as u64), value, "position {position}");
        }
    }

    #[test]
    fn test_largest_exact_value() {
        assert_eq!(fibonacci(93), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_positions_past_the_exact_range_saturate() {
        assert_eq!(fibonacci(94), u64::MAX);
        assert_eq!(fibonacci(200), u64::MAX);
    }
}
