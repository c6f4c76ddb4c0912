//! Additive reduction over numeric sequences

use std::iter::Sum;

/// Return the sum of a sequence of numbers
///
/// Pure function with no side effects. An empty sequence yields the additive
/// identity of the numeric type.
pub fn sum_numbers<T: Sum<T>>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_floats() {
        let total: f64 = sum_numbers([1.5, 2.5]);
        assert_eq!(total, 4.0);
    }

    #[test]
    fn test_sum_integers() {
        let total: i64 = sum_numbers([1, 2, 3]);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_empty_input_yields_identity() {
        let total: f64 = sum_numbers(std::iter::empty());
        assert_eq!(total, 0.0);

        let total: i64 = sum_numbers(std::iter::empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_negative_values() {
        let total: f64 = sum_numbers([-1.5, 2.5, -3.0]);
        assert_eq!(total, -2.0);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let values = vec![0.25, 0.5, 0.75];
        let first: f64 = sum_numbers(values.iter().copied());
        let second: f64 = sum_numbers(values.iter().copied());
        assert_eq!(first, second);
    }
}
