/// Concatenate `values` with its own reverse.
///
/// The result has length `2 * values.len()` and satisfies
/// `out[i] == out[out.len() - 1 - i]`.
pub fn mirror(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() * 2);
    out.extend_from_slice(values);
    out.extend(values.iter().rev());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_length_and_is_palindromic() {
        let values = [3.0, -1.5, 7.25, 0.0, 42.0];
        let m = mirror(&values);
        assert_eq!(m.len(), 2 * values.len());
        let n = values.len();
        for i in 0..n {
            assert_eq!(m[i], m[2 * n - 1 - i]);
            assert_eq!(m[i], values[i]);
        }
    }

    #[test]
    fn empty_stays_empty() {
        assert!(mirror(&[]).is_empty());
    }

    #[test]
    fn single_value_is_duplicated() {
        assert_eq!(mirror(&[9.0]), vec![9.0, 9.0]);
    }
}
