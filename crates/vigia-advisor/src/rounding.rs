/// Round to the nearest integer, ties toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. NaN rounds to `0`; values beyond `i64` saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::round_half_up;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.49, 0)]
    #[case(0.5, 1)]
    #[case(2.5, 3)]
    #[case(-0.5, 0)]
    #[case(-2.5, -2)]
    #[case(-2.51, -3)]
    #[case(72.4, 72)]
    fn ties_round_up(#[case] value: f64, #[case] expected: i64) {
        assert_eq!(round_half_up(value), expected);
    }

    #[test]
    fn nan_rounds_to_zero() {
        assert_eq!(round_half_up(f64::NAN), 0);
    }
}
