//! Degraded/critical threshold strings such as `"10%"`, `"512M"` or `"2 G"`.

const BINARY_BASE: i64 = 1024;

/// Power of 1024 applied for each case-insensitive unit suffix.
const UNIT_EXPONENTS: [(char, u32); 4] = [('k', 1), ('m', 2), ('g', 3), ('t', 4)];

/// Converts a threshold string into an absolute quantity relative to `total`.
///
/// A `%` suffix yields that share of `total`; a `K`/`M`/`G`/`T` suffix scales
/// the number by the matching power of 1024. Any other suffix leaves the
/// number unscaled, and a string without leading digits yields 0.
pub fn memory_absolute(total: i64, threshold: &str) -> i64 {
    let (value, rest) = parse_leading_integer(threshold);

    let Some(suffix) = rest.trim_start().chars().next() else {
        return value;
    };

    if suffix == '%' {
        return total.saturating_mul(value) / 100;
    }

    let lowered = suffix.to_ascii_lowercase();
    match UNIT_EXPONENTS.iter().find(|(unit, _)| *unit == lowered) {
        Some(&(_, exponent)) => value.saturating_mul(BINARY_BASE.pow(exponent)),
        None => value,
    }
}

/// `strtol`-style parse: leading whitespace, optional sign, decimal digits.
/// Saturates on overflow. Returns the remainder after the digits, or the
/// whole input when no digits were found.
fn parse_leading_integer(input: &str) -> (i64, &str) {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return (0, input);
    }

    let magnitude = unsigned[..digit_len].bytes().fold(0i64, |acc, byte| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };

    (value, &unsigned[digit_len..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: i64 = 1024 * 1024 * 1024;

    #[test]
    fn percentage_of_even_total_is_exact_half() {
        assert_eq!(memory_absolute(16 * GIB, "50%"), 8 * GIB);
        assert_eq!(memory_absolute(1000, "50%"), 500);
    }

    #[test]
    fn percentage_truncates_toward_zero() {
        assert_eq!(memory_absolute(999, "10%"), 99);
    }

    #[test]
    fn kilo_suffix_scales_once() {
        assert_eq!(memory_absolute(0, "3K"), 3 * 1024);
        assert_eq!(memory_absolute(0, "3k"), 3 * 1024);
    }

    #[test]
    fn mega_suffix_scales_twice() {
        assert_eq!(memory_absolute(0, "512M"), 512 * 1024 * 1024);
    }

    #[test]
    fn giga_suffix_scales_three_times() {
        assert_eq!(memory_absolute(0, "2G"), 2 * GIB);
        assert_eq!(memory_absolute(0, "2g"), 2 * GIB);
    }

    #[test]
    fn tera_suffix_scales_four_times() {
        assert_eq!(memory_absolute(0, "1T"), 1024 * GIB);
    }

    #[test]
    fn whitespace_between_number_and_suffix_is_skipped() {
        assert_eq!(memory_absolute(0, "2 G"), 2 * GIB);
        assert_eq!(memory_absolute(200, "25 %"), 50);
    }

    #[test]
    fn missing_or_unknown_suffix_is_unscaled() {
        assert_eq!(memory_absolute(0, "4096"), 4096);
        assert_eq!(memory_absolute(0, "7X"), 7);
        assert_eq!(memory_absolute(0, "7 B"), 7);
    }

    #[test]
    fn no_leading_digits_is_zero() {
        assert_eq!(memory_absolute(1000, ""), 0);
        assert_eq!(memory_absolute(1000, "abc"), 0);
        assert_eq!(memory_absolute(1000, "%"), 0);
        assert_eq!(memory_absolute(1000, "G"), 0);
    }

    #[test]
    fn leading_whitespace_and_sign() {
        assert_eq!(memory_absolute(0, "  12K"), 12 * 1024);
        assert_eq!(memory_absolute(0, "+5"), 5);
        assert_eq!(memory_absolute(1000, "-10%"), -100);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(memory_absolute(0, "99999999999999999999"), i64::MAX);
        assert_eq!(memory_absolute(0, "9999999999999T"), i64::MAX);
    }
}
