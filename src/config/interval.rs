//! Interval text parsing.
//!
//! Accepted grammar: `^(\d+h)?(\d+m)?(\d+s)?$`. Every unit is optional but
//! the order is fixed (hours, then minutes, then seconds).

use std::time::Duration;

use super::error::ConfigError;

/// Units in the order they must appear, with their length in seconds.
const UNITS: [(char, u64); 3] = [('h', 3600), ('m', 60), ('s', 1)];

/// Parses interval text such as `"25m"` or `"1h5m14s"` into a duration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidInterval` if the text does not match the
/// grammar, `ConfigError::ZeroInterval` if it adds up to zero and
/// `ConfigError::IntervalOverflow` if it does not fit.
pub fn parse_interval(text: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidInterval(text.to_string());
    let overflow = || ConfigError::IntervalOverflow(text.to_string());

    let mut rest = text;
    let mut next_unit = 0;
    let mut total_secs: u64 = 0;

    while !rest.is_empty() {
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(invalid());
        }

        let (digits, tail) = rest.split_at(digits_len);
        let unit = tail.chars().next().ok_or_else(invalid)?;

        // Only units after the last one seen are allowed.
        let offset = UNITS[next_unit..]
            .iter()
            .position(|(name, _)| *name == unit)
            .ok_or_else(invalid)?;
        let (_, unit_secs) = UNITS[next_unit + offset];
        next_unit += offset + 1;

        let value: u64 = digits.parse().map_err(|_| overflow())?;
        let secs = value.checked_mul(unit_secs).ok_or_else(overflow)?;
        total_secs = total_secs.checked_add(secs).ok_or_else(overflow)?;

        rest = &tail[unit.len_utf8()..];
    }

    if total_secs == 0 {
        return Err(ConfigError::ZeroInterval(text.to_string()));
    }

    Ok(Duration::from_secs(total_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod valid_tests {
        use super::*;

        #[test]
        fn test_single_units() {
            assert_eq!(parse_interval("25m").unwrap(), Duration::from_secs(25 * 60));
            assert_eq!(parse_interval("1h").unwrap(), Duration::from_secs(3600));
            assert_eq!(parse_interval("5s").unwrap(), Duration::from_secs(5));
        }

        #[test]
        fn test_all_units() {
            assert_eq!(
                parse_interval("1h5m14s").unwrap(),
                Duration::from_secs(3600 + 5 * 60 + 14)
            );
        }

        #[test]
        fn test_skipped_unit() {
            assert_eq!(parse_interval("2h30s").unwrap(), Duration::from_secs(7230));
            assert_eq!(parse_interval("1m90s").unwrap(), Duration::from_secs(150));
        }

        #[test]
        fn test_leading_zeros_and_zero_components() {
            assert_eq!(parse_interval("0h05m").unwrap(), Duration::from_secs(300));
        }

        #[test]
        fn test_sum_matches_components() {
            for h in [0u64, 1, 7] {
                for m in [0u64, 3, 59, 120] {
                    for s in [0u64, 1, 45] {
                        if h + m + s == 0 {
                            continue;
                        }
                        let text = format!("{h}h{m}m{s}s");
                        assert_eq!(
                            parse_interval(&text).unwrap(),
                            Duration::from_secs(h * 3600 + m * 60 + s),
                            "{text}"
                        );
                    }
                }
            }
        }
    }

    mod invalid_tests {
        use super::*;

        #[test]
        fn test_unknown_unit() {
            assert_eq!(
                parse_interval("5x"),
                Err(ConfigError::InvalidInterval("5x".to_string()))
            );
        }

        #[test]
        fn test_wrong_order() {
            assert!(matches!(parse_interval("5m1h"), Err(ConfigError::InvalidInterval(_))));
            assert!(matches!(parse_interval("10s5m"), Err(ConfigError::InvalidInterval(_))));
        }

        #[test]
        fn test_repeated_unit() {
            assert!(matches!(parse_interval("5m5m"), Err(ConfigError::InvalidInterval(_))));
        }

        #[test]
        fn test_missing_digits_or_unit() {
            assert!(matches!(parse_interval("h"), Err(ConfigError::InvalidInterval(_))));
            assert!(matches!(parse_interval("25"), Err(ConfigError::InvalidInterval(_))));
            assert!(matches!(parse_interval("1h5"), Err(ConfigError::InvalidInterval(_))));
        }

        #[test]
        fn test_garbage() {
            assert!(matches!(parse_interval(" 5m"), Err(ConfigError::InvalidInterval(_))));
            assert!(matches!(parse_interval("5m "), Err(ConfigError::InvalidInterval(_))));
            assert!(matches!(parse_interval("-5m"), Err(ConfigError::InvalidInterval(_))));
            assert!(matches!(parse_interval("5mé"), Err(ConfigError::InvalidInterval(_))));
        }

        #[test]
        fn test_zero() {
            assert!(matches!(parse_interval(""), Err(ConfigError::ZeroInterval(_))));
            assert!(matches!(parse_interval("0s"), Err(ConfigError::ZeroInterval(_))));
            assert!(matches!(parse_interval("0h0m0s"), Err(ConfigError::ZeroInterval(_))));
        }

        #[test]
        fn test_overflow() {
            assert!(matches!(
                parse_interval("99999999999999999999s"),
                Err(ConfigError::IntervalOverflow(_))
            ));
            assert!(matches!(
                parse_interval("18446744073709551615h"),
                Err(ConfigError::IntervalOverflow(_))
            ));
        }
    }
}
