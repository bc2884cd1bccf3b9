//! Go-style duration strings: `10s`, `1.5m`, `1m30s`, `250ms`.

use std::time::Duration;

use anyhow::{Result, bail};

/// Nanoseconds per unit, matched longest first so `ms` wins over `m`.
const UNITS: [(&str, u128); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", NANOS_PER_SEC),
    ("m", 60 * NANOS_PER_SEC),
    ("h", 3600 * NANOS_PER_SEC),
];

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits past this precision are dropped.
const MAX_FRACTION_DIGITS: usize = 20;

/// Parses a duration such as `10s` or `1h2m3.5s`.
///
/// Each component is a decimal number followed by one of `ns`, `us`, `µs`,
/// `ms`, `s`, `m` or `h`. A bare `0` is accepted. Negative durations are
/// rejected. Arithmetic is exact down to the nanosecond, so `4.1s` is
/// exactly 4100 milliseconds.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let text = input.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    if text.starts_with('-') {
        bail!("invalid duration \"{input}\": must not be negative");
    }
    if text == "0" {
        return Ok(Duration::ZERO);
    }
    if text.is_empty() {
        bail!("invalid duration \"{input}\"");
    }

    let mut rest = text;
    let mut nanos: u128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);

        let Some((unit, scale)) = UNITS
            .iter()
            .filter(|(unit, _)| tail.starts_with(unit))
            .max_by_key(|(unit, _)| unit.len())
        else {
            if tail.is_empty() {
                bail!("missing unit in duration \"{input}\"");
            }
            bail!("unknown unit in duration \"{input}\"");
        };

        let Some(component) = component_nanos(number, *scale) else {
            bail!("invalid duration \"{input}\"");
        };
        nanos = nanos
            .checked_add(component)
            .ok_or_else(|| anyhow::anyhow!("invalid duration \"{input}\": out of range"))?;
        rest = &tail[unit.len()..];
    }

    let secs = u64::try_from(nanos / NANOS_PER_SEC)
        .map_err(|_| anyhow::anyhow!("invalid duration \"{input}\": out of range"))?;
    Ok(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}

/// Converts one `digits[.digits]` number of `scale`-nanosecond units,
/// truncating below a nanosecond. `None` for malformed or overflowing input.
fn component_nanos(number: &str, scale: u128) -> Option<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return None;
    }

    let mut value: u128 = 0;
    for digit in whole.bytes() {
        value = value.checked_mul(10)?.checked_add(u128::from(digit - b'0'))?;
    }
    let mut nanos = value.checked_mul(scale)?;

    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in fraction.bytes().take(MAX_FRACTION_DIGITS) {
        numerator = numerator * 10 + u128::from(digit - b'0');
        denominator *= 10;
    }
    nanos = nanos.checked_add(numerator * scale / denominator)?;
    Some(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_units() {
        assert_eq!(parse_duration("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("7us").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("42ns").unwrap(), Duration::from_nanos(42));
    }

    #[test]
    fn test_compound_and_fractional() {
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("+2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_fractions_are_exact() {
        assert_eq!(parse_duration("4.1s").unwrap(), Duration::from_millis(4100));
        assert_eq!(parse_duration("1.15s").unwrap(), Duration::from_millis(1150));
        assert_eq!(parse_duration("0.7s").unwrap(), Duration::from_millis(700));
        assert_eq!(parse_duration("2.3m").unwrap(), Duration::from_secs(138));
        assert_eq!(parse_duration("1.5us").unwrap(), Duration::from_nanos(1500));
        assert_eq!(parse_duration("1.9ns").unwrap(), Duration::from_nanos(1));
        assert_eq!(
            parse_duration("0.1234567891234567891234s").unwrap(),
            Duration::from_nanos(123_456_789)
        );
    }

    #[test]
    fn test_fractional_duration_gives_exact_length() {
        let duration = parse_duration("4.1s").unwrap();
        let params = bass::SynthParams::new(44100, duration, 55.0).unwrap();
        assert_eq!(params.length(), 180810);
    }

    #[test]
    fn test_out_of_range() {
        assert!(parse_duration("99999999999999999999999999999999999999999h").is_err());
        assert!(parse_duration("18446744073709551616s").is_err());
        assert_eq!(
            parse_duration("18446744073709551615s").unwrap(),
            Duration::from_secs(u64::MAX)
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_invalid() {
        for bad in ["", "10", "s", "-1s", "1x", "1.2.3s", "ten seconds", "."] {
            assert!(parse_duration(bad).is_err(), "accepted {bad:?}");
        }
    }
}
