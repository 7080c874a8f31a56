//! Turkish-locale display formatting for amounts, areas and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing value.
pub const MISSING_VALUE: &str = "—";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Separators and precision used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: u32,
}

impl NumberLocale {
    /// `tr-TR`: `1.234.567,891`, at most three fraction digits.
    pub const fn turkish() -> Self {
        Self { grouping_separator: '.', decimal_separator: ',', max_fraction_digits: 3 }
    }

    pub const fn with_max_fraction_digits(self, max_fraction_digits: u32) -> Self {
        Self { max_fraction_digits, ..self }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::turkish()
    }
}

/// Render `value` with grouping, rounding half away from zero and dropping
/// trailing fraction zeros.
///
/// Rounding works on the shortest decimal form of `value` (`0.5005`, not
/// `0.50049999...`), so results match what a user reads in the source data.
pub fn format_number(value: f64, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let fraction_digits = locale.max_fraction_digits as i64;
    let (digits, point) = round_decimal(value.abs(), fraction_digits);
    let digit_at = |i: i64| -> char {
        if i >= 0 && (i as usize) < digits.len() {
            char::from(b'0' + digits[i as usize])
        } else {
            '0'
        }
    };

    let integer_part: String = if point > 0 { (0..point).map(digit_at).collect() } else { "0".to_string() };
    let fraction_part: String = (0..fraction_digits).map(|j| digit_at(point + j)).collect();
    let fraction_part = fraction_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && digits.iter().any(|d| *d != 0) {
        out.push('-');
    }
    out.push_str(&group_digits(&integer_part, locale.grouping_separator));
    if !fraction_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(fraction_part);
    }
    out
}

/// Decimal digits of a non-negative finite `value` rounded half away from
/// zero to `fraction_digits` places, with the position of the decimal point
/// counted from the first digit.
fn round_decimal(value: f64, fraction_digits: i64) -> (Vec<u8>, i64) {
    // `{:e}` prints the shortest representation that reads back as `value`
    let sci = format!("{:e}", value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    let mut point = exponent + 1;

    let keep = point + fraction_digits;
    if keep < 0 {
        return (vec![], point);
    }
    let keep = keep as usize;
    if keep >= digits.len() {
        return (digits, point);
    }
    let round_up = digits[keep] >= 5;
    digits.truncate(keep);
    if round_up {
        let mut i = keep;
        loop {
            if i == 0 {
                digits.insert(0, 1);
                point += 1;
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    (digits, point)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn format_whole_with_suffix(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => {
            let locale = NumberLocale::turkish().with_max_fraction_digits(0);
            format!("{} {}", format_number(v, &locale), suffix)
        }
        None => MISSING_VALUE.to_string(),
    }
}

/// `12.345 TL`
pub fn format_tl(value: Option<f64>) -> String {
    format_whole_with_suffix(value, "TL")
}

/// `1.234 m²`
pub fn format_area(value: Option<f64>) -> String {
    format_whole_with_suffix(value, "m²")
}

/// `42.1 %`, or the missing marker when the ratio cannot be computed.
pub fn format_percent(numerator: Option<f64>, denominator: Option<f64>) -> String {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => format!("{:.1} %", n / d * 100.0),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Parse the date/time shapes the IR API emits. Offsets are dropped, the
/// wall-clock time of the given zone is kept.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `27.10.2024`; unparseable input is shown as is.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => MISSING_VALUE.to_string(),
        Some(v) if v.is_empty() => MISSING_VALUE.to_string(),
        Some(v) => match parse_date_time(v) {
            Some(dt) => dt.format("%d.%m.%Y").to_string(),
            None => v.to_string(),
        },
    }
}

/// `27.10.2024 10:45`
pub fn format_date_time(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .and_then(parse_date_time)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_grouping_and_decimals() {
        let tr = NumberLocale::turkish();
        assert_eq!(format_number(1234567.891, &tr), "1.234.567,891");
        assert_eq!(format_number(1234.5, &tr), "1.234,5");
        assert_eq!(format_number(999.0, &tr), "999");
        assert_eq!(format_number(1000.0, &tr), "1.000");
        assert_eq!(format_number(0.0, &tr), "0");
    }

    #[test]
    fn rounds_to_max_fraction_digits() {
        let tr = NumberLocale::turkish();
        assert_eq!(format_number(0.12345, &tr), "0,123");
        assert_eq!(format_number(2.0006, &tr), "2,001");
        assert_eq!(format_number(2.5, &tr.with_max_fraction_digits(0)), "3");
        assert_eq!(format_number(-2.5, &tr.with_max_fraction_digits(0)), "-3");
        assert_eq!(format_number(0.5005, &tr), "0,501");
        assert_eq!(format_number(0.5015, &tr), "0,502");
        assert_eq!(format_number(-0.5005, &tr), "-0,501");
        assert_eq!(format_number(1.005, &tr.with_max_fraction_digits(2)), "1,01");
    }

    #[test]
    fn rounding_carries_into_the_integer_part() {
        let tr = NumberLocale::turkish();
        assert_eq!(format_number(999.9996, &tr), "1.000");
        assert_eq!(format_number(0.0006, &tr), "0,001");
        assert_eq!(format_number(0.0004, &tr), "0");
        assert_eq!(format_number(0.49, &tr.with_max_fraction_digits(0)), "0");
        assert_eq!(format_number(1e21, &tr), "1.000.000.000.000.000.000.000");
    }

    #[test]
    fn negative_and_non_finite_numbers() {
        let tr = NumberLocale::turkish();
        assert_eq!(format_number(-1234.25, &tr), "-1.234,25");
        assert_eq!(format_number(-0.0001, &tr), "0");
        assert_eq!(format_number(f64::NAN, &tr), "NaN");
        assert_eq!(format_number(f64::INFINITY, &tr), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, &tr), "-∞");
    }

    #[test]
    fn currency_and_area() {
        assert_eq!(format_tl(Some(3_250_000_000.4)), "3.250.000.000 TL");
        assert_eq!(format_tl(None), "—");
        assert_eq!(format_area(Some(112_000.0)), "112.000 m²");
        assert_eq!(format_area(None), "—");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(Some(421.0), Some(1000.0)), "42.1 %");
        assert_eq!(format_percent(Some(1.0), Some(0.0)), "—");
        assert_eq!(format_percent(None, Some(10.0)), "—");
        assert_eq!(format_percent(Some(1.0), None), "—");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(Some("2025-06-30")), "30.06.2025");
        assert_eq!(format_date(Some("2024-10-27 10:45:00")), "27.10.2024");
        assert_eq!(format_date(Some("30 Haziran")), "30 Haziran");
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("")), "—");
    }

    #[test]
    fn date_times() {
        assert_eq!(format_date_time(Some("2024-10-27 10:45:00")), "27.10.2024 10:45");
        assert_eq!(format_date_time(Some("2024-07-31T18:30:00+03:00")), "31.07.2024 18:30");
        assert_eq!(format_date_time(Some("2024-03-15")), "15.03.2024 00:00");
        assert_eq!(format_date_time(Some("yakında")), "—");
        assert_eq!(format_date_time(None), "—");
    }
}
