//! Time span syntax: `[-][d.]hh:mm[:ss[.fffffff]]`, or a bare day count.
//!
//! | Input            | Meaning                          |
//! |------------------|----------------------------------|
//! | `3`              | 3 days                           |
//! | `01:30`          | 1 hour 30 minutes                |
//! | `2.04:00:15`     | 2 days 4 hours 15 seconds        |
//! | `-00:00:00.5`    | minus half a second              |
//!
//! Hours run 0-23, minutes and seconds 0-59, and the fraction takes one to
//! seven digits (100 ns resolution).

use chrono::TimeDelta;

const MAX_FRACTION_DIGITS: usize = 7;

/// Parses a time span, returning `None` for anything malformed or out of
/// range.
pub fn parse_time_span(input: &str) -> Option<TimeDelta> {
    let input = input.trim();
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let span = if body.contains(':') {
        clock_span(body)?
    } else {
        TimeDelta::try_days(digits(body)?)?
    };

    Some(if negative { -span } else { span })
}

fn clock_span(body: &str) -> Option<TimeDelta> {
    let mut parts = body.split(':');
    let head = parts.next()?;
    let minutes = bounded(parts.next()?, 59)?;
    let seconds = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let (days, hours) = match head.split_once('.') {
        Some((days, hours)) => (digits(days)?, hours),
        None => (0, head),
    };
    let hours = bounded(hours, 23)?;

    let (seconds, nanos) = match seconds {
        None => (0, 0),
        Some(s) => match s.split_once('.') {
            Some((whole, fraction)) => (bounded(whole, 59)?, fraction_nanos(fraction)?),
            None => (bounded(s, 59)?, 0),
        },
    };

    TimeDelta::try_days(days)?
        .checked_add(&TimeDelta::hours(hours))?
        .checked_add(&TimeDelta::minutes(minutes))?
        .checked_add(&TimeDelta::seconds(seconds))?
        .checked_add(&TimeDelta::nanoseconds(nanos))
}

fn digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn bounded(s: &str, max: i64) -> Option<i64> {
    digits(s).filter(|n| *n <= max)
}

fn fraction_nanos(s: &str) -> Option<i64> {
    if s.len() > MAX_FRACTION_DIGITS {
        return None;
    }
    let value = digits(s)?;
    Some(value * 10_i64.pow(9 - s.len() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("3", TimeDelta::days(3))]
    #[case("01:30", TimeDelta::minutes(90))]
    #[case("00:00:45", TimeDelta::seconds(45))]
    #[case("2.04:00:15", TimeDelta::days(2) + TimeDelta::hours(4) + TimeDelta::seconds(15))]
    #[case("00:00:00.5", TimeDelta::milliseconds(500))]
    #[case("00:00:01.0000001", TimeDelta::seconds(1) + TimeDelta::nanoseconds(100))]
    #[case("-00:00:00.5", TimeDelta::milliseconds(-500))]
    #[case(" 23:59:59 ", TimeDelta::seconds(86_399))]
    fn test_accepts(#[case] input: &str, #[case] expected: TimeDelta) {
        assert_eq!(parse_time_span(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("24:00")]
    #[case("00:60")]
    #[case("00:00:60")]
    #[case("00:00:00.12345678")]
    #[case("1:2:3:4")]
    #[case("ab:cd")]
    #[case("+01:00")]
    #[case("1.5")]
    fn test_rejects(#[case] input: &str) {
        assert_eq!(parse_time_span(input), None);
    }
}
