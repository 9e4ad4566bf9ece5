//! ISO-8601 date parsing

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Calendar date, optionally followed by a time of day and offset.
/// Extended (`2020-01-31`) and basic (`20200131`) forms are both accepted.
static ISO8601: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<y>\d{4})(?:-(?P<m>\d{2})(?:-(?P<d>\d{2}))?|(?P<bm>\d{2})(?P<bd>\d{2}))?(?:[Tt ](?P<h>\d{2}):?(?P<mi>\d{2})(?::?(?P<s>\d{2})(?:[.,]\d+)?)?(?P<tz>[Zz]|[+-]\d{2}(?::?\d{2})?)?)?$",
    )
    .expect("ISO-8601 pattern is valid")
});

/// Parse an ISO-8601 date or date-time into the calendar date it names.
///
/// Missing month or day default to the first. A time part is only allowed
/// after a full date and must itself be a valid time of day.
pub fn parse_iso8601_date(input: &str) -> Option<NaiveDate> {
    let caps = ISO8601.captures(input)?;
    let num = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.name("y")?.as_str().parse::<i32>().ok()?;
    let month = num("m").or_else(|| num("bm"));
    let day = num("d").or_else(|| num("bd"));

    if caps.name("h").is_some() {
        day?;
        let hour = num("h")?;
        let minute = num("mi")?;
        let second = num("s").unwrap_or(0);
        if second > 60 {
            return None;
        }
        NaiveTime::from_hms_opt(hour, minute, second.min(59))?;
        if let Some(tz) = caps.name("tz") {
            valid_offset(tz.as_str())?;
        }
    }

    NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1))
}

fn valid_offset(tz: &str) -> Option<()> {
    if tz.eq_ignore_ascii_case("z") {
        return Some(());
    }
    let digits: String = tz[1..].chars().filter(char::is_ascii_digit).collect();
    let hours: u32 = digits.get(0..2)?.parse().ok()?;
    let minutes: u32 = digits.get(2..4).map_or(Some(0), |m| m.parse().ok())?;
    (hours <= 23 && minutes <= 59).then_some(())
}
