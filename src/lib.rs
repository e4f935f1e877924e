use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;
const MS_PER_MONTH: i64 = MS_PER_DAY * 30;
const MS_PER_YEAR: i64 = MS_PER_DAY * 365;

/// Relative-time units, largest first. Fixed sizes: a month is 30 days and a
/// year is 365 days regardless of the calendar dates involved.
const UNITS: [(&str, i64); 6] = [
    ("year", MS_PER_YEAR),
    ("month", MS_PER_MONTH),
    ("day", MS_PER_DAY),
    ("hour", MS_PER_HOUR),
    ("minute", MS_PER_MINUTE),
    ("second", MS_PER_SECOND),
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names keyed 1 (Monday) through 7 (Sunday). Slot 0 is unmapped:
/// the weekday index derived from an instant runs 0 (Sunday) through
/// 6 (Saturday), so Sunday lookups miss the table. See [`TimePoint::day`].
const WEEKDAY_NAMES: [Option<&str>; 8] = [
    None,
    Some("Monday"),
    Some("Tuesday"),
    Some("Wednesday"),
    Some("Thursday"),
    Some("Friday"),
    Some("Saturday"),
    Some("Sunday"),
];

/// Epoch day number for the first of the given month, using Howard Hinnant's
/// days_from_civil algorithm. `month` is 1-based here.
fn days_from_civil(year: i64, month: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Splits an epoch day number into (year, month 1-12, day 1-31) via
/// Hinnant's civil_from_days algorithm.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (if month <= 2 { y + 1 } else { y }) as i32;
    (year, month, day)
}

fn pad_zero(value: u32) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

/// A single instant, stored as signed milliseconds since the Unix epoch.
/// Immutable once constructed; every accessor is a pure function of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint {
    epoch_ms: i64,
}

impl TimePoint {
    /// Constructs a TimePoint from calendar components. `month` is a 0-based
    /// index (0 = January). Out-of-range components normalize instead of
    /// failing: month 12 rolls into the next year, day 0 is the last day of
    /// the previous month, hour 24 rolls into the next day, and negative
    /// values underflow the same way.
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        let year = year as i64 + (month as i64).div_euclid(12);
        let month = (month as i64).rem_euclid(12); // [0, 11]
        let days = days_from_civil(year, month + 1) + (day as i64 - 1);
        let epoch_ms = days * MS_PER_DAY
            + hour as i64 * MS_PER_HOUR
            + minute as i64 * MS_PER_MINUTE
            + second as i64 * MS_PER_SECOND;
        Self { epoch_ms }
    }

    /// Midnight on the given date. `month` is a 0-based index.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Constructs a TimePoint from signed milliseconds since the Unix epoch.
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Captures the current instant (UTC) via SystemTime.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            epoch_ms: duration.as_millis() as i64,
        }
    }

    fn civil(&self) -> (i32, u32, u32) {
        civil_from_days(self.epoch_ms.div_euclid(MS_PER_DAY))
    }

    // Weekday index, 0 = Sunday .. 6 = Saturday. Day 0 of the epoch was a
    // Thursday.
    fn weekday(&self) -> usize {
        (self.epoch_ms.div_euclid(MS_PER_DAY) + 4).rem_euclid(7) as usize
    }

    /// Day of the month, 1-31.
    pub fn date(&self) -> u32 {
        self.civil().2
    }

    /// Full weekday name. Returns `None` on Sundays: the name table is keyed
    /// 1 (Monday) through 7 (Sunday) while the weekday index runs 0 (Sunday)
    /// through 6 (Saturday), so Sunday falls outside the mapped range.
    pub fn day(&self) -> Option<&'static str> {
        WEEKDAY_NAMES[self.weekday()]
    }

    /// Full month name, e.g. "January".
    pub fn month(&self) -> &'static str {
        MONTH_NAMES[self.month_index() as usize]
    }

    /// 0-based month index, 0 = January.
    pub fn month_index(&self) -> u32 {
        self.civil().1 - 1
    }

    /// Numeric year.
    pub fn year(&self) -> i32 {
        self.civil().0
    }

    /// The year string from character index 2 on, e.g. "22" for 2022. Only
    /// meaningful for four-digit years.
    pub fn yr(&self) -> String {
        let year = self.year().to_string();
        year.get(2..).unwrap_or("").to_string()
    }

    /// First three letters of the month name, e.g. "Jan".
    pub fn mon(&self) -> &'static str {
        &self.month()[..3]
    }

    /// First three letters of the weekday name, e.g. "Sat". `None` on
    /// Sundays, like [`TimePoint::day`].
    pub fn dy(&self) -> Option<&'static str> {
        self.day().map(|name| &name[..3])
    }

    /// Hour of the day, 0-23.
    pub fn hours(&self) -> u32 {
        (self.epoch_ms.rem_euclid(MS_PER_DAY) / MS_PER_HOUR) as u32
    }

    /// Minute of the hour, 0-59.
    pub fn mins(&self) -> u32 {
        (self.epoch_ms.rem_euclid(MS_PER_HOUR) / MS_PER_MINUTE) as u32
    }

    /// Second of the minute, 0-59.
    pub fn secs(&self) -> u32 {
        (self.epoch_ms.rem_euclid(MS_PER_MINUTE) / MS_PER_SECOND) as u32
    }

    /// The date as `"{day}/{month}/{year}"`, e.g. "1/January/2022".
    pub fn full_date(&self) -> String {
        format!("{}/{}/{}", self.date(), self.month(), self.year())
    }

    /// Signed milliseconds since the Unix epoch.
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Signed difference in milliseconds (self - other).
    pub fn diff_ms(&self, other: &TimePoint) -> i64 {
        self.epoch_ms - other.epoch_ms
    }

    /// Renders `pattern`, substituting each recognized token character with
    /// the corresponding field value and passing everything else through
    /// verbatim. A literal occurrence of a token letter in surrounding text
    /// is substituted too; there is no escape syntax.
    ///
    /// Tokens: `Y` full year, `y` short year, `M` full month name, `m`
    /// abbreviated month, `D` zero-padded day, `d` and `#` day of month,
    /// `L` full weekday name, `l` abbreviated weekday, `H`/`h` hour,
    /// `I`/`i` minute, `S`/`s` second (uppercase variants zero-padded).
    ///
    /// `L` and `l` emit nothing on Sundays (see [`TimePoint::day`]).
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        for ch in pattern.chars() {
            match ch {
                'Y' => out.push_str(&self.year().to_string()),
                'y' => out.push_str(&self.yr()),
                'M' => out.push_str(self.month()),
                'm' => out.push_str(self.mon()),
                'D' => out.push_str(&pad_zero(self.date())),
                'd' | '#' => out.push_str(&self.date().to_string()),
                'L' => out.push_str(self.day().unwrap_or_default()),
                'l' => out.push_str(self.dy().unwrap_or_default()),
                'H' => out.push_str(&pad_zero(self.hours())),
                'h' => out.push_str(&self.hours().to_string()),
                'I' => out.push_str(&pad_zero(self.mins())),
                'i' => out.push_str(&self.mins().to_string()),
                'S' => out.push_str(&pad_zero(self.secs())),
                's' => out.push_str(&self.secs().to_string()),
                _ => out.push(ch),
            }
        }
        out
    }

    /// Returns a human-readable phrase for this instant relative to
    /// `reference`, e.g. "2 days ago", "1 month from now", "Just now".
    ///
    /// The largest unit the absolute difference reaches claims the whole
    /// difference, with a rounded count: 400 days reads as "1 year" and 36
    /// hours as "2 days". Differences under one second, in either direction,
    /// are "Just now".
    pub fn when(&self, reference: &TimePoint) -> String {
        let diff = self.diff_ms(reference);
        let direction = if diff > 0 { "from now" } else { "ago" };
        let abs_diff = diff.unsigned_abs();
        for (unit, unit_ms) in UNITS {
            let unit_ms = unit_ms as u64;
            if abs_diff >= unit_ms {
                let count = (abs_diff as f64 / unit_ms as f64).round() as u64;
                let plural = if count == 1 { "" } else { "s" };
                return format!("{count} {unit}{plural} {direction}");
            }
        }
        "Just now".to_string()
    }

    /// Relative-time phrase against the current instant. Convenience wrapper
    /// around `when`.
    pub fn when_now(&self) -> String {
        self.when(&TimePoint::now())
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_date())
    }
}
