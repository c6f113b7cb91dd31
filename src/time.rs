//! Calendar arithmetic shared by the engine, plus the clock abstraction used at the edges.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

/// Clock abstracts access to the current timestamp so callers stay deterministic in tests.
///
/// The simulation engine never consults a clock; only outer surfaces (the CLI) use one to
/// pick a default "today".
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.0.and_time(NaiveTime::default()), Utc)
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Moves `date` by whole calendar months, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

/// Whole months elapsed from `from` to `to`, truncated toward zero.
///
/// A month counts once `shift_month(from, k)` has been reached, so month-end anchors
/// (Jan 31 -> Feb 28) advance exactly like the simulated calendar does.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && shift_month(from, months) > to {
        months -= 1;
    } else if months < 0 && shift_month(from, months) < to {
        months += 1;
    }
    months
}

/// Adds a (possibly fractional) number of weeks, rounded to whole days.
///
/// Offsets past the representable calendar saturate to `NaiveDate::MAX` / `MIN`.
pub fn add_weeks(date: NaiveDate, weeks: f64) -> NaiveDate {
    let days = (weeks * 7.0).round();
    if days.is_nan() {
        return date;
    }
    let saturated = if days < 0.0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    };
    Duration::try_days(days as i64)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(saturated)
}

/// Adds a fractional month count, resolving the remainder against the real length of
/// the month it falls in rather than a fixed 30-day month.
pub fn add_fractional_months(date: NaiveDate, months: f64) -> NaiveDate {
    if !months.is_finite() || months <= 0.0 {
        return date;
    }
    let whole = months.floor();
    let fraction = months - whole;
    let base = shift_month(date, whole as i32);
    if fraction <= f64::EPSILON {
        return base;
    }
    let next = shift_month(date, whole as i32 + 1);
    let span = (next - base).num_days() as f64;
    let offset = (fraction * span).round() as i64;
    base.checked_add_signed(Duration::days(offset))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_month_clamps_to_month_end() {
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2025, 3, 15), -3), date(2024, 12, 15));
    }

    #[test]
    fn months_between_counts_whole_months() {
        let from = date(2025, 1, 15);
        assert_eq!(months_between(from, date(2025, 1, 20)), 0);
        assert_eq!(months_between(from, date(2025, 2, 14)), 0);
        assert_eq!(months_between(from, date(2025, 2, 15)), 1);
        assert_eq!(months_between(from, date(2026, 1, 15)), 12);
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 2, 28)), 1);
        assert_eq!(months_between(from, date(2024, 12, 20)), 0);
        assert_eq!(months_between(from, date(2024, 12, 15)), -1);
    }

    #[test]
    fn fractional_months_use_calendar_length() {
        let start = date(2025, 1, 1);
        assert_eq!(add_fractional_months(start, 6.0), date(2025, 7, 1));
        // February 2025 has 28 days; half of it is 14.
        assert_eq!(add_fractional_months(start, 1.5), date(2025, 2, 15));
        // July has 31 days; half rounds to 16.
        assert_eq!(add_fractional_months(start, 6.5), date(2025, 7, 17));
        assert_eq!(add_fractional_months(start, 0.0), start);
    }

    #[test]
    fn add_weeks_rounds_to_days() {
        assert_eq!(add_weeks(date(2025, 1, 1), 2.0), date(2025, 1, 15));
        assert_eq!(add_weeks(date(2025, 1, 1), -1.0), date(2024, 12, 25));
    }

    #[test]
    fn add_weeks_saturates_far_offsets() {
        assert_eq!(add_weeks(date(2025, 1, 1), 1e15), NaiveDate::MAX);
        assert_eq!(add_weeks(date(2025, 1, 1), -1e15), NaiveDate::MIN);
        assert_eq!(add_weeks(date(2025, 1, 1), 1e9), NaiveDate::MAX);
        assert_eq!(add_weeks(date(2025, 1, 1), f64::NAN), date(2025, 1, 1));
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock(date(2025, 4, 1));
        assert_eq!(clock.today(), date(2025, 4, 1));
        assert_eq!(clock.now().date_naive(), date(2025, 4, 1));
    }
}
