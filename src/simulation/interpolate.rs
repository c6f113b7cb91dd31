//! Sub-month refinement of the first floor crossing.

use chrono::NaiveDate;

use crate::time::add_fractional_months;

/// Where the effective balance first reaches the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runout {
    /// Fractional months from today.
    pub month: f64,
    pub date: NaiveDate,
}

/// Linearly interpolates the crossing inside `month`, given the effective balance at the
/// start of the month and that month's net burn.
///
/// A zero net burn cannot interpolate anything; the denominator falls back to 1 so the
/// fraction is driven by the opening balance alone.
pub fn locate(today: NaiveDate, month: u32, previous_effective: f64, net_burn: f64) -> Runout {
    let denominator = if net_burn == 0.0 { 1.0 } else { net_burn };
    let fraction = (previous_effective / denominator).clamp(0.0, 1.0);
    let fraction = if fraction.is_nan() { 0.0 } else { fraction };
    let runout_month = month.saturating_sub(1) as f64 + fraction;
    Runout {
        month: runout_month,
        date: add_fractional_months(today, runout_month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_crossing_lands_on_month_boundary() {
        let runout = locate(date(2025, 1, 1), 6, 200.0, 200.0);
        assert_eq!(runout.month, 6.0);
        assert_eq!(runout.date, date(2025, 7, 1));
    }

    #[test]
    fn partial_month_is_interpolated() {
        let runout = locate(date(2025, 1, 1), 3, 150.0, 300.0);
        assert_eq!(runout.month, 2.5);
        // March 2025 has 31 days; half rounds up to 16.
        assert_eq!(runout.date, date(2025, 3, 17));
    }

    #[test]
    fn fraction_is_clamped() {
        let below = locate(date(2025, 1, 1), 1, -50.0, 100.0);
        assert_eq!(below.month, 0.0);
        assert_eq!(below.date, date(2025, 1, 1));
        let above = locate(date(2025, 1, 1), 2, 500.0, 100.0);
        assert_eq!(above.month, 2.0);
    }

    #[test]
    fn zero_net_burn_uses_unit_denominator() {
        let runout = locate(date(2025, 1, 1), 4, 0.0, 0.0);
        assert_eq!(runout.month, 3.0);
    }
}
