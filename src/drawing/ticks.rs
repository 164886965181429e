//! Tick placement and label formatting.

use crate::des::axis::ticks::{Formatter, Locator};

/// Maximum number of tick intervals for the auto locator
const AUTO_BINS: u32 = 10;

/// Canonical tick step mantissas, ascending
const AUTO_STEPS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-10 * a.abs().max(b.abs()).max(1.0)
}

/// Tick positions for the given locator over the `[start, end]` range.
/// Positions are guaranteed inside the range for computed locators;
/// explicit breaks are used as given.
pub(crate) fn locate(locator: &Locator, start: f64, end: f64) -> Vec<f64> {
    match locator {
        Locator::Auto => max_n(start, end, AUTO_BINS),
        Locator::MaxN { bins } => max_n(start, end, *bins),
        Locator::Breaks(breaks) => breaks.clone(),
    }
}

/// Round tick positions within `[start, end]`, at most `bins` intervals.
///
/// The step is the smallest value of the form `m * 10^k` with a
/// canonical mantissa `m` that yields no more than `bins` intervals
/// over the range.
fn max_n(start: f64, end: f64, bins: u32) -> Vec<f64> {
    let span = end - start;
    if !span.is_finite() || span <= 0.0 {
        return vec![start];
    }

    let target = span / bins.max(1) as f64;
    let scale = 10f64.powf(target.log10().div_euclid(1.0));
    let mut step = scale * 10.0;
    for mult in AUTO_STEPS {
        let cand = scale * mult;
        if cand >= target || is_close(cand, target) {
            step = cand;
            break;
        }
    }

    let mut low = (start / step).ceil();
    if is_close((low - 1.0) * step, start) {
        low -= 1.0;
    }
    let mut high = (end / step).floor();
    if is_close((high + 1.0) * step, end) {
        high += 1.0;
    }

    let mut ticks = Vec::new();
    let mut k = low;
    while k <= high {
        ticks.push(k * step);
        k += 1.0;
    }
    ticks
}

/// Format tick labels for the given positions
pub(crate) fn format(formatter: &Formatter, ticks: &[f64]) -> Vec<String> {
    match formatter {
        Formatter::Auto => auto_format(ticks),
        Formatter::Prec(prec) => ticks.iter().map(|v| format!("{v:.prec$}")).collect(),
        Formatter::Percent(prec) => ticks
            .iter()
            .map(|v| format!("{:.prec$}%", v * 100.0))
            .collect(),
    }
}

/// Decimal places derived from the tick step, switching to scientific
/// notation for very large or very small magnitudes
fn auto_format(ticks: &[f64]) -> Vec<String> {
    let step = match ticks {
        [] => return Vec::new(),
        [single] => single.abs().max(1.0),
        [first, second, ..] => (second - first).abs(),
    };
    let max_mag = ticks.iter().fold(0f64, |m, v| m.max(v.abs()));

    if max_mag >= 1e5 || (step > 0.0 && step < 1e-3) {
        return ticks.iter().map(|v| format!("{v:.1e}")).collect();
    }

    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    ticks.iter().map(|v| format!("{v:.decimals$}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_near;

    #[test]
    fn max_n_symmetric_range() {
        let ticks = max_n(-1.0, 1.0, 10);
        assert_eq!(ticks.len(), 11);
        assert_near!(ticks[0], -1.0);
        assert_near!(ticks[1], -0.8);
        assert_near!(ticks[10], 1.0);
    }

    #[test]
    fn max_n_stays_inside_range() {
        let ticks = max_n(0.005, 0.195, 10);
        assert_near!(ticks[0], 0.02);
        assert_near!(ticks[ticks.len() - 1], 0.18);
        for pair in ticks.windows(2) {
            assert_near!(pair[1] - pair[0], 0.02);
        }
    }

    #[test]
    fn max_n_honors_bin_count() {
        for bins in [3, 5, 10, 20] {
            let ticks = max_n(0.0, 7.3, bins);
            assert!(ticks.len() as u32 <= bins + 1, "bins={bins}: {ticks:?}");
            assert!(ticks.len() >= 2);
        }
    }

    #[test]
    fn max_n_degenerate_range() {
        assert_eq!(max_n(3.0, 3.0, 10), vec![3.0]);
    }

    #[test]
    fn locate_breaks_used_as_given() {
        let loc = Locator::Breaks(vec![0.0, 1.0, 4.0]);
        assert_eq!(locate(&loc, 0.0, 2.0), vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn auto_format_decimals_follow_step() {
        assert_eq!(auto_format(&[0.0, 0.2, 0.4]), vec!["0.0", "0.2", "0.4"]);
        assert_eq!(auto_format(&[0.02, 0.04]), vec!["0.02", "0.04"]);
        assert_eq!(auto_format(&[2000.0, 2005.0, 2010.0]), vec![
            "2000", "2005", "2010"
        ]);
    }

    #[test]
    fn auto_format_scientific_extremes() {
        assert_eq!(auto_format(&[0.0, 200000.0]), vec!["0.0e0", "2.0e5"]);
        let labels = auto_format(&[0.0001, 0.0002]);
        assert_eq!(labels[0], "1.0e-4");
    }

    #[test]
    fn explicit_formatters() {
        assert_eq!(format(&Formatter::Prec(2), &[1.5]), vec!["1.50"]);
        assert_eq!(format(&Formatter::Percent(0), &[0.25]), vec!["25%"]);
    }
}
