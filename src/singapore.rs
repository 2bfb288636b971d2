//! Singapore PSI (NEA)
//!
//! Pollutant Standards Index per the National Environment Agency's
//! computation tables, in µg/m³ with carbon monoxide tabulated in mg/m³.
//! Nitrogen dioxide carries no PSI sub-index below 1130 µg/m³; it only
//! starts to govern at very high concentrations.

use crate::formula::{Breakpoint, bp, piecewise};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the PSI tables represent; saturation reports 501
pub const MAX_INDEX: u16 = 500;

/// Category labels, least to most severe
pub const LABELS: [&str; 5] = [
    "Good",
    "Moderate",
    "Unhealthy",
    "Very Unhealthy",
    "Hazardous",
];

const UPPER_BOUNDS: [u16; 4] = [50, 100, 200, 300];

const PM2_5_24H: [Breakpoint; 6] = [
    bp(0.0, 12.0, 0, 50),
    bp(13.0, 55.0, 51, 100),
    bp(56.0, 150.0, 101, 200),
    bp(151.0, 250.0, 201, 300),
    bp(251.0, 350.0, 301, 400),
    bp(351.0, 500.0, 401, 500),
];

const PM10_24H: [Breakpoint; 6] = [
    bp(0.0, 50.0, 0, 50),
    bp(51.0, 150.0, 51, 100),
    bp(151.0, 350.0, 101, 200),
    bp(351.0, 420.0, 201, 300),
    bp(421.0, 500.0, 301, 400),
    bp(501.0, 600.0, 401, 500),
];

const SO2_24H: [Breakpoint; 6] = [
    bp(0.0, 80.0, 0, 50),
    bp(81.0, 365.0, 51, 100),
    bp(366.0, 800.0, 101, 200),
    bp(801.0, 1600.0, 201, 300),
    bp(1601.0, 2100.0, 301, 400),
    bp(2101.0, 2620.0, 401, 500),
];

const O3_8H: [Breakpoint; 6] = [
    bp(0.0, 118.0, 0, 50),
    bp(119.0, 157.0, 51, 100),
    bp(158.0, 235.0, 101, 200),
    bp(236.0, 785.0, 201, 300),
    bp(786.0, 980.0, 301, 400),
    bp(981.0, 1180.0, 401, 500),
];

// mg/m³
const CO_8H: [Breakpoint; 6] = [
    bp(0.0, 5.0, 0, 50),
    bp(5.1, 10.0, 51, 100),
    bp(10.1, 17.0, 101, 200),
    bp(17.1, 34.0, 201, 300),
    bp(34.1, 46.0, 301, 400),
    bp(46.1, 57.5, 401, 500),
];

// No sub-index is published below 1130 µg/m³.
const NO2_1H_THRESHOLD: f64 = 1130.0;

const NO2_1H: [Breakpoint; 3] = [
    bp(1130.0, 2260.0, 201, 300),
    bp(2261.0, 3000.0, 301, 400),
    bp(3001.0, 3750.0, 401, 500),
];

/// Compute the Singapore PSI: the worst pollutant sub-index, or
/// `MAX_INDEX + 1` when a concentration saturates its table.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let pm2_5 = piecewise(&PM2_5_24H, trailing_mean(&histories.pm2_5, 24));
    let pm10 = piecewise(&PM10_24H, trailing_mean(&histories.pm10, 24));
    let so2 = piecewise(&SO2_24H, trailing_mean(&histories.so2, 24));
    let o3 = piecewise(&O3_8H, trailing_mean(&histories.o3, 8));
    let co = piecewise(&CO_8H, trailing_mean(&histories.co, 8) / 1000.0);
    let no2 = nitrogen_dioxide_sub_index(histories);

    [pm2_5, pm10, so2, o3, co, no2]
        .into_iter()
        .fold(0, |worst, sub| worst.max(sub.unwrap_or(MAX_INDEX + 1)))
}

fn nitrogen_dioxide_sub_index(histories: &PollutantHistories) -> Option<u16> {
    let one_hour = trailing_mean(&histories.no2, 1);
    if one_hour < NO2_1H_THRESHOLD {
        return Some(0);
    }
    piecewise(&NO2_1H, one_hour)
}

/// Category label for an index value
#[must_use]
pub fn descriptor(value: u16) -> &'static str {
    for (category, bound) in UPPER_BOUNDS.iter().enumerate() {
        if value <= *bound {
            return LABELS[category];
        }
    }
    LABELS[LABELS.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::HOURS;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(12.0, 50)]
    #[case(34.0, 76)] // midpoint of the second band rounds half away
    #[case(55.0, 100)]
    #[case(150.0, 200)]
    fn pm2_5_grid(#[case] level: f64, #[case] expected: u16) {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [level; HOURS];
        assert_eq!(index(&histories), expected);
    }

    #[test]
    fn nitrogen_dioxide_is_ignored_below_its_threshold() {
        let mut histories = PollutantHistories::default();
        histories.no2 = [900.0; HOURS];
        assert_eq!(index(&histories), 0);

        histories.no2 = [2260.0; HOURS];
        assert_eq!(index(&histories), 300);
    }

    #[test]
    fn carbon_monoxide_is_tabulated_in_mg() {
        let mut histories = PollutantHistories::default();
        histories.co = [10_000.0; HOURS];
        assert_eq!(index(&histories), 100);
    }

    #[test]
    fn sulfur_dioxide_saturates_past_the_last_band() {
        let mut histories = PollutantHistories::default();
        histories.so2 = [3000.0; HOURS];
        assert_eq!(index(&histories), MAX_INDEX + 1);
    }

    #[rstest]
    #[case(0, "Good")]
    #[case(51, "Moderate")]
    #[case(101, "Unhealthy")]
    #[case(201, "Very Unhealthy")]
    #[case(301, "Hazardous")]
    #[case(501, "Hazardous")]
    fn descriptor_cases(#[case] value: u16, #[case] expected: &str) {
        assert_eq!(descriptor(value), expected);
    }
}
