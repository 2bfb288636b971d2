//! India National AQI (CPCB)
//!
//! Sub-indices per the Central Pollution Control Board's national AQI,
//! the only scale here that keys on ammonia and lead. Concentrations are
//! in µg/m³ except carbon monoxide, which the standard publishes in
//! mg/m³. The published tables work on integer µg/m³ values; input is
//! truncated toward zero to match, with carbon monoxide and lead kept to
//! one decimal as published. The top bands are open-ended in the
//! standard; each is closed here at the width of the band below it so the
//! grid stays interpolable up to 500.

use crate::formula::{Breakpoint, bp, piecewise, truncate};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the CPCB tables represent; saturation reports 501
pub const MAX_INDEX: u16 = 500;

/// Category labels, least to most severe
pub const LABELS: [&str; 6] = [
    "Good",
    "Satisfactory",
    "Moderately Polluted",
    "Poor",
    "Very Poor",
    "Severe",
];

const UPPER_BOUNDS: [u16; 5] = [50, 100, 200, 300, 400];

const PM2_5_24H: [Breakpoint; 6] = [
    bp(0.0, 30.0, 0, 50),
    bp(31.0, 60.0, 51, 100),
    bp(61.0, 90.0, 101, 200),
    bp(91.0, 120.0, 201, 300),
    bp(121.0, 250.0, 301, 400),
    bp(251.0, 380.0, 401, 500),
];

const PM10_24H: [Breakpoint; 6] = [
    bp(0.0, 50.0, 0, 50),
    bp(51.0, 100.0, 51, 100),
    bp(101.0, 250.0, 101, 200),
    bp(251.0, 350.0, 201, 300),
    bp(351.0, 430.0, 301, 400),
    bp(431.0, 510.0, 401, 500),
];

const NO2_24H: [Breakpoint; 6] = [
    bp(0.0, 40.0, 0, 50),
    bp(41.0, 80.0, 51, 100),
    bp(81.0, 180.0, 101, 200),
    bp(181.0, 280.0, 201, 300),
    bp(281.0, 400.0, 301, 400),
    bp(401.0, 520.0, 401, 500),
];

const O3_8H: [Breakpoint; 6] = [
    bp(0.0, 50.0, 0, 50),
    bp(51.0, 100.0, 51, 100),
    bp(101.0, 168.0, 101, 200),
    bp(169.0, 208.0, 201, 300),
    bp(209.0, 748.0, 301, 400),
    bp(749.0, 1288.0, 401, 500),
];

// mg/m³
const CO_8H: [Breakpoint; 6] = [
    bp(0.0, 1.0, 0, 50),
    bp(1.1, 2.0, 51, 100),
    bp(2.1, 10.0, 101, 200),
    bp(10.1, 17.0, 201, 300),
    bp(17.1, 34.0, 301, 400),
    bp(34.1, 51.0, 401, 500),
];

const SO2_24H: [Breakpoint; 6] = [
    bp(0.0, 40.0, 0, 50),
    bp(41.0, 80.0, 51, 100),
    bp(81.0, 380.0, 101, 200),
    bp(381.0, 800.0, 201, 300),
    bp(801.0, 1600.0, 301, 400),
    bp(1601.0, 2400.0, 401, 500),
];

const NH3_24H: [Breakpoint; 6] = [
    bp(0.0, 200.0, 0, 50),
    bp(201.0, 400.0, 51, 100),
    bp(401.0, 800.0, 101, 200),
    bp(801.0, 1200.0, 201, 300),
    bp(1201.0, 1800.0, 301, 400),
    bp(1801.0, 2400.0, 401, 500),
];

const PB_24H: [Breakpoint; 6] = [
    bp(0.0, 0.5, 0, 50),
    bp(0.6, 1.0, 51, 100),
    bp(1.1, 2.0, 101, 200),
    bp(2.1, 3.0, 201, 300),
    bp(3.1, 3.5, 301, 400),
    bp(3.6, 4.0, 401, 500),
];

/// Compute the India AQI: the worst pollutant sub-index, or
/// `MAX_INDEX + 1` when a concentration saturates its table.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let pm2_5 = piecewise(&PM2_5_24H, truncate(trailing_mean(&histories.pm2_5, 24), 0));
    let pm10 = piecewise(&PM10_24H, truncate(trailing_mean(&histories.pm10, 24), 0));
    let no2 = piecewise(&NO2_24H, truncate(trailing_mean(&histories.no2, 24), 0));
    let o3 = piecewise(&O3_8H, truncate(trailing_mean(&histories.o3, 8), 0));
    let so2 = piecewise(&SO2_24H, truncate(trailing_mean(&histories.so2, 24), 0));
    let nh3 = piecewise(&NH3_24H, truncate(trailing_mean(&histories.nh3, 24), 0));
    // Carbon monoxide is tabulated in mg/m³ to one decimal.
    let co = piecewise(&CO_8H, truncate(trailing_mean(&histories.co, 8) / 1000.0, 1));
    let pb = piecewise(&PB_24H, truncate(trailing_mean(&histories.pb, 24), 1));

    [pm2_5, pm10, no2, o3, so2, nh3, co, pb]
        .into_iter()
        .fold(0, |worst, sub| worst.max(sub.unwrap_or(MAX_INDEX + 1)))
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
    #[case(30.0, 50)]
    #[case(30.9, 50)] // truncates to 30, still in the first band
    #[case(45.0, 75)]
    #[case(60.0, 100)]
    #[case(120.0, 300)]
    fn pm2_5_grid(#[case] level: f64, #[case] expected: u16) {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [level; HOURS];
        assert_eq!(index(&histories), expected);
    }

    #[test]
    fn ammonia_has_a_sub_index() {
        let mut histories = PollutantHistories::default();
        histories.nh3 = [250.0; HOURS];
        assert_eq!(index(&histories), 63);
    }

    #[test]
    fn lead_keeps_one_decimal() {
        let mut histories = PollutantHistories::default();
        histories.pb = [1.5; HOURS];
        assert_eq!(index(&histories), 145);
    }

    #[test]
    fn carbon_monoxide_is_tabulated_in_mg() {
        let mut histories = PollutantHistories::default();
        // 2000 µg/m³ over 8 hours is 2.0 mg/m³, the top of the second band.
        histories.co = [2000.0; HOURS];
        assert_eq!(index(&histories), 100);
    }

    #[test]
    fn pm10_saturates_past_the_extended_band() {
        let mut histories = PollutantHistories::default();
        histories.pm10 = [600.0; HOURS];
        assert_eq!(index(&histories), MAX_INDEX + 1);
    }

    #[rstest]
    #[case(0, "Good")]
    #[case(75, "Satisfactory")]
    #[case(150, "Moderately Polluted")]
    #[case(250, "Poor")]
    #[case(350, "Very Poor")]
    #[case(450, "Severe")]
    #[case(501, "Severe")]
    fn descriptor_cases(#[case] value: u16, #[case] expected: &str) {
        assert_eq!(descriptor(value), expected);
    }
}
