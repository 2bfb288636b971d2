//! United States AQI (EPA)
//!
//! Breakpoints and data handling follow the EPA technical assistance
//! document for reporting the daily AQI:
//! <https://document.airnow.gov/technical-assistance-document-for-the-reporting-of-daily-air-quailty.pdf>
//!
//! The EPA method works on truncated concentrations in US reporting units:
//! ozone and carbon monoxide in ppm, sulfur dioxide and nitrogen dioxide in
//! ppb, particulates in µg/m³. Truncation is toward zero, to the decimal
//! precision each pollutant is published at.

use crate::formula::{
    Breakpoint, MOLAR_MASS_CO, MOLAR_MASS_NO2, MOLAR_MASS_O3, MOLAR_MASS_SO2, bp, piecewise,
    truncate, ug_per_m3_to_ppb, ug_per_m3_to_ppm,
};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the EPA tables represent; saturation reports 501
pub const MAX_INDEX: u16 = 500;

/// Category labels, least to most severe
pub const LABELS: [&str; 6] = [
    "Good",
    "Moderate",
    "Unhealthy for Sensitive Groups",
    "Unhealthy",
    "Very Unhealthy",
    "Hazardous",
];

const UPPER_BOUNDS: [u16; 5] = [50, 100, 150, 200, 300];

const O3_8H: [Breakpoint; 5] = [
    bp(0.0, 0.054, 0, 50),
    bp(0.055, 0.070, 51, 100),
    bp(0.071, 0.085, 101, 150),
    bp(0.086, 0.105, 151, 200),
    bp(0.106, 0.200, 201, 300),
];

// The 8-hour ozone index is undefined above 0.200 ppm.
const O3_8H_CEILING_PPM: f64 = 0.200;

const O3_1H: [Breakpoint; 5] = [
    bp(0.125, 0.164, 101, 150),
    bp(0.165, 0.204, 151, 200),
    bp(0.205, 0.404, 201, 300),
    bp(0.405, 0.504, 301, 400),
    bp(0.505, 0.604, 401, 500),
];

const PM2_5_24H: [Breakpoint; 7] = [
    bp(0.0, 12.0, 0, 50),
    bp(12.1, 35.4, 51, 100),
    bp(35.5, 55.4, 101, 150),
    bp(55.5, 150.4, 151, 200),
    bp(150.5, 250.4, 201, 300),
    bp(250.5, 350.4, 301, 400),
    bp(350.5, 500.4, 401, 500),
];

const PM10_24H: [Breakpoint; 7] = [
    bp(0.0, 54.0, 0, 50),
    bp(55.0, 154.0, 51, 100),
    bp(155.0, 254.0, 101, 150),
    bp(255.0, 354.0, 151, 200),
    bp(355.0, 424.0, 201, 300),
    bp(425.0, 504.0, 301, 400),
    bp(505.0, 604.0, 401, 500),
];

const CO_8H: [Breakpoint; 7] = [
    bp(0.0, 4.4, 0, 50),
    bp(4.5, 9.4, 51, 100),
    bp(9.5, 12.4, 101, 150),
    bp(12.5, 15.4, 151, 200),
    bp(15.5, 30.4, 201, 300),
    bp(30.5, 40.4, 301, 400),
    bp(40.5, 50.4, 401, 500),
];

const SO2_1H: [Breakpoint; 4] = [
    bp(0.0, 35.0, 0, 50),
    bp(36.0, 75.0, 51, 100),
    bp(76.0, 185.0, 101, 150),
    bp(186.0, 304.0, 151, 200),
];

// 1-hour sulfur dioxide bands stop at 304 ppb; higher index values are
// defined on the 24-hour mean.
const SO2_1H_CEILING_PPB: f64 = 304.0;

const SO2_24H: [Breakpoint; 3] = [
    bp(305.0, 604.0, 201, 300),
    bp(605.0, 804.0, 301, 400),
    bp(805.0, 1004.0, 401, 500),
];

const NO2_1H: [Breakpoint; 7] = [
    bp(0.0, 53.0, 0, 50),
    bp(54.0, 100.0, 51, 100),
    bp(101.0, 360.0, 101, 150),
    bp(361.0, 649.0, 151, 200),
    bp(650.0, 1249.0, 201, 300),
    bp(1250.0, 1649.0, 301, 400),
    bp(1650.0, 2049.0, 401, 500),
];

/// Compute the United States AQI: the worst pollutant sub-index, or
/// `MAX_INDEX + 1` when a concentration saturates its table.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let o3 = ozone_sub_index(histories);
    let so2 = sulfur_dioxide_sub_index(histories);
    let pm2_5 = piecewise(
        &PM2_5_24H,
        truncate(trailing_mean(&histories.pm2_5, 24), 1),
    );
    let pm10 = piecewise(&PM10_24H, truncate(trailing_mean(&histories.pm10, 24), 0));
    let co = piecewise(
        &CO_8H,
        truncate(ug_per_m3_to_ppm(trailing_mean(&histories.co, 8), MOLAR_MASS_CO), 1),
    );
    let no2 = piecewise(
        &NO2_1H,
        truncate(
            ug_per_m3_to_ppb(trailing_mean(&histories.no2, 1), MOLAR_MASS_NO2),
            0,
        ),
    );

    [o3, so2, pm2_5, pm10, co, no2]
        .into_iter()
        .fold(0, |worst, sub| worst.max(sub.unwrap_or(MAX_INDEX + 1)))
}

/// Ozone normally uses the 8-hour mean. The originating standard defines
/// no 8-hour index above 0.200 ppm; past that point the sub-index comes
/// from the 1-hour mean and its own table.
fn ozone_sub_index(histories: &PollutantHistories) -> Option<u16> {
    let eight_hour = truncate(
        ug_per_m3_to_ppm(trailing_mean(&histories.o3, 8), MOLAR_MASS_O3),
        3,
    );
    if eight_hour > O3_8H_CEILING_PPM {
        let one_hour = truncate(
            ug_per_m3_to_ppm(trailing_mean(&histories.o3, 1), MOLAR_MASS_O3),
            3,
        );
        piecewise(&O3_1H, one_hour)
    } else {
        piecewise(&O3_8H, eight_hour)
    }
}

/// Sulfur dioxide uses the 1-hour mean up to 304 ppb. Past that the index
/// comes from the 24-hour mean against the upper bands, floored at 200
/// while the daily mean is still below them.
fn sulfur_dioxide_sub_index(histories: &PollutantHistories) -> Option<u16> {
    let one_hour = truncate(
        ug_per_m3_to_ppb(trailing_mean(&histories.so2, 1), MOLAR_MASS_SO2),
        0,
    );
    if one_hour <= SO2_1H_CEILING_PPB {
        return piecewise(&SO2_1H, one_hour);
    }

    let daily = truncate(
        ug_per_m3_to_ppb(trailing_mean(&histories.so2, 24), MOLAR_MASS_SO2),
        0,
    );
    if daily <= SO2_1H_CEILING_PPB {
        Some(200)
    } else {
        piecewise(&SO2_24H, daily)
    }
}

/// Category label for an index value; anything above 300 is "Hazardous".
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

    fn with_pm2_5(level: f64) -> PollutantHistories {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [level; HOURS];
        histories
    }

    // Boundary semantics of the 24-hour PM2.5 table: 12.0 closes the
    // "Good" segment, 12.1 opens "Moderate".
    #[rstest]
    #[case(0.0, 0)]
    #[case(12.0, 50)]
    #[case(12.1, 51)]
    #[case(35.4, 100)]
    #[case(35.5, 101)]
    #[case(55.5, 151)]
    #[case(150.4, 200)]
    fn pm2_5_boundaries(#[case] level: f64, #[case] expected: u16) {
        assert_eq!(index(&with_pm2_5(level)), expected);
    }

    #[test]
    fn pm2_5_saturates_past_the_last_segment() {
        assert_eq!(index(&with_pm2_5(600.0)), MAX_INDEX + 1);
    }

    #[test]
    fn pm10_is_truncated_to_integer() {
        let mut histories = PollutantHistories::default();
        histories.pm10 = [154.9; HOURS];
        // 154.9 truncates to 154, the top of the "Moderate" segment.
        assert_eq!(index(&histories), 100);

        histories.pm10 = [155.0; HOURS];
        assert_eq!(index(&histories), 101);
    }

    #[test]
    fn co_converts_to_ppm_and_truncates() {
        let mut histories = PollutantHistories::default();
        // 5040 µg/m³ is 4.39944 ppm, truncated to 4.3 ppm.
        histories.co = [5040.0; HOURS];
        assert_eq!(index(&histories), 49);
    }

    #[test]
    fn ozone_falls_back_to_one_hour_above_the_eight_hour_ceiling() {
        let mut histories = PollutantHistories::default();
        // 900 µg/m³ is 0.458 ppm, past the 8-hour table.
        histories.o3 = [900.0; HOURS];
        assert_eq!(index(&histories), 354);
    }

    #[test]
    fn ozone_uses_eight_hour_table_below_the_ceiling() {
        let mut histories = PollutantHistories::default();
        // 120 µg/m³ is 0.061 ppm over every window.
        histories.o3 = [120.0; HOURS];
        assert_eq!(index(&histories), 71);
    }

    #[test]
    fn sulfur_dioxide_switches_to_the_daily_mean_when_high() {
        let mut histories = PollutantHistories::default();
        // 1000 µg/m³ is 381 ppb truncated, past the 1-hour bands for both
        // the hourly and the daily mean.
        histories.so2 = [1000.0; HOURS];
        assert_eq!(index(&histories), 226);

        // High last hour only: the daily mean stays below the upper bands
        // and the sub-index is pinned at 200.
        let mut spike = PollutantHistories::default();
        spike.so2[HOURS - 1] = 1000.0;
        assert_eq!(index(&spike), 200);
    }

    #[rstest]
    #[case(0, "Good")]
    #[case(50, "Good")]
    #[case(52, "Moderate")]
    #[case(101, "Unhealthy for Sensitive Groups")]
    #[case(151, "Unhealthy")]
    #[case(201, "Very Unhealthy")]
    #[case(301, "Hazardous")]
    #[case(501, "Hazardous")]
    fn descriptor_cases(#[case] value: u16, #[case] expected: &str) {
        assert_eq!(descriptor(value), expected);
    }

    #[test]
    fn all_zero_histories_score_zero() {
        assert_eq!(index(&PollutantHistories::default()), 0);
    }
}
