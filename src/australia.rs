//! Australia AQI (NEPM)
//!
//! Each pollutant's sub-index is its concentration as a percentage of the
//! National Environment Protection Measure standard, rounded. The method
//! has no upper breakpoint ceiling, so the overall value is not capped at
//! [`MAX_INDEX`]; the category bands simply end at "Hazardous".
//!
//! Gas standards are in ppm; input µg/m³ is converted before the ratio.

use crate::formula::{
    MOLAR_MASS_CO, MOLAR_MASS_NO2, MOLAR_MASS_O3, MOLAR_MASS_SO2, ratio_index, ug_per_m3_to_ppm,
};
use crate::series::{PollutantHistories, trailing_mean};

/// Start of the top category band; the open-ended method can exceed this
pub const MAX_INDEX: u16 = 200;

/// Category labels, least to most severe
pub const LABELS: [&str; 6] = [
    "Very Good",
    "Good",
    "Fair",
    "Poor",
    "Very Poor",
    "Hazardous",
];

const UPPER_BOUNDS: [u16; 5] = [33, 66, 99, 149, 199];

// NEPM ambient standards.
const CO_8H_STD_PPM: f64 = 9.0;
const NO2_1H_STD_PPM: f64 = 0.12;
const O3_1H_STD_PPM: f64 = 0.10;
const O3_4H_STD_PPM: f64 = 0.08;
const SO2_1H_STD_PPM: f64 = 0.20;
const PM10_24H_STD: f64 = 50.0;
const PM2_5_24H_STD: f64 = 25.0;

/// Compute the Australia AQI: the worst pollutant ratio index, unclamped.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let co = ratio_index(
        CO_8H_STD_PPM,
        ug_per_m3_to_ppm(trailing_mean(&histories.co, 8), MOLAR_MASS_CO),
    );
    let no2 = ratio_index(
        NO2_1H_STD_PPM,
        ug_per_m3_to_ppm(trailing_mean(&histories.no2, 1), MOLAR_MASS_NO2),
    );
    let o3_1h = ratio_index(
        O3_1H_STD_PPM,
        ug_per_m3_to_ppm(trailing_mean(&histories.o3, 1), MOLAR_MASS_O3),
    );
    let o3_4h = ratio_index(
        O3_4H_STD_PPM,
        ug_per_m3_to_ppm(trailing_mean(&histories.o3, 4), MOLAR_MASS_O3),
    );
    let so2 = ratio_index(
        SO2_1H_STD_PPM,
        ug_per_m3_to_ppm(trailing_mean(&histories.so2, 1), MOLAR_MASS_SO2),
    );
    let pm10 = ratio_index(PM10_24H_STD, trailing_mean(&histories.pm10, 24));
    let pm2_5 = ratio_index(PM2_5_24H_STD, trailing_mean(&histories.pm2_5, 24));

    [co, no2, o3_1h, o3_4h, so2, pm10, pm2_5]
        .into_iter()
        .fold(0, u16::max)
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
    #[case(12.5, 50)]
    #[case(25.0, 100)] // exactly at the standard
    #[case(60.0, 240)] // no ceiling: the ratio runs past the bands
    fn pm2_5_ratio(#[case] level: f64, #[case] expected: u16) {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [level; HOURS];
        assert_eq!(index(&histories), expected);
    }

    #[test]
    fn pm10_at_the_standard_scores_one_hundred() {
        let mut histories = PollutantHistories::default();
        histories.pm10 = [50.0; HOURS];
        assert_eq!(index(&histories), 100);
    }

    #[test]
    fn ozone_takes_the_worse_of_both_windows() {
        let mut histories = PollutantHistories::default();
        // 157 µg/m³ is 0.07997 ppm: 80% of the 1-hour standard but 100%
        // of the 4-hour standard.
        histories.o3 = [157.0; HOURS];
        assert_eq!(index(&histories), 100);
    }

    #[test]
    fn carbon_monoxide_converts_to_ppm() {
        let mut histories = PollutantHistories::default();
        histories.co = [10_000.0; HOURS];
        assert_eq!(index(&histories), 97);
    }

    #[rstest]
    #[case(0, "Very Good")]
    #[case(33, "Very Good")]
    #[case(34, "Good")]
    #[case(67, "Fair")]
    #[case(100, "Poor")]
    #[case(150, "Very Poor")]
    #[case(200, "Hazardous")]
    #[case(240, "Hazardous")]
    fn descriptor_cases(#[case] value: u16, #[case] expected: &str) {
        assert_eq!(descriptor(value), expected);
    }
}
