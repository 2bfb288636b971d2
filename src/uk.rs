//! United Kingdom DAQI (DEFRA)
//!
//! Daily Air Quality Index, a ten-band lookup with no interpolation: each
//! pollutant's concentration range maps straight onto an index 1 to 10,
//! and the top band is open-ended, so the scale never saturates.

use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the DAQI defines; the top band is open so values never
/// exceed it
pub const MAX_INDEX: u16 = 10;

/// Category labels, least to most severe
pub const LABELS: [&str; 4] = ["Low", "Moderate", "High", "Very High"];

const UPPER_BOUNDS: [u16; 3] = [3, 6, 9];

// (band ceiling in µg/m³, index); concentrations above the last ceiling
// fall into band 10.
type Band = (f64, u16);

const O3_8H: [Band; 9] = [
    (33.0, 1),
    (66.0, 2),
    (100.0, 3),
    (120.0, 4),
    (140.0, 5),
    (160.0, 6),
    (187.0, 7),
    (213.0, 8),
    (240.0, 9),
];

const NO2_1H: [Band; 9] = [
    (67.0, 1),
    (134.0, 2),
    (200.0, 3),
    (267.0, 4),
    (334.0, 5),
    (400.0, 6),
    (467.0, 7),
    (534.0, 8),
    (600.0, 9),
];

const SO2_15MIN: [Band; 9] = [
    (88.0, 1),
    (177.0, 2),
    (266.0, 3),
    (354.0, 4),
    (443.0, 5),
    (532.0, 6),
    (710.0, 7),
    (887.0, 8),
    (1064.0, 9),
];

const PM10_24H: [Band; 9] = [
    (16.0, 1),
    (33.0, 2),
    (50.0, 3),
    (58.0, 4),
    (66.0, 5),
    (75.0, 6),
    (83.0, 7),
    (91.0, 8),
    (100.0, 9),
];

const PM2_5_24H: [Band; 9] = [
    (11.0, 1),
    (23.0, 2),
    (35.0, 3),
    (41.0, 4),
    (47.0, 5),
    (53.0, 6),
    (58.0, 7),
    (64.0, 8),
    (70.0, 9),
];

/// Compute the UK DAQI: the worst pollutant band, always in 1..=10.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let o3 = band(&O3_8H, trailing_mean(&histories.o3, 8));
    let no2 = band(&NO2_1H, trailing_mean(&histories.no2, 1));
    // The standard bands sulfur dioxide on a 15-minute mean; hourly data
    // is the finest the samples carry, so the 1-hour mean stands in.
    // Known approximation, kept deliberately.
    let so2 = band(&SO2_15MIN, trailing_mean(&histories.so2, 1));
    let pm10 = band(&PM10_24H, trailing_mean(&histories.pm10, 24));
    let pm2_5 = band(&PM2_5_24H, trailing_mean(&histories.pm2_5, 24));

    [o3, no2, so2, pm10, pm2_5].into_iter().fold(0, u16::max)
}

fn band(bands: &[Band], c: f64) -> u16 {
    for (ceiling, index) in bands {
        if c <= *ceiling {
            return *index;
        }
    }
    MAX_INDEX
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
    #[case(0.0, 1)]
    #[case(11.0, 1)]
    #[case(11.5, 2)]
    #[case(35.0, 3)]
    #[case(36.0, 4)]
    #[case(70.0, 9)]
    #[case(71.0, 10)] // open top band, no saturation
    #[case(500.0, 10)]
    fn pm2_5_bands(#[case] level: f64, #[case] expected: u16) {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [level; HOURS];
        assert_eq!(index(&histories), expected);
    }

    #[test]
    fn ozone_bands_on_the_eight_hour_mean() {
        let mut histories = PollutantHistories::default();
        histories.o3 = [100.5; HOURS];
        assert_eq!(index(&histories), 4);
    }

    #[test]
    fn worst_pollutant_governs() {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [12.0; HOURS]; // band 2
        histories.no2 = [350.0; HOURS]; // band 6
        assert_eq!(index(&histories), 6);
    }

    #[rstest]
    #[case(1, "Low")]
    #[case(3, "Low")]
    #[case(4, "Moderate")]
    #[case(7, "High")]
    #[case(10, "Very High")]
    fn descriptor_cases(#[case] value: u16, #[case] expected: &str) {
        assert_eq!(descriptor(value), expected);
    }
}
