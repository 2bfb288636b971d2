//! Hong Kong AQHI (Environmental Protection Department)
//!
//! Air Quality Health Index built on the percentage added health risk of
//! 3-hour means, all in µg/m³. The particulate term takes whichever PM
//! fraction carries the higher added risk. Banded onto 1..=10 with 11
//! standing for the "10+" report; the floor is 1 by definition.

use crate::formula::{excess_risk, risk_band};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest banded value; "10+" reports as 11
pub const MAX_INDEX: u16 = 10;

/// Category labels, least to most severe
pub const LABELS: [&str; 5] = ["Low", "Moderate", "High", "Very High", "Serious"];

const UPPER_BOUNDS: [u16; 4] = [3, 6, 7, 10];

// Added-risk coefficients per µg/m³ of 3-hour mean.
const NO2_BETA: f64 = 0.0004462559;
const SO2_BETA: f64 = 0.0001393235;
const O3_BETA: f64 = 0.0005116328;
const PM10_BETA: f64 = 0.0002821751;
const PM2_5_BETA: f64 = 0.0002180567;

// Cut points on the percentage added risk for bands 1..=10.
const CUTS: [f64; 10] = [
    1.88, 3.76, 5.64, 7.52, 9.41, 11.29, 12.91, 15.07, 17.22, 19.37,
];

/// Compute the Hong Kong AQHI, always in 1..=11.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let no2 = excess_risk(NO2_BETA, trailing_mean(&histories.no2, 3));
    let so2 = excess_risk(SO2_BETA, trailing_mean(&histories.so2, 3));
    let o3 = excess_risk(O3_BETA, trailing_mean(&histories.o3, 3));
    let pm = f64::max(
        excess_risk(PM10_BETA, trailing_mean(&histories.pm10, 3)),
        excess_risk(PM2_5_BETA, trailing_mean(&histories.pm2_5, 3)),
    );

    let added_risk_percent = 100.0 * (no2 + so2 + o3 + pm);
    risk_band(added_risk_percent, &CUTS)
}

/// Category label for an index value; "10+" is "Serious".
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

    #[test]
    fn clean_air_floors_at_one() {
        assert_eq!(index(&PollutantHistories::default()), 1);
    }

    #[test]
    fn coarse_particulates_alone_raise_the_band() {
        let mut histories = PollutantHistories::default();
        // exp(0.2821751 * 0.5) - 1 is a 15.15% added risk.
        histories.pm10 = [500.0; HOURS];
        assert_eq!(index(&histories), 9);
    }

    #[test]
    fn particulate_term_takes_the_worse_fraction() {
        let mut histories = PollutantHistories::default();
        histories.pm10 = [500.0; HOURS];
        // The PM2.5 risk at the same level is lower and must not add on.
        histories.pm2_5 = [500.0; HOURS];
        assert_eq!(index(&histories), 9);
    }

    #[test]
    fn sulfur_dioxide_contributes() {
        let mut histories = PollutantHistories::default();
        // 14.95% added risk, just under the band 8 ceiling.
        histories.so2 = [1000.0; HOURS];
        assert_eq!(index(&histories), 8);
    }

    #[test]
    fn combined_risks_report_ten_plus() {
        let mut histories = PollutantHistories::default();
        histories.no2 = [300.0; HOURS];
        histories.o3 = [300.0; HOURS];
        histories.pm2_5 = [300.0; HOURS];
        assert_eq!(index(&histories), MAX_INDEX + 1);
    }

    #[rstest]
    #[case(1, "Low")]
    #[case(3, "Low")]
    #[case(4, "Moderate")]
    #[case(7, "High")]
    #[case(8, "Very High")]
    #[case(10, "Very High")]
    #[case(11, "Serious")]
    fn descriptor_cases(#[case] value: u16, #[case] expected: &str) {
        assert_eq!(descriptor(value), expected);
    }
}
