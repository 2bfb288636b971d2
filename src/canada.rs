//! Canada AQHI (Environment and Climate Change Canada)
//!
//! Air Quality Health Index: an additive exponential excess-risk formula
//! over 3-hour means of nitrogen dioxide and ozone (ppb) and fine
//! particulate matter (µg/m³), banded onto 1..=10 with 11 standing for
//! the "10+" report. The floor is 1 by definition, never 0.

use crate::formula::{
    MOLAR_MASS_NO2, MOLAR_MASS_O3, excess_risk, risk_band, ug_per_m3_to_ppb,
};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest banded value; "10+" reports as 11
pub const MAX_INDEX: u16 = 10;

/// Category labels, least to most severe
pub const LABELS: [&str; 4] = ["Low", "Moderate", "High", "Very High"];

const UPPER_BOUNDS: [u16; 3] = [3, 6, 10];

// Scaling constant and per-pollutant risk coefficients of the published
// formula: (10 / 10.4) * 100 * sum of (exp(k * c) - 1).
const AMPLITUDE: f64 = 1000.0 / 10.4;
const NO2_COEFFICIENT: f64 = 0.000871;
const O3_COEFFICIENT: f64 = 0.000537;
const PM2_5_COEFFICIENT: f64 = 0.000487;

// Band cut points reproducing nearest-integer reporting.
const CUTS: [f64; 10] = [1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 9.5, 10.5];

/// Compute the Canada AQHI, always in 1..=11.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let no2 = ug_per_m3_to_ppb(trailing_mean(&histories.no2, 3), MOLAR_MASS_NO2);
    let o3 = ug_per_m3_to_ppb(trailing_mean(&histories.o3, 3), MOLAR_MASS_O3);
    let pm2_5 = trailing_mean(&histories.pm2_5, 3);

    let risk = AMPLITUDE
        * (excess_risk(NO2_COEFFICIENT, no2)
            + excess_risk(O3_COEFFICIENT, o3)
            + excess_risk(PM2_5_COEFFICIENT, pm2_5));

    risk_band(risk, &CUTS)
}

/// Category label for an index value; "10+" is "Very High".
#[must_use]
pub fn descriptor(value: u16) -> &'static str {
    for (category, bound) in UPPER_BOUNDS.iter().enumerate() {
        if value <= *bound {
            return LABELS[category];
        }
    }
    LABELS[LABELS.len() - 1]
}
