//! South Korea CAI (Air Korea)
//!
//! Comprehensive Air-quality Index on the four-band grid 0-50, 51-100,
//! 101-250, 251-500. Gas tables are published in ppm; input µg/m³ is
//! converted before lookup. Particulates stay in µg/m³.

use crate::formula::{
    Breakpoint, MOLAR_MASS_CO, MOLAR_MASS_NO2, MOLAR_MASS_O3, MOLAR_MASS_SO2, bp, piecewise,
    ug_per_m3_to_ppm,
};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the CAI tables represent; saturation reports 501
pub const MAX_INDEX: u16 = 500;

/// Category labels, least to most severe
pub const LABELS: [&str; 4] = ["Good", "Moderate", "Unhealthy", "Very Unhealthy"];

const UPPER_BOUNDS: [u16; 3] = [50, 100, 250];

// ppm
const SO2_1H: [Breakpoint; 4] = [
    bp(0.0, 0.02, 0, 50),
    bp(0.021, 0.05, 51, 100),
    bp(0.051, 0.15, 101, 250),
    bp(0.151, 1.0, 251, 500),
];

// ppm
const CO_1H: [Breakpoint; 4] = [
    bp(0.0, 2.0, 0, 50),
    bp(2.01, 9.0, 51, 100),
    bp(9.01, 15.0, 101, 250),
    bp(15.01, 50.0, 251, 500),
];

// ppm
const O3_1H: [Breakpoint; 4] = [
    bp(0.0, 0.030, 0, 50),
    bp(0.031, 0.090, 51, 100),
    bp(0.091, 0.150, 101, 250),
    bp(0.151, 0.6, 251, 500),
];

// ppm
const NO2_1H: [Breakpoint; 4] = [
    bp(0.0, 0.030, 0, 50),
    bp(0.031, 0.060, 51, 100),
    bp(0.061, 0.20, 101, 250),
    bp(0.201, 2.0, 251, 500),
];

const PM10_24H: [Breakpoint; 4] = [
    bp(0.0, 30.0, 0, 50),
    bp(31.0, 80.0, 51, 100),
    bp(81.0, 150.0, 101, 250),
    bp(151.0, 600.0, 251, 500),
];

const PM2_5_24H: [Breakpoint; 4] = [
    bp(0.0, 15.0, 0, 50),
    bp(16.0, 35.0, 51, 100),
    bp(36.0, 75.0, 101, 250),
    bp(76.0, 500.0, 251, 500),
];

/// Compute the South Korea CAI: the worst pollutant sub-index, or
/// `MAX_INDEX + 1` when a concentration saturates its table.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let so2 = piecewise(
        &SO2_1H,
        ug_per_m3_to_ppm(trailing_mean(&histories.so2, 1), MOLAR_MASS_SO2),
    );
    let co = piecewise(
        &CO_1H,
        ug_per_m3_to_ppm(trailing_mean(&histories.co, 1), MOLAR_MASS_CO),
    );
    let o3 = piecewise(
        &O3_1H,
        ug_per_m3_to_ppm(trailing_mean(&histories.o3, 1), MOLAR_MASS_O3),
    );
    let no2 = piecewise(
        &NO2_1H,
        ug_per_m3_to_ppm(trailing_mean(&histories.no2, 1), MOLAR_MASS_NO2),
    );
    let pm10 = piecewise(&PM10_24H, trailing_mean(&histories.pm10, 24));
    let pm2_5 = piecewise(&PM2_5_24H, trailing_mean(&histories.pm2_5, 24));

    [so2, co, o3, no2, pm10, pm2_5]
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
