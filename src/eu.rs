//! European Union CAQI (CITEAIR)
//!
//! Common Air Quality Index on the hourly background grid, index points
//! 0, 25, 50, 75, 100, everything in µg/m³. Values past the grid are the
//! ">100" condition the method itself defines, reported here as 101.

use crate::formula::{Breakpoint, bp, piecewise};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the CAQI grid represents; the ">100" condition reports 101
pub const MAX_INDEX: u16 = 100;

/// Category labels, least to most severe
pub const LABELS: [&str; 5] = ["Very Low", "Low", "Medium", "High", "Very High"];

const UPPER_BOUNDS: [u16; 4] = [25, 50, 75, 100];

const NO2_1H: [Breakpoint; 4] = [
    bp(0.0, 50.0, 0, 25),
    bp(50.0, 100.0, 25, 50),
    bp(100.0, 200.0, 50, 75),
    bp(200.0, 400.0, 75, 100),
];

const O3_1H: [Breakpoint; 4] = [
    bp(0.0, 60.0, 0, 25),
    bp(60.0, 120.0, 25, 50),
    bp(120.0, 180.0, 50, 75),
    bp(180.0, 240.0, 75, 100),
];

const SO2_1H: [Breakpoint; 4] = [
    bp(0.0, 50.0, 0, 25),
    bp(50.0, 100.0, 25, 50),
    bp(100.0, 350.0, 50, 75),
    bp(350.0, 500.0, 75, 100),
];

const PM10_1H: [Breakpoint; 4] = [
    bp(0.0, 25.0, 0, 25),
    bp(25.0, 50.0, 25, 50),
    bp(50.0, 90.0, 50, 75),
    bp(90.0, 180.0, 75, 100),
];

const PM2_5_1H: [Breakpoint; 4] = [
    bp(0.0, 15.0, 0, 25),
    bp(15.0, 30.0, 25, 50),
    bp(30.0, 55.0, 50, 75),
    bp(55.0, 110.0, 75, 100),
];

const CO_8H: [Breakpoint; 4] = [
    bp(0.0, 5_000.0, 0, 25),
    bp(5_000.0, 7_500.0, 25, 50),
    bp(7_500.0, 10_000.0, 50, 75),
    bp(10_000.0, 20_000.0, 75, 100),
];

/// Compute the EU CAQI: the worst pollutant sub-index, or `MAX_INDEX + 1`
/// when a concentration exceeds the grid.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let no2 = piecewise(&NO2_1H, trailing_mean(&histories.no2, 1));
    let o3 = piecewise(&O3_1H, trailing_mean(&histories.o3, 1));
    let so2 = piecewise(&SO2_1H, trailing_mean(&histories.so2, 1));
    let pm10 = piecewise(&PM10_1H, trailing_mean(&histories.pm10, 1));
    let pm2_5 = piecewise(&PM2_5_1H, trailing_mean(&histories.pm2_5, 1));
    let co = piecewise(&CO_8H, trailing_mean(&histories.co, 8));

    [no2, o3, so2, pm10, pm2_5, co]
        .into_iter()
        .fold(0, |worst, sub| worst.max(sub.unwrap_or(MAX_INDEX + 1)))
}

/// Category label for an index value; past the grid is "Very High".
#[must_use]
pub fn descriptor(value: u16) -> &'static str {
    for (category, bound) in UPPER_BOUNDS.iter().enumerate() {
        if value <= *bound {
            return LABELS[category];
        }
    }
    LABELS[LABELS.len() - 1]
}
