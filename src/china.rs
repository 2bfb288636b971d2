//! China AQI (HJ 633-2012)
//!
//! Individual air quality indices (IAQI) per pollutant on the national
//! grid 0, 50, 100, 150, 200, 300, 400, 500, hourly means for the gases
//! and daily means for particulates, everything in µg/m³. Adjacent
//! segments share their edge concentrations; ascending first-match keeps
//! a shared edge in the lower segment, where both segments agree anyway.

use crate::formula::{Breakpoint, bp, piecewise};
use crate::series::{PollutantHistories, trailing_mean};

/// Highest index the national grid represents; saturation reports 501
pub const MAX_INDEX: u16 = 500;

/// Category labels, least to most severe
pub const LABELS: [&str; 6] = [
    "Excellent",
    "Good",
    "Lightly Polluted",
    "Moderately Polluted",
    "Heavily Polluted",
    "Severely Polluted",
];

const UPPER_BOUNDS: [u16; 5] = [50, 100, 150, 200, 300];

// 1-hour sulfur dioxide bands are published up to 800 µg/m³; the segments
// past that point carry the 24-hour bands so the table stays contiguous up
// to the grid ceiling.
const SO2_1H: [Breakpoint; 7] = [
    bp(0.0, 150.0, 0, 50),
    bp(150.0, 500.0, 50, 100),
    bp(500.0, 650.0, 100, 150),
    bp(650.0, 800.0, 150, 200),
    bp(800.0, 1600.0, 200, 300),
    bp(1600.0, 2100.0, 300, 400),
    bp(2100.0, 2620.0, 400, 500),
];

const NO2_1H: [Breakpoint; 7] = [
    bp(0.0, 100.0, 0, 50),
    bp(100.0, 200.0, 50, 100),
    bp(200.0, 700.0, 100, 150),
    bp(700.0, 1200.0, 150, 200),
    bp(1200.0, 2340.0, 200, 300),
    bp(2340.0, 3090.0, 300, 400),
    bp(3090.0, 3840.0, 400, 500),
];

const CO_1H: [Breakpoint; 7] = [
    bp(0.0, 5_000.0, 0, 50),
    bp(5_000.0, 10_000.0, 50, 100),
    bp(10_000.0, 35_000.0, 100, 150),
    bp(35_000.0, 60_000.0, 150, 200),
    bp(60_000.0, 90_000.0, 200, 300),
    bp(90_000.0, 120_000.0, 300, 400),
    bp(120_000.0, 150_000.0, 400, 500),
];

const O3_1H: [Breakpoint; 7] = [
    bp(0.0, 160.0, 0, 50),
    bp(160.0, 200.0, 50, 100),
    bp(200.0, 300.0, 100, 150),
    bp(300.0, 400.0, 150, 200),
    bp(400.0, 800.0, 200, 300),
    bp(800.0, 1000.0, 300, 400),
    bp(1000.0, 1200.0, 400, 500),
];

const PM10_24H: [Breakpoint; 7] = [
    bp(0.0, 50.0, 0, 50),
    bp(50.0, 150.0, 50, 100),
    bp(150.0, 250.0, 100, 150),
    bp(250.0, 350.0, 150, 200),
    bp(350.0, 420.0, 200, 300),
    bp(420.0, 500.0, 300, 400),
    bp(500.0, 600.0, 400, 500),
];

const PM2_5_24H: [Breakpoint; 7] = [
    bp(0.0, 35.0, 0, 50),
    bp(35.0, 75.0, 50, 100),
    bp(75.0, 115.0, 100, 150),
    bp(115.0, 150.0, 150, 200),
    bp(150.0, 250.0, 200, 300),
    bp(250.0, 350.0, 300, 400),
    bp(350.0, 500.0, 400, 500),
];

/// Compute the China AQI: the worst pollutant IAQI, or `MAX_INDEX + 1`
/// when a concentration saturates its table.
#[must_use]
pub fn index(histories: &PollutantHistories) -> u16 {
    let so2 = piecewise(&SO2_1H, trailing_mean(&histories.so2, 1));
    let no2 = piecewise(&NO2_1H, trailing_mean(&histories.no2, 1));
    let co = piecewise(&CO_1H, trailing_mean(&histories.co, 1));
    let o3 = piecewise(&O3_1H, trailing_mean(&histories.o3, 1));
    let pm10 = piecewise(&PM10_24H, trailing_mean(&histories.pm10, 24));
    let pm2_5 = piecewise(&PM2_5_24H, trailing_mean(&histories.pm2_5, 24));

    [so2, no2, co, o3, pm10, pm2_5]
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
