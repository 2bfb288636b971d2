//! Pollutant sample histories and windowed averaging
//!
//! Callers maintain a rolling 24-hour history per pollutant, oldest sample
//! first, most recent hour last, all in µg/m³. A pollutant that is not
//! measured is represented by an all-zero series, never a shorter one; the
//! fixed-size array keeps the length invariant in the type system.

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};

/// Number of hourly samples in every pollutant history
pub const HOURS: usize = 24;

/// One pollutant's rolling history: index 0 is the oldest sample, index 23
/// the most recent hour, in µg/m³.
pub type PollutantSeries = [f64; HOURS];

/// Rolling 24-hour histories for the nine pollutants the scale calculators
/// draw from.
///
/// `Default` is the all-zero value, meaning "nothing measured". An all-zero
/// series averages to zero and contributes a sub-index of zero, which is
/// indistinguishable from genuinely clean air; both cases read the same to
/// the reporting standards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantHistories {
    /// Carbon monoxide
    pub co: PollutantSeries,
    /// Ammonia (keyed on by the India scale only)
    pub nh3: PollutantSeries,
    /// Nitric oxide (carried for completeness; no current scale keys on it)
    pub no: PollutantSeries,
    /// Nitrogen dioxide
    pub no2: PollutantSeries,
    /// Ozone
    pub o3: PollutantSeries,
    /// Lead (keyed on by the India scale only)
    pub pb: PollutantSeries,
    /// Sulfur dioxide
    pub so2: PollutantSeries,
    /// Particulate matter up to 10 µm
    pub pm10: PollutantSeries,
    /// Particulate matter up to 2.5 µm
    pub pm2_5: PollutantSeries,
}

/// Mean of the trailing `hours` samples of a series.
///
/// No rounding is applied at this stage; full precision is preserved for
/// the breakpoint lookup that follows.
///
/// # Panics
///
/// Panics if `hours` is 0 or greater than [`HOURS`]. The scale calculators
/// only call this with fixed window constants in range.
#[must_use]
pub fn trailing_mean(series: &PollutantSeries, hours: usize) -> f64 {
    assert!(
        (1..=HOURS).contains(&hours),
        "averaging window must be 1..=24 hours"
    );
    series[HOURS - hours..].iter().sum::<f64>() / hours as f64
}

/// Build a [`PollutantSeries`] from a runtime-sized sample buffer.
///
/// # Arguments
///
/// * `samples` - exactly 24 hourly concentrations, oldest first
///
/// # Errors
///
/// * `AqiError::InvalidLength` - the slice does not hold exactly 24 samples
pub fn series_from_slice(samples: &[f64]) -> Result<PollutantSeries> {
    if samples.len() != HOURS {
        return Err(AqiError::invalid_length(HOURS, samples.len()));
    }

    let mut series = [0.0; HOURS];
    series.copy_from_slice(samples);
    Ok(series)
}
