//! Multi-scale Air Quality Index calculators
//!
//! This crate turns rolling 24-hour pollutant concentration histories into
//! a standardized AQI value and category label for ten national and
//! regional standards:
//! - Australia (NEPM), Canada (AQHI), China (HJ 633-2012)
//! - European Union (CAQI), Hong Kong (AQHI), India (CPCB)
//! - Singapore (PSI), South Korea (CAI), United Kingdom (DAQI)
//! - United States (EPA)
//!
//! Every computation is a pure function over caller-owned data: the caller
//! maintains the histories (oldest sample first, µg/m³) and picks a scale;
//! the crate averages the windows each standard mandates, applies its
//! breakpoint tables or health-risk formula, and reports the worst
//! pollutant's sub-index. Concentrations past a scale's published tables
//! report as `max_index() + 1`, a saturation signal rather than an error.
//!
//! # Example
//!
//! ```rust
//! use aqi_scales::{PollutantHistories, Scale};
//!
//! let mut histories = PollutantHistories::default();
//! histories.pm2_5 = [35.5; 24];
//!
//! let aqi = aqi_scales::index(&histories, Scale::UnitedStates);
//! assert_eq!(aqi, 101);
//! assert_eq!(Scale::UnitedStates.descriptor(aqi), "Unhealthy for Sensitive Groups");
//! ```

pub mod australia;
pub mod canada;
pub mod china;
pub mod error;
pub mod eu;
pub mod formula;
pub mod hong_kong;
pub mod india;
pub mod scale;
pub mod series;
pub mod singapore;
pub mod south_korea;
pub mod uk;
pub mod us;

pub use error::{AqiError, Result};
pub use scale::{AqiReading, Framing, Scale};
pub use series::{HOURS, PollutantHistories, PollutantSeries, series_from_slice, trailing_mean};

/// Compute the AQI of the given scale over the supplied histories
///
/// # Arguments
///
/// * `histories` - rolling 24-hour histories, oldest sample first, µg/m³
/// * `scale` - the standard to compute
///
/// # Returns
///
/// The worst pollutant's sub-index on the scale's grid, or
/// `scale.max_index() + 1` when a concentration saturates the tables.
///
/// # Example
///
/// ```rust
/// use aqi_scales::{PollutantHistories, Scale};
///
/// let mut histories = PollutantHistories::default();
/// histories.pm10 = [150.0; 24];
///
/// assert_eq!(aqi_scales::index(&histories, Scale::China), 100);
/// ```
#[must_use]
pub fn index(histories: &PollutantHistories, scale: Scale) -> u16 {
    scale.index(histories)
}

/// Compute a scale's AQI together with its presentation metadata
///
/// # Example
///
/// ```rust
/// use aqi_scales::{PollutantHistories, Scale};
///
/// let reading = aqi_scales::report(&PollutantHistories::default(), Scale::Canada);
/// assert_eq!(reading.value, 1);
/// assert_eq!(reading.descriptor, "Low");
/// assert_eq!(reading.framing.label(), "air pollution");
/// ```
#[must_use]
pub fn report(histories: &PollutantHistories, scale: Scale) -> AqiReading {
    let value = scale.index(histories);
    AqiReading {
        scale,
        value,
        descriptor: scale.descriptor(value),
        framing: scale.framing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_histories_compute_on_every_scale() {
        for scale in Scale::ALL {
            let value = index(&PollutantHistories::default(), scale);
            // Breakpoint scales score clean air at 0; the health-index
            // scales floor at 1, which is also their defined minimum.
            assert!(value <= 1, "{scale} scored {value} on clean air");
        }
    }

    #[test]
    fn report_bundles_value_and_descriptor() {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [12.1; HOURS];

        let reading = report(&histories, Scale::UnitedStates);
        assert_eq!(reading.value, 51);
        assert_eq!(reading.descriptor, "Moderate");
        assert_eq!(reading.framing, Framing::AirQuality);
    }

    #[test]
    fn series_round_trips_through_the_slice_boundary() {
        let day: Vec<f64> = (0..HOURS).map(|hour| hour as f64).collect();
        let series = series_from_slice(&day).unwrap();
        assert_eq!(trailing_mean(&series, 1), 23.0);
    }
}
