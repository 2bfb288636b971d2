//! Numeric primitives shared by the scale calculators
//!
//! Piecewise breakpoint interpolation, the ratio-to-standard percentage
//! formula, the exponential excess-risk terms used by the health-index
//! scales, truncation, and gas conversions out of µg/m³.

/// One segment of a piecewise index function: concentrations
/// `c_lo..=c_hi` map linearly onto indices `i_lo..=i_hi`.
///
/// Tables are contiguous and monotonically increasing in both concentration
/// and index, and `c_hi != c_lo` holds in every segment; segment lookup
/// walks a table in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub c_lo: f64,
    pub c_hi: f64,
    pub i_lo: u16,
    pub i_hi: u16,
}

/// Shorthand for writing breakpoint tables as consts
#[must_use]
pub const fn bp(c_lo: f64, c_hi: f64, i_lo: u16, i_hi: u16) -> Breakpoint {
    Breakpoint {
        c_lo,
        c_hi,
        i_lo,
        i_hi,
    }
}

/// Linear interpolation within one breakpoint segment, rounded to the
/// nearest integer and clamped to `[i_lo, i_hi]`.
///
/// The clamp keeps a concentration sitting exactly on a segment edge from
/// drifting one index unit outside the band under floating point
/// evaluation.
///
/// # Example
///
/// ```rust
/// use aqi_scales::formula::interpolate;
///
/// assert_eq!(interpolate(0, 50, 0.0, 12.0, 12.0), 50);
/// assert_eq!(interpolate(51, 100, 12.1, 35.4, 12.1), 51);
/// ```
#[must_use]
pub fn interpolate(i_lo: u16, i_hi: u16, c_lo: f64, c_hi: f64, c: f64) -> u16 {
    let raw = f64::from(i_hi - i_lo) / (c_hi - c_lo) * (c - c_lo) + f64::from(i_lo);
    (raw.round() as u16).clamp(i_lo, i_hi)
}

/// Locate the segment containing `c` by ascending `c <= c_hi` first-match
/// and interpolate its sub-index.
///
/// Returns `None` when `c` exceeds every segment's upper bound; the caller
/// reports the scale's saturation sentinel in that case.
#[must_use]
pub fn piecewise(table: &[Breakpoint], c: f64) -> Option<u16> {
    table
        .iter()
        .find(|segment| c <= segment.c_hi)
        .map(|segment| interpolate(segment.i_lo, segment.i_hi, segment.c_lo, segment.c_hi, c))
}

/// Ratio-to-standard percentage index: `round(c / standard * 100)`.
///
/// No clamping; the one method built on this formula has no upper ceiling.
#[must_use]
pub fn ratio_index(standard: f64, c: f64) -> u16 {
    (c / standard * 100.0).round() as u16
}

/// One exponential excess-risk term of a health-index formula
#[must_use]
pub fn excess_risk(coefficient: f64, c: f64) -> f64 {
    (coefficient * c).exp() - 1.0
}

/// Map a continuous health-risk value onto 1-based bands by ascending `<=`
/// comparison over fixed cut points, first match wins; above the last cut
/// returns `cuts.len() + 1`.
///
/// The minimum band is 1, never 0, matching the health-index definitions.
#[must_use]
pub fn risk_band(value: f64, cuts: &[f64]) -> u16 {
    for (band, cut) in cuts.iter().enumerate() {
        if value <= *cut {
            return band as u16 + 1;
        }
    }
    cuts.len() as u16 + 1
}

/// Truncate toward zero to a fixed number of decimal places.
///
/// Several standards truncate (never round) monitor data before table
/// lookup; reproducing the direction exactly matters at segment edges.
#[must_use]
pub fn truncate(c: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (c * factor).trunc() / factor
}

// Molar masses (g/mol) for the gases converted out of µg/m³, and the molar
// volume (L/mol) at 25 °C and 1 atm used by the originating standards.
pub const MOLAR_MASS_CO: f64 = 28.01;
pub const MOLAR_MASS_NO2: f64 = 46.01;
pub const MOLAR_MASS_O3: f64 = 48.00;
pub const MOLAR_MASS_SO2: f64 = 64.06;
const MOLAR_VOLUME: f64 = 24.45;

/// Convert µg/m³ to ppm for a gas of the given molar mass
#[must_use]
pub fn ug_per_m3_to_ppm(c: f64, molar_mass: f64) -> f64 {
    c * MOLAR_VOLUME / (molar_mass * 1000.0)
}

/// Convert µg/m³ to ppb for a gas of the given molar mass
#[must_use]
pub fn ug_per_m3_to_ppb(c: f64, molar_mass: f64) -> f64 {
    c * MOLAR_VOLUME / molar_mass
}
