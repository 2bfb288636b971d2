//! Scale selection and dispatch
//!
//! The supported standards form a closed enumeration; dispatch is an
//! exhaustive `match` per operation, so a lookup can never fail and a
//! malformed selector cannot reach the calculators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AqiError;
use crate::series::PollutantHistories;
use crate::{
    australia, canada, china, eu, hong_kong, india, singapore, south_korea, uk, us,
};

/// The ten supported AQI standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// NEPM AQI (ratio to standard, open-ended)
    Australia,
    /// AQHI (exponential health risk, 1..=10+)
    Canada,
    /// HJ 633-2012 AQI
    China,
    /// CAQI hourly background grid
    EuropeanUnion,
    /// AQHI (exponential health risk, 1..=10+)
    HongKong,
    /// CPCB National AQI
    India,
    /// PSI
    Singapore,
    /// CAI
    SouthKorea,
    /// DAQI
    UnitedKingdom,
    /// EPA AQI
    UnitedStates,
}

/// Whether a scale's category wording describes the air itself ("Good",
/// "Fair") or the pollution level ("Low", "High"). Fixed per scale;
/// renderers use it to prefix the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Framing {
    AirQuality,
    AirPollution,
}

impl Framing {
    /// Presentation prefix for the descriptor
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AirQuality => "air quality",
            Self::AirPollution => "air pollution",
        }
    }
}

/// A computed index value bundled with its presentation metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AqiReading {
    pub scale: Scale,
    pub value: u16,
    pub descriptor: &'static str,
    pub framing: Framing,
}

impl Scale {
    /// All supported scales, in selector order
    pub const ALL: [Self; 10] = [
        Self::Australia,
        Self::Canada,
        Self::China,
        Self::EuropeanUnion,
        Self::HongKong,
        Self::India,
        Self::Singapore,
        Self::SouthKorea,
        Self::UnitedKingdom,
        Self::UnitedStates,
    ];

    /// Compute this scale's AQI: the maximum sub-index across pollutants.
    ///
    /// Breakpoint scales report `max_index() + 1` when a concentration
    /// saturates their tables; the health-index scales report 11 for
    /// "10+"; Australia's open-ended ratio method is never capped.
    #[must_use]
    pub fn index(self, histories: &PollutantHistories) -> u16 {
        match self {
            Self::Australia => australia::index(histories),
            Self::Canada => canada::index(histories),
            Self::China => china::index(histories),
            Self::EuropeanUnion => eu::index(histories),
            Self::HongKong => hong_kong::index(histories),
            Self::India => india::index(histories),
            Self::Singapore => singapore::index(histories),
            Self::SouthKorea => south_korea::index(histories),
            Self::UnitedKingdom => uk::index(histories),
            Self::UnitedStates => us::index(histories),
        }
    }

    /// Highest index this scale's published tables represent
    #[must_use]
    pub fn max_index(self) -> u16 {
        match self {
            Self::Australia => australia::MAX_INDEX,
            Self::Canada => canada::MAX_INDEX,
            Self::China => china::MAX_INDEX,
            Self::EuropeanUnion => eu::MAX_INDEX,
            Self::HongKong => hong_kong::MAX_INDEX,
            Self::India => india::MAX_INDEX,
            Self::Singapore => singapore::MAX_INDEX,
            Self::SouthKorea => south_korea::MAX_INDEX,
            Self::UnitedKingdom => uk::MAX_INDEX,
            Self::UnitedStates => us::MAX_INDEX,
        }
    }

    /// Category label for an index value on this scale; values above the
    /// last boundary fall into the final category.
    #[must_use]
    pub fn descriptor(self, value: u16) -> &'static str {
        match self {
            Self::Australia => australia::descriptor(value),
            Self::Canada => canada::descriptor(value),
            Self::China => china::descriptor(value),
            Self::EuropeanUnion => eu::descriptor(value),
            Self::HongKong => hong_kong::descriptor(value),
            Self::India => india::descriptor(value),
            Self::Singapore => singapore::descriptor(value),
            Self::SouthKorea => south_korea::descriptor(value),
            Self::UnitedKingdom => uk::descriptor(value),
            Self::UnitedStates => us::descriptor(value),
        }
    }

    /// Ordered category labels, least to most severe
    #[must_use]
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Australia => &australia::LABELS,
            Self::Canada => &canada::LABELS,
            Self::China => &china::LABELS,
            Self::EuropeanUnion => &eu::LABELS,
            Self::HongKong => &hong_kong::LABELS,
            Self::India => &india::LABELS,
            Self::Singapore => &singapore::LABELS,
            Self::SouthKorea => &south_korea::LABELS,
            Self::UnitedKingdom => &uk::LABELS,
            Self::UnitedStates => &us::LABELS,
        }
    }

    /// Fixed wording semantics of this scale's categories
    #[must_use]
    pub fn framing(self) -> Framing {
        match self {
            Self::Australia
            | Self::China
            | Self::India
            | Self::Singapore
            | Self::SouthKorea
            | Self::UnitedStates => Framing::AirQuality,
            Self::Canada | Self::EuropeanUnion | Self::HongKong | Self::UnitedKingdom => {
                Framing::AirPollution
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Australia => "australia",
            Self::Canada => "canada",
            Self::China => "china",
            Self::EuropeanUnion => "european-union",
            Self::HongKong => "hong-kong",
            Self::India => "india",
            Self::Singapore => "singapore",
            Self::SouthKorea => "south-korea",
            Self::UnitedKingdom => "united-kingdom",
            Self::UnitedStates => "united-states",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = AqiError;

    /// Parse a kebab-case scale selector
    ///
    /// # Example
    ///
    /// ```rust
    /// use aqi_scales::Scale;
    ///
    /// let scale: Scale = "united-states".parse().unwrap();
    /// assert_eq!(scale, Scale::UnitedStates);
    /// ```
    ///
    /// # Errors
    ///
    /// * `AqiError::UnknownScale` - the text names no supported scale
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.name() == s)
            .ok_or_else(|| AqiError::UnknownScale(s.to_string()))
    }
}
