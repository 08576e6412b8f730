use crate::core::DataPoint;
use crate::error::{SkewError, SkewResult};
use crate::sounding::parse::parse_spaced_numbers;

const KELVIN_OFFSET: f64 = 273.15;

/// One vertical trace: a temperature-like quantity sampled on its own
/// pressure grid. Retrieved temperature and dew point profiles often come on
/// slightly different grids, so each trace keeps its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundingTrace {
    pressure_hpa: Vec<f64>,
    temperature_k: Vec<f64>,
}

impl SoundingTrace {
    pub fn new(pressure_hpa: Vec<f64>, temperature_k: Vec<f64>) -> SkewResult<Self> {
        if pressure_hpa.is_empty() {
            return Err(SkewError::InvalidData(
                "sounding trace must not be empty".to_owned(),
            ));
        }
        if pressure_hpa.len() != temperature_k.len() {
            return Err(SkewError::InvalidData(format!(
                "sounding trace length mismatch: {} pressures vs {} temperatures",
                pressure_hpa.len(),
                temperature_k.len()
            )));
        }
        for (pressure, temperature) in pressure_hpa.iter().zip(&temperature_k) {
            if !pressure.is_finite() || *pressure <= 0.0 {
                return Err(SkewError::InvalidData(
                    "sounding pressures must be finite and > 0".to_owned(),
                ));
            }
            if !temperature.is_finite() {
                return Err(SkewError::InvalidData(
                    "sounding temperatures must be finite".to_owned(),
                ));
            }
        }

        Ok(Self {
            pressure_hpa,
            temperature_k,
        })
    }

    /// Builds a trace from two blocks of hand-copied spaced-digit text.
    pub fn from_spaced_text(pressure: &str, temperature: &str) -> SkewResult<Self> {
        Self::new(
            parse_spaced_numbers(pressure)?,
            parse_spaced_numbers(temperature)?,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pressure_hpa.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pressure_hpa.is_empty()
    }

    #[must_use]
    pub fn pressure_hpa(&self) -> &[f64] {
        &self.pressure_hpa
    }

    #[must_use]
    pub fn temperature_k(&self) -> &[f64] {
        &self.temperature_k
    }

    /// Plot-ready points: X is temperature in Celsius, Y is pressure in hPa.
    #[must_use]
    pub fn series_points(&self) -> Vec<DataPoint> {
        self.pressure_hpa
            .iter()
            .zip(&self.temperature_k)
            .map(|(pressure, temperature)| {
                DataPoint::new(temperature - KELVIN_OFFSET, *pressure)
            })
            .collect()
    }
}

/// A full sounding: temperature and dew point traces for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundingProfile {
    pub temperature: SoundingTrace,
    pub dew_point: SoundingTrace,
}

impl SoundingProfile {
    #[must_use]
    pub fn new(temperature: SoundingTrace, dew_point: SoundingTrace) -> Self {
        Self {
            temperature,
            dew_point,
        }
    }

    /// Builds a profile from four blocks of spaced-digit text: the
    /// temperature grid and values, then the dew point grid and values.
    pub fn from_spaced_text(
        temperature_pressure: &str,
        temperature: &str,
        dew_point_pressure: &str,
        dew_point: &str,
    ) -> SkewResult<Self> {
        Ok(Self {
            temperature: SoundingTrace::from_spaced_text(temperature_pressure, temperature)?,
            dew_point: SoundingTrace::from_spaced_text(dew_point_pressure, dew_point)?,
        })
    }
}
