//! Mood check-in rollups: weekly average, energy/stress bands, wellness score.

use crate::error::EngineError;
use crate::metrics::weighted_average;
use crate::types::{MoodEntry, MoodLevel};

/// How many of the most recent check-ins feed the wellness score.
const WELLNESS_WINDOW: usize = 3;

/// Average mood across the recent entries, mapped back onto the 7-point scale.
pub fn weekly_average(entries: &[MoodEntry]) -> Result<MoodLevel, EngineError> {
    let indices: Vec<f64> = entries.iter().map(|e| e.mood.index() as f64).collect();
    let avg = weighted_average(&indices)?;
    // The rounded mean of valid indices stays within the scale.
    Ok(MoodLevel::from_index(avg.clamp(0, 6) as u8).unwrap_or(MoodLevel::Okay))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyBand {
    Depleted,
    Steady,
    High,
    Charged,
}

impl EnergyBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Depleted => "depleted",
            Self::Steady => "steady",
            Self::High => "high",
            Self::Charged => "charged",
        }
    }
}

/// Band for a 1..=10 energy slider value.
pub fn energy_band(level: u8) -> EnergyBand {
    match level {
        0..=3 => EnergyBand::Depleted,
        4..=6 => EnergyBand::Steady,
        7..=8 => EnergyBand::High,
        _ => EnergyBand::Charged,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressBand {
    Low,
    Moderate,
    High,
}

impl StressBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low stress",
            Self::Moderate => "Moderate",
            Self::High => "High stress",
        }
    }
}

/// Band for a 1..=10 stress slider value.
pub fn stress_band(level: u8) -> StressBand {
    match level {
        0..=3 => StressBand::Low,
        4..=6 => StressBand::Moderate,
        _ => StressBand::High,
    }
}

/// Overall wellness score in 0..=100 from the most recent check-ins.
///
/// Mood carries half the weight; energy and calm (inverse stress) a quarter
/// each. Stress 1 is the scale floor, so it maps to a full calm score.
/// Expects entries most-recent-first, as the store keeps them.
pub fn wellness_score(entries: &[MoodEntry]) -> Result<u8, EngineError> {
    if entries.is_empty() {
        return Err(EngineError::EmptyCollection);
    }
    let window = &entries[..entries.len().min(WELLNESS_WINDOW)];
    let total: f64 = window
        .iter()
        .map(|e| {
            let mood = e.mood.index() as f64 / 6.0;
            let energy = e.energy as f64 / 10.0;
            let calm = (10.0 - e.stress as f64) / 9.0;
            0.5 * mood + 0.25 * energy + 0.25 * calm
        })
        .sum();
    let score = (100.0 * total / window.len() as f64).round();
    Ok(score.clamp(0.0, 100.0) as u8)
}
