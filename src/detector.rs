//! Triple-Channel Malus-Law Detector
//!
//! Three lossy polarizer channels with pass axes at the canonical trit
//! angles recover a trit from an incident linear polarization as the
//! argmax of the transmitted intensities.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::polarization::{trit_to_angle_deg, PolarizationState};
use crate::ternary::Trit;

/// Two intensities closer than this are treated as a tie; the tie goes
/// to the lower trit.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Configuration of one detection channel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Analyzer pass axis (deg) relative to the laser E-field.
    pub pass_axis_deg: f64,
    /// Overall transmission scaling in (0, 1], modeling non-ideal
    /// gratings or differing materials.
    pub efficiency: f64,
}

impl ChannelConfig {
    pub fn new(pass_axis_deg: f64, efficiency: f64) -> Result<Self> {
        if !pass_axis_deg.is_finite() {
            return Err(Error::Domain(format!(
                "channel pass axis must be finite, got {pass_axis_deg}"
            )));
        }
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            return Err(Error::Config(format!(
                "channel efficiency {efficiency} outside (0, 1]"
            )));
        }
        Ok(Self {
            pass_axis_deg,
            efficiency,
        })
    }
}

/// One detection result: per-channel intensities in ascending trit
/// order (-1, 0, +1) and the decoded trit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DetectorReading {
    pub intensities: [f64; 3],
    pub decoded: Trit,
}

impl DetectorReading {
    /// Transmitted intensity of the channel assigned to `trit`.
    pub fn intensity(&self, trit: Trit) -> f64 {
        self.intensities[channel_index(trit)]
    }
}

#[inline]
fn channel_index(trit: Trit) -> usize {
    match trit {
        Trit::Minus => 0,
        Trit::Zero => 1,
        Trit::Plus => 2,
    }
}

/// Malus law: I = efficiency * I0 * cos^2(theta - pass_axis).
fn malus_intensity(input_angle_deg: f64, channel: &ChannelConfig, input_intensity: f64) -> f64 {
    let theta = (input_angle_deg - channel.pass_axis_deg).to_radians();
    channel.efficiency * input_intensity * theta.cos().powi(2)
}

/// Triple-channel polarization detector for ternary logic.
///
/// Channels sit at the canonical encoding angles: -1 at 240 deg, 0 at
/// 0 deg, +1 at 120 deg, stored in ascending trit order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripleChannelDetector {
    pub channels: [ChannelConfig; 3],
    /// Reference input intensity I0; only ratios matter for decoding.
    pub input_intensity: f64,
    /// Std of additive Gaussian intensity noise per channel; 0 keeps
    /// the detector fully deterministic.
    pub noise_std: f64,
}

impl TripleChannelDetector {
    /// Ideal detector: unit efficiency on all channels, I0 = 1, no noise.
    pub fn ideal() -> Self {
        Self {
            channels: [
                ChannelConfig {
                    pass_axis_deg: 240.0,
                    efficiency: 1.0,
                },
                ChannelConfig {
                    pass_axis_deg: 0.0,
                    efficiency: 1.0,
                },
                ChannelConfig {
                    pass_axis_deg: 120.0,
                    efficiency: 1.0,
                },
            ],
            input_intensity: 1.0,
            noise_std: 0.0,
        }
    }

    /// Detector at the canonical axes with per-channel efficiencies in
    /// ascending trit order.
    pub fn with_efficiencies(efficiencies: [f64; 3], input_intensity: f64) -> Result<Self> {
        let mut detector = Self::ideal();
        for (channel, eta) in detector.channels.iter_mut().zip(efficiencies) {
            *channel = ChannelConfig::new(channel.pass_axis_deg, eta)?;
        }
        if !(input_intensity > 0.0 && input_intensity.is_finite()) {
            return Err(Error::Config(format!(
                "input intensity must be positive and finite, got {input_intensity}"
            )));
        }
        detector.input_intensity = input_intensity;
        Ok(detector)
    }

    /// Enable additive Gaussian intensity noise on every channel.
    pub fn with_noise(mut self, noise_std: f64) -> Result<Self> {
        if !(noise_std >= 0.0 && noise_std.is_finite()) {
            return Err(Error::Config(format!(
                "noise std must be finite and non-negative, got {noise_std}"
            )));
        }
        self.noise_std = noise_std;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        for channel in &self.channels {
            ChannelConfig::new(channel.pass_axis_deg, channel.efficiency)?;
        }
        if !(self.input_intensity > 0.0 && self.input_intensity.is_finite()) {
            return Err(Error::Config(format!(
                "input intensity must be positive and finite, got {}",
                self.input_intensity
            )));
        }
        if !(self.noise_std >= 0.0 && self.noise_std.is_finite()) {
            return Err(Error::Config(format!(
                "noise std must be finite and non-negative, got {}",
                self.noise_std
            )));
        }
        Ok(())
    }

    /// Run detection on an incident polarization angle (deg).
    pub fn detect_from_angle(&self, angle_deg: f64) -> Result<DetectorReading> {
        if !angle_deg.is_finite() {
            return Err(Error::Domain(format!(
                "incident angle must be finite, got {angle_deg}"
            )));
        }

        let mut intensities = [0.0f64; 3];
        for (slot, channel) in intensities.iter_mut().zip(&self.channels) {
            *slot = malus_intensity(angle_deg, channel, self.input_intensity);
        }

        if self.noise_std > 0.0 {
            let mut rng = rand::thread_rng();
            let normal = Normal::new(0.0, self.noise_std)
                .map_err(|e| Error::Config(format!("invalid noise distribution: {e}")))?;
            for slot in intensities.iter_mut() {
                // Photocurrents below zero clamp to zero.
                *slot = (*slot + normal.sample(&mut rng)).max(0.0);
            }
        }

        Ok(DetectorReading {
            intensities,
            decoded: decode_argmax(&intensities),
        })
    }

    /// Convenience wrapper over a full polarization state.
    pub fn detect_from_state(&self, state: &PolarizationState) -> Result<DetectorReading> {
        self.detect_from_angle(state.angle_deg)
    }

    /// Round-trip path: trit -> canonical angle -> detection.
    pub fn detect_from_trit(&self, trit: Trit) -> Result<DetectorReading> {
        self.detect_from_angle(trit_to_angle_deg(trit))
    }

    /// Same detection with a caller-supplied RNG, for reproducible
    /// noisy runs.
    pub fn detect_from_angle_with_rng<R: Rng>(
        &self,
        angle_deg: f64,
        rng: &mut R,
    ) -> Result<DetectorReading> {
        if !angle_deg.is_finite() {
            return Err(Error::Domain(format!(
                "incident angle must be finite, got {angle_deg}"
            )));
        }
        let mut intensities = [0.0f64; 3];
        for (slot, channel) in intensities.iter_mut().zip(&self.channels) {
            *slot = malus_intensity(angle_deg, channel, self.input_intensity);
        }
        if self.noise_std > 0.0 {
            let normal = Normal::new(0.0, self.noise_std)
                .map_err(|e| Error::Config(format!("invalid noise distribution: {e}")))?;
            for slot in intensities.iter_mut() {
                *slot = (*slot + normal.sample(rng)).max(0.0);
            }
        }
        Ok(DetectorReading {
            intensities,
            decoded: decode_argmax(&intensities),
        })
    }

    /// Save the detector configuration as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a detector configuration from JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let detector: Self = serde_json::from_str(&json)?;
        detector.validate()?;
        Ok(detector)
    }
}

impl Default for TripleChannelDetector {
    fn default() -> Self {
        Self::ideal()
    }
}

/// Argmax over the three channels; intensities within [`TIE_TOLERANCE`]
/// of the maximum tie toward the lower trit.
fn decode_argmax(intensities: &[f64; 3]) -> Trit {
    let max = intensities
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    for (i, &value) in intensities.iter().enumerate() {
        if value >= max - TIE_TOLERANCE {
            return Trit::ALL[i];
        }
    }
    // intensities are never NaN by construction
    Trit::Minus
}
