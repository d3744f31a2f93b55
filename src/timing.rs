//! Structural Timing and Trit-Error-Rate Model
//!
//! Compares the photonic pipeline against a CMOS reference:
//! photonic delay = n_stages * (t_opt + t_det + t_elec + t_regen),
//! CMOS delay scales with logic depth and fan-in. The trit error rate
//! is estimated as a threshold-crossing problem with explicit decision
//! margins around the canonical encoding angles.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::polarization::trit_to_angle_deg;
use crate::ternary::Trit;

/// Speed of light (m/s).
const C0: f64 = 299_792_458.0;

/// Photonic technology parameters. Times in seconds, lengths in meters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhotonicTechParams {
    pub wavelength_m: f64,
    pub group_index_ref: f64,
    /// Weak linear n_g(lambda) dependence.
    pub group_index_slope: f64,
    pub lambda_ref_m: f64,
    /// Effective optical length per stage.
    pub stage_length_m: f64,
    pub pd_bandwidth_hz: f64,
    pub elec_logic_stage_delay_s: f64,
    pub regen_delay_s: f64,
    pub pipeline_depth: usize,
}

impl Default for PhotonicTechParams {
    fn default() -> Self {
        Self {
            wavelength_m: 1550e-9,
            group_index_ref: 3.6,
            group_index_slope: 0.1,
            lambda_ref_m: 1550e-9,
            stage_length_m: 300e-6,
            pd_bandwidth_hz: 40e9,
            elec_logic_stage_delay_s: 5e-12,
            regen_delay_s: 5e-12,
            pipeline_depth: 1,
        }
    }
}

/// CMOS reference parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ElectronicTechParams {
    /// Base FO4-like gate delay.
    pub gate_delay_base_s: f64,
    /// Multiplier per extra input.
    pub fanin_factor: f64,
    /// Extra factor for XOR-like networks.
    pub xor_depth_factor: f64,
}

impl Default for ElectronicTechParams {
    fn default() -> Self {
        Self {
            gate_delay_base_s: 12e-12,
            fanin_factor: 1.3,
            xor_depth_factor: 1.5,
        }
    }
}

/// Linear group-index model:
/// n_g(lambda) = n_ref + slope * (lambda - lambda_ref) / lambda_ref.
pub fn group_index(params: &PhotonicTechParams, wavelength_m: f64) -> f64 {
    let delta = (wavelength_m - params.lambda_ref_m) / params.lambda_ref_m;
    params.group_index_ref + params.group_index_slope * delta
}

/// Optical propagation per stage: n_g * L / c.
pub fn t_opt_per_stage(params: &PhotonicTechParams, wavelength_m: f64) -> f64 {
    group_index(params, wavelength_m) * params.stage_length_m / C0
}

/// Photodiode plus TIA per stage: ~0.35 / f_3dB.
pub fn t_det_per_stage(params: &PhotonicTechParams) -> f64 {
    0.35 / params.pd_bandwidth_hz
}

/// Structural stage count for a ternary function name.
///
/// Unary gates (C/N/A/TNOT) take one logical stage, binary gates two,
/// a half-adder two, a full adder three. Total stages scale with the
/// pipeline depth.
pub fn stage_count(func_name: &str, pipeline_depth: usize) -> usize {
    let logical = match func_name.to_ascii_uppercase().as_str() {
        "C" | "N" | "A" | "TNOT" | "CYCLIC" | "NEGATOR" | "ANTINEGATOR" => 1,
        "TAND" | "TOR" | "TNAND" | "TNOR" | "TXOR" => 2,
        "HA" => 2,
        "FA" => 3,
        _ => 2,
    };
    logical * pipeline_depth.max(1)
}

/// Breakdown of the structural photonic delay.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhotonicDelay {
    pub n_stages: usize,
    pub t_opt: f64,
    pub t_det: f64,
    pub t_elec: f64,
    pub t_regen: f64,
    pub per_stage: f64,
    pub total: f64,
}

/// Structural photonic delay for one function.
pub fn estimate_photonic_delay(
    func_name: &str,
    params: &PhotonicTechParams,
    wavelength_m: Option<f64>,
) -> PhotonicDelay {
    let lambda = wavelength_m.unwrap_or(params.wavelength_m);
    let n_stages = stage_count(func_name, params.pipeline_depth);

    let t_opt = t_opt_per_stage(params, lambda);
    let t_det = t_det_per_stage(params);
    let t_elec = params.elec_logic_stage_delay_s;
    let t_regen = params.regen_delay_s;
    let per_stage = t_opt + t_det + t_elec + t_regen;

    PhotonicDelay {
        n_stages,
        t_opt,
        t_det,
        t_elec,
        t_regen,
        per_stage,
        total: n_stages as f64 * per_stage,
    }
}

/// Logic depth and maximum fan-in for the CMOS reference network.
pub fn logic_depth_and_fanin(func_name: &str) -> (u32, u32) {
    match func_name.to_ascii_uppercase().as_str() {
        "C" | "N" | "A" | "TNOT" | "CYCLIC" | "NEGATOR" | "ANTINEGATOR" => (1, 1),
        "TAND" | "TOR" => (1, 2),
        "TNAND" | "TNOR" => (2, 2),
        "TXOR" => (3, 2),
        "HA" => (4, 3),
        "FA" => (6, 3),
        _ => (2, 2),
    }
}

/// CMOS delay: depth * base * fanin_factor^(fanin-1) * xor factor.
pub fn estimate_electronic_delay(func_name: &str, params: &ElectronicTechParams) -> f64 {
    let (depth, fanin_max) = logic_depth_and_fanin(func_name);
    let fanin_mult = params.fanin_factor.powi(fanin_max.saturating_sub(1) as i32);
    let xor_mult = match func_name.to_ascii_uppercase().as_str() {
        "TXOR" | "HA" | "FA" => params.xor_depth_factor,
        _ => 1.0,
    };
    depth as f64 * params.gate_delay_base_s * fanin_mult * xor_mult
}

// ---------- TER as threshold crossing ----------

/// Decode with fixed sector boundaries at +-60 deg around each
/// canonical angle: (-60, 60) -> 0, (60, 180) -> +1, (180, 300) -> -1.
pub fn decode_with_boundaries(theta_deg: f64) -> Trit {
    let theta = theta_deg.rem_euclid(360.0);
    if !(60.0..300.0).contains(&theta) {
        Trit::Zero
    } else if theta < 180.0 {
        Trit::Plus
    } else {
        Trit::Minus
    }
}

/// Whether one noisy transmission of `t_in` is counted as an error.
///
/// An error is declared when the noisy angle deviates from the
/// canonical angle by more than the decision margin, or when the sector
/// decode disagrees with the input.
pub fn trit_transmission_errors<R: Rng>(
    t_in: Trit,
    angle_noise_std_deg: f64,
    decision_margin_deg: f64,
    rng: &mut R,
) -> Result<bool> {
    let theta_ideal = trit_to_angle_deg(t_in);
    let normal = Normal::new(theta_ideal, angle_noise_std_deg)
        .map_err(|e| Error::Config(format!("invalid angle noise std: {e}")))?;
    let theta_noisy = normal.sample(rng);

    let diff = ((theta_noisy - theta_ideal + 180.0).rem_euclid(360.0) - 180.0).abs();
    if diff > decision_margin_deg {
        return Ok(true);
    }
    Ok(decode_with_boundaries(theta_noisy) != t_in)
}

/// Monte-Carlo trit error rate under Gaussian angle noise.
pub fn estimate_ter<R: Rng>(
    angle_noise_std_deg: f64,
    decision_margin_deg: f64,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    if !(angle_noise_std_deg >= 0.0 && angle_noise_std_deg.is_finite()) {
        return Err(Error::Config(format!(
            "angle noise std must be finite and non-negative, got {angle_noise_std_deg}"
        )));
    }
    if trials == 0 {
        return Err(Error::Config("TER estimate needs at least one trial".into()));
    }

    let mut errors = 0usize;
    for _ in 0..trials {
        let t_in = Trit::ALL[rng.gen_range(0..3)];
        if trit_transmission_errors(t_in, angle_noise_std_deg, decision_margin_deg, rng)? {
            errors += 1;
        }
    }
    Ok(errors as f64 / trials as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_group_index_at_reference() {
        let params = PhotonicTechParams::default();
        assert!((group_index(&params, 1550e-9) - 3.6).abs() < 1e-12);
        assert!(group_index(&params, 1600e-9) > 3.6);
    }

    #[test]
    fn test_photonic_delay_positive_components() {
        let params = PhotonicTechParams::default();
        let delay = estimate_photonic_delay("TNAND", &params, None);
        assert_eq!(delay.n_stages, 2);
        assert!(delay.t_opt > 0.0);
        assert!(delay.t_det > 0.0);
        assert!((delay.total - 2.0 * delay.per_stage).abs() < 1e-18);
    }

    #[test]
    fn test_delay_scales_with_pipeline_depth() {
        let shallow = PhotonicTechParams::default();
        let deep = PhotonicTechParams {
            pipeline_depth: 3,
            ..shallow
        };
        let a = estimate_photonic_delay("TAND", &shallow, None).total;
        let b = estimate_photonic_delay("TAND", &deep, None).total;
        assert!((b - 3.0 * a).abs() < 1e-18);
    }

    #[test]
    fn test_electronic_delay_ordering() {
        let params = ElectronicTechParams::default();
        let unary = estimate_electronic_delay("TNOT", &params);
        let nand = estimate_electronic_delay("TNAND", &params);
        let xor = estimate_electronic_delay("TXOR", &params);
        let fa = estimate_electronic_delay("FA", &params);
        assert!(unary < nand);
        assert!(nand < xor);
        assert!(xor < fa);
    }

    #[test]
    fn test_boundary_decoder_sectors() {
        assert_eq!(decode_with_boundaries(0.0), Trit::Zero);
        assert_eq!(decode_with_boundaries(-30.0), Trit::Zero);
        assert_eq!(decode_with_boundaries(359.0), Trit::Zero);
        assert_eq!(decode_with_boundaries(120.0), Trit::Plus);
        assert_eq!(decode_with_boundaries(179.0), Trit::Plus);
        assert_eq!(decode_with_boundaries(240.0), Trit::Minus);
        assert_eq!(decode_with_boundaries(299.0), Trit::Minus);
    }

    #[test]
    fn test_ter_vanishes_without_noise() {
        let mut rng = StdRng::seed_from_u64(1);
        let ter = estimate_ter(0.0, 45.0, 1000, &mut rng).unwrap();
        assert_eq!(ter, 0.0);
    }

    #[test]
    fn test_ter_grows_with_noise() {
        let mut rng = StdRng::seed_from_u64(2);
        let quiet = estimate_ter(2.0, 45.0, 5000, &mut rng).unwrap();
        let loud = estimate_ter(40.0, 45.0, 5000, &mut rng).unwrap();
        assert!(quiet <= loud);
        assert!(loud > 0.0);
    }

    #[test]
    fn test_invalid_ter_inputs_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(estimate_ter(-1.0, 45.0, 100, &mut rng).is_err());
        assert!(estimate_ter(2.0, 45.0, 0, &mut rng).is_err());
    }
}
