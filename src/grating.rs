//! Subwavelength Grating Design Solver
//!
//! First-order effective-medium design of a 1D subwavelength grating
//! for polarization discrimination: sweep the duty cycle, score the
//! TE/TM index contrast, and derive a strictly subwavelength period.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Named optical material with a scalar refractive index near 1.55 um.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Material {
    pub name: &'static str,
    pub n: f64,
}

/// Intrinsic silicon around 1.55 um.
pub const INTRINSIC_SI: Material = Material {
    name: "Si",
    n: 3.597,
};

/// Stoichiometric silicon nitride around 1.55 um.
pub const SILICON_NITRIDE: Material = Material { name: "SiN", n: 2.00 };

/// Read-only material table, looked up by name.
pub const MATERIALS: [Material; 2] = [INTRINSIC_SI, SILICON_NITRIDE];

/// Look up a core material by name ("Si" or "SiN").
pub fn material(name: &str) -> Result<Material> {
    MATERIALS
        .iter()
        .copied()
        .find(|m| m.name == name)
        .ok_or_else(|| Error::Domain(format!("unsupported material: {name}")))
}

/// Accepted wavelength band (nm), covering visible through near-IR.
pub const WAVELENGTH_RANGE_NM: (f64, f64) = (200.0, 5000.0);

// ---------- Effective-medium helpers ----------

/// First-order EMT index for TE-like polarization:
/// n_eff_TE^2 = f * n_core^2 + (1 - f) * n_clad^2.
pub fn effective_index_te(n_core: f64, n_clad: f64, duty_cycle: f64) -> f64 {
    let f = duty_cycle;
    (f * n_core * n_core + (1.0 - f) * n_clad * n_clad).sqrt()
}

/// First-order EMT index for TM-like polarization:
/// 1 / n_eff_TM^2 = f / n_core^2 + (1 - f) / n_clad^2.
pub fn effective_index_tm(n_core: f64, n_clad: f64, duty_cycle: f64) -> f64 {
    let f = duty_cycle;
    let inv = f / (n_core * n_core) + (1.0 - f) / (n_clad * n_clad);
    (1.0 / inv).sqrt()
}

// ---------- Design algorithm ----------

/// Sweep and geometry parameters for the solver.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DesignParams {
    /// Fraction of the zeroth-order limit lambda / max(n_core, n_clad)
    /// used as the period. Must lie in (0, 1) to stay subwavelength.
    pub subwavelength_margin: f64,
    pub duty_cycle_min: f64,
    pub duty_cycle_max: f64,
    /// Number of duty-cycle samples across the sweep range.
    pub samples: usize,
}

impl Default for DesignParams {
    fn default() -> Self {
        // f in [0.1, 0.9] at 0.05 resolution.
        Self {
            subwavelength_margin: 0.6,
            duty_cycle_min: 0.1,
            duty_cycle_max: 0.9,
            samples: 17,
        }
    }
}

/// Output record of one solver invocation. Never mutated after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GratingDesign {
    pub wavelength_nm: f64,
    pub material: String,
    pub n_core: f64,
    pub n_clad: f64,
    pub period_nm: f64,
    pub slit_width_nm: f64,
    pub duty_cycle: f64,
    pub n_eff_te: f64,
    pub n_eff_tm: f64,
    /// |n_eff_TE - n_eff_TM| at the chosen duty cycle.
    pub contrast: f64,
}

/// Design a subwavelength grating with default sweep parameters.
pub fn design_grating(
    wavelength_nm: f64,
    material_name: &str,
    n_clad: f64,
) -> Result<GratingDesign> {
    design_grating_with(wavelength_nm, material_name, n_clad, DesignParams::default())
}

/// Design a subwavelength grating for polarization discrimination.
///
/// Algorithm:
///   1. Sweep duty cycle f over [min, max] on a uniform grid.
///   2. Compute n_eff_TE(f) and n_eff_TM(f) via first-order EMT.
///   3. Pick f* maximizing |n_eff_TE - n_eff_TM|; on a tie the smallest
///      f wins (the ascending scan only replaces on strict improvement).
///   4. Period from the zeroth-order condition:
///      period = margin * lambda / max(n_core, n_clad), slit = f* * period.
pub fn design_grating_with(
    wavelength_nm: f64,
    material_name: &str,
    n_clad: f64,
    params: DesignParams,
) -> Result<GratingDesign> {
    let (lo, hi) = WAVELENGTH_RANGE_NM;
    if !wavelength_nm.is_finite() || wavelength_nm < lo || wavelength_nm > hi {
        return Err(Error::Domain(format!(
            "wavelength {wavelength_nm} nm outside accepted band {lo}-{hi} nm"
        )));
    }

    let core = material(material_name)?;
    if !(n_clad > 0.0) {
        return Err(Error::Config(format!(
            "cladding index must be positive, got {n_clad}"
        )));
    }
    if n_clad >= core.n {
        return Err(Error::Config(format!(
            "cladding index {} must be below core index {} for a guided design",
            n_clad, core.n
        )));
    }

    if !(0.0 < params.duty_cycle_min
        && params.duty_cycle_min < params.duty_cycle_max
        && params.duty_cycle_max < 1.0)
    {
        return Err(Error::Config(format!(
            "duty cycle range ({}, {}) must satisfy 0 < min < max < 1",
            params.duty_cycle_min, params.duty_cycle_max
        )));
    }
    if params.samples < 2 {
        return Err(Error::Config(format!(
            "duty cycle sweep needs at least 2 samples, got {}",
            params.samples
        )));
    }
    if !(params.subwavelength_margin > 0.0 && params.subwavelength_margin < 1.0) {
        return Err(Error::Config(format!(
            "subwavelength margin {} must lie in (0, 1)",
            params.subwavelength_margin
        )));
    }

    let grid = Array1::linspace(params.duty_cycle_min, params.duty_cycle_max, params.samples);

    let mut best_f = grid[0];
    let mut best_contrast = -1.0;
    let mut best_te = 0.0;
    let mut best_tm = 0.0;
    for &f in grid.iter() {
        let n_te = effective_index_te(core.n, n_clad, f);
        let n_tm = effective_index_tm(core.n, n_clad, f);
        let contrast = (n_te - n_tm).abs();
        if contrast > best_contrast {
            best_contrast = contrast;
            best_f = f;
            best_te = n_te;
            best_tm = n_tm;
        }
    }

    let period_nm = params.subwavelength_margin * wavelength_nm / core.n.max(n_clad);
    let slit_width_nm = best_f * period_nm;

    debug!(
        wavelength_nm,
        material = core.name,
        duty_cycle = best_f,
        period_nm,
        contrast = best_contrast,
        "selected grating design"
    );

    Ok(GratingDesign {
        wavelength_nm,
        material: core.name.to_string(),
        n_core: core.n,
        n_clad,
        period_nm,
        slit_width_nm,
        duty_cycle: best_f,
        n_eff_te: best_te,
        n_eff_tm: best_tm,
        contrast: best_contrast,
    })
}
