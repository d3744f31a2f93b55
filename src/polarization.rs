//! Polarization Codec
//!
//! Bidirectional mapping trit <-> linear polarization angle <-> Jones
//! vector <-> Stokes/Poincare coordinates. The angle relative to the
//! laser E-field reference is the canonical source; Jones and Stokes
//! representations are derived from it.

use num_complex::Complex64;

use crate::ternary::Trit;

/// Canonical encoding angles in degrees, indexed in ascending trit order.
pub const CANONICAL_ANGLES_DEG: [(Trit, f64); 3] = [
    (Trit::Minus, 240.0),
    (Trit::Zero, 0.0),
    (Trit::Plus, 120.0),
];

/// A linear polarization state: angle plus the derived Jones vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarizationState {
    /// Linear polarization angle (deg) relative to the laser E-field
    /// reference (0 deg = trit 0).
    pub angle_deg: f64,
    /// Normalized Jones vector in the (Ex, Ey) basis.
    pub jones: [Complex64; 2],
}

impl PolarizationState {
    /// Build a state from a raw angle.
    pub fn from_angle_deg(angle_deg: f64) -> Self {
        Self {
            angle_deg,
            jones: angle_deg_to_jones(angle_deg),
        }
    }

    /// Stokes parameters (S0, S1, S2, S3) of this state.
    pub fn stokes(&self) -> [f64; 4] {
        jones_to_stokes(self.jones)
    }

    /// Point on the Poincare sphere (S1, S2, S3 normalized by S0).
    pub fn poincare(&self) -> [f64; 3] {
        stokes_to_poincare(self.stokes())
    }
}

// ---------- Trit <-> angle ----------

/// Encoding table: 0 -> 0 deg, +1 -> 120 deg, -1 -> 240 deg.
pub fn trit_to_angle_deg(trit: Trit) -> f64 {
    match trit {
        Trit::Zero => 0.0,
        Trit::Plus => 120.0,
        Trit::Minus => 240.0,
    }
}

/// Nearest canonical trit by circular distance.
///
/// Ties are broken toward the lower trit (-1 < 0 < +1): candidates are
/// scanned in ascending trit order and only a strictly smaller distance
/// replaces the current best. This is the noiseless logical decode;
/// the physical decode goes through the triple-channel detector.
pub fn angle_deg_to_trit(angle_deg: f64) -> Trit {
    let a = angle_deg.rem_euclid(360.0);

    let mut best = Trit::Minus;
    let mut best_dist = f64::INFINITY;
    for (trit, canonical) in CANONICAL_ANGLES_DEG {
        let raw = (a - canonical).abs();
        let dist = raw.min(360.0 - raw);
        if dist < best_dist {
            best = trit;
            best_dist = dist;
        }
    }
    best
}

// ---------- Angle <-> Jones vector ----------

/// Jones vector of a linear polarization at the given angle.
///
/// For linear polarization at angle theta w.r.t. x: |E> = (cos theta,
/// sin theta); the overall phase is irrelevant so both components are
/// real. The result is unit-norm for every angle.
pub fn angle_deg_to_jones(angle_deg: f64) -> [Complex64; 2] {
    let theta = angle_deg.to_radians();
    [
        Complex64::new(theta.cos(), 0.0),
        Complex64::new(theta.sin(), 0.0),
    ]
}

/// Estimate the linear polarization angle (deg) of a Jones vector.
///
/// Uses theta = atan2(|Ey|, |Ex|), discarding phase; exact for strictly
/// linear states in the first quadrant, a magnitude-based estimate
/// otherwise.
pub fn jones_to_angle_deg(jones: [Complex64; 2]) -> f64 {
    let ax = jones[0].norm();
    let ay = jones[1].norm();
    if ax == 0.0 && ay == 0.0 {
        return 0.0;
    }
    ay.atan2(ax).to_degrees()
}

// ---------- Stokes / Poincare ----------

/// Stokes parameters (S0, S1, S2, S3) of a Jones vector (Ex, Ey).
pub fn jones_to_stokes(jones: [Complex64; 2]) -> [f64; 4] {
    let [ex, ey] = jones;
    let sx = ex.norm_sqr();
    let sy = ey.norm_sqr();
    let cross = ex * ey.conj();
    [sx + sy, sx - sy, 2.0 * cross.re, 2.0 * cross.im]
}

/// Normalize Stokes parameters to a point on the Poincare sphere.
pub fn stokes_to_poincare(stokes: [f64; 4]) -> [f64; 3] {
    let [s0, s1, s2, s3] = stokes;
    if s0 == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [s1 / s0, s2 / s0, s3 / s0]
}

// ---------- Trit <-> PolarizationState convenience ----------

/// Encode a trit as a full polarization state.
pub fn encode_trit(trit: Trit) -> PolarizationState {
    PolarizationState::from_angle_deg(trit_to_angle_deg(trit))
}

/// Decode a trit directly from a linear polarization angle.
pub fn decode_trit_from_angle(angle_deg: f64) -> Trit {
    angle_deg_to_trit(angle_deg)
}

/// Decode a trit from a Jones vector: Jones -> angle -> nearest trit.
pub fn decode_trit_from_jones(jones: [Complex64; 2]) -> Trit {
    angle_deg_to_trit(jones_to_angle_deg(jones))
}

/// Trit -> Poincare sphere coordinates.
pub fn trit_to_poincare(trit: Trit) -> [f64; 3] {
    encode_trit(trit).poincare()
}
