//! Photology: Balanced Ternary Optical Logic Simulation
//!
//! Models a three-valued logic encoded as polarization states of light:
//! ternary algebra, trit <-> polarization codec (Jones and Stokes),
//! subwavelength-grating effective-medium design, triple-channel
//! Malus-law detection, and ideal/physical gate evaluation.

pub mod detector;
pub mod dsl;
pub mod engine;
pub mod error;
pub mod grating;
pub mod polarization;
pub mod ternary;
pub mod timing;

pub use detector::{ChannelConfig, DetectorReading, TripleChannelDetector};
pub use engine::{EvalMode, Evaluation, Evaluator, Gate};
pub use error::{Error, Result};
pub use grating::{design_grating, GratingDesign, Material};
pub use polarization::{encode_trit, PolarizationState};
pub use ternary::Trit;
