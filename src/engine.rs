//! Logic Evaluation Dispatcher
//!
//! Name-based gate lookup and the ideal/physical evaluation paths. In
//! physical mode each operand trit is encoded to a polarization state,
//! pushed through the triple-channel detector, and the gate is applied
//! to the observed trits.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detector::{DetectorReading, TripleChannelDetector};
use crate::error::{Error, Result};
use crate::polarization::{encode_trit, PolarizationState};
use crate::ternary::{self, Trit};

/// The gate set exposed to the UI dropdowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    Cyclic,
    Negator,
    Antinegator,
    Tnot,
    Tand,
    Tnand,
}

/// All gates, unary first.
pub const GATES: [Gate; 6] = [
    Gate::Cyclic,
    Gate::Negator,
    Gate::Antinegator,
    Gate::Tnot,
    Gate::Tand,
    Gate::Tnand,
];

impl Gate {
    /// Look up a gate by its display name; unknown names are a domain
    /// error.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Cyclic" => Ok(Gate::Cyclic),
            "Negator" => Ok(Gate::Negator),
            "Antinegator" => Ok(Gate::Antinegator),
            "TNOT" => Ok(Gate::Tnot),
            "TAND" => Ok(Gate::Tand),
            "TNAND" => Ok(Gate::Tnand),
            other => Err(Error::Domain(format!("unknown gate name: {other}"))),
        }
    }

    /// Display name, matching the UI dropdown entries.
    pub fn name(self) -> &'static str {
        match self {
            Gate::Cyclic => "Cyclic",
            Gate::Negator => "Negator",
            Gate::Antinegator => "Antinegator",
            Gate::Tnot => "TNOT",
            Gate::Tand => "TAND",
            Gate::Tnand => "TNAND",
        }
    }

    /// Declared operand count: 1 or 2.
    pub fn arity(self) -> usize {
        match self {
            Gate::Cyclic | Gate::Negator | Gate::Antinegator | Gate::Tnot => 1,
            Gate::Tand | Gate::Tnand => 2,
        }
    }

    /// Apply the gate, rejecting a wrong operand count.
    pub fn apply(self, operands: &[Trit]) -> Result<Trit> {
        if operands.len() != self.arity() {
            return Err(Error::Arity {
                gate: self.name().to_string(),
                expected: self.arity(),
                got: operands.len(),
            });
        }
        Ok(match self {
            Gate::Cyclic => ternary::cyclic(operands[0]),
            Gate::Negator => ternary::negator(operands[0]),
            Gate::Antinegator => ternary::antinegator(operands[0]),
            Gate::Tnot => ternary::tnot(operands[0]),
            Gate::Tand => ternary::tand(operands[0], operands[1]),
            Gate::Tnand => ternary::tnand(operands[0], operands[1]),
        })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of the unary gates, for populating dropdowns.
pub fn unary_gate_names() -> Vec<&'static str> {
    GATES
        .iter()
        .filter(|g| g.arity() == 1)
        .map(|g| g.name())
        .collect()
}

/// Names of the binary gates, for populating dropdowns.
pub fn binary_gate_names() -> Vec<&'static str> {
    GATES
        .iter()
        .filter(|g| g.arity() == 2)
        .map(|g| g.name())
        .collect()
}

/// Evaluation path, selected per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalMode {
    /// Operand trits flow directly into the gate.
    Ideal,
    /// Operands are encoded, detected, and the gate runs on the
    /// observed trits.
    Physical,
}

/// What happened to one operand on its way through the channel.
#[derive(Clone, Debug)]
pub struct OperandTrace {
    pub input: Trit,
    pub state: PolarizationState,
    /// Present in physical mode only.
    pub reading: Option<DetectorReading>,
    /// Equal to `input` in ideal mode; the detector's decode otherwise.
    pub observed: Trit,
}

/// Full result of one evaluation, with the intermediate physical
/// quantities the visualization layer renders.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub gate: Gate,
    pub mode: EvalMode,
    pub ideal: Trit,
    /// Gate output on the observed trits; physical mode only.
    pub observed: Option<Trit>,
    pub operands: Vec<OperandTrace>,
}

/// Dispatcher owning the detector used by the physical path.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    pub detector: TripleChannelDetector,
}

impl Evaluator {
    pub fn new(detector: TripleChannelDetector) -> Self {
        Self { detector }
    }

    /// Evaluate a gate by name on the given operands.
    pub fn evaluate(&self, gate_name: &str, operands: &[Trit], mode: EvalMode) -> Result<Evaluation> {
        self.evaluate_gate(Gate::from_name(gate_name)?, operands, mode)
    }

    /// Evaluate an already-resolved gate.
    pub fn evaluate_gate(&self, gate: Gate, operands: &[Trit], mode: EvalMode) -> Result<Evaluation> {
        let ideal = gate.apply(operands)?;

        let mut traces = Vec::with_capacity(operands.len());
        let mut observed_inputs = Vec::with_capacity(operands.len());
        for &input in operands {
            let state = encode_trit(input);
            let (reading, observed) = match mode {
                EvalMode::Ideal => (None, input),
                EvalMode::Physical => {
                    let reading = self.detector.detect_from_state(&state)?;
                    (Some(reading), reading.decoded)
                }
            };
            observed_inputs.push(observed);
            traces.push(OperandTrace {
                input,
                state,
                reading,
                observed,
            });
        }

        let observed = match mode {
            EvalMode::Ideal => None,
            EvalMode::Physical => Some(gate.apply(&observed_inputs)?),
        };

        debug!(
            gate = gate.name(),
            ?mode,
            %ideal,
            observed = observed.map(|t| t.value()),
            "evaluated gate"
        );

        Ok(Evaluation {
            gate,
            mode,
            ideal,
            observed,
            operands: traces,
        })
    }
}
