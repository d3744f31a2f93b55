//! Balanced Ternary Algebra
//!
//! The trit value set {-1, 0, +1} and the unary/binary gate functions
//! over it. All gates are pure and total over `Trit`; the only fallible
//! entry point is construction from a raw integer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Balanced ternary digit: -1, 0, +1.
///
/// Variants are declared in ascending order so the derived `Ord`
/// follows -1 < 0 < +1.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(i8)]
pub enum Trit {
    Minus = -1,
    Zero = 0,
    Plus = 1,
}

impl Trit {
    /// All trits in ascending order.
    pub const ALL: [Trit; 3] = [Trit::Minus, Trit::Zero, Trit::Plus];

    /// Construct from -1, 0, +1; any other value is a domain error.
    pub fn from_i8(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(Trit::Minus),
            0 => Ok(Trit::Zero),
            1 => Ok(Trit::Plus),
            other => Err(Error::Domain(format!(
                "invalid trit value {other}, expected -1, 0, or +1"
            ))),
        }
    }

    /// Numeric value in {-1, 0, +1}.
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::Minus => write!(f, "-1"),
            Trit::Zero => write!(f, "0"),
            Trit::Plus => write!(f, "+1"),
        }
    }
}

// ---------- Unary gates ----------

/// Cyclic inverter C: -1 -> 0, 0 -> +1, +1 -> -1.
pub fn cyclic(t: Trit) -> Trit {
    match t {
        Trit::Minus => Trit::Zero,
        Trit::Zero => Trit::Plus,
        Trit::Plus => Trit::Minus,
    }
}

/// Negator N: drives every input to -1.
pub fn negator(_t: Trit) -> Trit {
    Trit::Minus
}

/// Antinegator A: drives every input to +1.
pub fn antinegator(_t: Trit) -> Trit {
    Trit::Plus
}

/// Ternary NOT: sign inversion, preserves 0.
pub fn tnot(t: Trit) -> Trit {
    match t {
        Trit::Minus => Trit::Plus,
        Trit::Zero => Trit::Zero,
        Trit::Plus => Trit::Minus,
    }
}

// ---------- Binary gates ----------

/// Ternary AND: minimum in the order -1 < 0 < +1.
pub fn tand(a: Trit, b: Trit) -> Trit {
    a.min(b)
}

/// Ternary OR: maximum in the order -1 < 0 < +1.
pub fn tor(a: Trit, b: Trit) -> Trit {
    a.max(b)
}

/// Ternary NAND: TNOT(TAND(a, b)) = -min(a, b).
pub fn tnand(a: Trit, b: Trit) -> Trit {
    tnot(tand(a, b))
}

/// Ternary NOR: TNOT(TOR(a, b)) = -max(a, b).
pub fn tnor(a: Trit, b: Trit) -> Trit {
    tnot(tor(a, b))
}

/// Ternary XOR: symmetric difference detector.
///
/// Truth table (rows a, columns b over -1, 0, +1):
///   -1:  0 -1 +1
///    0: -1  0 -1
///   +1: +1 -1  0
pub fn txor(a: Trit, b: Trit) -> Trit {
    use Trit::*;
    match (a, b) {
        (Minus, Minus) | (Zero, Zero) | (Plus, Plus) => Zero,
        (Minus, Plus) | (Plus, Minus) => Plus,
        _ => Minus,
    }
}

/// Ternary half-adder sum digit.
pub fn tsum(a: Trit, b: Trit) -> Trit {
    match a.value() + b.value() {
        -1 => Trit::Minus,
        1 => Trit::Plus,
        _ => Trit::Zero,
    }
}

/// Ternary half-adder carry digit.
pub fn tcarry(a: Trit, b: Trit) -> Trit {
    match a.value() + b.value() {
        -2 => Trit::Minus,
        2 => Trit::Plus,
        _ => Trit::Zero,
    }
}

// ---------- Truth-table helpers ----------

/// Truth table for a unary gate, in input order (-1, 0, +1).
pub fn truth_table_unary(op: fn(Trit) -> Trit) -> [(Trit, Trit); 3] {
    let mut table = [(Trit::Zero, Trit::Zero); 3];
    for (row, &t) in table.iter_mut().zip(Trit::ALL.iter()) {
        *row = (t, op(t));
    }
    table
}

/// Truth table for a binary gate over all 3x3 input pairs.
pub fn truth_table_binary(op: fn(Trit, Trit) -> Trit) -> [(Trit, Trit, Trit); 9] {
    let mut table = [(Trit::Zero, Trit::Zero, Trit::Zero); 9];
    let mut i = 0;
    for &a in &Trit::ALL {
        for &b in &Trit::ALL {
            table[i] = (a, b, op(a, b));
            i += 1;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i8_rejects_out_of_domain() {
        assert!(Trit::from_i8(-1).is_ok());
        assert!(Trit::from_i8(0).is_ok());
        assert!(Trit::from_i8(1).is_ok());
        assert!(Trit::from_i8(2).is_err());
        assert!(Trit::from_i8(-2).is_err());
    }

    #[test]
    fn test_tnot_involution() {
        for t in Trit::ALL {
            assert_eq!(tnot(tnot(t)), t);
        }
    }

    #[test]
    fn test_cyclic_full_cycle() {
        for t in Trit::ALL {
            assert_eq!(cyclic(cyclic(cyclic(t))), t);
        }
    }

    #[test]
    fn test_negator_antinegator_saturate() {
        for t in Trit::ALL {
            assert_eq!(negator(t), Trit::Minus);
            assert_eq!(antinegator(t), Trit::Plus);
        }
    }

    #[test]
    fn test_tand_is_commutative_min() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(tand(a, b), tand(b, a));
                assert_eq!(tand(a, b).value(), a.value().min(b.value()));
            }
        }
    }

    #[test]
    fn test_tor_is_commutative_max() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(tor(a, b), tor(b, a));
                assert_eq!(tor(a, b).value(), a.value().max(b.value()));
            }
        }
    }

    #[test]
    fn test_tand_identity_and_absorbing() {
        for t in Trit::ALL {
            assert_eq!(tand(t, Trit::Plus), t);
            assert_eq!(tand(t, Trit::Minus), Trit::Minus);
        }
    }

    #[test]
    fn test_tnand_tnor_are_negated_forms() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(tnand(a, b), tnot(tand(a, b)));
                assert_eq!(tnor(a, b), tnot(tor(a, b)));
            }
        }
    }

    #[test]
    fn test_txor_table() {
        use Trit::*;
        let expected = [
            (Minus, Minus, Zero),
            (Minus, Zero, Minus),
            (Minus, Plus, Plus),
            (Zero, Minus, Minus),
            (Zero, Zero, Zero),
            (Zero, Plus, Minus),
            (Plus, Minus, Plus),
            (Plus, Zero, Minus),
            (Plus, Plus, Zero),
        ];
        for (a, b, y) in expected {
            assert_eq!(txor(a, b), y, "TXOR({a}, {b})");
        }
    }

    #[test]
    fn test_half_adder_digits() {
        use Trit::*;
        let sum_expected = [
            (Minus, Minus, Zero),
            (Minus, Zero, Minus),
            (Minus, Plus, Zero),
            (Zero, Minus, Minus),
            (Zero, Zero, Zero),
            (Zero, Plus, Plus),
            (Plus, Minus, Zero),
            (Plus, Zero, Plus),
            (Plus, Plus, Zero),
        ];
        for (a, b, y) in sum_expected {
            assert_eq!(tsum(a, b), y, "TSUM({a}, {b})");
        }
        assert_eq!(tcarry(Plus, Plus), Plus);
        assert_eq!(tcarry(Minus, Minus), Minus);
        assert_eq!(tcarry(Plus, Minus), Zero);
        assert_eq!(tcarry(Zero, Plus), Zero);
    }

    #[test]
    fn test_truth_table_shapes() {
        let unary = truth_table_unary(tnot);
        assert_eq!(unary[0], (Trit::Minus, Trit::Plus));
        let binary = truth_table_binary(tand);
        assert_eq!(binary.len(), 9);
        assert_eq!(binary[8], (Trit::Plus, Trit::Plus, Trit::Plus));
    }
}
