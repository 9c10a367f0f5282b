//! Discrete phase enumeration.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Electrical phase of a net or rating.
///
/// A closed enumeration, not an arbitrary integer: 0 = DC, 1 = single-phase,
/// 3 = three-phase. Serialized as the bare number, matching the project format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Phase {
    Dc,
    Single,
    Three,
}

impl Phase {
    /// Coerce an arbitrary number to a phase, or absent if it is not 0, 1 or 3.
    pub fn from_number(value: f64) -> Option<Phase> {
        match value {
            v if v == 0.0 => Some(Phase::Dc),
            v if v == 1.0 => Some(Phase::Single),
            v if v == 3.0 => Some(Phase::Three),
            _ => None,
        }
    }

    /// Numeric wire representation.
    pub fn as_number(self) -> u8 {
        match self {
            Phase::Dc => 0,
            Phase::Single => 1,
            Phase::Three => 3,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Phase::Dc),
            1 => Ok(Phase::Single),
            3 => Ok(Phase::Three),
            other => Err(format!("invalid phase: {other} (expected 0, 1 or 3)")),
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> u8 {
        phase.as_number()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_closed_set() {
        assert_eq!(Phase::from_number(0.0), Some(Phase::Dc));
        assert_eq!(Phase::from_number(1.0), Some(Phase::Single));
        assert_eq!(Phase::from_number(3.0), Some(Phase::Three));
        assert_eq!(Phase::from_number(2.0), None);
        assert_eq!(Phase::from_number(-1.0), None);
        assert_eq!(Phase::from_number(f64::NAN), None);
    }

    #[test]
    fn serde_as_number() {
        let json = serde_json::to_string(&Phase::Three).unwrap();
        assert_eq!(json, "3");
        let back: Phase = serde_json::from_str("1").unwrap();
        assert_eq!(back, Phase::Single);
        assert!(serde_json::from_str::<Phase>("2").is_err());
    }
}
