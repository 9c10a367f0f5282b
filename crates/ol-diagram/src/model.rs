//! Core model types for the one-line diagram.
//!
//! Serde attributes preserve the persisted field names (`V_in`, `I_max`,
//! `phase_in`, ...) so these types serialize to the project format unchanged.

use ol_core::{BlockId, EdgeId, NetId, Phase, PortId};
use serde::{Deserialize, Serialize};

/// Kind of electrical bus a net represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetKind {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "SIGNAL")]
    Signal,
}

/// A named electrical bus.
///
/// Every block attached to a net is assumed to sit at the net's nominal
/// voltage and phase. `tolerance` is a percentage (0-100): the acceptable
/// deviation is ±tolerance% of nominal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Net {
    pub id: NetId,
    pub kind: NetKind,
    pub voltage: f64,
    pub phase: Phase,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

/// The net that exists when an editing session starts.
pub fn default_net() -> Net {
    Net {
        id: NetId::new("net-ac200"),
        kind: NetKind::Ac,
        voltage: 200.0,
        phase: Phase::Single,
        label: "AC200V".to_string(),
        tolerance: Some(10.0),
    }
}

/// Electrical role of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortRole {
    PowerIn,
    PowerOut,
    PassThrough,
}

/// Direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    In,
    Out,
}

/// A port on a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub role: PortRole,
    pub direction: PortDirection,
}

/// Rating of a passive (breaker / switch) block. Wire tag "A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveRating {
    #[serde(rename = "V_max")]
    pub v_max: f64,
    #[serde(rename = "I_max")]
    pub i_max: f64,
    pub phase: Phase,
}

/// Rating of a load block. Wire tag "B".
///
/// A load declares either its input current or its input power; when both are
/// present, current wins. When neither is present, the load's contribution is
/// unknown and the validator says so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRating {
    #[serde(rename = "V_in")]
    pub v_in: f64,
    pub phase: Phase,
    #[serde(rename = "I_in", default, skip_serializing_if = "Option::is_none")]
    pub i_in: Option<f64>,
    #[serde(rename = "P_in", default, skip_serializing_if = "Option::is_none")]
    pub p_in: Option<f64>,
}

/// Input side of a converter rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterInput {
    #[serde(rename = "V_in")]
    pub v_in: f64,
    #[serde(rename = "phase_in")]
    pub phase: Phase,
    #[serde(rename = "I_in_max", default, skip_serializing_if = "Option::is_none")]
    pub i_in_max: Option<f64>,
    #[serde(rename = "P_in_max", default, skip_serializing_if = "Option::is_none")]
    pub p_in_max: Option<f64>,
}

/// Output side of a converter rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterOutput {
    #[serde(rename = "V_out")]
    pub v_out: f64,
    #[serde(rename = "phase_out")]
    pub phase: Phase,
    #[serde(rename = "I_out_max", default, skip_serializing_if = "Option::is_none")]
    pub i_out_max: Option<f64>,
    #[serde(rename = "P_out_max", default, skip_serializing_if = "Option::is_none")]
    pub p_out_max: Option<f64>,
}

/// Rating of a converter / source block. Wire tag "C".
///
/// Input and output sides are independent; `eta` relates input and output
/// power and must lie within (0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterRating {
    #[serde(rename = "in")]
    pub input: ConverterInput,
    #[serde(rename = "out")]
    pub output: ConverterOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<f64>,
}

/// Plain block discriminant, for choosing a rating shape before one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    #[serde(rename = "A")]
    Passive,
    #[serde(rename = "B")]
    Load,
    #[serde(rename = "C")]
    Converter,
}

/// Typed rating of a block: the discriminant decides which fields are legal,
/// so a passive rating can never masquerade as a load rating.
///
/// Adjacently tagged so a persisted block carries `"type": "B"` next to its
/// `"rating": {...}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "rating")]
pub enum Rating {
    #[serde(rename = "A")]
    Passive(PassiveRating),
    #[serde(rename = "B")]
    Load(LoadRating),
    #[serde(rename = "C")]
    Converter(ConverterRating),
}

impl Rating {
    pub fn block_type(&self) -> BlockType {
        match self {
            Rating::Passive(_) => BlockType::Passive,
            Rating::Load(_) => BlockType::Load,
            Rating::Converter(_) => BlockType::Converter,
        }
    }
}

/// A node on the diagram canvas.
///
/// A freshly placed node has no rating yet; validation reports it as
/// incomplete until the user assigns a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: BlockId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Node {
    pub fn new(id: impl Into<BlockId>, label: impl Into<String>, rating: Option<Rating>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            rating,
        }
    }
}

/// A directed wire between two blocks, optionally assigned to a net.
///
/// `net: None` means unassigned, which is valid (the edge is counted, never
/// flagged as an error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: BlockId,
    pub target: BlockId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<NetId>,
}

impl Edge {
    pub fn new(id: EdgeId, source: impl Into<BlockId>, target: impl Into<BlockId>) -> Self {
        Self {
            id,
            source: source.into(),
            target: target.into(),
            net: None,
        }
    }
}
