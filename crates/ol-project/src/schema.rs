//! Persisted project document types.
//!
//! The document shape is wire-exact: serde attributes reproduce the project
//! format field for field. All five data sections are required fields on
//! purpose, so a document missing one fails at parse time.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ol_core::{BlockId, NetId, PortId};
use ol_diagram::model::{Net, Port, Rating};
use serde::{Deserialize, Serialize};

/// The only schema version this build reads or writes.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDef {
    pub schema_version: String,
    pub meta: MetaDef,
    pub nets: Vec<Net>,
    pub blocks: Vec<BlockDef>,
    pub connections: Vec<ConnectionDef>,
    pub layout: LayoutDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetaDef {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A typed component as persisted.
///
/// The rating union flattens to sibling `type` / `rating` keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockDef {
    pub id: BlockId,
    pub name: String,
    #[serde(flatten)]
    pub rating: Rating,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,
}

/// A `blockId:portId` endpoint reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortRef {
    pub block: BlockId,
    pub port: PortId,
}

impl TryFrom<String> for PortRef {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once(':') {
            Some((block, port)) if !block.is_empty() && !port.is_empty() => Ok(PortRef {
                block: BlockId::new(block),
                port: PortId::new(port),
            }),
            _ => Err(format!("invalid port reference: {value:?} (expected blockId:portId)")),
        }
    }
}

impl From<PortRef> for String {
    fn from(value: PortRef) -> Self {
        format!("{}:{}", value.block, value.port)
    }
}

/// A persisted wire.
///
/// `net` has no serde default: the key must be present even when its value is
/// null, so a document that forgot net assignments fails loudly instead of
/// loading as "all unassigned".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    pub from: PortRef,
    pub to: PortRef,
    // deserialize_with defeats serde's implicit None-for-missing on Option,
    // making the key itself mandatory while still accepting null
    #[serde(deserialize_with = "required_net")]
    pub net: Option<NetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn required_net<'de, D>(deserializer: D) -> Result<Option<NetId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutBlockDef {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutEdgeDef {
    pub routing: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutDef {
    #[serde(default)]
    pub blocks: BTreeMap<BlockId, LayoutBlockDef>,
    #[serde(default)]
    pub edges: BTreeMap<String, LayoutEdgeDef>,
}
