//! Load-time structural validation.
//!
//! These are the failures the runtime validator cannot continue past: a
//! document that violates them would silently corrupt the net-assignment
//! invariant, so loading stops here.

use std::collections::HashSet;

use ol_core::ensure_finite;

use crate::schema::{ProjectDef, SCHEMA_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported schema_version: {version}")]
    UnsupportedVersion { version: String },

    #[error("Duplicate id: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Net id is required (net at index {index})")]
    EmptyNetId { index: usize },

    #[error("Connection at index {index} references unknown net id: {id}")]
    UnknownNetRef { index: usize, id: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_project(project: &ProjectDef) -> Result<(), ValidationError> {
    if project.schema_version != SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.schema_version.clone(),
        });
    }

    let mut net_ids = HashSet::new();
    for (index, net) in project.nets.iter().enumerate() {
        if net.id.as_str().is_empty() {
            return Err(ValidationError::EmptyNetId { index });
        }
        if !net_ids.insert(&net.id) {
            return Err(ValidationError::DuplicateId {
                id: net.id.to_string(),
                context: "nets".to_string(),
            });
        }
        if ensure_finite(net.voltage, "net voltage").is_err() {
            return Err(ValidationError::InvalidValue {
                field: format!("net '{}' voltage", net.id),
                value: net.voltage.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    let mut block_ids = HashSet::new();
    for block in &project.blocks {
        if !block_ids.insert(&block.id) {
            return Err(ValidationError::DuplicateId {
                id: block.id.to_string(),
                context: "blocks".to_string(),
            });
        }
    }

    for (index, conn) in project.connections.iter().enumerate() {
        if let Some(net) = &conn.net {
            if !net_ids.contains(net) {
                return Err(ValidationError::UnknownNetRef {
                    index,
                    id: net.to_string(),
                });
            }
        }
    }

    Ok(())
}
