//! ol-project: canonical project file format and validation.

pub mod schema;
pub mod validate;

use chrono::Utc;
use ol_core::EdgeId;
use ol_diagram::model::{Edge, Net, Node};

pub use schema::{
    BlockDef, ConnectionDef, LayoutBlockDef, LayoutDef, LayoutEdgeDef, MetaDef, PortRef,
    ProjectDef, SCHEMA_VERSION,
};
pub use validate::{ValidationError, validate_project};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a project from JSON and run load-time validation.
pub fn parse_json(content: &str) -> ProjectResult<ProjectDef> {
    let project: ProjectDef = serde_json::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

/// Serialize a project to pretty JSON, validating first.
pub fn to_json_string(project: &ProjectDef) -> ProjectResult<String> {
    validate_project(project)?;
    Ok(serde_json::to_string_pretty(project)?)
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<ProjectDef> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &std::path::Path, project: &ProjectDef) -> ProjectResult<()> {
    let content = to_json_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<ProjectDef> {
    let content = std::fs::read_to_string(path)?;
    let project: ProjectDef = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &ProjectDef) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// A fresh document with current timestamps and no content.
pub fn empty_project(title: impl Into<String>, author: impl Into<String>) -> ProjectDef {
    let now = Utc::now();
    ProjectDef {
        schema_version: SCHEMA_VERSION.to_string(),
        meta: MetaDef {
            title: title.into(),
            created_at: now,
            updated_at: now,
            author: author.into(),
            description: None,
        },
        nets: Vec::new(),
        blocks: Vec::new(),
        connections: Vec::new(),
        layout: LayoutDef::default(),
    }
}

impl ProjectDef {
    /// Split the document into the collections the validator and editor
    /// consume. Connection endpoints collapse to their block ids; edge ids are
    /// derived from the connection index.
    pub fn into_collections(self) -> (Vec<Node>, Vec<Edge>, Vec<Net>) {
        let nodes = self
            .blocks
            .into_iter()
            .map(|block| Node::new(block.id, block.name, Some(block.rating)))
            .collect();
        let edges = self
            .connections
            .into_iter()
            .enumerate()
            .map(|(index, conn)| {
                let mut edge = Edge::new(
                    EdgeId::new(format!("e{index}")),
                    conn.from.block,
                    conn.to.block,
                );
                edge.net = conn.net;
                edge
            })
            .collect();
        (nodes, edges, self.nets)
    }
}
