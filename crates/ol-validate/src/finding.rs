//! Validation findings.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Severity of a finding.
///
/// `Error` means the network is electrically inconsistent as modeled; `Warn`
/// means the model is incomplete but not provably wrong; `Info` is reserved
/// for advisory notices (no rule emits it today).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(s)
    }
}

/// One validation result.
///
/// The id is derived from level, target and message, so identical findings
/// from repeated runs carry identical ids and downstream consumers can
/// deduplicate them naturally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub level: Level,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Finding {
    pub fn new(level: Level, message: impl Into<String>, target: Option<&str>) -> Self {
        let message = message.into();
        let raw = format!("{}-{}-{}", level, target.unwrap_or("global"), message);
        // collapse whitespace runs so the id is a single token
        let id = raw.split_whitespace().collect::<Vec<_>>().join("-");
        Self {
            id,
            level,
            message,
            target: target.map(str::to_string),
        }
    }

    pub fn error(message: impl Into<String>, target: Option<&str>) -> Self {
        Self::new(Level::Error, message, target)
    }

    pub fn warn(message: impl Into<String>, target: Option<&str>) -> Self {
        Self::new(Level::Warn, message, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_and_tokenized() {
        let a = Finding::error("Voltage mismatch: net=220V required=200V", Some("net-1"));
        let b = Finding::error("Voltage mismatch: net=220V required=200V", Some("net-1"));
        assert_eq!(a.id, b.id);
        assert!(!a.id.contains(' '));
        assert!(a.id.starts_with("error-net-1-"));
    }

    #[test]
    fn untargeted_findings_are_global() {
        let f = Finding::warn("Edge references missing net: net-9", None);
        assert!(f.id.starts_with("warn-global-"));
        assert_eq!(f.target, None);
    }
}
