//! Serializable cipher descriptions.
//!
//! A [`CipherSpec`] names one cipher together with its key material. It can
//! be read from JSON (`{"cipher": "columnar", "key": "CARGO"}`) or assembled
//! from command-line flags, and runs like any other [`Transposition`].

use crate::cipher::{
    columnar_walk, disrupted_count_walk, disrupted_line_walk, myszkowski_walk, route_walk, Elastic,
    Magnet, RailFence, Reverse, Route, RouteKind, Scytale, Transposition,
};
use crate::error::{Result, TranspositionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Cipher families known to the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Columnar,
    Myszkowski,
    DisruptedCount,
    DisruptedLine,
    Spiral,
    Serpent,
    RailFence,
    Scytale,
    Reverse,
    Magnet,
    Elastic,
}

impl CipherKind {
    pub const ALL: [CipherKind; 11] = [
        CipherKind::Columnar,
        CipherKind::Myszkowski,
        CipherKind::DisruptedCount,
        CipherKind::DisruptedLine,
        CipherKind::Spiral,
        CipherKind::Serpent,
        CipherKind::RailFence,
        CipherKind::Scytale,
        CipherKind::Reverse,
        CipherKind::Magnet,
        CipherKind::Elastic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Columnar => "columnar",
            CipherKind::Myszkowski => "myszkowski",
            CipherKind::DisruptedCount => "disrupted-count",
            CipherKind::DisruptedLine => "disrupted-line",
            CipherKind::Spiral => "spiral",
            CipherKind::Serpent => "serpent",
            CipherKind::RailFence => "rail-fence",
            CipherKind::Scytale => "scytale",
            CipherKind::Reverse => "reverse",
            CipherKind::Magnet => "magnet",
            CipherKind::Elastic => "elastic",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = TranspositionError;
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        match wanted.as_str() {
            "zigzag" => return Ok(Self::RailFence),
            "column" => return Ok(Self::Columnar),
            _ => {}
        }
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| TranspositionError::UnknownCipher(s.to_string()))
    }
}

/// One cipher and its key material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "kebab-case")]
pub enum CipherSpec {
    Columnar {
        key: String,
    },
    Myszkowski {
        key: String,
    },
    DisruptedCount {
        key: String,
        disruption_key: String,
    },
    DisruptedLine {
        key: String,
        #[serde(default)]
        fill: bool,
    },
    Spiral {
        width: usize,
        #[serde(default = "default_route")]
        route: Route,
    },
    Serpent {
        width: usize,
        #[serde(default = "default_route")]
        route: Route,
    },
    RailFence {
        lines: usize,
    },
    Scytale {
        lines: usize,
    },
    Reverse,
    Magnet,
    Elastic,
}

fn default_route() -> Route {
    Route::TLR
}

/// Flag values a [`CipherSpec`] can be assembled from
#[derive(Debug, Clone, Default)]
pub struct SpecParts {
    pub key: Option<String>,
    pub disruption_key: Option<String>,
    pub fill: bool,
    pub width: Option<usize>,
    pub route: Option<Route>,
    pub lines: Option<usize>,
}

fn required<T>(value: Option<T>, name: &str, kind: CipherKind) -> Result<T> {
    value.ok_or_else(|| TranspositionError::MissingParameter(format!("{} needs --{}", kind, name)))
}

impl CipherSpec {
    pub fn kind(&self) -> CipherKind {
        match self {
            CipherSpec::Columnar { .. } => CipherKind::Columnar,
            CipherSpec::Myszkowski { .. } => CipherKind::Myszkowski,
            CipherSpec::DisruptedCount { .. } => CipherKind::DisruptedCount,
            CipherSpec::DisruptedLine { .. } => CipherKind::DisruptedLine,
            CipherSpec::Spiral { .. } => CipherKind::Spiral,
            CipherSpec::Serpent { .. } => CipherKind::Serpent,
            CipherSpec::RailFence { .. } => CipherKind::RailFence,
            CipherSpec::Scytale { .. } => CipherKind::Scytale,
            CipherSpec::Reverse => CipherKind::Reverse,
            CipherSpec::Magnet => CipherKind::Magnet,
            CipherSpec::Elastic => CipherKind::Elastic,
        }
    }

    /// Assemble a spec from individual parameters
    pub fn from_parts(kind: CipherKind, parts: SpecParts) -> Result<Self> {
        let route = parts.route.unwrap_or_else(default_route);
        Ok(match kind {
            CipherKind::Columnar => CipherSpec::Columnar {
                key: required(parts.key, "key", kind)?,
            },
            CipherKind::Myszkowski => CipherSpec::Myszkowski {
                key: required(parts.key, "key", kind)?,
            },
            CipherKind::DisruptedCount => CipherSpec::DisruptedCount {
                key: required(parts.key, "key", kind)?,
                disruption_key: required(parts.disruption_key, "disruption-key", kind)?,
            },
            CipherKind::DisruptedLine => CipherSpec::DisruptedLine {
                key: required(parts.key, "key", kind)?,
                fill: parts.fill,
            },
            CipherKind::Spiral => CipherSpec::Spiral {
                width: required(parts.width, "width", kind)?,
                route,
            },
            CipherKind::Serpent => CipherSpec::Serpent {
                width: required(parts.width, "width", kind)?,
                route,
            },
            CipherKind::RailFence => CipherSpec::RailFence {
                lines: required(parts.lines, "lines", kind)?,
            },
            CipherKind::Scytale => CipherSpec::Scytale {
                lines: required(parts.lines, "lines", kind)?,
            },
            CipherKind::Reverse => CipherSpec::Reverse,
            CipherKind::Magnet => CipherSpec::Magnet,
            CipherKind::Elastic => CipherSpec::Elastic,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a spec from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Column key, for the keyed ciphers
    pub fn key(&self) -> Option<&str> {
        match self {
            CipherSpec::Columnar { key }
            | CipherSpec::Myszkowski { key }
            | CipherSpec::DisruptedCount { key, .. }
            | CipherSpec::DisruptedLine { key, .. } => Some(key),
            _ => None,
        }
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

impl Transposition for CipherSpec {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        match self {
            CipherSpec::Columnar { key } => columnar_walk(len, &chars(key)),
            CipherSpec::Myszkowski { key } => myszkowski_walk(len, &chars(key)),
            CipherSpec::DisruptedCount {
                key,
                disruption_key,
            } => disrupted_count_walk(len, &chars(key), &chars(disruption_key)),
            CipherSpec::DisruptedLine { key, fill } => disrupted_line_walk(len, &chars(key), *fill),
            CipherSpec::Spiral { width, route } => route_walk(len, *width, *route, RouteKind::Spiral),
            CipherSpec::Serpent { width, route } => route_walk(len, *width, *route, RouteKind::Serpent),
            CipherSpec::RailFence { lines } => RailFence { lines: *lines }.walk(len),
            CipherSpec::Scytale { lines } => Scytale { lines: *lines }.walk(len),
            CipherSpec::Reverse => Reverse.walk(len),
            CipherSpec::Magnet => Magnet.walk(len),
            CipherSpec::Elastic => Elastic.walk(len),
        }
    }
}
