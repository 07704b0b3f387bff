//! Structured protocol version values.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Legacy `major.minor`, no sign and no leading zeros.
static LEGACY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("legacy protocol regex is invalid")
});

/// `namespace:` followed by three or more dotted components.
static NAMESPACED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*):((?:0|[1-9][0-9]*)(?:\.(?:0|[1-9][0-9]*)){2,})$")
        .expect("namespaced protocol regex is invalid")
});

/// A parsed protocol version.
///
/// Components are kept as their decimal digit strings; the grammar puts no
/// upper bound on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    /// Flat numbering: `10.0`
    Legacy {
        /// Major version digits
        major: String,
        /// Minor version digits
        minor: String,
    },
    /// Namespaced numbering: `dp:4.20.1`
    Namespaced {
        /// Namespace token before the colon
        namespace: String,
        /// At least three numeric components
        components: Vec<String>,
    },
}

impl ProtocolVersion {
    /// Parse a version string, returning `None` for any other shape.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(caps) = LEGACY_REGEX.captures(s) {
            return Some(Self::Legacy {
                major: caps[1].to_string(),
                minor: caps[2].to_string(),
            });
        }

        let caps = NAMESPACED_REGEX.captures(s)?;
        Some(Self::Namespaced {
            namespace: caps[1].to_string(),
            components: caps[2].split('.').map(str::to_string).collect(),
        })
    }

    /// Namespace token, if any.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Legacy { .. } => None,
            Self::Namespaced { namespace, .. } => Some(namespace),
        }
    }

    /// True for the flat `major.minor` shape.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy { .. })
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy { major, minor } => write!(f, "{}.{}", major, minor),
            Self::Namespaced {
                namespace,
                components,
            } => write!(f, "{}:{}", namespace, components.join(".")),
        }
    }
}
