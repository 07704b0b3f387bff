//! Domain Errors for Announcement Validation
//!
//! Only hostname validation carries a reason; the other validators answer
//! with a plain boolean and the composition layer maps them to
//! [`AnnouncementError`] variants.

use thiserror::Error;

/// Why a claimed hostname was refused.
///
/// The set is closed so callers can log and respond per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    /// A remote announcer claimed an IP literal or a loopback name.
    #[error("remote announcer may not claim an IP address or loopback name")]
    TrustViolation,
    /// A remote announcer claimed something that is not a DNS host name.
    #[error("claimed host is not a valid host name")]
    InvalidShape,
    /// The claim embeds a URL scheme separator or a path separator.
    #[error("claimed host contains a scheme or path separator")]
    SchemeOrPathPresent,
    /// A local announcer left the host empty; there is no observed address
    /// worth substituting.
    #[error("local announcer must state the host explicitly")]
    LocalRequiresExplicitHost,
}

impl RejectionReason {
    /// Short machine-readable label, used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrustViolation => "trust_violation",
            Self::InvalidShape => "invalid_shape",
            Self::SchemeOrPathPresent => "scheme_or_path",
            Self::LocalRequiresExplicitHost => "local_requires_host",
        }
    }
}

/// Errors returned when validating a whole announcement record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnouncementError {
    /// The claimed host was refused.
    #[error("invalid host: {0}")]
    Host(#[from] RejectionReason),
    /// The session id has the wrong shape or length.
    #[error("invalid session id: {0:?}")]
    InvalidSessionId(String),
    /// The protocol version is malformed or not whitelisted.
    #[error("unsupported protocol version: {0:?}")]
    UnsupportedProtocol(String),
    /// Port zero cannot be connected to.
    #[error("invalid port: {0}")]
    InvalidPort(u16),
}
