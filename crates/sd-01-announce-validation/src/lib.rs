//! # Announcement Validation Subsystem
//!
//! **Subsystem ID:** 1
//!
//! Trust-boundary checks for the session directory. Hosts announce live
//! sessions from arbitrary network peers, and the directory later hands the
//! announced host, session id and protocol to other clients. This crate
//! decides which of those untrusted strings may be stored.
//!
//! ## Pure Core
//!
//! The domain validators are total, side-effect-free functions. The only
//! I/O is interface enumeration, which sits behind the
//! `LocalAddressProvider` port:
//!
//! - `system-interfaces` - OS interface enumeration (if-addrs), on by default
//! - `serde` - JSON field mapping for announcement records
//! - `toml-config` - TOML config file loading
//!
//! ## Architecture
//!
//! - **Domain Layer:** classifiers, hostname trust policy, field validators
//! - **Ports Layer:** inbound validation API, outbound address/config SPIs
//! - **Service Layer:** `AnnouncementValidator` wires domain to ports
//! - **Adapters Layer:** address providers, snapshot cache, config loaders
//!
//! ## Example
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//! use sd_01_announce_validation::{
//!     validate_hostname, LocalAddressSet, RejectionReason,
//! };
//!
//! let local = LocalAddressSet::loopback();
//! let remote = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 20));
//!
//! assert_eq!(validate_hostname("example.com", remote, &local), Ok(()));
//! assert_eq!(
//!     validate_hostname("localhost", remote, &local),
//!     Err(RejectionReason::TrustViolation)
//! );
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

/// Adapters for local addresses and configuration.
pub mod adapters;

// =============================================================================
// CORE RE-EXPORTS (Always Available)
// =============================================================================

// Domain types
pub use domain::{
    AnnouncementError, JoinSessionInfo, LocalAddressSet, ProtocolVersion, QueryOptions,
    RejectionReason, SessionAnnouncement, SessionIdKind, ValidationConfig,
    MAX_SESSION_ID_LEN, UNKNOWN_DRAWING_USERS,
};

// Domain validators
pub use domain::{
    classify_session_id, is_ip_literal, is_ipv4_address, is_ipv6_address, is_loopback_name,
    is_named_host, is_valid_identifier_name, is_valid_protocol, is_valid_session_id,
    is_well_formed_protocol, is_whitelisted_protocol, validate_hostname,
};

// Port traits
pub use ports::{AnnouncementValidationApi, ConfigProvider, LocalAddressProvider};

// Service
pub use service::AnnouncementValidator;

// =============================================================================
// ADAPTER RE-EXPORTS
// =============================================================================

pub use adapters::{CachedLocalAddresses, StaticConfigProvider, StaticLocalAddresses};

#[cfg(feature = "system-interfaces")]
pub use adapters::SystemLocalAddresses;

#[cfg(feature = "toml-config")]
pub use adapters::{ConfigError, TomlConfigProvider};

/// Addresses of this instance as seen by the operating system.
///
/// Always contains loopback; on enumeration failure it is loopback only.
#[cfg(feature = "system-interfaces")]
pub fn local_addresses() -> LocalAddressSet {
    SystemLocalAddresses::new().local_addresses()
}
