//! Domain Layer - Pure validation logic with no I/O
//!
//! This module contains the trust-boundary decisions for announcements:
//! - Address classification (IPv6 literals, DNS-name shape)
//! - Hostname claims keyed on announcer trust
//! - Session ids, protocol versions and JSONP callback names
//! - Announcement record types and validation config

pub mod address;
pub mod announcement;
pub mod config;
pub mod errors;
pub mod hostname;
pub mod identifier;
pub mod protocol;
pub mod session_id;

pub use address::*;
pub use announcement::*;
pub use config::*;
pub use errors::*;
pub use hostname::*;
pub use identifier::*;
pub use protocol::*;
pub use session_id::*;
