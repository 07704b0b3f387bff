//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the validation API the ingestion handler calls
//! - **Driven Ports (Outbound):** what the host application must supply
//!   (local address enumeration, configuration)

pub mod inbound;
pub mod outbound;

pub use inbound::AnnouncementValidationApi;
pub use outbound::{ConfigProvider, LocalAddressProvider};
