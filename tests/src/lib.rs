//! # Session Directory Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Validator throughput under hostile input
//! │   └── sd_01_announce_validation.rs
//! │
//! ├── exploits/         # Attack simulations against the trust boundary
//! │   ├── host_injection.rs
//! │   └── field_injection.rs
//! │
//! └── integration/      # Config -> validator -> join info flows
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sd-tests
//!
//! # By category
//! cargo test -p sd-tests integration::
//! cargo test -p sd-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p sd-tests
//! ```

pub mod exploits;
