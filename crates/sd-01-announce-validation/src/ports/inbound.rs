//! # Driving Ports (Inbound API)
//!
//! The API the announcement-ingestion and listing handlers call.

use std::net::IpAddr;

use crate::domain::{
    AnnouncementError, JoinSessionInfo, QueryOptions, RejectionReason, SessionAnnouncement,
};

/// Validation entry points for the session directory.
///
/// # Security
///
/// Every method is a total decision: malformed untrusted input yields a
/// rejection, never a panic.
///
/// # Example
///
/// ```rust,ignore
/// use sd_01_announce_validation::ports::AnnouncementValidationApi;
///
/// fn ingest<T: AnnouncementValidationApi>(api: &T, a: &SessionAnnouncement, peer: IpAddr) {
///     match api.validate_announcement(a, peer) {
///         Ok(accepted) => store(accepted),
///         Err(e) => respond_bad_request(e),
///     }
/// }
/// ```
pub trait AnnouncementValidationApi {
    /// Check a hostname claim against the announcer's observed address.
    fn validate_hostname(&self, host: &str, announcer: IpAddr) -> Result<(), RejectionReason>;

    /// Check every untrusted field of an announcement.
    ///
    /// # Returns
    ///
    /// The announcement ready for storage: an empty host accepted from a
    /// remote announcer is replaced by the announcer's address.
    fn validate_announcement(
        &self,
        announcement: &SessionAnnouncement,
        announcer: IpAddr,
    ) -> Result<SessionAnnouncement, AnnouncementError>;

    /// Check the fields a session refresh may change.
    fn validate_session_update(&self, id: &str, protocol: &str) -> Result<(), AnnouncementError>;

    /// Whether `name` is safe to use as a JSONP callback.
    fn is_valid_callback(&self, name: &str) -> bool;

    /// The query's protocol filter restricted to acceptable versions.
    fn protocol_filter(&self, query: &QueryOptions) -> Vec<String>;

    /// Join descriptor for an accepted announcement.
    fn join_info(&self, announcement: &SessionAnnouncement) -> JoinSessionInfo;
}
