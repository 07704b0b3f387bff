//! AnnouncementValidationApi implementation.

use std::net::IpAddr;

use tracing::{debug, warn};

use super::core::AnnouncementValidator;
use crate::domain::{
    is_valid_identifier_name, is_valid_protocol, is_valid_session_id, validate_hostname,
    AnnouncementError, JoinSessionInfo, QueryOptions, RejectionReason, SessionAnnouncement,
};
use crate::ports::{AnnouncementValidationApi, LocalAddressProvider};

impl<P: LocalAddressProvider> AnnouncementValidationApi for AnnouncementValidator<P> {
    fn validate_hostname(&self, host: &str, announcer: IpAddr) -> Result<(), RejectionReason> {
        let local = self.local_addresses();
        validate_hostname(host, announcer, &local).inspect_err(|reason| match reason {
            RejectionReason::TrustViolation | RejectionReason::SchemeOrPathPresent => warn!(
                host = host,
                announcer = %announcer,
                reason = reason.as_str(),
                "Rejected hostname claim"
            ),
            _ => debug!(
                host = host,
                announcer = %announcer,
                reason = reason.as_str(),
                "Rejected hostname claim"
            ),
        })
    }

    fn validate_announcement(
        &self,
        announcement: &SessionAnnouncement,
        announcer: IpAddr,
    ) -> Result<SessionAnnouncement, AnnouncementError> {
        self.validate_hostname(&announcement.host, announcer)?;
        self.validate_session_update(&announcement.id, &announcement.protocol)?;

        if announcement.port == 0 {
            return Err(AnnouncementError::InvalidPort(announcement.port));
        }

        let mut accepted = announcement.clone();
        if accepted.host.is_empty() {
            accepted.host = announcer.to_canonical().to_string();
            debug!(
                announcer = %announcer,
                session = %accepted.id,
                "Using observed address as session host"
            );
        }

        Ok(accepted)
    }

    fn validate_session_update(&self, id: &str, protocol: &str) -> Result<(), AnnouncementError> {
        if !is_valid_session_id(id) {
            debug!(session = id, "Rejected session id");
            return Err(AnnouncementError::InvalidSessionId(id.to_string()));
        }

        if !is_valid_protocol(protocol, &self.config.protocol_whitelist) {
            debug!(
                protocol = protocol,
                whitelisted = !self.config.protocol_whitelist.is_empty(),
                "Rejected protocol version"
            );
            return Err(AnnouncementError::UnsupportedProtocol(protocol.to_string()));
        }

        Ok(())
    }

    fn is_valid_callback(&self, name: &str) -> bool {
        is_valid_identifier_name(name)
    }

    fn protocol_filter(&self, query: &QueryOptions) -> Vec<String> {
        query
            .protocols()
            .into_iter()
            .filter(|p| is_valid_protocol(p, &self.config.protocol_whitelist))
            .map(str::to_string)
            .collect()
    }

    fn join_info(&self, announcement: &SessionAnnouncement) -> JoinSessionInfo {
        announcement.join_info()
    }
}
