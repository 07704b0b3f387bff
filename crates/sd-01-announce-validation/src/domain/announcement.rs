//! Announcement Records
//!
//! Plain data carried between the ingestion handler and the validators.
//! Storage and listing of these records live outside this crate.

/// Sentinel for "active drawing user count not reported".
pub const UNKNOWN_DRAWING_USERS: i32 = -1;

/// A session announcement as submitted by a host.
///
/// `host`, `id` and `protocol` are untrusted and must pass validation
/// before the record is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionAnnouncement {
    pub realm: String,
    pub host: String,
    pub port: u16,
    pub id: String,
    pub protocol: String,
    pub title: String,
    pub users: u32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "maxusers", skip_serializing_if = "Option::is_none")
    )]
    pub max_users: Option<u32>,
    pub usernames: Vec<String>,
    pub password: bool,
    pub nsfm: bool,
    pub owner: String,
    pub started: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub private: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub closed: bool,
    /// `UNKNOWN_DRAWING_USERS` when the host did not report it.
    #[cfg_attr(feature = "serde", serde(rename = "activedrawingusers"))]
    pub active_drawing_users: i32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "allowweb", skip_serializing_if = "is_false")
    )]
    pub allow_web: bool,
}

impl Default for SessionAnnouncement {
    fn default() -> Self {
        Self {
            realm: String::new(),
            host: String::new(),
            port: 0,
            id: String::new(),
            protocol: String::new(),
            title: String::new(),
            users: 0,
            max_users: None,
            usernames: Vec::new(),
            password: false,
            nsfm: false,
            owner: String::new(),
            started: String::new(),
            private: false,
            closed: false,
            active_drawing_users: UNKNOWN_DRAWING_USERS,
            allow_web: false,
        }
    }
}

impl SessionAnnouncement {
    /// The reduced view handed to a client that wants to join.
    pub fn join_info(&self) -> JoinSessionInfo {
        JoinSessionInfo {
            host: self.host.clone(),
            port: self.port,
            id: self.id.clone(),
        }
    }
}

#[cfg(feature = "serde")]
fn is_false(b: &bool) -> bool {
    !*b
}

/// Minimum info needed to join a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinSessionInfo {
    pub host: String,
    pub port: u16,
    pub id: String,
}

impl JoinSessionInfo {
    /// `host:port`, with IPv6 hosts bracketed.
    pub fn host_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Session list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Filter by realm
    pub realm: String,
    /// Filter by title
    pub title: String,
    /// Include NSFM sessions
    pub nsfm: bool,
    /// Comma separated protocol versions
    pub protocol: String,
}

impl QueryOptions {
    /// The protocol filter split on commas, trimmed, empties dropped.
    pub fn protocols(&self) -> Vec<&str> {
        self.protocol
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}
