use std::fmt;

use serde::{Deserialize, Serialize};

/// Actor roles. Staff advance orders and see every order in their tenant;
/// clientes create orders and see only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "STAFF")]
    Staff,
    #[serde(rename = "CLIENTE")]
    Cliente,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::Cliente => "CLIENTE",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "STAFF" => Some(Role::Staff),
            "CLIENTE" => Some(Role::Cliente),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const KEY_TOKEN: &str = "token";
pub const KEY_EMAIL: &str = "email";
pub const KEY_ROLE: &str = "role";
pub const KEY_TENANT_ID: &str = "tenant_id";

/// Keys under which the session is persisted in the browser's durable
/// key-value store. Cleared together on logout.
pub const SESSION_KEYS: [&str; 4] = [KEY_TOKEN, KEY_EMAIL, KEY_ROLE, KEY_TENANT_ID];

/// The authenticated actor's client-held identity. Created on login,
/// destroyed on logout; never reconciled against server state except through
/// the success or failure of subsequent API calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential forwarded verbatim on every call.
    pub token: String,
    pub email: String,
    pub role: Role,
    pub tenant_id: String,
}

impl Session {
    /// Short display name derived from the email's local part.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }

    /// Key/value pairs to write to durable storage, one per session field.
    pub fn to_pairs(&self) -> [(&'static str, String); 4] {
        [
            (KEY_TOKEN, self.token.clone()),
            (KEY_EMAIL, self.email.clone()),
            (KEY_ROLE, self.role.as_str().to_string()),
            (KEY_TENANT_ID, self.tenant_id.clone()),
        ]
    }

    /// Rebuild a session from a storage lookup. Returns `None` when any
    /// field is missing or the stored role is not a known value, in which
    /// case the caller treats the browser as unauthenticated.
    pub fn from_lookup<F>(get: F) -> Option<Session>
    where
        F: Fn(&str) -> Option<String>,
    {
        Some(Session {
            token: get(KEY_TOKEN)?,
            email: get(KEY_EMAIL)?,
            role: Role::parse(&get(KEY_ROLE)?)?,
            tenant_id: get(KEY_TENANT_ID)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sample() -> Session {
        Session {
            token: "jwt-abc".into(),
            email: "mozo@edo.pe".into(),
            role: Role::Staff,
            tenant_id: "edo-lima".into(),
        }
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"STAFF\"");
        assert_eq!(serde_json::to_string(&Role::Cliente).unwrap(), "\"CLIENTE\"");
        assert_eq!(Role::parse("CLIENTE"), Some(Role::Cliente));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_pairs_cover_every_session_key() {
        let pairs = sample().to_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, SESSION_KEYS);
    }

    #[test]
    fn test_storage_round_trip() {
        let session = sample();
        let store: HashMap<&str, String> = session.to_pairs().into_iter().collect();
        let restored = Session::from_lookup(|key| store.get(key).cloned());
        assert_eq!(restored, Some(session));
    }

    #[test]
    fn test_missing_or_invalid_fields_mean_no_session() {
        let mut store: HashMap<&str, String> =
            sample().to_pairs().into_iter().collect();
        store.remove(KEY_TOKEN);
        assert_eq!(Session::from_lookup(|key| store.get(key).cloned()), None);

        let mut store: HashMap<&str, String> =
            sample().to_pairs().into_iter().collect();
        store.insert(KEY_ROLE, "SUPERUSER".into());
        assert_eq!(Session::from_lookup(|key| store.get(key).cloned()), None);

        // Cleared storage (logout) restores nothing.
        assert_eq!(Session::from_lookup(|_| None), None);
    }

    #[test]
    fn test_display_name_is_email_local_part() {
        assert_eq!(sample().display_name(), "mozo");
    }
}
