//! Admin login record.
//!
//! Only the session bookkeeping lives here; checking credentials is up to
//! the caller.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use espr_storage::{keys, Storage};
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;

/// Stored value of the logged-in flag.
const LOGGED_IN: &str = "true";

/// A live admin login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub username: String,
    /// Login time, if one was recorded in a readable form.
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl AdminSession {
    /// Check if the login is older than `window` at `now`.
    ///
    /// A session without a login time never expires.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.logged_in_at
            .is_some_and(|at| now.signed_duration_since(at) > window)
    }
}

/// Admin session stored under the three `admin*` keys.
///
/// The keys hold plain strings (`"true"`, the username, an ISO-8601 time
/// with milliseconds), not JSON values, so a browser session and this store
/// can read each other's logins.
#[derive(Debug, Clone)]
pub struct AdminSessionStore {
    storage: Storage,
    window: Duration,
}

impl AdminSessionStore {
    /// Create a store with the default 24-hour window.
    pub fn new(storage: Storage) -> Self {
        Self::with_config(storage, &AdminConfig::default())
    }

    pub fn with_config(storage: Storage, config: &AdminConfig) -> Self {
        Self {
            storage,
            window: config.session_window(),
        }
    }

    /// Record a successful login for `username` at `now`.
    ///
    /// Returns `true` only if all three keys were written.
    pub fn record_login(&self, username: &str, now: DateTime<Utc>) -> bool {
        let login_time = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let written = [
            self.storage.set_raw(keys::ADMIN_LOGGED_IN, LOGGED_IN),
            self.storage.set_raw(keys::ADMIN_USERNAME, username),
            self.storage.set_raw(keys::ADMIN_LOGIN_TIME, &login_time),
        ];
        let ok = written.iter().all(|w| *w);
        if ok {
            tracing::info!(username, "admin logged in");
        } else {
            tracing::warn!(username, "admin login was not fully recorded");
        }
        ok
    }

    /// The current session, if any.
    ///
    /// A login time older than the session window logs out (all three keys
    /// are removed) and yields `None`, whether or not the flag is set. A
    /// missing or unreadable login time does not expire the session.
    pub fn current(&self, now: DateTime<Utc>) -> Option<AdminSession> {
        let logged_in = self.storage.get_raw(keys::ADMIN_LOGGED_IN).as_deref() == Some(LOGGED_IN);
        let logged_in_at = self
            .storage
            .get_raw(keys::ADMIN_LOGIN_TIME)
            .and_then(|raw| parse_login_time(&raw));

        let session = AdminSession {
            username: self.storage.get_raw(keys::ADMIN_USERNAME).unwrap_or_default(),
            logged_in_at,
        };

        if session.is_expired(now, self.window) {
            tracing::info!(username = %session.username, "admin session expired");
            self.logout();
            return None;
        }

        logged_in.then_some(session)
    }

    /// Check if an admin is logged in at `now`.
    pub fn is_logged_in(&self, now: DateTime<Utc>) -> bool {
        self.current(now).is_some()
    }

    /// Remove all admin keys. Returns `true` only if every removal succeeded.
    pub fn logout(&self) -> bool {
        [keys::ADMIN_LOGGED_IN, keys::ADMIN_USERNAME, keys::ADMIN_LOGIN_TIME]
            .into_iter()
            .map(|key| self.storage.remove(key))
            .fold(true, |all, removed| all && removed)
    }
}

fn parse_login_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use espr_storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn login_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    /// A store pre-filled the way the browser login page leaves it.
    fn browser_login(time: &str) -> (Arc<MemoryStore>, AdminSessionStore) {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ADMIN_LOGGED_IN, "true").unwrap();
        store.set(keys::ADMIN_USERNAME, "admin").unwrap();
        store.set(keys::ADMIN_LOGIN_TIME, time).unwrap();
        let admin = AdminSessionStore::new(Storage::from_shared(store.clone()));
        (store, admin)
    }

    #[test]
    fn test_no_session() {
        let admin = AdminSessionStore::new(Storage::in_memory());
        assert!(admin.current(login_time()).is_none());
    }

    #[test]
    fn test_login_and_current() {
        let admin = AdminSessionStore::new(Storage::in_memory());
        assert!(admin.record_login("barista", login_time()));

        let session = admin.current(login_time() + Duration::hours(23)).unwrap();
        assert_eq!(session.username, "barista");
        assert_eq!(session.logged_in_at, Some(login_time()));
    }

    #[test]
    fn test_stored_layout_is_plain_strings() {
        let store = Arc::new(MemoryStore::new());
        let admin = AdminSessionStore::new(Storage::from_shared(store.clone()));
        admin.record_login("barista", login_time());

        assert_eq!(store.get(keys::ADMIN_LOGGED_IN).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(keys::ADMIN_USERNAME).unwrap().as_deref(), Some("barista"));
        assert_eq!(
            store.get(keys::ADMIN_LOGIN_TIME).unwrap().as_deref(),
            Some("2024-05-01T09:00:00.000Z")
        );
    }

    #[test]
    fn test_reads_browser_login() {
        let (_, admin) = browser_login("2024-05-01T09:00:00.000Z");

        let session = admin.current(login_time() + Duration::hours(1)).unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.logged_in_at, Some(login_time()));
    }

    #[test]
    fn test_expired_browser_login_is_cleared() {
        let (store, admin) = browser_login("2024-05-01T09:00:00.000Z");

        assert!(admin.current(login_time() + Duration::hours(48)).is_none());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_expired_session_logs_out() {
        let storage = Storage::in_memory();
        let admin = AdminSessionStore::new(storage.clone());
        admin.record_login("barista", login_time());

        assert!(admin.current(login_time() + Duration::hours(25)).is_none());
        assert!(!storage.exists(keys::ADMIN_LOGGED_IN));
        assert!(!storage.exists(keys::ADMIN_USERNAME));
        assert!(!storage.exists(keys::ADMIN_LOGIN_TIME));
    }

    #[test]
    fn test_expired_time_without_flag_is_cleared() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ADMIN_LOGIN_TIME, "2024-05-01T09:00:00.000Z").unwrap();
        let admin = AdminSessionStore::new(Storage::from_shared(store.clone()));

        assert!(admin.current(login_time() + Duration::hours(25)).is_none());
        assert!(!store.exists(keys::ADMIN_LOGIN_TIME).unwrap());
    }

    #[test]
    fn test_custom_window() {
        let config = AdminConfig { session_hours: 1 };
        let admin = AdminSessionStore::with_config(Storage::in_memory(), &config);
        admin.record_login("barista", login_time());

        assert!(admin.is_logged_in(login_time() + Duration::minutes(59)));
        assert!(!admin.is_logged_in(login_time() + Duration::minutes(61)));
    }

    #[test]
    fn test_flag_without_login_time_stays_logged_in() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ADMIN_LOGGED_IN, "true").unwrap();
        let admin = AdminSessionStore::new(Storage::from_shared(store.clone()));

        let session = admin.current(login_time() + Duration::days(30)).unwrap();
        assert_eq!(session.logged_in_at, None);
        assert!(store.exists(keys::ADMIN_LOGGED_IN).unwrap());
    }

    #[test]
    fn test_unreadable_login_time_never_expires() {
        let (_, admin) = browser_login("yesterday");
        assert!(admin.is_logged_in(login_time() + Duration::days(30)));
    }

    #[test]
    fn test_other_flag_values_are_logged_out() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ADMIN_LOGGED_IN, "false").unwrap();
        let admin = AdminSessionStore::new(Storage::from_shared(store));
        assert!(admin.current(login_time()).is_none());
    }

    #[test]
    fn test_logout() {
        let admin = AdminSessionStore::new(Storage::in_memory());
        admin.record_login("barista", login_time());
        assert!(admin.logout());
        assert!(admin.current(login_time()).is_none());
    }
}
