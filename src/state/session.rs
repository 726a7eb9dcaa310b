// ============================================================================
// SESSION STORE - single source of truth for "who is logged in"
// ============================================================================
// Pure state holder plus a persistence side effect for the token. No network
// I/O in here; trust in the token is delegated to the server that issued it.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Role;
use crate::utils::TokenStore;

/// Client-held authentication snapshot.
///
/// Invariant: `authenticated == true` iff `token` is a non-empty string.
/// The token is durable; `user_id` and `role` are volatile and come back as
/// `None` after a restart until the operator logs in again.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub role: Option<Role>,
    pub authenticated: bool,
}

#[derive(Clone)]
pub struct SessionStore {
    session: Rc<RefCell<Session>>,
    storage: Rc<dyn TokenStore>,
}

// Handle equality (for use as a component prop): two stores are the same
// store iff they share the same session cell.
impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl SessionStore {
    /// Build the store, restoring a persisted token if one exists. A restored
    /// session is authenticated but has unknown identity and role.
    pub fn new(storage: Rc<dyn TokenStore>) -> Self {
        let session = match storage.load().filter(|t| !t.is_empty()) {
            Some(token) => {
                log::info!("🔑 Restored persisted token, session resumed");
                Session {
                    token: Some(token),
                    user_id: None,
                    role: None,
                    authenticated: true,
                }
            }
            None => Session::default(),
        };

        Self {
            session: Rc::new(RefCell::new(session)),
            storage,
        }
    }

    /// Persist the token and set all session fields in one step. An empty
    /// token is ignored: `authenticated` holds iff the token is non-empty.
    pub fn login(&self, token: String, user_id: i64, role: Role) {
        if token.is_empty() {
            log::warn!("⚠️ Login with empty token ignored");
            return;
        }
        self.storage.save(&token);
        *self.session.borrow_mut() = Session {
            token: Some(token),
            user_id: Some(user_id),
            role: Some(role),
            authenticated: true,
        };
        log::info!("🔐 Logged in (user {} as {:?})", user_id, role);
    }

    /// Clear the persisted token and reset the session to empty.
    pub fn logout(&self) {
        self.storage.clear();
        *self.session.borrow_mut() = Session::default();
        log::info!("👋 Logged out");
    }

    /// Current snapshot; safe to call at any time, never blocks.
    pub fn current(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Token for the Authorization header, if any.
    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryTokenStore;

    fn store_with(storage: MemoryTokenStore) -> SessionStore {
        SessionStore::new(Rc::new(storage))
    }

    #[test]
    fn starts_empty_without_persisted_token() {
        let store = store_with(MemoryTokenStore::new());
        assert_eq!(store.current(), Session::default());
    }

    #[test]
    fn login_reflects_exactly_the_passed_values() {
        let store = store_with(MemoryTokenStore::new());
        store.login("tok-1".into(), 7, Role::Admin);

        let session = store.current();
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.role, Some(Role::Admin));
        assert!(session.authenticated);
    }

    #[test]
    fn login_persists_token_and_logout_clears_it() {
        let storage = MemoryTokenStore::new();
        let store = store_with(storage.clone());

        store.login("tok-2".into(), 1, Role::Staff);
        assert_eq!(storage.load(), Some("tok-2".to_string()));

        store.logout();
        assert_eq!(storage.load(), None);
        assert_eq!(store.current(), Session::default());
    }

    #[test]
    fn restart_restores_token_but_not_identity() {
        let storage = MemoryTokenStore::new();
        store_with(storage.clone()).login("tok-3".into(), 9, Role::Admin);

        // New store over the same durable storage simulates a process restart.
        let resumed = store_with(storage);
        let session = resumed.current();
        assert!(session.authenticated);
        assert_eq!(session.token.as_deref(), Some("tok-3"));
        assert_eq!(session.user_id, None);
        assert_eq!(session.role, None);
    }

    #[test]
    fn login_with_empty_token_is_ignored() {
        let storage = MemoryTokenStore::new();
        let store = store_with(storage.clone());

        store.login("".into(), 7, Role::Admin);

        assert_eq!(store.current(), Session::default());
        assert_eq!(storage.load(), None, "nothing persisted");
    }

    #[test]
    fn empty_persisted_token_does_not_authenticate() {
        let storage = MemoryTokenStore::new();
        storage.save("");
        let store = store_with(storage);
        assert!(!store.current().authenticated);
    }
}
