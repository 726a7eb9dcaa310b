use std::cell::RefCell;
use std::rc::Rc;

/// Durable home of the authentication token. Injected into the SessionStore so
/// tests (and native builds) can substitute an in-memory store for
/// localStorage.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store, shared via `Rc` so tests can inspect what was persisted.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalTokenStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use web_sys::{window, Storage};

    use super::TokenStore;

    const TOKEN_KEY: &str = "token";

    /// localStorage-backed store. Storage failures degrade to "no token";
    /// the server rejects unauthenticated requests anyway.
    #[derive(Clone, Default)]
    pub struct LocalTokenStore;

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    impl TokenStore for LocalTokenStore {
        fn load(&self) -> Option<String> {
            local_storage()?.get_item(TOKEN_KEY).ok()?
        }

        fn save(&self, token: &str) {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::error!("❌ Could not persist token to localStorage");
                }
            }
        }

        fn clear(&self) {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
