#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key for the persisted credential.
const TOKEN_KEY: &str = "transit.token";

/// The authentication credential identifying the current user to the API.
///
/// An absent token means unauthenticated. The token is never validated
/// client-side; validity is decided by the API accepting or rejecting the
/// requests that carry it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Accessor/mutator pair over the persisted credential.
///
/// Backed by `localStorage` in the browser so a reload restores the prior
/// session. Outside the browser a thread-local cell stands in, which is what
/// the tests exercise. `set` and `clear` persist synchronously, and `clear`
/// is idempotent.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

#[cfg(not(feature = "csr"))]
thread_local! {
    static STORED_TOKEN: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

impl SessionStore {
    pub fn get(self) -> Session {
        #[cfg(feature = "csr")]
        {
            Session {
                token: local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Session {
                token: STORED_TOKEN.with(|t| t.borrow().clone()),
            }
        }
    }

    pub fn set(self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            STORED_TOKEN.with(|t| *t.borrow_mut() = Some(token.to_owned()));
        }
    }

    pub fn clear(self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            STORED_TOKEN.with(|t| *t.borrow_mut() = None);
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
