//! Tab-scoped session state
//!
//! The portal keeps three keys in storage that lives as long as the browser
//! tab: who is logged in, their role, and which patient was picked on the
//! patients list. Nothing else is persisted client-side.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub const USER_ID_KEY: &str = "userId";
pub const USER_ROLE_KEY: &str = "userRole";
pub const CURRENT_PATIENT_KEY: &str = "currentPatientId";

/// Raw key/value storage (`window.sessionStorage` in the browser)
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

/// In-memory storage for hosts without a browser
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Typed view over the session keys
///
/// A missing or empty value is reported as `None`; callers treat that as a
/// normal branch (for example "no patient selected").
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|v| !v.is_empty())
    }

    pub fn set_current_user(&self, id: &str) {
        self.storage.set(USER_ID_KEY, id);
    }

    pub fn current_user(&self) -> Option<String> {
        self.read(USER_ID_KEY)
    }

    pub fn set_user_role(&self, role: &str) {
        self.storage.set(USER_ROLE_KEY, role);
    }

    pub fn user_role(&self) -> Option<String> {
        self.read(USER_ROLE_KEY)
    }

    pub fn set_current_patient(&self, id: &str) {
        self.storage.set(CURRENT_PATIENT_KEY, id);
    }

    pub fn current_patient(&self) -> Option<String> {
        self.read(CURRENT_PATIENT_KEY)
    }

    /// Forget everything; called on logout
    pub fn clear_all(&self) {
        self.storage.clear();
    }
}
