use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::domain::{AppError, SessionAttribute};
use crate::ports::SessionStore;

/// In-memory session store. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    attributes: Arc<Mutex<HashMap<String, SessionAttribute>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw attribute, including expired ones.
    pub fn attribute(&self, name: &str) -> Option<SessionAttribute> {
        self.attributes.lock().unwrap().get(name).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, name: &str, now: DateTime<Utc>) -> Result<Option<String>, AppError> {
        let mut attributes = self.attributes.lock().unwrap();
        if attributes.get(name).is_some_and(|attribute| attribute.is_expired(now)) {
            attributes.remove(name);
        }
        Ok(attributes.get(name).map(|attribute| attribute.value.clone()))
    }

    fn set(&self, attribute: SessionAttribute) -> Result<(), AppError> {
        self.attributes.lock().unwrap().insert(attribute.name.clone(), attribute);
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), AppError> {
        self.attributes.lock().unwrap().remove(name);
        Ok(())
    }
}
