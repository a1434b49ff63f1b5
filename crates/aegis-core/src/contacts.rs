//! Emergency contacts
//!
//! In-memory contact book. Contacts are advisory — there is no backend
//! account to sync them to — but adds are validated so the UI never
//! renders a contact without a name or phone number.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Family,
    Friend,
    Colleague,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub relation: Relation,
    /// 1 is called first.
    pub priority: u8,
}

#[derive(Clone, Default)]
pub struct ContactBook {
    contacts: Arc<RwLock<Vec<EmergencyContact>>>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact. Name and phone must be non-empty after trimming.
    pub fn add(
        &self,
        name: &str,
        phone: &str,
        relation: Relation,
        priority: u8,
    ) -> Result<EmergencyContact> {
        let name = name.trim();
        let phone = phone.trim();

        if name.is_empty() {
            return Err(CoreError::EmptyContactField("name"));
        }
        if phone.is_empty() {
            return Err(CoreError::EmptyContactField("phone"));
        }

        let contact = EmergencyContact {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            relation,
            priority,
        };

        tracing::info!(contact = %contact.name, "Added emergency contact");
        self.contacts.write().push(contact.clone());
        Ok(contact)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        let mut contacts = self.contacts.write();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);

        if contacts.len() == before {
            return Err(CoreError::ContactNotFound(id.to_string()));
        }

        tracing::info!(contact_id = %id, "Removed emergency contact");
        Ok(())
    }

    /// All contacts, ordered by ascending priority.
    pub fn list(&self) -> Vec<EmergencyContact> {
        let mut contacts = self.contacts.read().clone();
        contacts.sort_by_key(|c| c.priority);
        contacts
    }

    /// The trusted circle: the two highest-priority contacts.
    pub fn trusted(&self) -> Vec<EmergencyContact> {
        self.list().into_iter().take(2).collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }
}

/// The sample contacts the app ships with.
pub fn sample_contacts(book: &ContactBook) -> Result<()> {
    book.add("Mom", "+1 234 567 8901", Relation::Family, 1)?;
    book.add("Best Friend Sarah", "+1 234 567 8902", Relation::Friend, 2)?;
    book.add("Brother Mike", "+1 234 567 8903", Relation::Family, 3)?;
    Ok(())
}
