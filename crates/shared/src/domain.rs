use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ContactId);

/// A contact record as the remote agenda service returns it. The `id` is
/// server-assigned; local copies are a cache of server truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Contact {
    /// Shallow merge: fields present in the patch overwrite, absent fields
    /// are retained. The patch id is not consulted here.
    pub fn merged(&self, patch: &ContactPatch) -> Contact {
        Contact {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.clone().unwrap_or_else(|| self.phone.clone()),
            address: patch
                .address
                .clone()
                .unwrap_or_else(|| self.address.clone()),
        }
    }
}

/// Request body for create and full-replacement update. All four fields are
/// mandatory for a valid contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactDraft {
    /// Name of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else if self.phone.trim().is_empty() {
            Some("phone")
        } else if self.address.trim().is_empty() {
            Some("address")
        } else {
            None
        }
    }
}

/// Partial contact keyed by id, used for merge-style state updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    pub id: ContactId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<Contact> for ContactPatch {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: Some(contact.name),
            email: Some(contact.email),
            phone: Some(contact.phone),
            address: Some(contact.address),
        }
    }
}
