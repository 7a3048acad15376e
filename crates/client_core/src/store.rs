use serde::{Deserialize, Serialize};
use shared::domain::{Contact, ContactId, ContactPatch};

/// Application state for one session: the cached contact list plus the
/// remote base URL it was loaded from. Initialized once at startup and
/// never persisted; the contact list is a cache of server truth, rebuilt
/// wholesale on a full reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub contacts: Vec<Contact>,
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            contacts: Vec::new(),
            base_url: base_url.into(),
        }
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }
}

/// The closed set of state transitions. Every mutation of [`AppState`]
/// goes through [`reduce`] with one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the contact collection wholesale, in server response order.
    SetContacts(Vec<Contact>),
    /// Append a freshly created contact to the end of the collection.
    AddContact(Contact),
    /// Remove the contact with the given id; no-op when absent.
    DeleteContact(ContactId),
    /// Shallow-merge the patch into the matching contact; no-op when absent.
    UpdateContact(ContactPatch),
}

/// Pure transition function: borrows state and action, returns a fresh
/// state, never mutates its inputs and performs no I/O.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetContacts(contacts) => {
            next.contacts = contacts.clone();
        }
        Action::AddContact(contact) => {
            next.contacts.push(contact.clone());
        }
        Action::DeleteContact(id) => {
            next.contacts.retain(|c| c.id != *id);
        }
        Action::UpdateContact(patch) => {
            next.contacts = next
                .contacts
                .iter()
                .map(|c| if c.id == patch.id { c.merged(patch) } else { c.clone() })
                .collect();
        }
    }
    next
}
