use shared::domain::{Contact, ContactDraft, ContactId, ContactPatch};
use tracing::{info, warn};

use crate::{
    api::{AgendaApi, ListOutcome},
    config::Settings,
    error::ClientError,
    store::{reduce, Action, AppState},
};

/// What a view should render while the list is being reconciled: a
/// placeholder, an inline error, or the loaded contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

/// Reconciles the local contact cache with the remote agenda. Owns the
/// application state; every mutation goes through the reducer.
///
/// Known limitation: there is no in-flight request tracking, so two
/// overlapping writes to the same contact resolve last-response-wins.
pub struct ContactBook {
    api: AgendaApi,
    state: AppState,
    load_state: LoadState,
}

impl ContactBook {
    pub fn new(settings: &Settings) -> Self {
        Self {
            api: AgendaApi::new(&settings.base_url, &settings.agenda_slug),
            state: AppState::new(&settings.base_url),
            load_state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.state.contacts
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, &action);
    }

    /// Load the full contact list, provisioning the agenda on first use.
    /// On success the local collection is replaced wholesale with the
    /// server's ordering.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.load_state = LoadState::Loading;
        match self.fetch_contacts().await {
            Ok(contacts) => {
                info!(count = contacts.len(), "contact list loaded");
                self.dispatch(Action::SetContacts(contacts));
                self.load_state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.load_state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        match self.api.list_contacts().await? {
            ListOutcome::Contacts(contacts) => Ok(contacts),
            ListOutcome::AgendaMissing => {
                warn!(slug = %self.api.slug(), "agenda not found, provisioning");
                self.provision_agenda().await?;
                // Exactly one retry after provisioning.
                match self.api.list_contacts().await? {
                    ListOutcome::Contacts(contacts) => Ok(contacts),
                    ListOutcome::AgendaMissing => Err(ClientError::Status { status: 404 }),
                }
            }
        }
    }

    /// Create the agenda, tolerating a lost creation race: a 400 whose
    /// detail says it already exists means another caller got there first.
    async fn provision_agenda(&self) -> Result<(), ClientError> {
        match self.api.create_agenda().await {
            Ok(()) => {
                info!(slug = %self.api.slug(), "agenda created");
                Ok(())
            }
            Err(ClientError::Api { status: 400, detail }) if is_agenda_exists_detail(&detail) => {
                info!(slug = %self.api.slug(), "agenda already exists, continuing");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Create a contact from a complete draft and append the server's
    /// returned record (which carries the assigned id) to local state.
    pub async fn create(&mut self, draft: ContactDraft) -> Result<Contact, ClientError> {
        validate_draft(&draft)?;
        let created = self.api.create_contact(&draft).await?;
        self.dispatch(Action::AddContact(created.clone()));
        Ok(created)
    }

    /// Replace all fields of an existing contact. The id must be present
    /// in the loaded list; the service has no single-contact read that
    /// could recover a stale cache.
    pub async fn update(
        &mut self,
        id: ContactId,
        draft: ContactDraft,
    ) -> Result<Contact, ClientError> {
        if self.state.contact(id).is_none() {
            return Err(ClientError::ContactNotLoaded { id: id.0 });
        }
        validate_draft(&draft)?;
        let updated = self.api.update_contact(id, &draft).await?;
        self.dispatch(Action::UpdateContact(ContactPatch::from(updated.clone())));
        Ok(updated)
    }

    /// Delete by id; local state drops the contact only after the service
    /// confirms.
    pub async fn delete(&mut self, id: ContactId) -> Result<(), ClientError> {
        self.api.delete_contact(id).await?;
        self.dispatch(Action::DeleteContact(id));
        info!(id = id.0, "contact deleted");
        Ok(())
    }
}

fn is_agenda_exists_detail(detail: &str) -> bool {
    detail.to_ascii_lowercase().contains("agenda already exists")
}

fn validate_draft(draft: &ContactDraft) -> Result<(), ClientError> {
    match draft.missing_field() {
        Some(field) => Err(ClientError::InvalidDraft { field }),
        None => Ok(()),
    }
}
