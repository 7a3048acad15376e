use shared::domain::{Contact, ContactId, ContactPatch};

use crate::store::{reduce, Action, AppState};

fn contact(id: i64, name: &str) -> Contact {
    Contact {
        id: ContactId(id),
        name: name.into(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: "000".into(),
        address: "Y".into(),
    }
}

fn loaded_state(contacts: Vec<Contact>) -> AppState {
    let empty = AppState::new("http://localhost");
    reduce(&empty, &Action::SetContacts(contacts))
}

#[test]
fn reduce_never_mutates_its_input() {
    let state = loaded_state(vec![contact(1, "A"), contact(2, "B")]);
    let snapshot = state.clone();

    let actions = [
        Action::SetContacts(vec![contact(9, "Z")]),
        Action::AddContact(contact(3, "C")),
        Action::DeleteContact(ContactId(1)),
        Action::UpdateContact(ContactPatch {
            id: ContactId(2),
            name: Some("B2".into()),
            email: None,
            phone: None,
            address: None,
        }),
    ];

    for action in &actions {
        let _ = reduce(&state, action);
        assert_eq!(state, snapshot, "input state changed by {action:?}");
    }
}

#[test]
fn set_contacts_replaces_wholesale() {
    let state = loaded_state(vec![contact(1, "A"), contact(2, "B")]);
    let next = reduce(&state, &Action::SetContacts(vec![contact(3, "C")]));
    assert_eq!(next.contacts, vec![contact(3, "C")]);
}

#[test]
fn add_contact_appends_to_the_end() {
    let state = loaded_state(vec![contact(1, "A")]);
    let next = reduce(&state, &Action::AddContact(contact(2, "B")));
    assert_eq!(
        next.contacts.iter().map(|c| c.id.0).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn delete_contact_removes_the_matching_id() {
    let state = loaded_state(vec![contact(1, "A"), contact(2, "B")]);
    let next = reduce(&state, &Action::DeleteContact(ContactId(1)));
    assert_eq!(next.contacts, vec![contact(2, "B")]);
}

#[test]
fn delete_of_absent_id_is_a_noop() {
    let state = loaded_state(vec![contact(1, "A")]);
    let next = reduce(&state, &Action::DeleteContact(ContactId(42)));
    assert_eq!(next, state);
}

#[test]
fn update_merges_given_fields_and_keeps_the_rest() {
    let existing = Contact {
        id: ContactId(3),
        name: "A".into(),
        email: "a@x.com".into(),
        phone: "000".into(),
        address: "Y".into(),
    };
    let state = loaded_state(vec![contact(1, "Other"), existing]);

    let next = reduce(
        &state,
        &Action::UpdateContact(ContactPatch {
            id: ContactId(3),
            name: None,
            email: None,
            phone: Some("555".into()),
            address: None,
        }),
    );

    let updated = next.contact(ContactId(3)).expect("contact 3");
    assert_eq!(updated.phone, "555");
    assert_eq!(updated.name, "A");
    assert_eq!(updated.email, "a@x.com");
    assert_eq!(updated.address, "Y");
    assert_eq!(next.contact(ContactId(1)), state.contact(ContactId(1)));
}

#[test]
fn update_of_absent_id_is_a_noop() {
    let state = loaded_state(vec![contact(1, "A")]);
    let next = reduce(
        &state,
        &Action::UpdateContact(ContactPatch {
            id: ContactId(42),
            name: Some("ghost".into()),
            email: None,
            phone: None,
            address: None,
        }),
    );
    assert_eq!(next, state);
}

#[test]
fn update_preserves_collection_order() {
    let state = loaded_state(vec![contact(1, "A"), contact(2, "B"), contact(3, "C")]);
    let next = reduce(
        &state,
        &Action::UpdateContact(ContactPatch {
            id: ContactId(2),
            name: Some("B2".into()),
            email: None,
            phone: None,
            address: None,
        }),
    );
    assert_eq!(
        next.contacts.iter().map(|c| c.id.0).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}
