use contacts_core::{
    load_contacts, parse_contacts, sample_contacts, ContactId, ContactStore, DatasetError,
    INITIAL_VISIBLE_COUNT,
};
use std::collections::HashSet;
use std::io::Write;

const TWO_CONTACTS: &str = r#"[
  {
    "name": "Idris Elba",
    "pictureUrl": "https://img.example.com/idris.jpg",
    "popularity": 11.622713,
    "id": "11731993-0604-4bee-80d5-67ad845d0a38",
    "wonOscar": false,
    "wonEmmy": false
  },
  {
    "name": "Gal Gadot",
    "popularity": 10.049256,
    "id": "b497e3c4-d7a5-4d6b-a6a4-2d8bf23ea0b0"
  }
]"#;

#[test]
fn parse_keeps_order_and_defaults_optional_fields() {
    let contacts = parse_contacts(TWO_CONTACTS).unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Idris Elba");
    assert_eq!(
        contacts[0].picture_url.as_deref(),
        Some("https://img.example.com/idris.jpg")
    );
    assert_eq!(contacts[1].name, "Gal Gadot");
    assert_eq!(contacts[1].picture_url, None);
    assert!(!contacts[1].won_oscar);
    assert!(!contacts[1].won_emmy);
}

#[test]
fn parse_accepts_empty_array() {
    let contacts = parse_contacts("[]").unwrap();
    assert!(contacts.is_empty());

    let store = ContactStore::new(contacts);
    assert_eq!(store.visible_len(), 0);
    assert_eq!(store.reserve_len(), 0);
}

#[test]
fn parse_rejects_duplicate_ids() {
    let payload = r#"[
      {"name": "One", "popularity": 1.0, "id": "11731993-0604-4bee-80d5-67ad845d0a38"},
      {"name": "Two", "popularity": 2.0, "id": "11731993-0604-4bee-80d5-67ad845d0a38"}
    ]"#;

    let err = parse_contacts(payload).unwrap_err();
    match err {
        DatasetError::DuplicateId(id) => {
            assert_eq!(id.to_string(), "11731993-0604-4bee-80d5-67ad845d0a38")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_accepts_numeric_and_plain_string_ids() {
    let payload = r#"[
      {"name": "A", "popularity": 1.0, "id": 1},
      {"name": "B", "popularity": 2.0, "id": 2},
      {"name": "C", "popularity": 3.0, "id": "contact-c"},
      {"name": "D", "popularity": 4.0, "id": "2"}
    ]"#;

    let contacts = parse_contacts(payload).unwrap();

    assert_eq!(contacts[0].id, ContactId::Number(1));
    assert_eq!(contacts[1].id, ContactId::Number(2));
    assert_eq!(contacts[2].id, ContactId::Text("contact-c".to_string()));
    assert_eq!(contacts[3].id, ContactId::Text("2".to_string()));

    let mut store = ContactStore::with_seed(contacts, 1);
    assert_eq!(store.delete_contact(&ContactId::Number(2)), 1);
    assert!(store.find_visible(&ContactId::Text("2".to_string())).is_some());
}

#[test]
fn parse_rejects_duplicate_numeric_ids() {
    let payload = r#"[
      {"name": "A", "popularity": 1.0, "id": 7},
      {"name": "B", "popularity": 2.0, "id": 7}
    ]"#;

    let err = parse_contacts(payload).unwrap_err();
    assert!(matches!(err, DatasetError::DuplicateId(ContactId::Number(7))));
}

#[test]
fn parse_rejects_missing_required_fields() {
    let err = parse_contacts(r#"[{"name": "No Id", "popularity": 1.0}]"#).unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)));
    assert!(err.to_string().contains("invalid contacts dataset"));
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_CONTACTS.as_bytes()).unwrap();

    let contacts = load_contacts(file.path()).unwrap();
    assert_eq!(contacts.len(), 2);
}

#[test]
fn load_reports_missing_file_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_contacts(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn sample_dataset_is_valid_and_fills_both_lists() {
    let contacts = sample_contacts().unwrap();
    assert!(contacts.len() > INITIAL_VISIBLE_COUNT);

    let unique: HashSet<_> = contacts.iter().map(|c| &c.id).collect();
    assert_eq!(unique.len(), contacts.len());

    let store = ContactStore::new(contacts.clone());
    assert_eq!(store.visible(), &contacts[..INITIAL_VISIBLE_COUNT]);
    assert_eq!(store.reserve(), &contacts[INITIAL_VISIBLE_COUNT..]);
}
