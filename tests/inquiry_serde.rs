use grimoire::inquiry::{Inquiry, IntRange, SearchMethod};

#[test]
fn omitted_fields_read_as_dont_care() {
    let inquiry: Inquiry = serde_json::from_str(r#"{"search_method": "by_value"}"#).unwrap();
    assert_eq!(inquiry.search_method, Some(SearchMethod::ByValue));
    assert_eq!(inquiry.school, None);
    assert_eq!(inquiry.v, None);
    assert_eq!(inquiry.level, None);
    assert!(inquiry.reset, "reset defaults to true");
}

#[test]
fn ranges_are_written_as_pairs() {
    let inquiry: Inquiry = serde_json::from_str(
        r#"{"search_method": "by_value", "level": [3, 3], "cost": [0, 100]}"#,
    )
    .unwrap();
    assert_eq!(inquiry.level, Some(IntRange::new(3, 3)));
    assert_eq!(inquiry.cost, Some(IntRange::new(0, 100)));
}

#[test]
fn by_name_form_parses() {
    let inquiry: Inquiry = serde_json::from_str(
        r#"{"search_method": "by_name", "names": "Fireball, Shield", "reset": false}"#,
    )
    .unwrap();
    assert_eq!(inquiry.search_method, Some(SearchMethod::ByName));
    assert_eq!(inquiry.names.as_deref(), Some("Fireball, Shield"));
    assert!(!inquiry.reset);
}

#[test]
fn missing_discriminator_deserializes_but_is_flagged_later() {
    // Absence is representable; the filter rejects it at dispatch time.
    let inquiry: Inquiry = serde_json::from_str(r#"{"reset": true}"#).unwrap();
    assert_eq!(inquiry.search_method, None);
}

#[test]
fn unrecognized_discriminator_reads_as_absent() {
    // An unknown method must not fail deserialization at the boundary; it is
    // flagged at dispatch, same as a missing one.
    let inquiry: Inquiry = serde_json::from_str(r#"{"search_method": "by_magic"}"#).unwrap();
    assert_eq!(inquiry.search_method, None);

    let inquiry: Inquiry = serde_json::from_str(r#"{"search_method": 5}"#).unwrap();
    assert_eq!(inquiry.search_method, None);
}

#[test]
fn accept_vectors_parse_as_bool_arrays() {
    let inquiry: Inquiry = serde_json::from_str(
        r#"{"search_method": "by_value",
            "school": [false, true, false, false, false, false, false, false]}"#,
    )
    .unwrap();
    let school = inquiry.school.unwrap();
    assert_eq!(school.len(), 8);
    assert!(school[1]);
}
