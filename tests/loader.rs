use grimoire::error::GrimoireError;
use grimoire::load;

#[test]
fn empty_collection_is_a_load_error() {
    let err = load::spellbook_from_str("[]").unwrap_err();
    assert!(matches!(err, GrimoireError::Load(_)), "got {err:?}");
}

#[test]
fn malformed_json_is_a_load_error() {
    let err = load::spellbook_from_str("{ not json").unwrap_err();
    assert!(matches!(err, GrimoireError::Load(_)), "got {err:?}");
}

#[test]
fn classes_accept_scalar_or_list() {
    let spellbook = load::spellbook_from_str(
        r#"[
            {"name": "Solo", "source": 0, "classes": 3, "school": 1},
            {"name": "Shared", "source": 0, "classes": [1, 2, 3], "school": 1}
        ]"#,
    )
    .unwrap();
    assert_eq!(spellbook.spells()[0].classes, vec![3]);
    assert_eq!(spellbook.spells()[1].classes, vec![1, 2, 3]);
}

#[test]
fn omitted_optionals_load_as_unset() {
    let spellbook = load::spellbook_from_str(
        r#"[{"name": "Bare", "source": 0, "school": 0}]"#,
    )
    .unwrap();
    let spell = &spellbook.spells()[0];
    assert_eq!(spell.v, None);
    assert_eq!(spell.level, None);
    assert!(spell.classes.is_empty());
}

#[test]
fn explicit_tri_state_booleans_survive_loading() {
    let spellbook = load::spellbook_from_str(
        r#"[{"name": "Mixed", "source": 0, "school": 0,
             "v": true, "s": false}]"#,
    )
    .unwrap();
    let spell = &spellbook.spells()[0];
    assert_eq!(spell.v, Some(true));
    assert_eq!(spell.s, Some(false));
    assert_eq!(spell.m, None);
}
