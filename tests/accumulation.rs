use grimoire::filter::Filter;
use grimoire::inquiry::{Inquiry, IntRange, SearchMethod};
use grimoire::spell::{Spell, Spellbook};

fn setup() -> Filter {
    let spells = (0..4)
        .map(|i| Spell {
            name: format!("Spell {i}"),
            level: Some(i),
            ..Default::default()
        })
        .collect();
    Filter::new(Spellbook::new(spells).unwrap()).unwrap()
}

#[test]
fn reset_replaces_the_display() {
    let mut filter = setup();
    let wide = Inquiry {
        level: Some(IntRange::new(0, 3)),
        ..Inquiry::new()
    };
    filter.filter(&wide).unwrap();
    assert_eq!(filter.display(), &[0, 1, 2, 3]);

    let narrow = Inquiry {
        level: Some(IntRange::new(2, 2)),
        reset: true,
        ..Inquiry::new()
    };
    filter.filter(&narrow).unwrap();
    assert_eq!(filter.display(), &[2]);
}

#[test]
fn accumulation_appends_deduplicated_in_first_seen_order() {
    let mut filter = setup();
    let high = Inquiry {
        level: Some(IntRange::new(2, 3)),
        ..Inquiry::new()
    };
    filter.filter(&high).unwrap();
    assert_eq!(filter.display(), &[2, 3]);

    // Overlaps on position 2; only 0 and 1 are new, appended after.
    let low = Inquiry {
        level: Some(IntRange::new(0, 2)),
        reset: false,
        ..Inquiry::new()
    };
    filter.filter(&low).unwrap();
    assert_eq!(filter.display(), &[2, 3, 0, 1], "existing order kept, no duplicates");
}

#[test]
fn accumulating_the_same_inquiry_twice_changes_nothing() {
    let mut filter = setup();
    let inquiry = Inquiry {
        level: Some(IntRange::new(1, 2)),
        reset: false,
        ..Inquiry::new()
    };
    filter.filter(&inquiry).unwrap();
    let once = filter.display().to_vec();
    filter.filter(&inquiry).unwrap();
    assert_eq!(filter.display(), once.as_slice());
}

#[test]
fn malformed_inquiry_leaves_the_display_untouched() {
    let mut filter = setup();
    filter.filter(&Inquiry::new()).unwrap();
    let before = filter.display().to_vec();

    let missing_method = Inquiry {
        search_method: None,
        ..Inquiry::new()
    };
    assert!(filter.filter(&missing_method).is_err());
    assert_eq!(filter.display(), before.as_slice());

    let nameless = Inquiry {
        search_method: Some(SearchMethod::ByName),
        names: None,
        ..Inquiry::new()
    };
    assert!(filter.filter(&nameless).is_err());
    assert_eq!(filter.display(), before.as_slice());
}

#[test]
fn unrecognized_search_method_is_rejected_at_dispatch() {
    let mut filter = setup();
    filter.filter(&Inquiry::new()).unwrap();
    let before = filter.display().to_vec();

    let inquiry: Inquiry = serde_json::from_str(r#"{"search_method": "by_magic"}"#).unwrap();
    assert!(filter.filter(&inquiry).is_err());
    assert_eq!(filter.display(), before.as_slice());
}

#[test]
fn current_results_resolve_display_order() {
    let mut filter = setup();
    let inquiry = Inquiry {
        level: Some(IntRange::new(2, 3)),
        ..Inquiry::new()
    };
    filter.filter(&inquiry).unwrap();
    let names: Vec<&str> = filter
        .current_results()
        .iter()
        .map(|spell| spell.name.as_str())
        .collect();
    assert_eq!(names, vec!["Spell 2", "Spell 3"]);
}
