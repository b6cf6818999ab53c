//! Property tests for traversal, lookup, and export invariants.

use optlist::{
    CollectionOptions, MemoryCollection, OptionLookup, OptionSequence, Row, Value,
};
use proptest::prelude::*;

/// Build a collection of `(id, name)` rows from generated names.
fn collection_from(names: &[String]) -> MemoryCollection {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Row::new()
                .with("id", index as i64)
                .with("name", name.as_str())
        })
        .collect()
}

proptest! {
    #[test]
    fn full_pass_yields_one_entry_per_record(names in proptest::collection::vec("[a-z]{0,8}", 0..16)) {
        let mut options = CollectionOptions::new(collection_from(&names)).label_field("name");

        let entries: Vec<_> = options.entries().collect();
        prop_assert_eq!(entries.len(), names.len());

        for (index, entry) in entries.iter().enumerate() {
            prop_assert_eq!(&entry.key, &Value::Int(index as i64));
            prop_assert_eq!(&entry.label, &Value::Text(names[index].clone()));
        }
    }

    #[test]
    fn rewound_pass_repeats_exactly(names in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
        let mut options = CollectionOptions::new(collection_from(&names)).label_field("name");

        let first: Vec<_> = options.entries().collect();
        let second: Vec<_> = options.entries().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn derived_label_wins_over_field(names in proptest::collection::vec("[a-z]{1,8}", 1..16)) {
        let mut options = CollectionOptions::new(collection_from(&names))
            .label_field("name")
            .label_with(|row| Value::Text(format!("<{}>", row.field("name"))));

        for (index, entry) in options.entries().enumerate() {
            prop_assert_eq!(entry.label, Value::Text(format!("<{}>", names[index])));
        }
    }

    #[test]
    fn lookup_finds_every_present_key(names in proptest::collection::vec("[a-z]{1,8}", 1..16)) {
        let mut options = CollectionOptions::new(collection_from(&names)).label_field("name");

        for index in 0..names.len() {
            let key = Value::Int(index as i64);
            let row = options.get(&key);
            prop_assert!(row.is_some());
            let row = row.unwrap();
            prop_assert_eq!(row.field("name"), &Value::Text(names[index].clone()));
        }

        let absent = Value::Int(names.len() as i64);
        prop_assert!(options.get(&absent).is_none());
    }

    #[test]
    fn snapshot_agrees_with_traversal(names in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
        let mut options = CollectionOptions::new(collection_from(&names)).label_field("name");

        let map = options.to_map();
        let traversed: Vec<_> = options.entries().map(|e| (e.key, e.label)).collect();
        let exported: Vec<_> = map.into_iter().collect();
        // Keys are unique by construction, so export and traversal agree.
        prop_assert_eq!(exported, traversed);
    }
}
