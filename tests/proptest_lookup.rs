
use proptest::prelude::*;
use serde_json::{json, Value};
use strategies::{arb_record_type, arb_table};
use ttlbench::check_consistency;
use ttlbench::lookup::{ttl_from_array, ttl_from_object};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Both forms agree on every record type, present or not.
    #[test]
    fn array_matches_object(table in arb_table(), record_type in arb_record_type()) {
        let array = table.array_doc();
        let object = table.object_doc();

        let a = ttl_from_array(array.root(), &record_type);
        let o = ttl_from_object(object.root(), &record_type);
        prop_assert_eq!(a, o);
        prop_assert_eq!(a, table.expected(&record_type));
    }

    /// Generated pairs pass the consistency check.
    #[test]
    fn generated_pairs_are_consistent(table in arb_table()) {
        let checked = check_consistency(&table.array_doc(), &table.object_doc());
        prop_assert_eq!(checked, Ok(table.record_types().len()));
    }

    /// Permuting array entries does not change any lookup.
    #[test]
    fn entry_order_is_irrelevant(
        (table, permuted) in arb_table().prop_flat_map(|t| {
            let groups = t.groups.clone();
            (Just(t), Just(groups).prop_shuffle())
        }),
        record_type in arb_record_type(),
    ) {
        let mut shuffled = table.clone();
        shuffled.groups = permuted;

        prop_assert_eq!(
            ttl_from_array(table.array_doc().root(), &record_type),
            ttl_from_array(shuffled.array_doc().root(), &record_type)
        );
    }

    /// Lookups never panic on arbitrary trees.
    #[test]
    fn arbitrary_trees_never_panic(tree in arb_json(), record_type in arb_record_type()) {
        let root = json!({"ttl0_data": tree});
        let _ = ttl_from_array(&root, &record_type);
        let _ = ttl_from_object(&root, &record_type);
    }
}

/// Random JSON with a bias towards the shapes the lookups inspect.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("must be finite", |f| f.is_finite())
            .prop_map(Value::from),
        prop_oneof![Just("A".to_owned()), Just("MX".to_owned()), "[a-z]{0,4}"]
            .prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        Just("types".to_owned()),
                        Just("value".to_owned()),
                        Just("A".to_owned()),
                        "[a-z]{1,3}"
                    ],
                    inner
                ),
                0..4
            )
            .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}
