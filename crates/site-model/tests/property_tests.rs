//! Property tests for the attribute tree

use proptest::prelude::*;
use site_model::tree::{Node, unwrap, wrap};
use site_model::{Mapping, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::set(items)),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Mapping),
        ]
    })
}

proptest! {
    #[test]
    fn unwrap_reverses_wrap(v in value()) {
        prop_assert_eq!(unwrap(&wrap(v.clone())), v);
    }

    #[test]
    fn node_round_trips_mapping(map in prop::collection::btree_map("[a-z]{1,6}", value(), 0..6)) {
        let map: Mapping = map;
        prop_assert_eq!(Node::from_mapping(map.clone()).to_mapping(), map);
    }

    #[test]
    fn later_merge_wins(
        first in prop::collection::btree_map("[a-c]", scalar(), 0..3),
        second in prop::collection::btree_map("[a-c]", scalar(), 0..3),
    ) {
        let mut node = Node::from_mapping(first.clone());
        node.merge_into(second.clone());

        let mut expected = first;
        expected.extend(second);
        prop_assert_eq!(node.to_mapping(), expected);
    }
}
