use std::collections::BTreeMap;

use proptest::prelude::*;
use s2i::{PrintOptions, S2iMap, INVALID_VALUE};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn collect(map: &S2iMap) -> Vec<(String, i64)> {
    map.iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn s2i_round_trip_matrix() {
    init_logger();
    let mut map = S2iMap::new();
    map.insert("b", 2).unwrap();
    map.insert("a", 1).unwrap();
    map.insert("c", 3).unwrap();

    assert_eq!(
        collect(&map),
        vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
    );

    assert!(map.delete("b"));
    assert_eq!(collect(&map), vec![("a".into(), 1), ("c".into(), 3)]);
    assert_eq!(map.search("b"), None);
    assert_eq!(map.value("b"), INVALID_VALUE);
    assert_eq!(map.get("a"), Some(1));
    map.assert_valid().unwrap();
}

#[test]
fn s2i_insert_keeps_existing_value_matrix() {
    init_logger();
    let mut map = S2iMap::new();
    let first = map.insert("key", 1).unwrap();
    let second = map.insert("key", 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(map.get("key"), Some(1));
    assert_eq!(map.len(), 1);
}

#[test]
fn s2i_set_updates_value_matrix() {
    init_logger();
    let mut map = S2iMap::new();
    let first = map.set("key", 1).unwrap();
    let second = map.set("key", 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("key"), Some(2));
    assert_eq!(map.entry(first).map(|e| e.value), Some(2));
}

#[test]
fn s2i_value_reference_matrix() {
    let mut map = S2iMap::new();
    map.set("counter", 10).unwrap();
    if let Some(v) = map.get_mut("counter") {
        *v += 5;
    }
    assert_eq!(map.value("counter"), 15);
    assert_eq!(map.get_mut("missing"), None);
}

#[test]
fn s2i_delete_absent_matrix() {
    let mut map = S2iMap::new();
    map.set("x", 1).unwrap();
    assert!(!map.delete("y"));
    assert!(map.delete("x"));
    assert!(!map.delete("x"));
    assert!(map.is_empty());
}

#[test]
fn s2i_keys_compare_bytewise_matrix() {
    let mut map = S2iMap::new();
    for (k, v) in [("apple", 1), ("Zebra", 2), ("app", 3), ("", 4), ("apple pie", 5)] {
        map.set(k, v).unwrap();
    }
    let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["", "Zebra", "app", "apple", "apple pie"]);
    let reversed: Vec<&str> = map.iter().rev().map(|(k, _)| k).collect();
    assert_eq!(reversed, vec!["apple pie", "apple", "app", "Zebra", ""]);
}

#[test]
fn s2i_postorder_dump_matrix() {
    let mut map = S2iMap::new();
    for (k, v) in [("b", 2), ("a", 1), ("c", 3)] {
        map.set(k, v).unwrap();
    }
    assert_eq!(map.postorder_dump(), "a: 1\nc: 3\nb: 2\n");
    let order: Vec<&str> = map.postorder().map(|(k, _)| k).collect();
    assert_eq!(order, vec!["a", "c", "b"]);
}

#[test]
fn s2i_pprint_matrix() {
    let mut map = S2iMap::new();
    for (k, v) in [("b", 2), ("a", 1), ("c", 3)] {
        map.set(k, v).unwrap();
    }
    assert_eq!(
        map.pprint(&PrintOptions::default()),
        "   (c, 3) - red\n(b, 2) - black\n   (a, 1) - red\n"
    );
}

#[test]
fn s2i_free_releases_everything_matrix() {
    init_logger();
    let mut map = S2iMap::new();
    for i in 0..100 {
        map.set(&format!("key-{i:03}"), i).unwrap();
    }
    assert_eq!(map.len(), 100);
    assert_eq!(map.free(), 100);
}

#[test]
fn s2i_sequential_keys_stay_balanced_matrix() {
    let mut map = S2iMap::new();
    for i in 0..4096 {
        map.set(&format!("{i:08}"), i).unwrap();
    }
    let n = map.len();
    let bound = 2.0 * ((n + 1) as f64).log2();
    assert!(map.tree().height() as f64 <= bound);
    map.assert_valid().unwrap();
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String, i64),
    Set(String, i64),
    Delete(String),
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{0,3}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (key_strategy(), any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (key_strategy(), any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
        key_strategy().prop_map(Op::Delete),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #[test]
    fn prop_s2i_matches_btreemap(ops in ops_strategy()) {
        let mut map = S2iMap::new();
        let mut model: BTreeMap<String, i64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    map.insert(&k, v).unwrap();
                    model.entry(k).or_insert(v);
                }
                Op::Set(k, v) => {
                    map.set(&k, v).unwrap();
                    model.insert(k, v);
                }
                Op::Delete(k) => {
                    prop_assert_eq!(map.delete(&k), model.remove(&k).is_some());
                    prop_assert_eq!(map.get(&k), None);
                }
            }
            prop_assert!(map.assert_valid().is_ok());
            prop_assert_eq!(map.len(), model.len());
        }

        let expected: Vec<(String, i64)> = model.into_iter().collect();
        prop_assert_eq!(collect(&map), expected);
    }
}
