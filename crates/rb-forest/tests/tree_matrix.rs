use std::ops::ControlFlow;

use rb_forest::{Color, Insertion, RbTree};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: String,
    value: i64,
}

fn entry(key: &str, value: i64) -> Entry {
    Entry {
        key: key.to_string(),
        value,
    }
}

fn by_key(a: &Entry, b: &Entry) -> i32 {
    a.key.cmp(&b.key) as i32
}

fn pairs(tree: &RbTree<Entry>) -> Vec<(String, i64)> {
    tree.iter().map(|(_, e)| (e.key.clone(), e.value)).collect()
}

#[test]
fn tree_round_trip_matrix() {
    init_logger();
    let mut tree = RbTree::new();
    for (k, v) in [("b", 2), ("a", 1), ("c", 3)] {
        assert!(tree.insert_unique(entry(k, v), by_key).unwrap().is_inserted());
    }
    assert_eq!(
        pairs(&tree),
        vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
    );

    let removed = tree.delete_by(&entry("b", 0), by_key);
    assert_eq!(removed, Some(entry("b", 2)));
    assert_eq!(pairs(&tree), vec![("a".into(), 1), ("c".into(), 3)]);
    assert_eq!(tree.search(&entry("b", 0), by_key), None);

    let a = tree.search(&entry("a", 0), by_key).unwrap();
    assert_eq!(tree.get(a).map(|e| e.value), Some(1));
    tree.assert_valid(by_key).unwrap();
}

#[test]
fn tree_insert_or_update_matrix() {
    init_logger();
    let mut tree = RbTree::new();
    tree.insert_unique(entry("k", 1), by_key).unwrap();

    match tree.insert_unique(entry("k", 2), by_key).unwrap() {
        Insertion::Duplicate { existing, rejected } => {
            assert_eq!(rejected, entry("k", 2));
            tree.get_mut(existing).unwrap().value = rejected.value;
        }
        Insertion::Inserted(_) => panic!("duplicate key was linked"),
    }

    assert_eq!(tree.len(), 1);
    assert_eq!(pairs(&tree), vec![("k".into(), 2)]);
}

#[test]
fn tree_delete_absent_is_noop_matrix() {
    init_logger();
    let mut tree = RbTree::new();
    for k in ["m", "f", "t"] {
        tree.insert_unique(entry(k, 0), by_key).unwrap();
    }
    let before = pairs(&tree);
    let root = tree.root();

    assert_eq!(tree.delete_by(&entry("zz", 0), by_key), None);
    assert_eq!(pairs(&tree), before);
    assert_eq!(tree.root(), root);
    assert_eq!(tree.len(), 3);
}

#[test]
fn tree_delete_to_empty_matrix() {
    let mut tree = RbTree::new();
    let idx = tree.insert_unique(entry("only", 1), by_key).unwrap().index();
    assert_eq!(tree.color(idx), Some(Color::Black));
    assert_eq!(tree.delete(idx), Some(entry("only", 1)));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.delete(idx), None);
    assert_eq!(tree.nodes().len(), 0);
}

#[test]
fn tree_free_calls_destructor_once_per_node_matrix() {
    init_logger();
    let mut tree = RbTree::new();
    for i in 0..257 {
        tree.insert_unique(i, |a: &i32, b: &i32| a.cmp(b) as i32).unwrap();
    }
    let expected: Vec<i32> = tree.postorder().map(|(_, v)| *v).collect();

    let mut destroyed = Vec::new();
    let released = tree.free(|v| destroyed.push(v));
    assert_eq!(released, 257);
    assert_eq!(destroyed, expected);

    let mut sorted = destroyed.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 257);
}

#[test]
fn tree_free_empty_matrix() {
    let tree = RbTree::<i32>::new();
    let mut calls = 0;
    assert_eq!(tree.free(|_| calls += 1), 0);
    assert_eq!(calls, 0);
}

#[test]
fn tree_for_each_breaks_early_matrix() {
    let mut tree = RbTree::new();
    for i in [5, 3, 9, 1, 7] {
        tree.insert_unique(i, |a: &i32, b: &i32| a.cmp(b) as i32).unwrap();
    }

    let mut seen = Vec::new();
    let flow = tree.for_each_lnr(|_, v| {
        seen.push(*v);
        if *v == 5 {
            ControlFlow::Break(*v)
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(flow, ControlFlow::Break(5));
    assert_eq!(seen, vec![1, 3, 5]);

    let mut seen = Vec::new();
    let flow: ControlFlow<()> = tree.for_each_rnl(|_, v| {
        seen.push(*v);
        ControlFlow::Continue(())
    });
    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(seen, vec![9, 7, 5, 3, 1]);

    let mut count = 0;
    let flow = tree.for_each_postorder(|_, _| {
        count += 1;
        if count == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(count, 2);
}

#[test]
fn tree_rotations_through_handle_matrix() {
    let mut tree = RbTree::new();
    for i in [2, 1, 3] {
        tree.insert_unique(i, |a: &i32, b: &i32| a.cmp(b) as i32).unwrap();
    }
    let root = tree.root().unwrap();
    let order: Vec<i32> = tree.iter().map(|(_, v)| *v).collect();

    let promoted = tree.rotate_left(root).unwrap();
    assert_eq!(tree.root(), Some(promoted));
    assert_eq!(tree.get(promoted), Some(&3));
    assert_eq!(tree.iter().map(|(_, v)| *v).collect::<Vec<_>>(), order);

    assert_eq!(tree.rotate_right(promoted), Some(root));
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.iter().map(|(_, v)| *v).collect::<Vec<_>>(), order);

    let leaf = tree.first().unwrap();
    assert_eq!(tree.rotate_left(leaf), None);
    assert_eq!(tree.rotate_right(leaf), None);
}

#[test]
fn tree_node_factory_matrix() {
    let mut tree = RbTree::new();
    let idx = tree.create_node(entry("x", 9)).unwrap();
    let node = tree.node(idx).unwrap();
    assert!(node.is_detached());
    assert_eq!(node.color, Color::Red);
    assert!(tree.is_empty());

    assert_eq!(tree.link_unique(idx, by_key), idx);
    assert_eq!(tree.root(), Some(idx));
    assert_eq!(tree.color(idx), Some(Color::Black));
    assert_eq!(tree.len(), 1);
}
