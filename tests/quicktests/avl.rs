use avl_str::{Error, Tree};
use quickcheck_macros::quickcheck;

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and lookups we have the same keys in the same order.
fn do_ops(ops: &[Op], tree: &mut Tree, model: &mut Vec<String>) -> bool {
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k).unwrap();
                let pos = model.partition_point(|m| m <= k);
                model.insert(pos, k.clone());
            }
            Op::Retrieve(k) => {
                let found = tree.retrieve(k);
                let ok = match model.binary_search(k) {
                    Ok(_) => found == Ok(k.as_str()),
                    Err(_) => found == Err(Error::NotFound { key: k.clone() }),
                };
                if !ok {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.iter().eq(model.iter().map(String::as_str)) {
                    return false;
                }
            }
        }
    }

    true
}

/// The tallest an AVL tree holding `n` nodes can be.
fn max_avl_height(n: usize) -> usize {
    (1.45 * ((n + 2) as f64).log2()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    init_tracing();
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.len() == model.len()
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let tree = Tree::try_from_keys(&xs).unwrap();

    xs.iter().all(|x| tree.retrieve(x) == Ok(x.as_str()))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let tree = Tree::try_from_keys(&xs).unwrap();

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| matches!(tree.retrieve(x), Err(Error::NotFound { key }) if key == *x))
}

#[quickcheck]
fn count_includes_duplicates(xs: Vec<String>) -> bool {
    let mut tree = Tree::new();
    for x in xs.iter().chain(&xs) {
        tree.insert(x).unwrap();
    }

    tree.len() == 2 * xs.len() && tree.iter().len() == tree.len()
}

#[quickcheck]
fn height_bound(xs: Vec<String>) -> bool {
    let tree = Tree::try_from_keys(&xs).unwrap();
    tree.height() <= max_avl_height(xs.len())
}

#[quickcheck]
fn ascending_order(xs: Vec<String>) -> bool {
    let tree = Tree::try_from_keys(&xs).unwrap();
    let keys: Vec<_> = tree.iter().collect();

    keys.len() == xs.len() && keys.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn rotation_shapes() {
    init_tracing();
    for keys in [
        ["C", "B", "A"],
        ["C", "A", "B"],
        ["A", "B", "C"],
        ["A", "C", "B"],
    ] {
        let tree = Tree::try_from_keys(keys).unwrap();
        let mut shape = Vec::new();
        tree.traverse_structural(|key, depth| shape.push((key.to_string(), depth)));

        assert_eq!(
            shape,
            [("C".to_string(), 1), ("B".to_string(), 0), ("A".to_string(), 1)],
            "inserting {:?}",
            keys
        );
        assert_eq!(tree.height(), 2);
    }
}

#[test]
fn empty_tree() {
    let tree = Tree::new();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.iter().next(), None);
    assert!(matches!(tree.retrieve(""), Err(Error::NotFound { .. })));
    tree.destroy();
}
