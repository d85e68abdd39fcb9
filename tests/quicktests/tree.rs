use avl::{AvlError, Node, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Asserts ordering, cached heights and balance factors of every node and
/// returns the number of nodes.
fn check_avl(tree: &Tree<i8>) -> usize {
    fn check(node: Option<&Node<i8>>, lower: Option<i8>, upper: Option<i8>) -> (isize, usize) {
        let Some(node) = node else {
            return (-1, 0);
        };
        let element = *node.element();
        assert!(lower.map_or(true, |lower| lower < element));
        assert!(upper.map_or(true, |upper| element < upper));

        let (left_height, left_count) = check(node.left(), lower, Some(element));
        let (right_height, right_count) = check(node.right(), Some(element), upper);
        assert_eq!(node.height(), left_height.max(right_height) + 1);
        assert_eq!(node.balance_factor(), left_height - right_height);
        assert!(node.balance_factor().abs() <= 1);

        (node.height(), left_count + right_count + 1)
    }

    let (height, count) = check(tree.root(), None, None);
    assert_eq!(height, tree.height());
    count
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                assert_eq!(tree.insert(x), set.insert(x));
            }
            Op::Remove(x) => match set.take(&x) {
                Some(removed) => assert_eq!(tree.remove(&x), Ok(removed)),
                None => assert_eq!(tree.remove(&x), Err(AvlError::NotFound)),
            },
            Op::Between(lower, upper) => {
                let between = tree.sorted_in_between(&lower, &upper);
                if lower > upper {
                    assert_eq!(between, Err(AvlError::InvertedBounds));
                } else {
                    let expected: Vec<_> =
                        set.iter().filter(|&&x| lower < x && x < upper).collect();
                    assert_eq!(between, Ok(expected));
                }
            }
        }
        assert_eq!(check_avl(tree), tree.size());
        assert_eq!(tree.size(), set.len());
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter()
            .filter(|x| !added.contains(*x))
            .all(|x| !tree.contains(x) && tree.get(x) == Err(AvlError::NotFound))
    }
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_increasing(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let inorder: Vec<_> = tree.iter().collect();

        inorder.windows(2).all(|w| w[0] < w[1]) && inorder.len() == tree.size()
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_is_a_no_op(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let size = tree.size();
        let height = tree.height();
        let inorder: Vec<_> = tree.iter().copied().collect();

        xs.iter().all(|&x| !tree.insert(x))
            && tree.size() == size
            && tree.height() == height
            && tree.iter().copied().eq(inorder)
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            let size = tree.size();
            match tree.remove(delete) {
                Ok(removed) => {
                    assert_eq!(removed, *delete);
                    assert_eq!(tree.size(), size - 1);
                }
                Err(_) => assert_eq!(tree.size(), size),
            }
            assert!(!tree.contains(delete));
            check_avl(&tree);
        }

        xs.iter()
            .filter(|x| !deletes.contains(*x))
            .all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn height_is_bounded(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let bound = 1.44 * ((tree.size() + 2) as f64).log2() - 0.328;

        (tree.height() as f64) <= bound
    }
}

quickcheck::quickcheck! {
    fn deepest_branches_reach_the_bottom(xs: Vec<i8>) -> bool {
        // A node lies on a deepest branch exactly when its depth plus its
        // height is the height of the whole tree.
        fn walk(node: &Node<i8>, depth: isize, total: isize, out: &mut Vec<i8>) {
            if depth + node.height() == total {
                out.push(*node.element());
            }
            for child in [node.left(), node.right()].into_iter().flatten() {
                walk(child, depth + 1, total, out);
            }
        }

        let tree: Tree<_> = xs.into_iter().collect();
        let mut expected = Vec::new();
        if let Some(root) = tree.root() {
            walk(root, 0, tree.height(), &mut expected);
        }

        tree.deepest_branches().into_iter().copied().eq(expected)
    }
}

#[test]
fn example_tree_queries() {
    let tree = Tree::from_ordered_insertions([
        10, 5, 15, 2, 7, 13, 20, 1, 4, 6, 8, 14, 17, 25, 0, 9, 30,
    ]);

    assert_eq!(tree.size(), 17);
    assert_eq!(tree.height(), 4);
    assert_eq!(
        tree.deepest_branches(),
        [&10, &5, &2, &1, &0, &7, &8, &9, &15, &20, &25, &30]
    );
    assert_eq!(tree.sorted_in_between(&7, &14), Ok(vec![&8, &9, &10, &13]));
    assert_eq!(tree.sorted_in_between(&3, &8), Ok(vec![&4, &5, &6, &7]));
    assert_eq!(tree.sorted_in_between(&8, &8), Ok(vec![]));
}

#[test]
fn small_rotations() {
    for order in [[1, 2, 3], [3, 1, 2], [3, 2, 1], [1, 3, 2]] {
        let tree = Tree::from_ordered_insertions(order);
        let root = tree.root().unwrap();

        assert_eq!(root.element(), &2);
        assert_eq!(root.left().map(Node::element), Some(&1));
        assert_eq!(root.right().map(Node::element), Some(&3));
        assert_eq!(tree.height(), 1);
    }
}
