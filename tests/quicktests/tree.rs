use linked_bst::Tree;

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a tree and a multiset of counts.
/// Returns how many removes succeeded so sizes can be checked against
/// the number of adds.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, counts: &mut BTreeMap<K, usize>) -> usize
where
    K: Ord + Clone,
{
    let mut removed = 0;
    for op in ops {
        match op {
            Op::Add(k) => {
                bst.add(k.clone());
                *counts.entry(k.clone()).or_default() += 1;
            }
            Op::Remove(k) => {
                if bst.remove(k).is_ok() {
                    removed += 1;
                    if let Some(count) = counts.get_mut(k) {
                        *count -= 1;
                    }
                    counts.retain(|_, count| *count > 0);
                }
            }
            Op::Rebalance => bst.rebalance(),
        }
    }

    removed
}

fn is_sorted<K: Ord>(items: &[&K]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        let removed = do_ops(&ops, &mut tree, &mut counts);
        let added = ops.iter().filter(|op| matches!(op, Op::Add(_))).count();

        tree.len() == added - removed
            && tree.len() == counts.values().sum::<usize>()
            && (i8::MIN..=i8::MAX).all(|k| tree.contains(&k) == counts.contains_key(&k))
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let items: Vec<_> = tree.inorder().collect();

        items.len() == xs.len() && is_sorted(&items)
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_items(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.rebalance();

        let mut expected = xs;
        expected.sort();
        tree.inorder().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn rebuild_balances_distinct_items(xs: Vec<u16>) -> bool {
        let mut xs = xs;
        xs.sort();
        xs.dedup();
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.rebuild();

        tree.is_balanced() && tree.inorder().copied().eq(xs)
    }
}

quickcheck::quickcheck! {
    fn successor_and_predecessor_match_sorted_items(xs: Vec<i8>, probe: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let expected_successor = xs.iter().filter(|&&x| x > probe).min();
        let expected_predecessor = xs.iter().filter(|&&x| x < probe).max();
        tree.successor(&probe) == expected_successor
            && tree.predecessor(&probe) == expected_predecessor
    }
}

quickcheck::quickcheck! {
    fn range_find_matches_filter(xs: Vec<i8>, a: i8, b: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let (low, high) = (a.min(b), a.max(b));

        match tree.range_find(&low, &high) {
            None => !xs.contains(&low) || !xs.contains(&high),
            Some(found) => {
                let expected = xs.iter().filter(|&&x| low <= x && x <= high).count();
                found.len() == expected && found.iter().all(|&&x| low <= x && x <= high)
            }
        }
    }
}
