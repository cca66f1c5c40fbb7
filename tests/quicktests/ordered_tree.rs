use linked_bst::{Tree, TreeError};

use std::collections::HashSet;

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let mut sorted = xs;
        sorted.sort();
        tree.inorder().into_iter().copied().eq(sorted)
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();

        let mut still_present = xs;
        for delete in &deletes {
            let len = tree.len();
            match still_present.iter().position(|x| x == delete) {
                // Only one copy goes per remove.
                Some(pos) => {
                    still_present.swap_remove(pos);
                    assert_eq!(tree.remove(delete), Ok(*delete));
                    assert_eq!(tree.len(), len - 1);
                }
                None => {
                    assert_eq!(tree.remove(delete), Err(TreeError::NotFound));
                    assert_eq!(tree.len(), len);
                }
            }
        }

        still_present.iter().all(|x| tree.contains(x))
            && deletes
                .iter()
                .filter(|x| !still_present.contains(x))
                .all(|x| !tree.contains(x))
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let mut expected: Vec<i8> = xs.into_iter().filter(|x| low <= *x && *x <= high).collect();
        expected.sort();
        tree.range_find(&low, &high).into_iter().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn successor_and_predecessor_are_nearest(xs: Vec<i8>, probe: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let successor = xs.iter().filter(|x| **x > probe).min();
        let predecessor = xs.iter().filter(|x| **x < probe).max();
        tree.successor(&probe) == successor && tree.predecessor(&probe) == predecessor
    }
}

quickcheck::quickcheck! {
    fn rebalance_height_is_floor_lg(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.rebalance();

        match tree.len() {
            0 => tree.height().is_none() && tree.is_balanced(),
            n => tree.height() == Some(n.ilog2() as usize) && tree.is_balanced(),
        }
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(xs: Vec<i8>, extra: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut copy = tree.clone();
        let same_shape = copy.iter().eq(tree.iter());

        copy.add(extra);
        same_shape && copy.len() == tree.len() + 1 && tree.len() == xs.len()
    }
}
