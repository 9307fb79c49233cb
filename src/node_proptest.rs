#![cfg(test)]

// Property tests for the structural node layer kept inside the crate so
// they do not require exposing internal modules.

use proptest::prelude::*;
use std::rc::Rc;

use crate::node::{self, Link, ListId};

fn collect(mut link: Link<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    while let Some(node) = link {
        out.push(*node.value());
        link = node.next();
    }
    out
}

proptest! {
    // Property: a chain built from any vector traverses back to exactly
    // that vector, and every node carries the owner stamp.
    #[test]
    fn prop_build_round_trips(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let id = ListId::fresh();
        let head = node::build(values.clone(), id);
        prop_assert_eq!(collect(head.clone()), values);

        let mut link = head;
        while let Some(n) = link {
            prop_assert_eq!(n.owner(), id);
            link = n.next();
        }
    }

    // Property: after unlink_all, no node of the chain can be upgraded
    // from a weak observer, regardless of which position was watched.
    #[test]
    fn prop_unlink_all_releases(values in proptest::collection::vec(any::<i32>(), 1..64), watch in 0usize..64) {
        let id = ListId::fresh();
        let head = node::build(values.clone(), id);

        let watch = watch % values.len();
        let mut cur = head.clone().unwrap();
        for _ in 0..watch {
            cur = cur.next().unwrap();
        }
        let weak = Rc::downgrade(&cur);
        drop(cur);

        node::unlink_all(head);
        prop_assert!(weak.upgrade().is_none());
    }
}
