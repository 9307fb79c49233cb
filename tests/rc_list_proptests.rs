// RcLinkedList property tests (consolidated).
//
// Property 1: structure matches a Vec model under random operations.
//  - Model: Vec<i32> mirroring the expected sequence.
//  - Operations: push_front, pop_front, insert_after at a random
//    position, erase_after at a random position, clear (rare).
//  - Invariant after each step: traversal equals the model, len() equals
//    the model length, is_empty() agrees, and the list equals a fresh
//    list built from the model (structural equality).
//
// Property 2: cursor liveness matches a removal model.
//  - Model: one cursor captured per initial node, plus a Vec of the
//    values still present.
//  - Operations: erase random positions until the list is empty.
//  - Invariant after each step: a captured cursor is expired iff its
//    node's value was removed; live cursors still read their value.
//
// Property 3: deep copies are independent of source mutation.
use proptest::prelude::*;
use rc_linked_list::{Cursor, RcLinkedList};

/// Walk to the node at `index` (0-based), which must exist.
fn cursor_at(list: &RcLinkedList<i32>, index: usize) -> Cursor<i32> {
    let mut it = list.cursor_front();
    for _ in 0..index {
        it.advance().expect("index within list");
    }
    it
}

fn to_vec(list: &RcLinkedList<i32>) -> Vec<i32> {
    list.iter().map(|v| *v.borrow()).collect()
}

proptest! {
    // Property 1: random op sequences keep the list equal to the model.
    #[test]
    fn prop_list_matches_vec_model(
        ops in proptest::collection::vec((0u8..=4u8, any::<i32>(), 0usize..100), 1..120),
    ) {
        let mut list: RcLinkedList<i32> = RcLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for (op, value, raw_pos) in ops {
            match op {
                // push_front
                0 => {
                    list.push_front(value);
                    model.insert(0, value);
                }
                // pop_front: fails iff the model is empty
                1 => {
                    let res = list.pop_front();
                    if model.is_empty() {
                        prop_assert!(res.is_err());
                    } else {
                        prop_assert!(res.is_ok());
                        model.remove(0);
                    }
                }
                // insert_after a random live position
                2 => {
                    if !model.is_empty() {
                        let pos = raw_pos % model.len();
                        let at = cursor_at(&list, pos);
                        let returned = list.insert_after(&at, value).unwrap();
                        model.insert(pos + 1, value);
                        prop_assert_eq!(*returned.value().unwrap().borrow(), value);
                    }
                }
                // erase_after a random live position: fails iff last
                3 => {
                    if !model.is_empty() {
                        let pos = raw_pos % model.len();
                        let at = cursor_at(&list, pos);
                        let res = list.erase_after(&at);
                        if pos + 1 < model.len() {
                            prop_assert!(res.is_ok());
                            model.remove(pos + 1);
                        } else {
                            prop_assert!(res.is_err());
                        }
                    }
                }
                // clear, made rare by the op-code distribution
                4 => {
                    if raw_pos == 0 {
                        list.clear();
                        model.clear();
                    }
                }
                _ => unreachable!(),
            }

            // Invariants after each step.
            prop_assert_eq!(to_vec(&list), model.clone());
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            let rebuilt: RcLinkedList<i32> = model.iter().copied().collect();
            prop_assert_eq!(&list, &rebuilt);
        }
    }

    // Property 2: a cursor expires exactly when its node is removed.
    #[test]
    fn prop_cursor_liveness_tracks_removal(
        values in proptest::collection::vec(any::<i32>(), 1..24),
        picks in proptest::collection::vec(0usize..100, 1..48),
    ) {
        let mut list: RcLinkedList<i32> = values.iter().copied().collect();

        // One cursor per initial position, tagged with its value's slot.
        let mut tracked: Vec<(usize, Cursor<i32>)> = Vec::new();
        for i in 0..values.len() {
            tracked.push((i, cursor_at(&list, i)));
        }
        let mut alive: Vec<bool> = vec![true; values.len()];
        // Maps current list position -> original slot.
        let mut order: Vec<usize> = (0..values.len()).collect();

        for pick in picks {
            if order.is_empty() {
                break;
            }
            let pos = pick % order.len();
            if pos == 0 {
                list.pop_front().unwrap();
            } else {
                let at = cursor_at(&list, pos - 1);
                list.erase_after(&at).unwrap();
            }
            let slot = order.remove(pos);
            alive[slot] = false;

            for (slot, cursor) in &tracked {
                prop_assert_eq!(cursor.is_expired(), !alive[*slot]);
                if alive[*slot] {
                    prop_assert_eq!(*cursor.value().unwrap().borrow(), values[*slot]);
                } else {
                    prop_assert!(cursor.value().is_err());
                }
            }
        }
    }

    // Property 3: a deep copy never observes later mutation of its source.
    #[test]
    fn prop_clone_is_independent(
        values in proptest::collection::vec(any::<i32>(), 0..24),
        extra in any::<i32>(),
    ) {
        let mut source: RcLinkedList<i32> = values.iter().copied().collect();
        let copy = source.clone();
        prop_assert_eq!(&copy, &source);

        source.push_front(extra);
        prop_assert_eq!(to_vec(&copy), values.clone());

        if !values.is_empty() {
            *source.front_mut().unwrap() = extra.wrapping_add(1);
            prop_assert_eq!(to_vec(&copy), values);
        }
    }
}
