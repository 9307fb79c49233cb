//! rc-linked-list: a single-threaded singly-linked list whose nodes are
//! reference-counted and whose cursors observe nodes through weak
//! references that expire instead of dangling.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build RcLinkedList in safe, verifiable layers so each piece can
//!   be reasoned about independently.
//! - Layers:
//!   - node: structural chain of `Rc<Node<T>>` cells. Each node strongly
//!     owns its successor; the head link and the `next` links are the only
//!     long-lived strong references. Chain teardown is iterative so long
//!     lists never recurse the stack away.
//!   - cursor: `Weak`-holding positions, generic over a capability marker
//!     (`Shared`/`Exclusive`), plus the strong `ValueRef`/`ValueMut`
//!     guards a dereference produces.
//!   - RcLinkedList: public API that mints cursors, rewires links for
//!     insert-after/erase-after, and deep-copies on clone.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (`Rc`, no atomics).
//! - The list is the sole root of strong ownership; no node is ever linked
//!   into two lists' chains (deep copy exists precisely to prevent it).
//! - Cursors never own. An operation through a cursor whose node was
//!   removed fails with `ListError::ExpiredCursor`, deterministically.
//! - `len()` is O(n) by full traversal, a deliberate simplicity trade-off;
//!   `is_empty()` is the O(1) query.
//!
//! Why this split?
//! - Localize invariants: the node layer alone guarantees iterative
//!   teardown and ordered construction; the cursor layer alone defines
//!   expiry and identity equality; the list layer composes them.
//! - No unsafe: liveness is `Weak::upgrade`, identity is `Rc::ptr_eq`,
//!   interior mutability is per-field `RefCell`.
//! - Clear failure boundaries: structural preconditions are checked at the
//!   list layer and reported as `ListError`, never left undefined.
//!
//! Mutation and borrowing
//! - Values live in per-node `RefCell`s. Guards returned by cursors and
//!   iterators borrow at access time; overlapping mutable borrows of one
//!   value panic per `RefCell` convention. Structural mutation requires
//!   `&mut RcLinkedList`, and mutable-capability cursors are only minted
//!   from `&mut` receivers.
//!
//! Allocation and overflow semantics
//! - Node allocation aborts on exhaustion per the global allocator,
//!   matching `Rc`; there is no fallible-allocation surface.
//!
//! Notes and non-goals
//! - No internal locking; concurrent use from multiple threads is ruled
//!   out by `!Send`/`!Sync` rather than documented away.
//! - No consuming iterator: a node kept alive by an outstanding guard
//!   cannot yield its value by move. `iter`/`iter_mut` return guards.
//! - Cursor misuse across lists is rejected with `ListError::WrongList`
//!   via per-node owner stamps.
//! - Optional `serde` feature serializes a list as a plain sequence.

mod cursor;
mod error;
mod list;
mod node;
mod node_proptest;
#[cfg(feature = "serde")]
mod serde_impls;

// Public surface
pub use cursor::{Cursor, CursorMut, CursorT, Exclusive, Mode, Shared, ValueMut, ValueRef};
pub use error::ListError;
pub use list::{Iter, IterMut, RcLinkedList};
