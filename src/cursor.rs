//! Cursors: weak, expiring positions into a list, plus the strong value
//! guards produced by dereferencing one.
//!
//! A cursor never owns its node. It holds a `Weak` reference that resolves
//! only while the node is still reachable from some list head; once the
//! node is popped, erased, or the list is cleared or dropped, resolution
//! fails and every operation reports `ListError::ExpiredCursor`. The
//! detached cursor (`Weak::new()`, no control block) doubles as the
//! past-the-end position.
//!
//! Mutable and read-only cursors are a single generic type parameterized
//! by a capability marker; the marker gates mutable access and nothing
//! else, so the two variants compare and convert freely.

use core::cell::{Ref, RefMut};
use core::fmt;
use core::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::error::ListError;
use crate::node::{Node, NodeRef};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Shared {}
    impl Sealed for super::Exclusive {}
}

/// Capability marker for cursors. Sealed: `Shared` and `Exclusive` are the
/// only two modes.
pub trait Mode: sealed::Sealed {}

/// Marker for read-only cursors.
pub enum Shared {}
/// Marker for cursors that may hand out mutable value access.
pub enum Exclusive {}

impl Mode for Shared {}
impl Mode for Exclusive {}

/// A position in a list, generic over the capability marker.
///
/// Use the `Cursor`/`CursorMut` aliases; lists mint them via
/// `cursor_front`/`cursor_front_mut`.
pub struct CursorT<T, M: Mode> {
    target: Weak<Node<T>>,
    _mode: PhantomData<M>,
}

/// Read-only cursor.
pub type Cursor<T> = CursorT<T, Shared>;
/// Cursor with mutable value access.
pub type CursorMut<T> = CursorT<T, Exclusive>;

impl<T, M: Mode> CursorT<T, M> {
    pub(crate) fn at(node: &NodeRef<T>) -> Self {
        CursorT {
            target: Rc::downgrade(node),
            _mode: PhantomData,
        }
    }

    pub(crate) fn over(link: &Option<NodeRef<T>>) -> Self {
        match link {
            Some(node) => Self::at(node),
            None => Self::detached(),
        }
    }

    /// The canonical expired cursor: targets nothing and never resolves.
    /// This is the past-the-end position of every list.
    pub fn detached() -> Self {
        CursorT {
            target: Weak::new(),
            _mode: PhantomData,
        }
    }

    /// Resolve the weak reference or fail.
    pub(crate) fn node(&self) -> Result<NodeRef<T>, ListError> {
        self.target.upgrade().ok_or(ListError::ExpiredCursor)
    }

    /// True once the target node has been dropped from every live chain
    /// (or the cursor was detached to begin with).
    pub fn is_expired(&self) -> bool {
        self.target.strong_count() == 0
    }

    /// Dereference: a strong guard for the target node's value.
    ///
    /// The guard keeps the node alive while the value is being read, even
    /// if the node is concurrently unlinked from its list.
    pub fn value(&self) -> Result<ValueRef<T>, ListError> {
        Ok(ValueRef { node: self.node()? })
    }

    /// Step to the successor node, or to the detached position if the
    /// target is last. Only this handle moves: advancing a clone never
    /// disturbs the original.
    pub fn advance(&mut self) -> Result<(), ListError> {
        let node = self.node()?;
        self.target = match node.next() {
            Some(next) => Rc::downgrade(&next),
            None => Weak::new(),
        };
        Ok(())
    }
}

impl<T> CursorT<T, Exclusive> {
    /// Dereference mutably: a strong guard allowing in-place mutation.
    pub fn value_mut(&self) -> Result<ValueMut<T>, ListError> {
        Ok(ValueMut { node: self.node()? })
    }

    /// The read-only cursor at the same position.
    pub fn downgrade(&self) -> Cursor<T> {
        Cursor {
            target: self.target.clone(),
            _mode: PhantomData,
        }
    }
}

impl<T, M: Mode> Clone for CursorT<T, M> {
    fn clone(&self) -> Self {
        CursorT {
            target: self.target.clone(),
            _mode: PhantomData,
        }
    }
}

impl<T, M: Mode> Default for CursorT<T, M> {
    fn default() -> Self {
        Self::detached()
    }
}

/// Cursors are equal iff they target the identical node, or both are
/// expired. Holds across capability variants. Note the second arm: every
/// expired cursor equals every other expired cursor and the detached
/// position, even when their dead targets were distinct nodes.
impl<T, A: Mode, B: Mode> PartialEq<CursorT<T, B>> for CursorT<T, A> {
    fn eq(&self, other: &CursorT<T, B>) -> bool {
        match (self.target.upgrade(), other.target.upgrade()) {
            (Some(a), Some(b)) => Rc::ptr_eq(&a, &b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T, M: Mode> Eq for CursorT<T, M> {}

impl<T, M: Mode> fmt::Debug for CursorT<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_expired() { "expired" } else { "live" };
        f.debug_tuple("Cursor").field(&state).finish()
    }
}

/// Strong read guard for a cursor's target value.
///
/// Holds the node alive for the guard's lifetime; borrow with `borrow()`.
pub struct ValueRef<T> {
    node: NodeRef<T>,
}

impl<T> ValueRef<T> {
    pub(crate) fn new(node: NodeRef<T>) -> Self {
        ValueRef { node }
    }

    /// Borrow the value.
    ///
    /// Panics if the value is currently mutably borrowed through a
    /// `ValueMut` guard (standard `RefCell` discipline).
    pub fn borrow(&self) -> Ref<'_, T> {
        self.node.value()
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.borrow().fmt(f)
    }
}

/// Strong guard with mutable access to a cursor's target value.
pub struct ValueMut<T> {
    node: NodeRef<T>,
}

impl<T> ValueMut<T> {
    pub(crate) fn new(node: NodeRef<T>) -> Self {
        ValueMut { node }
    }

    /// Borrow the value.
    ///
    /// Panics if the value is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.node.value()
    }

    /// Mutably borrow the value.
    ///
    /// Panics if the value is currently borrowed, mutably or not.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.node.value_mut()
    }

    /// Swap in a new value, returning the old one.
    pub fn replace(&self, value: T) -> T {
        core::mem::replace(&mut *self.node.value_mut(), value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueMut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.borrow().fmt(f)
    }
}
