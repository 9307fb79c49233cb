//! Public container: `RcLinkedList` and its traversal iterators.

use core::cell::{Ref, RefMut};
use core::fmt;
use core::marker::PhantomData;

use crate::cursor::{Cursor, CursorMut, CursorT, Mode, ValueMut, ValueRef};
use crate::error::ListError;
use crate::node::{self, Link, ListId, Node};

/// A singly-linked list with reference-counted nodes and weak cursors.
///
/// The list is the sole root of strong ownership: the head and each node's
/// `next` link keep the chain alive, and no node is ever shared between
/// two lists (`Clone` deep-copies precisely to guarantee that). Cursors
/// observe nodes weakly and report `ListError::ExpiredCursor` once their
/// node has been removed, rather than dangling.
///
/// Single-threaded: the type is `!Send`/`!Sync` like `Rc` itself, and no
/// operation locks or suspends.
pub struct RcLinkedList<T> {
    head: Link<T>,
    id: ListId,
}

impl<T> RcLinkedList<T> {
    /// An empty list.
    pub fn new() -> Self {
        RcLinkedList {
            head: None,
            id: ListId::fresh(),
        }
    }

    /// True iff the list has no head node. O(1).
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, by full traversal. O(n); callers that query the
    /// length frequently should cache it.
    pub fn len(&self) -> usize {
        let mut n = 0;
        let mut link = self.head.clone();
        while let Some(node) = link {
            n += 1;
            link = node.next();
        }
        n
    }

    /// Drop every node and leave the list empty.
    ///
    /// Unlinks iteratively from head to tail; see `node::unlink_all` for
    /// why teardown must not recurse.
    pub fn clear(&mut self) {
        node::unlink_all(self.head.take());
    }

    /// Prepend a value. O(1). Cursors into the existing chain stay valid:
    /// they track nodes, not positions.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::link(value, self.head.take(), self.id));
    }

    /// Remove the head node. Fails with `InvalidOperation` on an empty
    /// list. Cursors targeting the removed node expire.
    pub fn pop_front(&mut self) -> Result<(), ListError> {
        let head = self.head.take().ok_or(ListError::InvalidOperation)?;
        self.head = head.take_next();
        Ok(())
    }

    /// Borrow the first value. Fails with `InvalidOperation` when empty.
    pub fn front(&self) -> Result<Ref<'_, T>, ListError> {
        match &self.head {
            Some(node) => Ok(node.value()),
            None => Err(ListError::InvalidOperation),
        }
    }

    /// Mutably borrow the first value. Fails with `InvalidOperation` when
    /// empty.
    pub fn front_mut(&mut self) -> Result<RefMut<'_, T>, ListError> {
        match &self.head {
            Some(node) => Ok(node.value_mut()),
            None => Err(ListError::InvalidOperation),
        }
    }

    /// Read-only cursor at the head node, or the detached position if the
    /// list is empty.
    pub fn cursor_front(&self) -> Cursor<T> {
        Cursor::over(&self.head)
    }

    /// Mutable-capability cursor at the head node. Requires `&mut self`:
    /// mutable access flows from exclusive access to the list.
    pub fn cursor_front_mut(&mut self) -> CursorMut<T> {
        CursorMut::over(&self.head)
    }

    /// The canonical past-the-end cursor. Identical for every list; equals
    /// any expired cursor.
    pub fn cursor_end(&self) -> Cursor<T> {
        Cursor::detached()
    }

    /// Mutable-capability past-the-end cursor.
    pub fn cursor_end_mut(&mut self) -> CursorMut<T> {
        CursorMut::detached()
    }

    /// Resolve a cursor into this list's chain, rejecting cursors that
    /// outlived their node or belong to another list.
    fn resolve<M: Mode>(&self, at: &CursorT<T, M>) -> Result<crate::node::NodeRef<T>, ListError> {
        let node = at.node()?;
        if node.owner() != self.id {
            return Err(ListError::WrongList);
        }
        Ok(node)
    }

    /// Insert `value` directly after the cursor's node and return a cursor
    /// to the new node. O(1).
    ///
    /// Fails with `ExpiredCursor` if the position no longer resolves and
    /// `WrongList` if it resolves into a different list's chain.
    pub fn insert_after<M: Mode>(
        &mut self,
        at: &CursorT<T, M>,
        value: T,
    ) -> Result<CursorT<T, M>, ListError> {
        let node = self.resolve(at)?;
        let new = Node::link(value, node.take_next(), self.id);
        node.set_next(Some(new.clone()));
        Ok(CursorT::at(&new))
    }

    /// Remove the node directly after the cursor's node, dropping its last
    /// strong reference, and return a cursor to the node that now follows.
    /// O(1).
    ///
    /// Fails with `ExpiredCursor`/`WrongList` as `insert_after`, and with
    /// `InvalidOperation` if the cursor's node has no successor. Cursors
    /// targeting the removed node expire.
    pub fn erase_after<M: Mode>(&mut self, at: &CursorT<T, M>) -> Result<CursorT<T, M>, ListError> {
        let node = self.resolve(at)?;
        let removed = node.take_next().ok_or(ListError::InvalidOperation)?;
        let after = removed.take_next();
        node.set_next(after.clone());
        Ok(CursorT::over(&after))
    }

    /// Iterator over strong read guards, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            link: self.head.clone(),
            _list: PhantomData,
        }
    }

    /// Iterator over strong mutable guards, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            link: self.head.clone(),
            _list: PhantomData,
        }
    }
}

impl<T> Default for RcLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RcLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Deep copy: entirely new nodes holding clones of each value, in order.
/// The copy never shares node identity with the source, so cursors from
/// one never equal cursors from the other.
impl<T: Clone> Clone for RcLinkedList<T> {
    fn clone(&self) -> Self {
        let id = ListId::fresh();
        RcLinkedList {
            head: node::build(self.iter().map(|v| v.borrow().clone()), id),
            id,
        }
    }

    /// Copy-assignment: release the existing chain first, then deep-copy
    /// the source. Existing cursors into `self` expire.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.head = node::build(source.iter().map(|v| v.borrow().clone()), self.id);
    }
}

/// Structural equality: same length, elementwise-equal values, in order.
impl<T: PartialEq> PartialEq for RcLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        node::sequences_equal(self.head.clone(), other.head.clone())
    }
}

impl<T: Eq> Eq for RcLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for RcLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Build from a sequence, preserving its order.
impl<T> FromIterator<T> for RcLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let id = ListId::fresh();
        RcLinkedList {
            head: node::build(iter, id),
            id,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for RcLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Front-to-back traversal yielding `ValueRef` guards.
///
/// Guards are strong references, so an item may outlive the borrow of the
/// list; a guard held across a removal keeps just its own node alive.
pub struct Iter<'a, T> {
    link: Link<T>,
    _list: PhantomData<&'a RcLinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ValueRef<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.link.take()?;
        self.link = node.next();
        Some(ValueRef::new(node))
    }
}

/// Front-to-back traversal yielding `ValueMut` guards.
pub struct IterMut<'a, T> {
    link: Link<T>,
    _list: PhantomData<&'a mut RcLinkedList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = ValueMut<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.link.take()?;
        self.link = node.next();
        Some(ValueMut::new(node))
    }
}

impl<'a, T> IntoIterator for &'a RcLinkedList<T> {
    type Item = ValueRef<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RcLinkedList<T> {
    type Item = ValueMut<T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
