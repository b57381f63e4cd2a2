#![allow(dead_code)]
//! This module is used to document the invariants that are meant to be
//! preserved in this crate.

/// An empty container is represented by `NONE` entry links only: a
/// [`SinglyLinkedList<T>`](`crate::SinglyLinkedList<T>`) or
/// [`DoublyLinkedList<T>`](`crate::DoublyLinkedList<T>`) with a `NONE` head,
/// a [`CircularList<T>`](`crate::CircularList<T>`) with a `NONE` tail, a
/// [`Stack<T>`](`crate::Stack<T>`) with a `NONE` top, a
/// [`Queue<T>`](`crate::Queue<T>`) with `NONE` front and rear. A link held
/// by a container always designates a live arena slot; no live slot is ever
/// without a value.
pub const INVARIANT_1: () = ();

/// The arena's length is updated each time an element is added to a
/// container or removed from it, so `len()` always equals the number of live
/// nodes reachable from the entry link(s).
pub const INVARIANT_2: () = ();

/// Within a [`DoublyLinkedList<T>`](`crate::DoublyLinkedList<T>`):
/// * For every node `n` with a `next`, the `prev` of that next node is `n`
/// * For every node `n` with a `prev`, the `next` of that prev node is `n`
/// * The head has no `prev`, the tail has no `next`, and the tail is the
///   last node reachable from the head
pub const INVARIANT_3: () = ();

/// Within a non-empty [`CircularList<T>`](`crate::CircularList<T>`),
/// following `next` from any node visits every other node exactly once
/// before returning to the original node. The tail link always designates
/// the most recent node inserted at the tail (or the sole node), never an
/// interior node.
pub const INVARIANT_4: () = ();

/// Within a [`Queue<T>`](`crate::Queue<T>`), `rear` is `NONE` exactly when
/// `front` is `NONE`, and otherwise `rear` is the last node reachable from
/// `front`.
pub const INVARIANT_5: () = ();

/// Positions in `insert_at`/`remove_at` are 1-based. An operation that
/// reports [`InvalidPosition`](`crate::InvalidPosition`) has not mutated the
/// container: mutations are all-or-nothing.
pub const INVARIANT_6: () = ();
