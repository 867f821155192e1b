use core::cmp::Ordering;
use core::marker::PhantomData;

use alloc::vec::Vec;

use smallvec::SmallVec;

use super::arena::{NodeArena, SlotArena};
use super::node::{Node, linked_height};
use super::node_id::NodeId;

/// Explicit stack for the pairwise walks of structural comparison.
type PairWalk = SmallVec<[(Option<NodeId>, Option<NodeId>); 16]>;

/// The node store backing every tree variant in this crate.
///
/// Owns the root link, the authoritative element count, and the allocation
/// strategy. The store is a mechanism, not a policy enforcer: it allocates,
/// links, and destroys nodes under the documented preconditions, while
/// search/insert/delete decisions belong to the concrete variant built on top.
#[derive(Clone)]
pub(crate) struct RawTree<T, A = SlotArena<T>> {
    /// Strategy holding all node slots.
    arena: A,
    /// Id of the root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// Count of live nodes, maintained by the construct/destroy primitives
    /// rather than derived by traversal.
    len: usize,
    marker: PhantomData<T>,
}

impl<T> RawTree<T> {
    /// Creates an empty tree over the default slot arena.
    pub(crate) const fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            root: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            root: None,
            len: 0,
            marker: PhantomData,
        }
    }
}

impl<T, A: NodeArena<T>> RawTree<T, A> {
    /// Creates an empty tree over an injected allocation strategy.
    pub(crate) fn with_arena(arena: A) -> Self {
        Self {
            arena,
            root: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub(crate) const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena.get_mut(id)
    }

    /// Destroys every node and resets the tree to empty.
    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Allocates one unlinked node holding `value`: links `None`, height 0.
    /// No side effects beyond the allocation and the count.
    pub(crate) fn construct_node(&mut self, value: T) -> NodeId {
        let id = self.arena.alloc(Node::new(value));
        self.len += 1;
        id
    }

    /// Destroys one node and returns its parent so callers can continue
    /// height maintenance upward.
    ///
    /// `None` in is a no-op returning `None`. Destroying the root clears the
    /// root link and returns `None`. Otherwise the parent's matching child
    /// link is severed first; a parent whose links do not point back at
    /// `node` keeps its links unchanged. Children of the destroyed node are
    /// not reclaimed here, so callers destroy leafward or use [`clear`].
    ///
    /// [`clear`]: RawTree::clear
    pub(crate) fn destroy_node(&mut self, node: Option<NodeId>) -> Option<NodeId> {
        let id = node?;
        let parent = self.node(id).parent;

        let Some(parent_id) = parent else {
            if self.root == Some(id) {
                self.root = None;
            }
            self.arena.free(id);
            self.len -= 1;
            return None;
        };

        self.node_mut(parent_id).replace_child(id, None);
        self.arena.free(id);
        self.len -= 1;

        Some(parent_id)
    }

    /// Unlinks a node with at most one child, reconnecting that child (or
    /// nothing) to the node's parent, and moves the node out of its slot.
    pub(crate) fn splice_out(&mut self, id: NodeId) -> Node<T> {
        let (parent, child) = {
            let node = self.node(id);
            debug_assert!(
                node.left.is_none() || node.right.is_none(),
                "`RawTree::splice_out()` - node has two children!"
            );
            (node.parent, node.left.or(node.right))
        };

        if let Some(child_id) = child {
            self.node_mut(child_id).parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent_id) => self.node_mut(parent_id).replace_child(id, child),
        }

        self.len -= 1;
        self.arena.take(id)
    }

    /// Exchanges the values of two distinct nodes, leaving all linkage and
    /// height bookkeeping in place.
    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        let (node_a, node_b) = self.arena.get_pair_mut(a, b);
        core::mem::swap(&mut node_a.value, &mut node_b.value);
    }

    /// Recomputes heights from `start` up the ancestor chain, stopping at the
    /// first node whose height is already correct.
    pub(crate) fn update_heights_above(&mut self, start: Option<NodeId>) {
        let mut current = start;
        while let Some(id) = current {
            let (left, right, parent) = {
                let node = self.node(id);
                (node.left, node.right, node.parent)
            };
            let height = linked_height(
                left.map(|l| self.node(l).height),
                right.map(|r| self.node(r).height),
            );

            let node = self.node_mut(id);
            if node.height == height {
                break;
            }
            node.height = height;
            current = parent;
        }
    }

    /// Deepest left descendant of `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Deepest right descendant of `id`.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// First node in in-order sequence, if any.
    pub(crate) fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Last node in in-order sequence, if any.
    pub(crate) fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// In-order successor via parent-aware traversal: the leftmost node of
    /// the right subtree if one exists, else the first ancestor reached from
    /// a left child. `None` means the sequence is exhausted.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost(right));
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(parent_id) = parent {
            if self.node(parent_id).left == Some(child) {
                return Some(parent_id);
            }
            child = parent_id;
            parent = self.node(parent_id).parent;
        }
        None
    }

    /// In-order predecessor, symmetric to [`successor`].
    ///
    /// [`successor`]: RawTree::successor
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.node(id).left {
            return Some(self.rightmost(left));
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(parent_id) = parent {
            if self.node(parent_id).right == Some(child) {
                return Some(parent_id);
            }
            child = parent_id;
            parent = self.node(parent_id).parent;
        }
        None
    }

    /// Moves every value out in sorted order and resets the tree to empty.
    /// O(n); each slot is reclaimed through the strategy.
    pub(crate) fn drain_in_order(&mut self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(id) = current {
            order.push(id);
            current = self.successor(id);
        }

        let mut values = Vec::with_capacity(order.len());
        for id in order {
            values.push(self.arena.take(id).value);
        }

        self.arena.clear();
        self.root = None;
        self.len = 0;

        values
    }
}

impl<T: Ord, A: NodeArena<T>> RawTree<T, A> {
    /// Allocates a node with the given linkage, computing its height from the
    /// children present, and links it into `parent`'s matching child slot by
    /// comparison with the parent's value. A value equal to the parent's
    /// leaves the parent's links untouched (no duplicate path). Heights above
    /// `parent` are NOT updated here; insert/rebalance logic owns upward
    /// propagation via [`update_heights_above`].
    ///
    /// [`update_heights_above`]: RawTree::update_heights_above
    pub(crate) fn construct_linked_node(
        &mut self,
        value: T,
        parent: Option<NodeId>,
        left: Option<NodeId>,
        right: Option<NodeId>,
    ) -> NodeId {
        let height = linked_height(
            left.map(|l| self.node(l).height),
            right.map(|r| self.node(r).height),
        );
        let side = parent.map(|p| value.cmp(&self.node(p).value));

        let mut node = Node::new(value);
        node.parent = parent;
        node.left = left;
        node.right = right;
        node.height = height;

        let id = self.arena.alloc(node);
        self.len += 1;

        if let (Some(parent_id), Some(ordering)) = (parent, side) {
            match ordering {
                Ordering::Less => self.node_mut(parent_id).left = Some(id),
                Ordering::Greater => self.node_mut(parent_id).right = Some(id),
                Ordering::Equal => {}
            }
        }

        id
    }
}

impl<T: PartialEq, A: NodeArena<T>> RawTree<T, A> {
    /// Node-by-node structural equality: two trees are equal only when their
    /// shapes, heights, and values all coincide. Trees holding the same
    /// elements in different shapes are NOT equal under this scheme.
    pub(crate) fn structural_eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut walk: PairWalk = SmallVec::new();
        walk.push((self.root, other.root));
        while let Some(pair) = walk.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let node_a = self.node(a);
                    let node_b = other.node(b);
                    if node_a.height != node_b.height || node_a.value != node_b.value {
                        return false;
                    }
                    walk.push((node_a.left, node_b.left));
                    walk.push((node_a.right, node_b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Ord, A: NodeArena<T>> RawTree<T, A> {
    /// Deterministic pre-order structural ordering: a missing node sorts
    /// before a present one, then value, then height, then the left and
    /// right subtrees in turn.
    pub(crate) fn structural_cmp(&self, other: &Self) -> Ordering {
        let mut walk: PairWalk = SmallVec::new();
        walk.push((self.root, other.root));
        while let Some(pair) = walk.pop() {
            match pair {
                (None, None) => {}
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => {
                    let node_a = self.node(a);
                    let node_b = other.node(b);
                    let ordering = node_a
                        .value
                        .cmp(&node_b.value)
                        .then_with(|| node_a.height.cmp(&node_b.height));
                    match ordering {
                        Ordering::Equal => {
                            walk.push((node_a.right, node_b.right));
                            walk.push((node_a.left, node_b.left));
                        }
                        unequal => return unequal,
                    }
                }
            }
        }
        Ordering::Equal
    }
}
