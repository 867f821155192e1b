use alloc::vec::Vec;

use super::node::Node;
use super::node_id::NodeId;

/// The allocation strategy every node lifetime event routes through.
///
/// A strategy is chosen per tree instance; pooling or tracking arenas
/// implement this trait and compose with the tree unchanged. The strategy is
/// parameterized by the stored value type and hands out `Node<T>` slots,
/// mirroring the rebind of a value allocator into a node allocator.
pub(crate) trait NodeArena<T> {
    /// Allocates a slot for `node` and returns its id.
    fn alloc(&mut self, node: Node<T>) -> NodeId;

    /// Returns a reference to a live node.
    fn get(&self, id: NodeId) -> &Node<T>;

    /// Returns a mutable reference to a live node.
    fn get_mut(&mut self, id: NodeId) -> &mut Node<T>;

    /// Returns simultaneous mutable references to two distinct live nodes.
    fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut Node<T>, &mut Node<T>);

    /// Moves a node out of its slot, retiring the id for reuse.
    fn take(&mut self, id: NodeId) -> Node<T>;

    /// Drops a node in place, retiring the id for reuse.
    fn free(&mut self, id: NodeId);

    /// The number of live nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of nodes the strategy can hold without growing.
    fn capacity(&self) -> usize;

    /// Frees every node and forgets all retired ids.
    fn clear(&mut self);
}

/// The default strategy: a slot vector with a free list.
#[derive(Clone)]
pub(crate) struct SlotArena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> SlotArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }
}

impl<T> NodeArena<T> for SlotArena<T> {
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.free.pop() {
            // Reuse a retired slot/id.
            self.slots[id.to_index()] = Some(node);
            id
        } else {
            // Strict less-than: slots.len() must stay addressable by NodeId
            // after the push.
            assert!(
                self.slots.len() < NodeId::MAX,
                "`SlotArena::alloc()` - arena is at maximum capacity ({})",
                NodeId::MAX
            );
            self.slots.push(Some(node));
            NodeId::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    fn get(&self, id: NodeId) -> &Node<T> {
        self.slots[id.to_index()].as_ref().expect("`SlotArena::get()` - `id` is invalid!")
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.to_index()].as_mut().expect("`SlotArena::get_mut()` - `id` is invalid!")
    }

    fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut Node<T>, &mut Node<T>) {
        let (a, b) = (a.to_index(), b.to_index());
        assert!(a != b, "`SlotArena::get_pair_mut()` - `a` and `b` are the same node!");

        // Split the slot vector so the two borrows cannot overlap.
        let (low, high, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(high);
        let first = head[low].as_mut().expect("`SlotArena::get_pair_mut()` - `id` is invalid!");
        let second = tail[0].as_mut().expect("`SlotArena::get_pair_mut()` - `id` is invalid!");

        if swapped { (second, first) } else { (first, second) }
    }

    fn take(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.to_index()].take().expect("`SlotArena::take()` - `id` is invalid!");
        self.free.push(id);
        node
    }

    fn free(&mut self, id: NodeId) {
        drop(self.take(id));
    }

    fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: SlotArena<u32> = SlotArena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
    }

    #[test]
    fn pair_borrows_are_distinct() {
        let mut arena: SlotArena<u32> = SlotArena::new();
        let a = arena.alloc(Node::new(1));
        let b = arena.alloc(Node::new(2));

        let (na, nb) = arena.get_pair_mut(a, b);
        core::mem::swap(&mut na.value, &mut nb.value);
        // Order of the returned pair follows the order of the arguments.
        let (nb, na) = arena.get_pair_mut(b, a);
        assert_eq!(na.value, 2);
        assert_eq!(nb.value, 1);
    }

    #[test]
    #[should_panic(expected = "`SlotArena::get_pair_mut()` - `a` and `b` are the same node!")]
    fn pair_rejects_identical_ids() {
        let mut arena: SlotArena<u32> = SlotArena::new();
        let a = arena.alloc(Node::new(1));
        let _ = arena.get_pair_mut(a, a);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(NodeId, u32)> = Vec::new();
            let mut arena: SlotArena<u32> = SlotArena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let id = arena.alloc(Node::new(value));
                        model.push((id, value));
                    }
                    Operation::Get(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let id = model[index].0;
                        prop_assert_eq!(arena.get(id).value, model[index].1);
                    }
                    Operation::GetMut(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let id = model[index].0;
                        arena.get_mut(id).value = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let id = model[index].0;
                        let node = arena.take(id);
                        let (_, value) = model.swap_remove(index);
                        prop_assert_eq!(node.value, value);
                    }
                    Operation::Free(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let id = model[index].0;
                        arena.free(id);
                        model.swap_remove(index);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                prop_assert_eq!(arena.is_empty(), model.is_empty());

                for &(id, value) in &model {
                    prop_assert_eq!(arena.get(id).value, value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Get(usize),
        GetMut(usize, u32),
        Take(usize),
        Free(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => any::<usize>().prop_map(Operation::Get),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::GetMut(which, value)),
            5 => any::<usize>().prop_map(Operation::Take),
            5 => any::<usize>().prop_map(Operation::Free),
            1 => Just(Operation::Clear),
        ]
    }
}
