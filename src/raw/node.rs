use super::node_id::NodeId;

/// A single stored element and its linkage.
///
/// `parent` is a non-owning back-reference; `left` and `right` are the owning
/// links. `height` is 0 for a leaf and otherwise one more than the tallest
/// child present (a missing sibling does not participate in the maximum).
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Creates an unlinked leaf holding `value`.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Points whichever of this node's child links currently targets `old` at
    /// `new` instead. A link that does not target `old` is left untouched, so
    /// a stale back-reference never clobbers an unrelated child.
    pub(crate) fn replace_child(&mut self, old: NodeId, new: Option<NodeId>) {
        if self.left == Some(old) {
            self.left = new;
        } else if self.right == Some(old) {
            self.right = new;
        }
    }
}

/// Height of a node whose children have the given heights.
///
/// Leaf: 0. One child: 1 + that child's height. Two children: 1 + the larger.
pub(crate) fn linked_height(left: Option<usize>, right: Option<usize>) -> usize {
    match (left, right) {
        (Some(l), Some(r)) => 1 + l.max(r),
        (Some(l), None) => 1 + l,
        (None, Some(r)) => 1 + r,
        (None, None) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_height_cases() {
        assert_eq!(linked_height(None, None), 0);
        assert_eq!(linked_height(Some(0), None), 1);
        assert_eq!(linked_height(None, Some(2)), 3);
        assert_eq!(linked_height(Some(1), Some(4)), 5);
        assert_eq!(linked_height(Some(4), Some(1)), 5);
    }

    #[test]
    fn replace_child_ignores_mismatched_link() {
        let a = NodeId::from_index(0);
        let b = NodeId::from_index(1);
        let stranger = NodeId::from_index(2);

        let mut node = Node::new(7_i32);
        node.left = Some(a);
        node.right = Some(b);

        node.replace_child(stranger, None);
        assert_eq!(node.left, Some(a));
        assert_eq!(node.right, Some(b));

        node.replace_child(a, None);
        assert_eq!(node.left, None);
        assert_eq!(node.right, Some(b));
    }
}
