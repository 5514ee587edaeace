/// Bounding box related traits and types.
pub mod partition;

pub use partition::*;

/// Index of a [`Node`] in a [`Tree`].
pub type NodeID = u32;

/// Generic arena-backed tree data structure.
#[derive(Clone, Debug)]
pub struct Tree<Node, Data> {
    /// Vector of `Node` objects that define the structure of the tree.
    pub nodes: Vec<Node>,

    /// Vector of generic `Data` objects that contain information about the associated `Node`.
    ///
    /// The `data` vector is parallel to the `nodes` vector, so the `i`-th element of the `data`
    /// vector corresponds to the `i`-th element of the `nodes` vector.
    pub data: Vec<Data>,
}

impl<Node, Data> Tree<Node, Data> {
    /// Creates a new empty [`Tree`].
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Appends a node and its data, returning the [`NodeID`] of the new node.
    #[inline]
    pub fn push(&mut self, node: Node, data: Data) -> NodeID {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.data.push(data);

        id as _
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<Node, Data> Default for Tree<Node, Data> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Node that can either be internal and point to its children or external and hold a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<I, E> {
    /// Node with child nodes.
    Internal(I),
    /// Node without children.
    External(E),
}

impl<I, E> Node<I, E> {
    /// Returns `true` if the node has no children.
    #[inline]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Division in `X` regions of the Euclidean space.
pub type Orthant<const X: usize, N> = [N; X];
