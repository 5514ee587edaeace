use super::{Octree, OctreeNode, ROOT};
use crate::tree::{BoundingBox, Cell, Cuboid, Node, NodeID};

/// Read-only view of a node of an [`Octree`], as yielded by [`Octree::nodes`].
#[derive(Debug)]
pub struct NodeView<'a, P, S> {
    id: NodeID,
    depth: usize,
    cell: &'a Cell<S>,
    node: &'a OctreeNode<P>,
}

impl<P, S> Clone for NodeView<'_, P, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, S> Copy for NodeView<'_, P, S> {}

impl<'a, P, S: Copy> NodeView<'a, P, S> {
    /// Index of the node in the arena.
    #[inline]
    pub const fn id(&self) -> NodeID {
        self.id
    }

    /// Depth of the node, 0 for the root.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Cuboid covered by the node.
    #[inline]
    pub const fn cuboid(&self) -> &'a Cuboid<S> {
        &self.cell.cuboid
    }

    /// Region holding every point stored in the node or below it.
    ///
    /// It lies inside the node's cuboid up to rounding, except along the outer faces when the
    /// octree ignores its bounds.
    #[inline]
    pub const fn region(&self) -> &'a BoundingBox<[S; 3]> {
        &self.cell.region
    }

    /// Center of the node's cuboid.
    #[inline]
    pub const fn origin(&self) -> [S; 3] {
        self.cell.cuboid.origin
    }

    /// Half-extent of the node's cuboid.
    #[inline]
    pub const fn half_extent(&self) -> [S; 3] {
        self.cell.cuboid.half_extent
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.node.is_external()
    }

    /// Items stored in the node. Always empty for interior nodes.
    #[inline]
    pub fn points(&self) -> &'a [P] {
        match self.node {
            Node::External(bucket) => bucket,
            Node::Internal(_) => &[],
        }
    }

    /// Children of the node in octant order, or `None` for a leaf.
    #[inline]
    pub const fn children(&self) -> Option<&'a [NodeID; 8]> {
        match self.node {
            Node::Internal(orthant) => Some(orthant),
            Node::External(_) => None,
        }
    }
}

/// Pre-order iterator over the nodes of an [`Octree`], children in octant order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Nodes<'a, P, S> {
    octree: &'a Octree<P, S>,
    stack: Vec<(NodeID, usize)>,
}

impl<'a, P, S> Iterator for Nodes<'a, P, S> {
    type Item = NodeView<'a, P, S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = &self.octree.tree.nodes[id as usize];

        if let Node::Internal(orthant) = node {
            self.stack
                .extend(orthant.iter().rev().map(|&child| (child, depth + 1)));
        }

        Some(NodeView {
            id,
            depth,
            cell: &self.octree.tree.data[id as usize],
            node,
        })
    }
}

impl<P, S> Octree<P, S> {
    /// Returns an iterator over every node, root included, in pre-order with children in octant
    /// order.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, P, S> {
        Nodes {
            octree: self,
            stack: vec![(ROOT, 0)],
        }
    }

    /// Calls `visit` once per node, root included, in the order of [`nodes`](Self::nodes).
    ///
    /// This is all a renderer needs to draw a wireframe box per node and the stored point of each
    /// populated leaf.
    ///
    /// # Example
    ///
    /// ```
    /// use point_octree::prelude::*;
    ///
    /// let mut octree = Octree::<[f32; 3], f32>::new([0.0; 3], [400.0; 3]);
    /// octree.insert([100.0, 100.0, 100.0])?;
    /// octree.insert([-50.0, -50.0, -50.0])?;
    ///
    /// let mut boxes = Vec::new();
    /// octree.for_each_node(|node| boxes.push((node.origin(), node.half_extent(), node.is_leaf())));
    ///
    /// assert_eq!(boxes.len(), 9);
    /// assert_eq!(boxes[0], ([0.0; 3], [400.0; 3], false));
    /// assert_eq!(boxes[1], ([-200.0; 3], [200.0; 3], true));
    /// # Ok::<(), OctreeError>(())
    /// ```
    #[inline]
    pub fn for_each_node<F>(&self, visit: F)
    where
        F: FnMut(NodeView<'_, P, S>),
    {
        self.nodes().for_each(visit);
    }

    /// Returns an iterator over every stored item, in the order of [`nodes`](Self::nodes).
    #[inline]
    pub fn points(&self) -> impl Iterator<Item = &P> + '_ {
        self.nodes().flat_map(|node| {
            let points: &[P] = match node.node {
                Node::External(bucket) => bucket,
                Node::Internal(_) => &[],
            };
            points.iter()
        })
    }
}
