mod nodes;

pub use nodes::*;

use crate::{
    config::{DepthPolicy, OctreeConfig},
    error::{OctreeError, Result},
    position::{coordinates, IntoArray, Position},
    tree::{BoundingBox, Cell, Cuboid, Node, NodeID, Orthant, Scalar, Tree},
};
use smallvec::SmallVec;

/// Points stored in a leaf. Holds at most one point, except in leaves at the maximum depth under
/// [`DepthPolicy::Bucket`].
pub type Bucket<P> = SmallVec<[P; 1]>;

/// Node of an [`Octree`]: eight children or the points of a leaf.
pub type OctreeNode<P> = Node<Orthant<8, NodeID>, Bucket<P>>;

const ROOT: NodeID = 0;

/// Counters describing the work done by a range query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes whose cuboid was tested against the query box.
    pub nodes_visited: usize,
    /// Stored points tested against the query box.
    pub points_tested: usize,
    /// Points inside the query box.
    pub points_found: usize,
}

/// Tree recursively partitioning a cuboid of 3D space into octants, storing one point per leaf.
///
/// Nodes live in an arena and each interior node addresses its eight children by [`NodeID`],
/// ordered by [`octant_of`](crate::tree::octant_of). The tree only grows: a leaf holding a point
/// splits into eight children when it receives a second one. Queries prune nodes by their
/// [`Cell`] region, which always contains the points routed to them.
///
/// Under [`BoundsPolicy::Ignore`](crate::BoundsPolicy::Ignore) the root region is all of space, so
/// points outside the root cuboid are still found by the queries covering them.
///
/// `P` is the stored item, located by its [`Position`], and `S` the scalar type of its coordinates.
#[derive(Clone, Debug)]
pub struct Octree<P, S> {
    tree: Tree<OctreeNode<P>, Cell<S>>,
    config: OctreeConfig,
    len: usize,
}

impl<P, S> Octree<P, S>
where
    P: Position,
    P::Vector: IntoArray<Array = [S; 3]>,
    S: Scalar,
{
    /// Creates an empty [`Octree`] covering `[origin - half_extent, origin + half_extent]`, with
    /// the default configuration.
    #[inline]
    pub fn new(origin: P::Vector, half_extent: P::Vector) -> Self {
        Self::with_config(origin, half_extent, OctreeConfig::default())
    }

    /// Creates an empty [`Octree`] covering `[origin - half_extent, origin + half_extent]`.
    #[inline]
    pub fn with_config(origin: P::Vector, half_extent: P::Vector, config: OctreeConfig) -> Self {
        Self::from_cuboid(Cuboid::new(origin.into(), half_extent.into()), config)
    }

    /// Creates an empty [`Octree`] covering the given cuboid.
    pub fn from_cuboid(bounds: Cuboid<S>, config: OctreeConfig) -> Self {
        log::debug!(
            "Created octree over {:?}..={:?} with {:?}",
            bounds.min(),
            bounds.max(),
            config
        );

        let root = if config.bounds.rejects_inserts() {
            Cell::new(bounds)
        } else {
            Cell::unbounded(bounds)
        };

        let mut tree = Tree::new();
        tree.push(Node::External(Bucket::new()), root);

        Self {
            tree,
            config,
            len: 0,
        }
    }

    /// Inserts an item at its position.
    ///
    /// Descends into the octant containing the position until reaching a leaf. An empty leaf
    /// stores the item; a leaf already holding one splits into eight children and both items
    /// continue down, splitting again as long as they share an octant.
    ///
    /// # Errors
    ///
    /// - [`OctreeError::OutOfBounds`] if the position is outside the root cuboid and the
    ///   [`BoundsPolicy`](crate::BoundsPolicy) rejects inserts.
    /// - [`OctreeError::DepthLimitExceeded`] if the item cannot be separated from a stored one
    ///   above the maximum depth and the policy is [`DepthPolicy::Reject`]. The tree is left
    ///   unchanged.
    pub fn insert(&mut self, item: P) -> Result<()> {
        let point = coordinates(&item);

        if self.config.bounds.rejects_inserts() && !self.bounds().contains(&point) {
            let bounds = self.bounds();
            return Err(OctreeError::out_of_bounds(point, bounds.min(), bounds.max()));
        }

        if self.config.depth == DepthPolicy::Reject {
            self.check_depth(&point)?;
        }

        let max_depth = self.config.max_depth;
        let (mut id, mut depth) = (ROOT, 0);
        loop {
            let index = id as usize;
            match &mut self.tree.nodes[index] {
                Node::Internal(orthant) => {
                    id = orthant[self.tree.data[index].octant_of(&point) as usize];
                    depth += 1;
                }
                Node::External(bucket) if bucket.is_empty() => {
                    bucket.push(item);
                    break;
                }
                Node::External(bucket) if depth >= max_depth => {
                    if bucket.len() == 1 {
                        log::warn!(
                            "Leaf {id} reached the maximum depth of {max_depth}, storing {point:?} \
                             alongside {:?}",
                            coordinates(&bucket[0])
                        );
                    }
                    bucket.push(item);
                    break;
                }
                Node::External(bucket) => {
                    let displaced = std::mem::take(bucket);
                    self.split(id, depth, displaced);
                }
            }
        }

        self.len += 1;
        Ok(())
    }

    /// Inserts every item of the iterator in order and returns how many were inserted.
    ///
    /// # Errors
    ///
    /// Stops at the first item [`insert`](Self::insert) fails on and returns its error. Items
    /// before it remain inserted.
    pub fn insert_all<I>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = P>,
    {
        items.into_iter().try_fold(0, |count, item| {
            self.insert(item)?;
            Ok(count + 1)
        })
    }

    // Turns the leaf `id` into an interior node with eight empty children and moves the displaced
    // points into them.
    fn split(&mut self, id: NodeID, depth: usize, displaced: Bucket<P>) {
        let index = id as usize;
        let cell = self.tree.data[index];

        let first = self.tree.len() as NodeID;
        for child in cell.subdivide() {
            self.tree.push(Node::External(Bucket::new()), child);
        }
        self.tree.nodes[index] = Node::Internal(std::array::from_fn(|i| first + i as NodeID));

        for item in displaced {
            let octant = cell.octant_of(&coordinates(&item)) as NodeID;
            if let Node::External(bucket) = &mut self.tree.nodes[(first + octant) as usize] {
                bucket.push(item);
            }
        }

        log::trace!(
            "Split node {id} at depth {depth} around {:?} into nodes {first}..{}",
            cell.cuboid.origin,
            first + 8
        );
    }

    // Returns the leaf whose cuboid addresses `point`, and its depth.
    fn locate(&self, point: &[S; 3]) -> (NodeID, usize) {
        let (mut id, mut depth) = (ROOT, 0);
        while let Node::Internal(orthant) = &self.tree.nodes[id as usize] {
            id = orthant[self.tree.data[id as usize].octant_of(point) as usize];
            depth += 1;
        }
        (id, depth)
    }

    // Fails if inserting `point` would need a leaf below the maximum depth.
    fn check_depth(&self, point: &[S; 3]) -> Result<()> {
        let max_depth = self.config.max_depth;
        let (id, mut depth) = self.locate(point);

        let stored = match &self.tree.nodes[id as usize] {
            Node::External(bucket) => match bucket.first() {
                Some(item) => coordinates(item),
                None => return Ok(()),
            },
            Node::Internal(_) => return Ok(()),
        };

        let mut cuboid = self.tree.data[id as usize].cuboid;
        loop {
            if depth >= max_depth {
                return Err(OctreeError::DepthLimitExceeded { max_depth });
            }

            let octant = cuboid.octant_of(&stored);
            if octant != cuboid.octant_of(point) {
                return Ok(());
            }

            cuboid = cuboid.octant(octant);
            depth += 1;
        }
    }

    /// Appends every stored item whose position `p` satisfies `bmin <= p <= bmax` on all three
    /// axes to `results`.
    ///
    /// See [`query_box`](Self::query_box).
    #[inline]
    pub fn query(
        &self,
        bmin: P::Vector,
        bmax: P::Vector,
        results: &mut Vec<P>,
    ) -> Result<QueryStats>
    where
        P: Clone,
    {
        self.query_box(&BoundingBox::new(bmin.into(), bmax.into()), results)
    }

    /// Appends every stored item whose position lies inside `bbox`, boundaries included, to
    /// `results`.
    ///
    /// Items are appended in pre-order, children in octant order, each at most once. Subtrees
    /// whose region does not overlap the box are skipped entirely, including the root for a box
    /// outside the domain unless the [`BoundsPolicy`](crate::BoundsPolicy) ignores bounds.
    ///
    /// # Errors
    ///
    /// [`OctreeError::OutOfBounds`] if the box is not inside the root cuboid and the
    /// [`BoundsPolicy`](crate::BoundsPolicy) rejects queries.
    #[inline]
    pub fn query_box(&self, bbox: &BoundingBox<[S; 3]>, results: &mut Vec<P>) -> Result<QueryStats>
    where
        P: Clone,
    {
        self.visit_box(bbox, |item| results.push(item.clone()))
    }

    /// Returns references to every stored item whose position lies inside `bbox`.
    ///
    /// # Errors
    ///
    /// See [`query_box`](Self::query_box).
    #[inline]
    pub fn points_in(&self, bbox: &BoundingBox<[S; 3]>) -> Result<Vec<&P>> {
        let mut found = Vec::new();
        self.visit_box(bbox, |item| found.push(item))?;
        Ok(found)
    }

    fn visit_box<'a, F>(&'a self, bbox: &BoundingBox<[S; 3]>, mut f: F) -> Result<QueryStats>
    where
        F: FnMut(&'a P),
    {
        let bounds = self.bounds().bounding_box();
        if self.config.bounds.rejects_queries() && !bounds.contains_box(bbox) {
            return Err(OctreeError::out_of_bounds(bbox, bounds.min, bounds.max));
        }

        let mut stats = QueryStats::default();
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            let index = id as usize;
            stats.nodes_visited += 1;

            if !self.tree.data[index].region.overlaps(bbox) {
                continue;
            }

            match &self.tree.nodes[index] {
                Node::Internal(orthant) => stack.extend(orthant.iter().rev()),
                Node::External(bucket) => {
                    for item in bucket {
                        stats.points_tested += 1;
                        if bbox.contains(&coordinates(item)) {
                            stats.points_found += 1;
                            f(item);
                        }
                    }
                }
            }
        }

        Ok(stats)
    }

    /// Returns `true` if the point lies inside the root cuboid, boundaries included.
    #[inline]
    pub fn contains(&self, point: &P::Vector) -> bool
    where
        P::Vector: Clone,
    {
        self.bounds().contains(&point.clone().into())
    }
}

impl<P, S: Copy> Octree<P, S> {
    /// Returns the cuboid covered by the root node.
    #[inline]
    pub fn bounds(&self) -> Cuboid<S> {
        self.tree.data[ROOT as usize].cuboid
    }

    /// Returns the configuration of the octree.
    #[inline]
    pub const fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Returns the number of stored items.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no item is stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    /// Returns the number of leaves.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.tree.nodes.iter().filter(|node| node.is_external()).count()
    }

    /// Returns the depth of the deepest node. The root is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.nodes().map(|node| node.depth()).max().unwrap_or_default()
    }

    /// Returns the underlying arena of nodes and their cells.
    #[inline]
    pub const fn tree(&self) -> &Tree<OctreeNode<P>, Cell<S>> {
        &self.tree
    }
}
