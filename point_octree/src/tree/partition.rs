use std::fmt::Debug;
use std::ops::{Add, Neg, Sub};

/// Trait for the element `infinity`.
pub trait Infinity {
    /// `infinity` (∞) value of the type.
    fn infinity() -> Self;
}

/// Trait to compute the minimum and maximum of a number.
pub trait MinMax {
    /// Returns the minimum between two numbers.
    fn min(self, rhs: Self) -> Self;

    /// Returns the maximum between two numbers.
    fn max(self, rhs: Self) -> Self;
}

/// Trait to compute the midpoint of two numbers.
pub trait MidPoint {
    /// Returns the middle point of `self` and `rhs`.
    fn midpoint(self, rhs: Self) -> Self;

    /// Returns half of a number, defined by the midpoint between this number
    /// and zero.
    #[inline]
    fn half(self) -> Self
    where
        Self: Default,
    {
        self.midpoint(Self::default())
    }
}

macro_rules! impl_floats {
    ($s: ty) => {
        impl Infinity for $s {
            #[inline]
            fn infinity() -> Self {
                Self::INFINITY
            }
        }

        impl MinMax for $s {
            #[inline]
            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            #[inline]
            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }
        }

        impl MidPoint for $s {
            #[inline]
            fn midpoint(self, rhs: Self) -> Self {
                (self + rhs) / 2.0
            }
        }
    };
}

impl_floats!(f32);
impl_floats!(f64);

/// Scalar type of the coordinates stored in an [`Octree`](crate::Octree).
///
/// Implemented for every type meeting the bounds, in practice `f32` and `f64`.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + MidPoint
    + MinMax
    + Infinity
{
}

impl<S> Scalar for S where
    S: Copy
        + Default
        + Debug
        + PartialOrd
        + Add<Output = S>
        + Sub<Output = S>
        + Neg<Output = S>
        + MidPoint
        + MinMax
        + Infinity
{
}

/// An axis-aligned bounding box using arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<A> {
    /// Minimum corner of the box.
    pub min: A,
    /// Maximum corner of the box.
    pub max: A,
}

impl<A> BoundingBox<A> {
    /// Creates a new [`BoundingBox`] with the given min and max values.
    #[inline]
    pub const fn new(min: A, max: A) -> Self {
        Self { min, max }
    }
}

impl<const D: usize, S> Default for BoundingBox<[S; D]>
where
    S: Neg<Output = S> + Infinity + Copy,
{
    /// Returns an inverted box that contains nothing and grows to fit the first extended position.
    #[inline]
    fn default() -> Self {
        Self::new([S::infinity(); D], [-S::infinity(); D])
    }
}

#[allow(clippy::needless_range_loop)]
impl<const D: usize, S> BoundingBox<[S; D]> {
    /// Extends the [`BoundingBox`] so that it contains the given position.
    #[inline]
    pub fn extend(&mut self, position: &[S; D])
    where
        S: MinMax + Copy,
    {
        for i in 0..D {
            self.min[i] = self.min[i].min(position[i]);
            self.max[i] = self.max[i].max(position[i]);
        }
    }

    /// Creates a new [`BoundingBox`] that contains the given positions.
    #[inline]
    pub fn with<I>(positions: I) -> Self
    where
        Self: Default,
        S: MinMax + Copy,
        I: IntoIterator<Item = [S; D]>,
    {
        let mut result = Self::default();
        for position in positions {
            result.extend(&position);
        }
        result
    }

    /// Returns the center of the [`BoundingBox`].
    #[inline]
    pub fn center(&self) -> [S; D]
    where
        S: MidPoint + Copy,
    {
        std::array::from_fn(|i| self.min[i].midpoint(self.max[i]))
    }

    /// Returns the size of the [`BoundingBox`].
    #[inline]
    pub fn size(&self) -> [S; D]
    where
        S: Sub<Output = S> + Copy,
    {
        std::array::from_fn(|i| self.max[i] - self.min[i])
    }

    /// Returns `true` if the given position lies inside the box, boundaries included.
    #[inline]
    pub fn contains(&self, position: &[S; D]) -> bool
    where
        S: PartialOrd,
    {
        (0..D).all(|i| self.min[i] <= position[i] && position[i] <= self.max[i])
    }

    /// Returns `true` if `other` lies entirely inside this box, boundaries included.
    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool
    where
        S: PartialOrd,
    {
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// Returns `true` if the two boxes share any interior or boundary point.
    ///
    /// The boxes are disjoint as soon as one of them ends before the other starts on any axis.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool
    where
        S: PartialOrd,
    {
        !(0..D).any(|i| self.max[i] < other.min[i] || self.min[i] > other.max[i])
    }
}

/// Returns the index of the octant of a cuboid centered at `origin` containing `point`.
///
/// Bit 2 is set iff `x >= origin.x`, bit 1 iff `y >= origin.y` and bit 0 iff `z >= origin.z`.
/// A point lying on a splitting plane therefore always goes to the positive side.
#[inline]
pub fn octant_of<S: PartialOrd>(origin: &[S; 3], point: &[S; 3]) -> u8 {
    let mut octant = 0;
    if point[0] >= origin[0] {
        octant |= 4;
    }
    if point[1] >= origin[1] {
        octant |= 2;
    }
    if point[2] >= origin[2] {
        octant |= 1;
    }
    octant
}

/// An axis-aligned cuboid given by its center and its half-extent along each axis.
///
/// Describes the region `[origin - half_extent, origin + half_extent]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid<S> {
    /// Geometric center of the cuboid.
    pub origin: [S; 3],
    /// Half of the width, height and depth of the cuboid.
    pub half_extent: [S; 3],
}

impl<S: Scalar> Cuboid<S> {
    /// Creates a new [`Cuboid`] from its center and half-extent.
    #[inline]
    pub const fn new(origin: [S; 3], half_extent: [S; 3]) -> Self {
        Self {
            origin,
            half_extent,
        }
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> [S; 3] {
        std::array::from_fn(|i| self.origin[i] - self.half_extent[i])
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> [S; 3] {
        std::array::from_fn(|i| self.origin[i] + self.half_extent[i])
    }

    /// Returns the [`BoundingBox`] spanning the same region.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<[S; 3]> {
        BoundingBox::new(self.min(), self.max())
    }

    /// Returns `true` if the point lies inside the cuboid, boundaries included.
    #[inline]
    pub fn contains(&self, point: &[S; 3]) -> bool {
        self.bounding_box().contains(point)
    }

    /// See [`octant_of`].
    #[inline]
    pub fn octant_of(&self, point: &[S; 3]) -> u8 {
        octant_of(&self.origin, point)
    }

    /// Returns the octant of this cuboid with the given index.
    ///
    /// The half-extent is halved and the origin moves by half of this cuboid's half-extent
    /// towards the positive side of each axis whose bit is set in `index`, matching [`octant_of`].
    #[inline]
    pub fn octant(&self, index: u8) -> Self {
        let half_extent = self.half_extent.map(MidPoint::half);
        let origin = std::array::from_fn(|i| {
            if index & (4 >> i) != 0 {
                self.origin[i] + half_extent[i]
            } else {
                self.origin[i] - half_extent[i]
            }
        });

        Self::new(origin, half_extent)
    }

    /// Subdivides this cuboid into its eight octants, in index order.
    #[inline]
    pub fn subdivide(&self) -> [Self; 8] {
        std::array::from_fn(|i| self.octant(i as u8))
    }

    /// Returns the eight corners of the cuboid, indexed like the octants.
    #[inline]
    pub fn corners(&self) -> [[S; 3]; 8] {
        let (min, max) = (self.min(), self.max());
        std::array::from_fn(|index| {
            std::array::from_fn(|i| if index & (4 >> i) != 0 { max[i] } else { min[i] })
        })
    }
}

impl<S: Scalar> From<Cuboid<S>> for BoundingBox<[S; 3]> {
    #[inline]
    fn from(cuboid: Cuboid<S>) -> Self {
        cuboid.bounding_box()
    }
}

/// Geometry of a node of an [`Octree`](crate::Octree).
///
/// The `cuboid` places the splitting planes of the node. The `region` holds every point routed to
/// the node: a child's region is its parent's region cut by the parent's splitting planes, with
/// the planes themselves included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<S> {
    /// Cuboid subdivided by the node.
    pub cuboid: Cuboid<S>,
    /// Region containing every point stored below the node.
    pub region: BoundingBox<[S; 3]>,
}

impl<S: Scalar> Cell<S> {
    /// Creates a new [`Cell`] whose region is the given cuboid.
    #[inline]
    pub fn new(cuboid: Cuboid<S>) -> Self {
        Self {
            cuboid,
            region: cuboid.bounding_box(),
        }
    }

    /// Creates a new [`Cell`] whose region is all of space.
    #[inline]
    pub fn unbounded(cuboid: Cuboid<S>) -> Self {
        Self {
            cuboid,
            region: BoundingBox::new([-S::infinity(); 3], [S::infinity(); 3]),
        }
    }

    /// See [`octant_of`].
    #[inline]
    pub fn octant_of(&self, point: &[S; 3]) -> u8 {
        self.cuboid.octant_of(point)
    }

    /// Returns the child [`Cell`] with the given octant index.
    #[inline]
    pub fn octant(&self, index: u8) -> Self {
        Self {
            cuboid: self.cuboid.octant(index),
            region: self.child_region(index),
        }
    }

    /// Subdivides this cell into its eight octants, in index order.
    #[inline]
    pub fn subdivide(&self) -> [Self; 8] {
        let cuboids = self.cuboid.subdivide();
        std::array::from_fn(|i| Self {
            cuboid: cuboids[i],
            region: self.child_region(i as u8),
        })
    }

    #[allow(clippy::needless_range_loop)]
    fn child_region(&self, index: u8) -> BoundingBox<[S; 3]> {
        let (mut min, mut max) = (self.region.min, self.region.max);
        for i in 0..3 {
            if index & (4 >> i) != 0 {
                min[i] = self.cuboid.origin[i];
            } else {
                max[i] = self.cuboid.origin[i];
            }
        }
        BoundingBox::new(min, max)
    }
}
