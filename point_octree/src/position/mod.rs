mod impls;

/// Trait for types that can be located in space.
///
/// Every supported vector type is its own position, so an [`Octree`](crate::Octree) can store
/// bare vectors. You can derive this trait if your type has a field named `position`.
///
/// # Example
///
/// ```
/// use point_octree::prelude::*;
///
/// #[derive(Position)]
/// struct Dot {
///     position: [f32; 3],
///     radius: f32,
/// }
///
/// let dot = Dot { position: [1.0, 2.0, 3.0], radius: 2.0 };
/// assert_eq!(dot.position(), [1.0, 2.0, 3.0]);
/// ```
pub trait Position {
    /// The type used to represent the position.
    type Vector;

    /// Returns the position of the item.
    fn position(&self) -> Self::Vector;
}

/// Trait for vectors that can be converted into an array of coordinates.
pub trait IntoArray: Into<Self::Array> {
    /// The array the vector can be converted into.
    type Array;
}

impl<V: IntoArray + Clone> Position for V {
    type Vector = V;

    #[inline]
    fn position(&self) -> Self::Vector {
        self.clone()
    }
}

/// Returns the coordinates of the given item as an array.
#[inline]
pub fn coordinates<P, S>(item: &P) -> [S; 3]
where
    P: Position,
    P::Vector: IntoArray<Array = [S; 3]>,
{
    item.position().into()
}

crate::impl_into_array!([f32; 3], [f32; 3]);
crate::impl_into_array!([f64; 3], [f64; 3]);
