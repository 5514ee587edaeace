/// Errors returned by [`Octree`](crate::Octree) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OctreeError {
    /// Coordinates fall outside the root cuboid and the bounds policy rejects them.
    #[error("{coordinates} lies outside the octree bounds {bounds}")]
    OutOfBounds {
        /// The rejected point or query box.
        coordinates: String,
        /// The root cuboid, as `min..=max`.
        bounds: String,
    },

    /// Storing a point would split a leaf below the maximum depth.
    #[error("inserting would split beyond the maximum depth of {max_depth}")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        max_depth: usize,
    },
}

impl OctreeError {
    pub(crate) fn out_of_bounds<S: std::fmt::Debug>(
        coordinates: impl std::fmt::Debug,
        min: [S; 3],
        max: [S; 3],
    ) -> Self {
        Self::OutOfBounds {
            coordinates: format!("{coordinates:?}"),
            bounds: format!("{min:?}..={max:?}"),
        }
    }
}

/// Result type of fallible [`Octree`](crate::Octree) operations.
pub type Result<T, E = OctreeError> = std::result::Result<T, E>;
