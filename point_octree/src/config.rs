/// Maximum depth used by [`OctreeConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration of an [`Octree`](crate::Octree).
///
/// # Example
///
/// ```
/// use point_octree::prelude::*;
///
/// let config = OctreeConfig::default()
///     .with_max_depth(8)
///     .with_depth_policy(DepthPolicy::Reject);
///
/// let octree = Octree::<[f64; 3], f64>::with_config([0.0; 3], [1.0; 3], config);
/// assert_eq!(octree.config().max_depth, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
    /// Depth below which leaves are never split. The root is at depth 0.
    pub max_depth: usize,
    /// What to do with coordinates outside the root cuboid.
    pub bounds: BoundsPolicy,
    /// What to do when a point would have to be stored below `max_depth`.
    pub depth: DepthPolicy,
}

impl OctreeConfig {
    /// Sets the maximum depth.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the bounds policy.
    #[inline]
    pub const fn with_bounds_policy(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the depth policy.
    #[inline]
    pub const fn with_depth_policy(mut self, depth: DepthPolicy) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            bounds: BoundsPolicy::default(),
            depth: DepthPolicy::default(),
        }
    }
}

/// Handling of coordinates outside the root cuboid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundsPolicy {
    /// Accept everything. Out-of-domain points are addressed by the usual sign comparisons and
    /// end up in a leaf whose cuboid does not contain them. The regions of the nodes along the
    /// outer faces extend to infinity, so queries covering these points still find them.
    Ignore,
    /// Reject inserted points outside the root cuboid. Queries are answered for any box.
    #[default]
    RejectInserts,
    /// Reject inserted points and query boxes that are not inside the root cuboid.
    Strict,
}

impl BoundsPolicy {
    /// Returns `true` if inserts outside the root cuboid fail.
    #[inline]
    pub const fn rejects_inserts(self) -> bool {
        matches!(self, Self::RejectInserts | Self::Strict)
    }

    /// Returns `true` if query boxes not inside the root cuboid fail.
    #[inline]
    pub const fn rejects_queries(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Handling of points that cannot be separated from a stored point above the maximum depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DepthPolicy {
    /// Leaves at the maximum depth keep every point they receive.
    #[default]
    Bucket,
    /// Fail with [`OctreeError::DepthLimitExceeded`](crate::OctreeError::DepthLimitExceeded),
    /// leaving the tree untouched.
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = OctreeConfig::default();

        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.bounds, BoundsPolicy::RejectInserts);
        assert_eq!(config.depth, DepthPolicy::Bucket);
    }

    #[test]
    fn policies() {
        assert!(!BoundsPolicy::Ignore.rejects_inserts());
        assert!(BoundsPolicy::RejectInserts.rejects_inserts());
        assert!(!BoundsPolicy::RejectInserts.rejects_queries());
        assert!(BoundsPolicy::Strict.rejects_inserts());
        assert!(BoundsPolicy::Strict.rejects_queries());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial_config() {
        let config: OctreeConfig =
            serde_json::from_str(r#"{ "max_depth": 4, "bounds": "strict" }"#).unwrap();

        assert_eq!(
            config,
            OctreeConfig::default()
                .with_max_depth(4)
                .with_bounds_policy(BoundsPolicy::Strict)
        );

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<OctreeConfig>(&json).unwrap(), config);
    }
}
