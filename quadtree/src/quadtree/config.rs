/// What `insert` does with a circle that is not inside the root region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBounds {
    /// Keep it in the root's resident list. Queries from anywhere still see it.
    #[default]
    RetainAtRoot,
    /// Fail with `QuadtreeError::CircleOutOfBounds`.
    Reject,
}

/// How a tree is brought up to date after its circles moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshStrategy {
    /// Clear the tree and insert every circle again.
    #[default]
    FullRebuild,
    /// Relocate each circle, touching only the ones that left their node.
    Incremental,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Resident count above which a node splits.
    pub max_objects: usize,
    /// Depth at which nodes stop splitting. The root has depth 0.
    pub max_depth: u32,
    pub out_of_bounds: OutOfBounds,
    /// Node slots reserved up front.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: 4,
            max_depth: 4,
            out_of_bounds: OutOfBounds::RetainAtRoot,
            // A full tree of depth 4 has 341 nodes; most runs use far fewer.
            pool_size: 64,
        }
    }
}
