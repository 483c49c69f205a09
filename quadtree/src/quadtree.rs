//! Region quadtree over circles, stored as a flat node arena.
//!
//! Every stored value lives in the resident list of exactly one node: the
//! deepest node whose quadrant fully contains the circle, bounded by
//! `Config::max_depth`. Circles that straddle a node's midlines stay at that
//! node. The owner map is the only back-reference from a value to its node.

use fxhash::FxHashMap;

mod api;
mod collision_pairs;
mod config;
mod core;
mod maintenance;
mod query;
mod types;

pub use collision_pairs::{CollisionEngine, CollisionPair};
pub use config::{Config, OutOfBounds, RefreshStrategy};
pub use types::{classify, NodeId, Quadrant, Resident};

use types::Node;

pub struct QuadTree {
    nodes: Vec<Node>,
    owner_map: FxHashMap<u32, NodeId>,
    config: Config,
}
