use crate::body::Body;
use common::shapes::Rectangle;
use quadtree::quadtree::QuadTree;

/// Read-only view of the world at the end of a tick.
pub struct Frame<'a> {
    pub tick: u64,
    pub bodies: &'a [Body],
    pub tree: &'a QuadTree,
}

impl<'a> Frame<'a> {
    /// Region of every node in the tree, parents before children.
    pub fn node_regions(&self) -> Vec<Rectangle> {
        let mut regions = Vec::with_capacity(self.tree.node_count());
        self.tree.all_node_regions(&mut regions);
        regions
    }

    pub fn bounds(&self) -> Rectangle {
        self.tree.bounds()
    }
}

/// Receives one frame per tick, after outcomes are applied.
pub trait Presenter {
    fn present(&mut self, frame: &Frame<'_>);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _frame: &Frame<'_>) {}
}
