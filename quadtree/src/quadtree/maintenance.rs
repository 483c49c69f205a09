use super::types::validate_circle;
use super::*;
use crate::error::QuadtreeResult;
use crate::shapes::Circle;

impl QuadTree {
    /// Removes `value` from the tree. Returns `false` if it was not stored.
    pub fn remove(&mut self, value: u32) -> bool {
        let Some(node) = self.owner_map.remove(&value) else {
            return false;
        };
        let residents = &mut self.nodes[node.index()].residents;
        match residents.iter().position(|resident| resident.value == value) {
            Some(position) => {
                residents.remove(position);
                true
            }
            None => false,
        }
    }

    /// Drops every resident and every node below the root.
    ///
    /// Node storage is kept so the next rebuild does not allocate.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[NodeId::ROOT.index()];
        root.residents.clear();
        root.children = None;
        self.owner_map.clear();
    }

    /// Moves `value` to `circle`.
    ///
    /// If the value still belongs to the node it is stored in, only its
    /// stored circle changes. Otherwise it is removed and inserted again from
    /// the root. A value that is not stored yet is inserted.
    pub fn relocate(&mut self, value: u32, circle: Circle) -> QuadtreeResult<()> {
        validate_circle(&circle)?;
        let Some(&node) = self.owner_map.get(&value) else {
            return self.insert(value, circle);
        };
        self.check_bounds(value, &circle)?;

        if self.is_placed(node, &circle) {
            if let Some(resident) = self.nodes[node.index()]
                .residents
                .iter_mut()
                .find(|resident| resident.value == value)
            {
                resident.circle = circle;
                return Ok(());
            }
        }

        self.remove(value);
        self.insert(value, circle)
    }

    /// Brings the tree in line with the given positions.
    ///
    /// `FullRebuild` leaves exactly the given values in the tree.
    /// `Incremental` only relocates the given values; values that are gone
    /// must be dropped with `remove` by the caller.
    pub fn refresh<I>(&mut self, strategy: RefreshStrategy, circles: I) -> QuadtreeResult<()>
    where
        I: IntoIterator<Item = (u32, Circle)>,
    {
        match strategy {
            RefreshStrategy::FullRebuild => {
                self.clear();
                for (value, circle) in circles {
                    self.insert(value, circle)?;
                }
            }
            RefreshStrategy::Incremental => {
                for (value, circle) in circles {
                    self.relocate(value, circle)?;
                }
            }
        }
        Ok(())
    }

    // True if `insert` would put `circle` into `node`: every ancestor routes
    // it down this path, and it cannot descend any further from here.
    fn is_placed(&self, node: NodeId, circle: &Circle) -> bool {
        let current = &self.nodes[node.index()];
        if !current.is_leaf() && classify(&current.region, circle).is_some() {
            return false;
        }

        let mut child = node;
        while let Some((parent, quadrant)) = self.nodes[child.index()].parent {
            if classify(&self.nodes[parent.index()].region, circle) != Some(quadrant) {
                return false;
            }
            child = parent;
        }
        true
    }
}
