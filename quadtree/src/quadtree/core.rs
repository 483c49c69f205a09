use super::types::{validate_circle, validate_rect_dims};
use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::shapes::{Circle, Rectangle};
use tracing::{debug, trace};

impl QuadTree {
    pub fn new_with_config(bounding_box: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_rect_dims(bounding_box.width, bounding_box.height)?;
        if config.max_objects == 0 {
            return Err(QuadtreeError::InvalidConfig {
                reason: "max_objects must be at least 1",
            });
        }
        let mut nodes = Vec::with_capacity(config.pool_size.max(1));
        nodes.push(Node::new_leaf(bounding_box, 0, None));
        Ok(QuadTree {
            nodes,
            owner_map: FxHashMap::default(),
            config,
        })
    }

    pub fn new(bounding_box: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounding_box, Config::default())
    }

    /// Inserts `value` with its circle.
    ///
    /// Fails if the circle is degenerate, if `value` is already stored, or if
    /// the circle lies outside the root region under `OutOfBounds::Reject`.
    pub fn insert(&mut self, value: u32, circle: Circle) -> QuadtreeResult<()> {
        validate_circle(&circle)?;
        if self.owner_map.contains_key(&value) {
            return Err(QuadtreeError::DuplicateValue { value });
        }
        self.check_bounds(value, &circle)?;
        self.insert_into(NodeId::ROOT, Resident { value, circle });
        Ok(())
    }

    pub(super) fn check_bounds(&self, value: u32, circle: &Circle) -> QuadtreeResult<()> {
        let bounds = self.nodes[NodeId::ROOT.index()].region;
        if bounds.contains(circle) {
            return Ok(());
        }
        match self.config.out_of_bounds {
            OutOfBounds::Reject => Err(QuadtreeError::CircleOutOfBounds {
                x: circle.x,
                y: circle.y,
                radius: circle.radius,
                bounds_min_x: bounds.left(),
                bounds_min_y: bounds.top(),
                bounds_max_x: bounds.right(),
                bounds_max_y: bounds.bottom(),
            }),
            OutOfBounds::RetainAtRoot => {
                debug!(
                    value,
                    x = circle.x,
                    y = circle.y,
                    radius = circle.radius,
                    "circle outside quadtree bounds, retained at root"
                );
                Ok(())
            }
        }
    }

    // Descend while the circle fits a single child, then store it and split if
    // the node overflowed.
    fn insert_into(&mut self, start: NodeId, resident: Resident) {
        let mut node = start;
        loop {
            let current = &self.nodes[node.index()];
            match (current.children, classify(&current.region, &resident.circle)) {
                (Some(children), Some(quadrant)) => node = children[quadrant.index()],
                _ => break,
            }
        }

        let current = &mut self.nodes[node.index()];
        current.residents.push(resident);
        self.owner_map.insert(resident.value, node);

        let current = &self.nodes[node.index()];
        if current.residents.len() > self.config.max_objects
            && current.depth < self.config.max_depth
        {
            if current.is_leaf() {
                self.split(node);
            }
            self.push_down(node);
        }
    }

    // Creates the four children of a leaf.
    fn split(&mut self, node: NodeId) {
        let (region, depth) = {
            let current = &self.nodes[node.index()];
            debug_assert!(current.is_leaf(), "split called on an already split node");
            (current.region, current.depth)
        };

        let first = self.nodes.len() as u32;
        let children = [
            NodeId(first),
            NodeId(first + 1),
            NodeId(first + 2),
            NodeId(first + 3),
        ];
        for quadrant in Quadrant::ALL {
            self.nodes.push(Node::new_leaf(
                quadrant.region_within(&region),
                depth + 1,
                Some((node, quadrant)),
            ));
        }
        self.nodes[node.index()].children = Some(children);
        trace!(node = node.0, depth, "split node");
    }

    // Moves every resident that fits a single child down into it. Straddlers
    // stay where they are.
    fn push_down(&mut self, node: NodeId) {
        let (region, children) = {
            let current = &self.nodes[node.index()];
            match current.children {
                Some(children) => (current.region, children),
                None => return,
            }
        };

        let residents = std::mem::take(&mut self.nodes[node.index()].residents);
        for resident in residents {
            match classify(&region, &resident.circle) {
                Some(quadrant) => self.insert_into(children[quadrant.index()], resident),
                None => self.nodes[node.index()].residents.push(resident),
            }
        }
    }
}
