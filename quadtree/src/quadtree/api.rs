use super::*;
use crate::shapes::Rectangle;

impl QuadTree {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> Rectangle {
        self.nodes[NodeId::ROOT.index()].region
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.owner_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner_map.is_empty()
    }

    pub fn contains_value(&self, value: u32) -> bool {
        self.owner_map.contains_key(&value)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node whose resident list holds `value`.
    pub fn node_of(&self, value: u32) -> Option<NodeId> {
        self.owner_map.get(&value).copied()
    }

    pub fn region(&self, node: NodeId) -> Option<Rectangle> {
        self.nodes.get(node.index()).map(|n| n.region)
    }

    pub fn depth(&self, node: NodeId) -> Option<u32> {
        self.nodes.get(node.index()).map(|n| n.depth)
    }

    pub fn residents(&self, node: NodeId) -> Option<&[Resident]> {
        self.nodes.get(node.index()).map(|n| n.residents.as_slice())
    }

    /// Children in `Quadrant::ALL` order, or `None` for a leaf.
    pub fn children(&self, node: NodeId) -> Option<[NodeId; 4]> {
        self.nodes.get(node.index()).and_then(|n| n.children)
    }

    pub fn child(&self, node: NodeId, quadrant: Quadrant) -> Option<NodeId> {
        self.children(node).map(|children| children[quadrant.index()])
    }

    pub fn max_depth_reached(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Visits every node depth-first, parents before children.
    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, &Rectangle, u32, &[Resident]),
    {
        let mut stack = vec![NodeId::ROOT];
        while let Some(node) = stack.pop() {
            let current = &self.nodes[node.index()];
            f(node, &current.region, current.depth, current.residents.as_slice());
            if let Some(children) = current.children {
                stack.extend(children.iter().rev());
            }
        }
    }

    // Retrieve all node regions, e.g. for a debug overlay
    pub fn all_node_regions(&self, regions: &mut Vec<Rectangle>) {
        self.for_each_node(|_, region, _, _| regions.push(*region));
    }

    // Retrieve every stored value with its circle
    pub fn all_residents(&self, residents: &mut Vec<Resident>) {
        self.for_each_node(|_, _, _, node_residents| residents.extend_from_slice(node_residents));
    }
}
