use super::*;
use crate::shapes::Circle;

impl QuadTree {
    /// Collects the candidate neighbours of `value` located at `circle`.
    ///
    /// The result is a superset of the values whose circles overlap `circle`;
    /// callers still run an exact test. `value` itself is never reported and
    /// every other value is reported at most once.
    pub fn query(&self, value: u32, circle: &Circle, candidates: &mut Vec<Resident>) {
        self.query_with(value, circle, |resident| candidates.push(*resident));
    }

    pub fn query_with<F>(&self, value: u32, circle: &Circle, mut f: F)
    where
        F: FnMut(&Resident),
    {
        self.query_from(NodeId::ROOT, value, circle, &mut f);
    }

    // Follows the circle's quadrant first, then reports this level's residents.
    // A circle that straddles this node's midlines can touch residents of any
    // child, so the whole subtree below is reported instead.
    fn query_from<F>(&self, node: NodeId, exclude: u32, circle: &Circle, f: &mut F)
    where
        F: FnMut(&Resident),
    {
        let current = &self.nodes[node.index()];
        if let Some(children) = current.children {
            match classify(&current.region, circle) {
                Some(quadrant) => self.query_from(children[quadrant.index()], exclude, circle, f),
                None => {
                    for child in children {
                        self.for_each_in_subtree(child, exclude, f);
                    }
                }
            }
        }
        for resident in current.residents.iter() {
            if resident.value != exclude {
                f(resident);
            }
        }
    }

    fn for_each_in_subtree<F>(&self, node: NodeId, exclude: u32, f: &mut F)
    where
        F: FnMut(&Resident),
    {
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            let current = &self.nodes[node.index()];
            for resident in current.residents.iter() {
                if resident.value != exclude {
                    f(resident);
                }
            }
            if let Some(children) = current.children {
                stack.extend(children);
            }
        }
    }
}
