use crate::collision_detection;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::shapes::{Circle, Rectangle};
use smallvec::SmallVec;

/// Index of a node in the tree's arena. Ids stay valid until the next `clear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Quadrant of a node, named for screen coordinates (north is smaller `y`).
///
/// The discriminant is the child slot: `split`, `classify` and child lookup
/// all go through `Quadrant::index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NE = 0,
    NW = 1,
    SW = 2,
    SE = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::NE, Quadrant::NW, Quadrant::SW, Quadrant::SE];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The quarter of `parent` this quadrant covers.
    ///
    /// Outer edges are taken from `parent`'s edges so that the four children
    /// tile it even when halving its size rounds.
    pub fn region_within(self, parent: &Rectangle) -> Rectangle {
        let (mid_x, mid_y) = parent.midpoint();
        let (x, width) = match self {
            Quadrant::NE | Quadrant::SE => (mid_x, parent.right() - mid_x),
            Quadrant::NW | Quadrant::SW => (parent.x, mid_x - parent.x),
        };
        let (y, height) = match self {
            Quadrant::NE | Quadrant::NW => (parent.y, mid_y - parent.y),
            Quadrant::SW | Quadrant::SE => (mid_y, parent.bottom() - mid_y),
        };
        Rectangle::new(x, y, width, height)
    }
}

/// Picks the child quadrant of `region` that fully holds `circle`.
///
/// Comparisons against the midlines are strict: a circle whose edge touches a
/// midline straddles it and yields `None`, as does a circle that is not inside
/// `region` at all, or that does not fit the child's computed region.
pub fn classify(region: &Rectangle, circle: &Circle) -> Option<Quadrant> {
    if !collision_detection::rectangle_contains_circle(region, circle) {
        return None;
    }
    let (mid_x, mid_y) = region.midpoint();

    let top = circle.y + circle.radius < mid_y;
    let bottom = circle.y - circle.radius > mid_y;
    let left = circle.x + circle.radius < mid_x;
    let right = circle.x - circle.radius > mid_x;

    let quadrant = match (top, bottom, left, right) {
        (true, _, _, true) => Quadrant::NE,
        (true, _, true, _) => Quadrant::NW,
        (_, true, true, _) => Quadrant::SW,
        (_, true, _, true) => Quadrant::SE,
        _ => return None,
    };
    // Child edges can land a rounding step inside the parent's, so a circle
    // flush with the parent's wall may not fit the child.
    if quadrant.region_within(region).contains(circle) {
        Some(quadrant)
    } else {
        None
    }
}

/// A value together with the circle it was indexed under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resident {
    pub value: u32,
    pub circle: Circle,
}

pub(crate) struct Node {
    pub(crate) region: Rectangle,
    pub(crate) depth: u32,
    pub(crate) parent: Option<(NodeId, Quadrant)>,
    pub(crate) residents: SmallVec<[Resident; 8]>,
    pub(crate) children: Option<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new_leaf(region: Rectangle, depth: u32, parent: Option<(NodeId, Quadrant)>) -> Self {
        Self {
            region,
            depth,
            parent,
            residents: SmallVec::new(),
            children: None,
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

pub(crate) fn validate_rect_dims(width: f32, height: f32) -> QuadtreeResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(QuadtreeError::InvalidRectangleDims { width, height });
    }
    Ok(())
}

pub(crate) fn validate_circle(circle: &Circle) -> QuadtreeResult<()> {
    let radius = circle.radius;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(QuadtreeError::InvalidCircleRadius { radius });
    }
    if !circle.x.is_finite() || !circle.y.is_finite() {
        return Err(QuadtreeError::InvalidCircleCenter {
            x: circle.x,
            y: circle.y,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane() -> Rectangle {
        Rectangle::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn classify_picks_each_quadrant() {
        let region = plane();
        assert_eq!(classify(&region, &Circle::new(75.0, 25.0, 1.0)), Some(Quadrant::NE));
        assert_eq!(classify(&region, &Circle::new(25.0, 25.0, 1.0)), Some(Quadrant::NW));
        assert_eq!(classify(&region, &Circle::new(25.0, 75.0, 1.0)), Some(Quadrant::SW));
        assert_eq!(classify(&region, &Circle::new(75.0, 75.0, 1.0)), Some(Quadrant::SE));
    }

    #[test]
    fn classify_treats_midline_contact_as_straddling() {
        let region = plane();
        // Edge exactly on the vertical midline.
        assert_eq!(classify(&region, &Circle::new(49.0, 25.0, 1.0)), None);
        assert_eq!(classify(&region, &Circle::new(51.0, 25.0, 1.0)), None);
        // Edge exactly on the horizontal midline.
        assert_eq!(classify(&region, &Circle::new(25.0, 49.0, 1.0)), None);
        assert_eq!(classify(&region, &Circle::new(25.0, 51.0, 1.0)), None);
        // Just clear of it.
        assert_eq!(classify(&region, &Circle::new(48.5, 25.0, 1.0)), Some(Quadrant::NW));
        assert_eq!(classify(&region, &Circle::new(25.0, 51.5, 1.0)), Some(Quadrant::SW));
    }

    #[test]
    fn classify_rejects_circles_outside_the_region() {
        let region = plane();
        assert_eq!(classify(&region, &Circle::new(-10.0, 25.0, 1.0)), None);
        assert_eq!(classify(&region, &Circle::new(0.5, 25.0, 1.0)), None);
    }

    #[test]
    fn region_within_matches_classify() {
        let region = plane();
        for quadrant in Quadrant::ALL {
            let child = quadrant.region_within(&region);
            let (cx, cy) = child.midpoint();
            assert_eq!(classify(&region, &Circle::new(cx, cy, 1.0)), Some(quadrant));
            assert_eq!(child.width, 50.0);
            assert_eq!(child.height, 50.0);
        }
    }

    #[test]
    fn region_within_tiles_uneven_parents() {
        let parent = Rectangle::new(3.3, 7.7, 1920.1, 1080.3);
        let (mid_x, mid_y) = parent.midpoint();
        let ne = Quadrant::NE.region_within(&parent);
        let nw = Quadrant::NW.region_within(&parent);
        let sw = Quadrant::SW.region_within(&parent);
        let se = Quadrant::SE.region_within(&parent);

        assert_eq!(nw.left(), parent.left());
        assert_eq!(nw.top(), parent.top());
        assert_eq!(ne.left(), mid_x);
        assert_eq!(sw.top(), mid_y);
        assert_eq!(se.left(), mid_x);
        assert_eq!(se.top(), mid_y);
        for child in [ne, se] {
            assert!((child.right() - parent.right()).abs() <= 1e-3);
        }
        for child in [sw, se] {
            assert!((child.bottom() - parent.bottom()).abs() <= 1e-3);
        }
    }

    #[test]
    fn classify_only_picks_a_child_that_holds_the_circle() {
        let parent = Rectangle::new(0.0, 0.0, 1920.1, 1080.3);
        for i in 0..200 {
            let radius = 0.01 + i as f32 * 0.003;
            let circle = Circle::new(parent.right() - radius, 100.0 + i as f32, radius);
            if let Some(quadrant) = classify(&parent, &circle) {
                assert!(quadrant.region_within(&parent).contains(&circle));
            }
        }
    }

    #[test]
    fn quadrant_index_follows_child_order() {
        for (slot, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), slot);
        }
    }

    #[test]
    fn validation() {
        assert!(validate_rect_dims(10.0, 10.0).is_ok());
        assert!(validate_rect_dims(0.0, 10.0).is_err());
        assert!(validate_rect_dims(10.0, f32::NAN).is_err());
        assert!(validate_circle(&Circle::new(1.0, 1.0, 1.0)).is_ok());
        assert!(validate_circle(&Circle::new(1.0, 1.0, 0.0)).is_err());
        assert!(validate_circle(&Circle::new(1.0, 1.0, -2.0)).is_err());
        assert_eq!(
            validate_circle(&Circle::new(f32::INFINITY, 1.0, 1.0)),
            Err(QuadtreeError::InvalidCircleCenter {
                x: f32::INFINITY,
                y: 1.0
            })
        );
        assert!(matches!(
            validate_circle(&Circle::new(1.0, f32::NAN, 1.0)),
            Err(QuadtreeError::InvalidCircleCenter { .. })
        ));
    }
}
