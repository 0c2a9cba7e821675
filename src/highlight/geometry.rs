//! src/highlight/geometry.rs
//!
//! Container-relative rectangles, point-to-rectangle distance and
//! closest-panel selection.

use super::state::ClosestPanel;

/// A point in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of the container, in the same space as pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Origin {
    pub left: f64,
    pub top: f64,
}

/// Axis-aligned panel bounds relative to the container origin.
///
/// `Default` is the zero-sized box at the origin, which is what a panel that
/// has not been laid out yet reports.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Build a box from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Build a box from absolute coordinates, re-expressed relative to `origin`.
    pub fn relative_to(left: f64, top: f64, width: f64, height: f64, origin: Origin) -> Self {
        Self::new(left - origin.left, top - origin.top, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Euclidean distance from `p` to the nearest point of `rect`.
///
/// Zero when `p` lies inside or on the boundary.
pub fn distance_to_rect(p: Point, rect: &BoundingBox) -> f64 {
    let dx = (rect.left - p.x).max(0.0).max(p.x - rect.right);
    let dy = (rect.top - p.y).max(0.0).max(p.y - rect.bottom);
    (dx * dx + dy * dy).sqrt()
}

/// Pick the panel nearest to `p`.
///
/// Ties go to the earliest panel since only a strictly smaller distance
/// replaces the current best. Returns `None` for an empty slice.
pub fn closest_panel(p: Point, boxes: &[BoundingBox]) -> Option<ClosestPanel> {
    let mut best: Option<ClosestPanel> = None;
    for (index, rect) in boxes.iter().enumerate() {
        let distance = distance_to_rect(p, rect);
        let better = match &best {
            Some(b) => distance < b.distance,
            None => distance < f64::INFINITY,
        };
        if better {
            let center = rect.center();
            best = Some(ClosestPanel {
                index,
                distance,
                center_x: center.x,
                center_y: center.y,
                width: rect.width,
                height: rect.height,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn distance_is_zero_inside_and_on_edges() {
        let r = unit_square();
        assert_eq!(distance_to_rect(Point::new(50.0, 50.0), &r), 0.0);
        assert_eq!(distance_to_rect(Point::new(0.0, 0.0), &r), 0.0);
        assert_eq!(distance_to_rect(Point::new(100.0, 37.0), &r), 0.0);
        assert_eq!(distance_to_rect(Point::new(12.0, 100.0), &r), 0.0);
    }

    #[test]
    fn distance_to_edge_and_corner() {
        let r = unit_square();
        assert_eq!(distance_to_rect(Point::new(150.0, 50.0), &r), 50.0);
        assert_eq!(distance_to_rect(Point::new(50.0, -20.0), &r), 20.0);
        assert_eq!(distance_to_rect(Point::new(130.0, 140.0), &r), 50.0);
        assert_eq!(distance_to_rect(Point::new(-3.0, -4.0), &r), 5.0);
    }

    #[test]
    fn zero_sized_box_degrades_to_point_distance() {
        let r = BoundingBox::default();
        assert_eq!(distance_to_rect(Point::new(3.0, 4.0), &r), 5.0);
    }

    #[test]
    fn relative_box_subtracts_origin() {
        let origin = Origin {
            left: 10.0,
            top: 20.0,
        };
        let r = BoundingBox::relative_to(15.0, 30.0, 40.0, 10.0, origin);
        assert_eq!(r, BoundingBox::new(5.0, 10.0, 40.0, 10.0));
        assert_eq!(r.right, 45.0);
        assert_eq!(r.bottom, 20.0);
    }

    #[test]
    fn closest_panel_picks_minimum() {
        let boxes = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(100.0, 0.0, 20.0, 10.0),
            BoundingBox::new(0.0, 100.0, 10.0, 10.0),
        ];
        let c = closest_panel(Point::new(95.0, 5.0), &boxes).unwrap();
        assert_eq!(c.index, 1);
        assert_eq!(c.distance, 5.0);
        assert_eq!((c.center_x, c.center_y), (110.0, 5.0));
        assert_eq!((c.width, c.height), (20.0, 10.0));
    }

    #[test]
    fn closest_panel_tie_goes_to_first() {
        let boxes = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(20.0, 0.0, 10.0, 10.0),
        ];
        let c = closest_panel(Point::new(15.0, 5.0), &boxes).unwrap();
        assert_eq!(c.index, 0);
    }

    #[test]
    fn closest_panel_of_nothing_is_none() {
        assert!(closest_panel(Point::new(1.0, 1.0), &[]).is_none());
    }
}
