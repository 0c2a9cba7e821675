//! Property tests for distance, closest-panel selection and size interpolation.

use panel_glow::highlight::{
    BoundingBox, ControllerEvent, HighlightConfig, Origin, Point, ProximityHighlight,
    RenderSurface, closest_panel, distance_to_rect,
};
use proptest::prelude::*;

fn arb_rect() -> impl Strategy<Value = BoundingBox> {
    (-500.0..500.0f64, -500.0..500.0f64, 0.0..300.0f64, 0.0..300.0f64)
        .prop_map(|(l, t, w, h)| BoundingBox::new(l, t, w, h))
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

/// Nearest point of `r` to `p`, by clamping.
fn nearest_on(r: &BoundingBox, p: Point) -> Point {
    Point::new(p.x.clamp(r.left, r.right), p.y.clamp(r.top, r.bottom))
}

struct Boxes(Vec<BoundingBox>);

impl RenderSurface for Boxes {
    fn bounding_boxes(&self) -> Vec<BoundingBox> {
        self.0.clone()
    }

    fn container_origin(&self) -> Origin {
        Origin::default()
    }
}

proptest! {
    /// Property: points inside or on a rectangle are at distance zero
    #[test]
    fn prop_inside_is_zero(r in arb_rect(), fx in 0.0..=1.0f64, fy in 0.0..=1.0f64) {
        let p = Point::new(r.left + fx * r.width, r.top + fy * r.height);
        let p = nearest_on(&r, p);
        prop_assert_eq!(distance_to_rect(p, &r), 0.0);
    }

    /// Property: distance is non-negative and equals the distance to the clamped point
    #[test]
    fn prop_distance_matches_nearest_point(r in arb_rect(), p in arb_point()) {
        let d = distance_to_rect(p, &r);
        prop_assert!(d >= 0.0);
        let q = nearest_on(&r, p);
        let expected = ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt();
        prop_assert!((d - expected).abs() < 1e-9);
    }

    /// Property: the selected panel minimizes distance, and is the first such panel
    #[test]
    fn prop_closest_is_first_minimum(
        rects in prop::collection::vec(arb_rect(), 1..12),
        p in arb_point(),
    ) {
        let c = closest_panel(p, &rects).expect("non-empty");
        let distances: Vec<f64> = rects.iter().map(|r| distance_to_rect(p, r)).collect();
        let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(c.distance, min);
        let first = distances.iter().position(|&d| d == min).unwrap();
        prop_assert_eq!(c.index, first);
    }

    /// Property: a unique minimizer wins regardless of where it sits in the list
    #[test]
    fn prop_unique_minimizer_independent_of_order(
        rects in prop::collection::vec(arb_rect(), 1..10),
        p in arb_point(),
        rotate in 0usize..10,
    ) {
        let distances: Vec<f64> = rects.iter().map(|r| distance_to_rect(p, r)).collect();
        let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assume!(distances.iter().filter(|&&d| d == min).count() == 1);
        let winner = rects[distances.iter().position(|&d| d == min).unwrap()];

        let mut shuffled = rects.clone();
        let k = rotate % shuffled.len();
        shuffled.rotate_left(k);
        let c = closest_panel(p, &shuffled).unwrap();
        prop_assert_eq!(shuffled[c.index], winner);
    }

    /// Property: multiplier is non-increasing and bounded by [min_scale, 1]
    #[test]
    fn prop_multiplier_monotone(a in 0.0..1000.0f64, b in 0.0..1000.0f64) {
        let cfg = HighlightConfig::default();
        let (d1, d2) = if a <= b { (a, b) } else { (b, a) };
        let (m1, m2) = (cfg.size_multiplier(d1), cfg.size_multiplier(d2));
        prop_assert!(m1 >= m2 - 1e-12);
        prop_assert!((0.4..=1.0).contains(&m1));
        if d1 <= 50.0 {
            prop_assert!((m1 - 1.0).abs() < 1e-12);
        }
        if d2 >= 200.0 {
            prop_assert!((m2 - 0.4).abs() < 1e-12);
        }
    }

    /// Property: snapped iff the nearest panel is closer than the snap distance
    #[test]
    fn prop_snap_iff_close(
        rects in prop::collection::vec(arb_rect(), 1..8),
        p in arb_point(),
    ) {
        let surface = Boxes(rects.clone());
        let mut c = ProximityHighlight::mount(HighlightConfig::default(), &surface);
        c.handle(ControllerEvent::Enter, &surface);
        c.handle(ControllerEvent::Move { client_x: p.x, client_y: p.y }, &surface);

        let nearest = closest_panel(p, &rects).unwrap();
        let h = c.highlight();
        prop_assert_eq!(h.snapped, nearest.distance < 50.0);
        if h.snapped {
            prop_assert_eq!((h.x, h.y), (nearest.center_x, nearest.center_y));
        } else {
            prop_assert_eq!((h.x, h.y), (p.x, p.y));
        }
        let scale = HighlightConfig::default().size_multiplier(nearest.distance);
        prop_assert!((h.width - nearest.width * scale).abs() < 1e-9);
        prop_assert!((h.height - nearest.height * scale).abs() < 1e-9);
    }
}
