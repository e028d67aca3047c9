use super::*;
use std::collections::HashSet;
use std::f64::consts::PI;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn cross_sign_encodes_turn() {
    // left turn (counter-clockwise) is negative
    assert!(cross(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)) < 0.0);
    assert!(cross(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, -1.0)) > 0.0);
    assert_eq!(cross(pt(0.0, 0.0), pt(1.0, 1.0), pt(3.0, 3.0)), 0.0);
    // magnitude is twice the triangle area
    assert!((cross(pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 2.0)).abs() - 4.0).abs() < 1e-12);
}

#[test]
fn proper_crossing_and_touches() {
    // X
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
        pt(2.0, 0.0)
    ));
    // T: endpoint of one segment in the middle of the other
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(1.0, 0.0),
        pt(1.0, 1.0)
    ));
    // sightline grazing a vertex
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(4.0, 4.0),
        pt(2.0, 2.0),
        pt(3.0, 0.0)
    ));
    // collinear overlap
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(4.0, 0.0),
        pt(1.0, 0.0),
        pt(3.0, 0.0)
    ));
}

#[test]
fn shared_endpoints_do_not_intersect() {
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(1.0, 1.0),
        pt(1.0, 1.0),
        pt(2.0, 0.0)
    ));
    // identical segments share both endpoints
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(1.0, 1.0),
        pt(1.0, 1.0),
        pt(0.0, 0.0)
    ));
    // collinear but disjoint
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(1.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 0.0)
    ));
    // parallel
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(1.0, 0.0),
        pt(0.0, 1.0),
        pt(1.0, 1.0)
    ));
}

#[test]
fn intersection_is_symmetric() {
    let cases = [
        (pt(0.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0), pt(2.0, 0.0)),
        (pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)),
        (pt(0.0, 0.0), pt(1.0, 1.0), pt(1.0, 1.0), pt(2.0, 0.0)),
        (pt(5.0, 1.0), pt(-3.0, 2.0), pt(0.0, -4.0), pt(1.0, 7.0)),
    ];
    for (a, b, c, d) in cases {
        let r = segments_intersect(a, b, c, d);
        assert_eq!(r, segments_intersect(b, a, c, d));
        assert_eq!(r, segments_intersect(c, d, a, b));
        assert_eq!(r, segments_intersect(d, c, b, a));
    }
}

#[test]
fn point_on_segment_is_exact() {
    assert!(point_on_segment(pt(1.0, 1.0), pt(0.0, 0.0), pt(2.0, 2.0)));
    assert!(point_on_segment(pt(0.0, 0.0), pt(0.0, 0.0), pt(2.0, 2.0)));
    assert!(!point_on_segment(pt(3.0, 3.0), pt(0.0, 0.0), pt(2.0, 2.0)));
    assert!(!point_on_segment(
        pt(1.0, 1.000_000_1),
        pt(0.0, 0.0),
        pt(2.0, 2.0)
    ));
}

#[test]
fn angle_is_normalized() {
    let o = pt(0.0, 0.0);
    assert!(angle(o, pt(1.0, 0.0)).abs() < 1e-15);
    assert!((angle(o, pt(0.0, 1.0)) - PI / 2.0).abs() < 1e-12);
    assert!((angle(o, pt(-1.0, 0.0)) - PI).abs() < 1e-12);
    assert!((angle(o, pt(0.0, -1.0)) - 1.5 * PI).abs() < 1e-12);
    let a = angle(pt(1.0, 1.0), pt(1.0, 0.5));
    assert!((0.0..2.0 * PI).contains(&a));
}

#[test]
fn distance_is_euclidean() {
    assert!((distance(pt(0.0, 0.0), pt(3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert_eq!(distance(pt(1.5, -2.0), pt(1.5, -2.0)), 0.0);
}

#[test]
fn ray_hits_and_misses() {
    let eps = GeomCfg::default().eps_parallel;
    let o = pt(0.0, 0.0);
    let hit = ray_intersect(o, Vector::new(1.0, 0.0), pt(2.0, -1.0), pt(2.0, 1.0), eps);
    let hit = hit.expect("ray should hit");
    assert!((hit - pt(2.0, 0.0)).norm() < 1e-12);
    // behind the origin
    assert!(ray_intersect(o, Vector::new(-1.0, 0.0), pt(2.0, -1.0), pt(2.0, 1.0), eps).is_none());
    // parallel
    assert!(ray_intersect(o, Vector::new(1.0, 0.0), pt(1.0, 1.0), pt(3.0, 1.0), eps).is_none());
    // misses past the segment end
    assert!(ray_intersect(o, Vector::new(1.0, 0.0), pt(2.0, 1.0), pt(2.0, 3.0), eps).is_none());
    // endpoint counts
    let end = ray_intersect(o, Vector::new(1.0, 0.0), pt(2.0, 0.0), pt(2.0, 1.0), eps);
    assert!(end.is_some());
}

#[test]
fn point_keys_fold_signed_zero() {
    let mut keys = HashSet::new();
    keys.insert(PointKey::from(pt(0.0, 1.0)));
    assert!(keys.contains(&PointKey::from(pt(-0.0, 1.0))));
    assert!(!keys.contains(&PointKey::from(pt(0.0, 1.000_000_000_000_1))));
}

#[test]
fn segment_shared_endpoint() {
    let a = Segment::new(pt(0.0, 0.0), pt(1.0, 0.0));
    let b = Segment::new(pt(2.0, 2.0), pt(1.0, 0.0));
    let (shared, fa, fb) = a.shared_endpoint(&b).expect("shared");
    assert_eq!(shared, pt(1.0, 0.0));
    assert_eq!(fa, pt(0.0, 0.0));
    assert_eq!(fb, pt(2.0, 2.0));
    assert!(a.shared_endpoint(&a.reversed()).is_none());
    assert!(a.same_edge(&a.reversed()));
    assert!((b.length() - 5f64.sqrt()).abs() < 1e-12);
}
