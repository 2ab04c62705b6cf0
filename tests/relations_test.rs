//! Reference scenarios for the relations engine, through the public API.

use analytic3::algebra::rotate;
use analytic3::{
    line_line_distance, line_plane_intersection, line_plane_projection, plane_plane_intersection,
    point_line_distance, point_line_projection, point_plane_distance, point_plane_projection,
    Line, LinePlaneIntersection, Plane, Vec3,
};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::FRAC_PI_2;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_point_line_scenario() {
    let line = Line::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(2.0, 0.0, 2.0));
    let p = Vec3::new(4.0, 3.0, 0.0);

    assert_abs_diff_eq!(point_line_projection(p, &line), Vec3::new(2.0, 3.0, 2.0));
    assert_relative_eq!(point_line_distance(p, &line), 8.0_f64.sqrt(), epsilon = 1e-12);

    // rescaling the direction changes nothing
    let scaled = Line::new(line.anchor(), line.direction() * -7.5);
    assert_abs_diff_eq!(point_line_projection(p, &scaled), Vec3::new(2.0, 3.0, 2.0));
}

#[test]
fn test_point_plane_scenario() {
    let plane = Plane::new(Vec3::new(0.0, 5.0, 0.0), 4.0);

    let projected = point_plane_projection(Vec3::new(1.0, 0.0, 4.0), &plane);
    assert_abs_diff_eq!(projected, Vec3::new(1.0, 4.0, 4.0));
    let distance = point_plane_distance(Vec3::new(2.0, 9.0, 1.0), &plane);
    assert_relative_eq!(distance, 5.0, epsilon = 1e-12);
}

#[test]
fn test_line_plane_intersection_scenarios() {
    init();
    let plane = Plane::new(Vec3::new(0.0, 5.0, 0.0), 4.0);

    let crossing = Line::new(Vec3::new(4.0, 2.0, 0.0), Vec3::new(0.0, 2.0, 3.0));
    match line_plane_intersection(&crossing, &plane) {
        LinePlaneIntersection::Point(p) => assert_abs_diff_eq!(p, Vec3::new(4.0, 4.0, 3.0)),
        other => panic!("expected a point, got {:?}", other),
    }

    let lying = Line::new(Vec3::new(1.0, 4.0, 0.0), Vec3::new(2.0, 0.0, 2.0));
    match line_plane_intersection(&lying, &plane) {
        LinePlaneIntersection::Line(line) => assert_eq!(line, lying),
        other => panic!("expected the line itself, got {:?}", other),
    }

    let parallel = Line::new(Vec3::new(1.0, 6.0, 0.0), Vec3::new(2.0, 0.0, 2.0));
    assert_eq!(line_plane_intersection(&parallel, &plane), LinePlaneIntersection::Disjoint);
}

#[test]
fn test_line_line_distance_scenarios() {
    init();
    let a = Line::new(Vec3::new(3.0, 2.0, 4.0), Vec3::new(2.0, 1.0, 0.0));
    let b = Line::new(Vec3::new(2.0, 3.0, 2.0), Vec3::new(1.0, 2.0, 0.0));
    assert_relative_eq!(line_line_distance(&a, &b), 2.0, epsilon = 1e-12);

    let a = Line::new(Vec3::new(3.0, 2.0, 3.0), Vec3::new(2.0, 1.0, 0.0));
    let b = Line::new(Vec3::new(2.0, 3.0, 3.0), Vec3::new(1.0, 2.0, 0.0));
    assert_abs_diff_eq!(line_line_distance(&a, &b), 0.0, epsilon = 1e-12);
}

#[test]
fn test_rotate_scenario() {
    let r = rotate(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 0.0, 0.0), FRAC_PI_2);
    assert_abs_diff_eq!(r, Vec3::new(1.0, -3.0, 2.0));
}

#[test]
fn test_projected_line_lies_in_plane() {
    init();
    let plane = Plane::new(Vec3::new(1.0, 2.0, 2.0), 6.0);
    let line = Line::new(Vec3::new(-4.0, 1.0, 9.0), Vec3::new(3.0, 0.0, -1.0));

    let projected = line_plane_projection(&line, &plane);
    assert!(plane.contains(projected.anchor()));
    assert!(plane.contains(projected.point_at(3.0)));
    assert!(matches!(
        line_plane_intersection(&projected, &plane),
        LinePlaneIntersection::Line(_)
    ));
}

#[test]
fn test_plane_plane_intersection_general() {
    init();
    let a = Plane::new(Vec3::new(1.0, 1.0, 0.0), 2.0_f64.sqrt());
    let b = Plane::new(Vec3::new(0.0, 3.0, 4.0), 10.0);

    let line = plane_plane_intersection(&a, &b).unwrap();
    assert_abs_diff_eq!(line.direction(), a.normal().cross(&b.normal()));
    for t in [-2.0, 0.0, 0.5, 4.0] {
        let p = line.point_at(t);
        assert!(a.contains(p), "{:?} not on {:?}", p, a);
        assert!(b.contains(p), "{:?} not on {:?}", p, b);
    }
}

#[test]
fn test_plane_plane_intersection_nearly_parallel() {
    init();
    // two faces of a thin wedge, normals far from unit length
    let a = Plane::new(Vec3::new(0.0, 0.0, 100.0), 1.0);
    let b = Plane::new(Vec3::new(0.0, 1e-3, 100.0), 1.0);

    let line = plane_plane_intersection(&a, &b).expect("wedge faces meet");
    assert_abs_diff_eq!(line.direction(), Vec3::new(-0.1, 0.0, 0.0));
    for t in [-10.0, 0.0, 10.0] {
        let p = line.point_at(t);
        assert!(a.contains(p), "{:?} not on {:?}", p, a);
        assert!(b.contains(p), "{:?} not on {:?}", p, b);
    }
}
