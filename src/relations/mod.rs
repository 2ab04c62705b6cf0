//! Relations between points, lines and planes.
//!
//! Projections, distances and intersections in closed form. Nothing here
//! fails: parallel, coincident and contained configurations are reported
//! through the result types ([`LinePlaneIntersection`], `Option`) or a
//! documented fallback value.
//!
//! Lines with a zero direction and planes with a zero normal are caller
//! errors and give meaningless (but finite) results.

use crate::algebra::{add, cross, dot, is_zero, len, mul, norm, project, sub};
use crate::gp::{Line, Plane, Vec3};
use crate::precision;

/// Outcome of intersecting a line with a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinePlaneIntersection {
    /// The line crosses the plane at a single point.
    Point(Vec3),
    /// The line lies in the plane. Carries the input line.
    Line(Line),
    /// The line is parallel to the plane and off it.
    Disjoint,
}

impl LinePlaneIntersection {
    /// Returns the crossing point, if the intersection is a single point.
    pub fn point(&self) -> Option<Vec3> {
        match self {
            LinePlaneIntersection::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_disjoint(&self) -> bool {
        matches!(self, LinePlaneIntersection::Disjoint)
    }
}

/// Orthogonal projection of `point` onto `line`.
///
/// Degenerates to the anchor if the line direction is zero.
pub fn point_line_projection(point: Vec3, line: &Line) -> Vec3 {
    let anchor_to_point = sub(point, line.anchor());
    add(line.anchor(), project(anchor_to_point, line.direction()))
}

/// Distance from `point` to `line`.
pub fn point_line_distance(point: Vec3, line: &Line) -> f64 {
    len(sub(point, point_line_projection(point, line)))
}

/// Orthogonal projection of `point` onto `plane`.
pub fn point_plane_projection(point: Vec3, plane: &Plane) -> Vec3 {
    let point_to_plane = sub(plane.point(), point);
    add(point, project(point_to_plane, plane.normal()))
}

/// Distance from `point` to `plane`.
pub fn point_plane_distance(point: Vec3, plane: &Plane) -> f64 {
    len(sub(point, point_plane_projection(point, plane)))
}

/// Intersects `line` with `plane`.
///
/// Solves `dot(anchor + t * direction, n) = distance` for `t`, with `n`
/// the normalized plane normal.
pub fn line_plane_intersection(line: &Line, plane: &Plane) -> LinePlaneIntersection {
    let n = norm(plane.normal());
    let num = plane.distance() - dot(line.anchor(), n);
    let den = dot(line.direction(), n);

    if precision::is_zero(den) {
        if precision::is_zero(num) {
            log::trace!("line {:?} lies in plane {:?}", line, plane);
            return LinePlaneIntersection::Line(*line);
        }
        log::trace!("line {:?} is parallel to plane {:?}", line, plane);
        return LinePlaneIntersection::Disjoint;
    }

    LinePlaneIntersection::Point(line.point_at(num / den))
}

/// Projects `line` onto `plane`.
///
/// A line orthogonal to the plane projects to a single point; the result
/// then keeps the source line's direction, anchored at that point.
pub fn line_plane_projection(line: &Line, plane: &Plane) -> Line {
    let anchor = point_plane_projection(line.anchor(), plane);
    let head = point_plane_projection(add(line.anchor(), line.direction()), plane);
    let direction = sub(head, anchor);

    if is_zero(direction) {
        log::trace!("line {:?} is orthogonal to plane {:?}, keeping its direction", line, plane);
        return Line::new(anchor, line.direction());
    }

    Line::new(anchor, direction)
}

/// Shortest distance between two lines.
///
/// For non-parallel lines this is the gap between the two parallel planes
/// that contain them; parallel lines fall back to a point-line distance.
pub fn line_line_distance(a: &Line, b: &Line) -> f64 {
    let n = norm(cross(a.direction(), b.direction()));

    if is_zero(n) {
        log::trace!("lines {:?} and {:?} are parallel", a, b);
        return point_line_distance(a.anchor(), b);
    }

    dot(n, sub(a.anchor(), b.anchor())).abs()
}

/// Closest points of two non-parallel lines, `(on a, on b)`.
///
/// For intersecting lines both points are the intersection. For skew
/// lines they are distinct and mark the common perpendicular. Parallel or
/// coincident lines give `None`.
pub fn line_line_intersection(a: &Line, b: &Line) -> Option<(Vec3, Vec3)> {
    let n = cross(a.direction(), b.direction());

    if is_zero(n) {
        log::trace!("lines {:?} and {:?} are parallel, no unique intersection", a, b);
        return None;
    }

    let a_normal = cross(a.direction(), n);
    let b_normal = cross(b.direction(), n);
    let k = 1.0 / dot(n, n);

    let a_t = k
        * dot(b_normal, sub(b.anchor(), a.anchor()))
        * dot(b_normal, a.direction()).signum();
    let b_t = k
        * dot(a_normal, sub(a.anchor(), b.anchor()))
        * dot(a_normal, b.direction()).signum();

    Some((a.point_at(a_t), b.point_at(b_t)))
}

/// Line along which two planes meet. Parallel planes give `None`.
///
/// The returned direction is `cross(a.normal, b.normal)`, unnormalized.
pub fn plane_plane_intersection(a: &Plane, b: &Plane) -> Option<Line> {
    let direction = cross(a.normal(), b.normal());

    if is_zero(direction) {
        log::trace!("planes {:?} and {:?} are parallel", a, b);
        return None;
    }

    // In-plane lines running from each plane's foot point towards the
    // intersection. Both lie in the plane through the origin orthogonal
    // to `direction`, so they always meet.
    //
    // With `u = a.normal x unit` and `v = b.normal x unit`, `|u x v|` equals
    // `|direction|`, so the parallel test inside `line_line_intersection`
    // agrees with the one above whatever the normals' lengths.
    let unit = norm(direction);
    let a_line = Line::new(a.point(), cross(a.normal(), unit));
    let b_line = Line::new(b.point(), cross(b.normal(), unit));

    let (p, q) = line_line_intersection(&a_line, &b_line)?;
    Some(Line::new(mul(add(p, q), 0.5), direction))
}
