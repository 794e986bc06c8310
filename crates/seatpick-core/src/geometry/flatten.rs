//! Curve and arc subdivision into line segments.
//!
//! Each function appends the points that follow `from` (the start point is
//! never emitted), ending exactly on the curve's end point.

use std::f64::consts::PI;

use crate::consts::{EPSILON, FLATTEN_TOLERANCE, MAX_ARC_SEGMENTS, MAX_CURVE_SEGMENTS};
use crate::geometry::Point;

fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Segment count for a curve whose control polygon has length `len`.
fn segment_count(len: f64) -> usize {
    let n = (len / (8.0 * FLATTEN_TOLERANCE)).sqrt().ceil();
    if n.is_finite() {
        (n as usize).clamp(1, MAX_CURVE_SEGMENTS)
    } else {
        1
    }
}

pub(crate) fn quadratic(out: &mut Vec<Point>, from: Point, ctrl: Point, to: Point) {
    let n = segment_count(distance(from, ctrl) + distance(ctrl, to));
    for i in 1..=n {
        let t = i as f64 / n as f64;
        let mt = 1.0 - t;
        out.push(Point::new(
            mt * mt * from.x + 2.0 * mt * t * ctrl.x + t * t * to.x,
            mt * mt * from.y + 2.0 * mt * t * ctrl.y + t * t * to.y,
        ));
    }
}

pub(crate) fn cubic(out: &mut Vec<Point>, from: Point, c1: Point, c2: Point, to: Point) {
    let n = segment_count(distance(from, c1) + distance(c1, c2) + distance(c2, to));
    for i in 1..=n {
        let t = i as f64 / n as f64;
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        out.push(Point::new(
            a * from.x + b * c1.x + c * c2.x + d * to.x,
            a * from.y + b * c1.y + c * c2.y + d * to.y,
        ));
    }
}

/// Parameters of an SVG elliptical arc command, endpoint-parameterised.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ArcParams {
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in degrees.
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Flatten an endpoint-parameterised elliptical arc via the centre
/// parameterisation (SVG 1.1, appendix F.6.5), with out-of-range radii
/// scaled up as in F.6.6.
pub(crate) fn arc(out: &mut Vec<Point>, from: Point, params: ArcParams, to: Point) {
    if distance(from, to) < EPSILON {
        return;
    }
    let mut rx = params.rx.abs();
    let mut ry = params.ry.abs();
    if rx < EPSILON || ry < EPSILON {
        out.push(to);
        return;
    }

    let phi = params.rotation.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let dx2 = (from.x - to.x) / 2.0;
    let dy2 = (from.y - to.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let mut coef = if den > 0.0 { (num / den).max(0.0).sqrt() } else { 0.0 };
    if params.large_arc == params.sweep {
        coef = -coef;
    }
    let cxp = coef * (rx * y1p / ry);
    let cyp = coef * (-ry * x1p / rx);

    let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0;

    let theta1 = vector_angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry);
    let mut dtheta = vector_angle(
        (x1p - cxp) / rx,
        (y1p - cyp) / ry,
        (-x1p - cxp) / rx,
        (-y1p - cyp) / ry,
    );
    if !params.sweep && dtheta > 0.0 {
        dtheta -= 2.0 * PI;
    } else if params.sweep && dtheta < 0.0 {
        dtheta += 2.0 * PI;
    }

    let n = arc_segment_count(rx.max(ry), dtheta);
    for i in 1..n {
        let theta = theta1 + dtheta * (i as f64 / n as f64);
        let (sin_t, cos_t) = theta.sin_cos();
        out.push(Point::new(
            cx + rx * cos_t * cos_phi - ry * sin_t * sin_phi,
            cy + rx * cos_t * sin_phi + ry * sin_t * cos_phi,
        ));
    }
    out.push(to);
}

/// Segments needed so that no chord of a `sweep`-radian arc of radius `r`
/// strays more than [`FLATTEN_TOLERANCE`] from it: the sagitta
/// `r * (1 - cos(step / 2))` is bounded per step.
fn arc_segment_count(r: f64, sweep: f64) -> usize {
    let cos_half = (1.0 - FLATTEN_TOLERANCE / r).max(-1.0);
    let step = 2.0 * cos_half.acos();
    let n = (sweep.abs() / step).ceil();
    if n.is_finite() && step > 0.0 {
        (n as usize).clamp(1, MAX_ARC_SEGMENTS)
    } else {
        1
    }
}

fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    (ux * vy - uy * vx).atan2(ux * vx + uy * vy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_ends_on_end_point() {
        let mut out = Vec::new();
        quadratic(
            &mut out,
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        );
        assert!(out.len() > 1);
        assert_eq!(*out.last().unwrap(), Point::new(100.0, 0.0));
    }

    #[test]
    fn cubic_midpoint_matches_bezier() {
        let mut out = Vec::new();
        let from = Point::new(0.0, 0.0);
        let to = Point::new(20.0, 0.0);
        cubic(&mut out, from, Point::new(0.0, 20.0), Point::new(20.0, 20.0), to);
        let n = out.len();
        assert_eq!(n % 2, 0, "even segment count expected for midpoint check, got {n}");
        let mid = out[n / 2 - 1];
        assert!((mid.x - 10.0).abs() < 1e-9);
        assert!((mid.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn half_circle_arc_stays_on_radius() {
        let mut out = Vec::new();
        let params = ArcParams {
            rx: 50.0,
            ry: 50.0,
            rotation: 0.0,
            large_arc: false,
            sweep: true,
        };
        arc(&mut out, Point::new(0.0, 0.0), params, Point::new(100.0, 0.0));
        assert_eq!(*out.last().unwrap(), Point::new(100.0, 0.0));
        for p in &out {
            let r = (p.x - 50.0).hypot(p.y);
            assert!((r - 50.0).abs() < 1e-6, "point {p:?} off the circle");
        }
        // Positive sweep in a y-down space runs through negative y.
        assert!(out.iter().any(|p| p.y < -49.0));
    }

    #[test]
    fn large_circle_chords_stay_within_tolerance() {
        let centre = Point::new(1000.0, 1000.0);
        let radius = 1000.0;
        let params = ArcParams {
            rx: radius,
            ry: radius,
            rotation: 0.0,
            large_arc: true,
            sweep: false,
        };
        let start = Point::new(0.0, 1000.0);
        let mut out = vec![start];
        arc(&mut out, start, params, Point::new(2000.0, 1000.0));
        arc(&mut out, Point::new(2000.0, 1000.0), params, start);
        assert!(out.len() > 2 * MAX_CURVE_SEGMENTS);

        for pair in out.windows(2) {
            let mid = Point::new((pair[0].x + pair[1].x) / 2.0, (pair[0].y + pair[1].y) / 2.0);
            let r = distance(centre, mid);
            assert!(
                radius - r <= FLATTEN_TOLERANCE + 1e-9,
                "chord midpoint {mid:?} is {} inside the circle",
                radius - r
            );
        }
    }

    #[test]
    fn arc_segment_count_grows_with_radius() {
        assert_eq!(arc_segment_count(0.1, PI), 1);
        assert!(arc_segment_count(1000.0, PI) > arc_segment_count(100.0, PI));
        assert_eq!(arc_segment_count(1e12, 2.0 * PI), MAX_ARC_SEGMENTS);
        assert_eq!(arc_segment_count(50.0, 0.0), 1);
    }

    #[test]
    fn zero_radius_arc_is_a_line() {
        let mut out = Vec::new();
        let params = ArcParams {
            rx: 0.0,
            ry: 10.0,
            rotation: 0.0,
            large_arc: false,
            sweep: false,
        };
        arc(&mut out, Point::new(0.0, 0.0), params, Point::new(5.0, 5.0));
        assert_eq!(out, vec![Point::new(5.0, 5.0)]);
    }
}
