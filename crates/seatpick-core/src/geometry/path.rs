use std::fmt;

use serde::{Deserialize, Serialize};
use svg::node::element::path::{Command, Data, Position};
use thiserror::Error;

use super::flatten::{self, ArcParams};
use super::{BoundingBox, Point};

/// Rule deciding which regions of a self-intersecting or multi-contour
/// outline count as inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRule {
    /// Inside when the winding number is non-zero.
    #[default]
    NonZero,
    /// Inside when a ray from the point crosses an odd number of edges.
    EvenOdd,
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZero => write!(f, "Non-zero"),
            Self::EvenOdd => write!(f, "Even-odd"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("path data syntax: {0}")]
    Syntax(String),

    #[error("path data must start with a moveto command")]
    MissingMoveTo,

    #[error("command '{command}' takes multiples of {arity} numbers, got {count}")]
    Arity {
        command: char,
        arity: usize,
        count: usize,
    },

    #[error("path data contains a non-finite coordinate")]
    NonFinite,
}

/// A section outline: SVG path data flattened into closed polygons.
///
/// Each contour is implicitly closed for containment, whether or not the
/// source path ended it with `Z`.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    contours: Vec<Vec<Point>>,
    bounds: Option<BoundingBox>,
}

impl Outline {
    /// Parse SVG path data (`M L H V C S Q T A Z`, absolute and relative).
    pub fn parse(d: &str) -> Result<Self, PathError> {
        let data = Data::parse(d).map_err(|e| PathError::Syntax(e.to_string()))?;
        let mut builder = OutlineBuilder::default();
        for (i, command) in data.iter().enumerate() {
            if i == 0 && !matches!(command, Command::Move(..)) {
                return Err(PathError::MissingMoveTo);
            }
            builder.apply(command)?;
        }
        Ok(builder.finish())
    }

    /// Build an outline directly from polygon contours.
    pub fn from_polygons(contours: Vec<Vec<Point>>) -> Self {
        let contours: Vec<_> = contours.into_iter().filter(|c| !c.is_empty()).collect();
        let bounds = BoundingBox::from_points(contours.iter().flatten().copied());
        Self { contours, bounds }
    }

    pub fn contours(&self) -> &[Vec<Point>] {
        &self.contours
    }

    /// Bounds of the flattened geometry, `None` for an empty path.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Exact point-in-path test against the flattened contours.
    pub fn contains(&self, p: Point, rule: FillRule) -> bool {
        match self.bounds {
            Some(b) if b.contains(p) => {}
            _ => return false,
        }
        let winding: i32 = self.contours.iter().map(|c| winding_number(c, p)).sum();
        match rule {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

/// Winding number of a closed polygon around `p`.
fn winding_number(contour: &[Point], p: Point) -> i32 {
    let n = contour.len();
    if n < 3 {
        return 0;
    }
    let mut wn = 0;
    for i in 0..n {
        let a = contour[i];
        let b = contour[(i + 1) % n];
        let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Control point remembered for the smooth curve shorthands (`S`, `T`).
#[derive(Clone, Copy)]
enum LastControl {
    None,
    Cubic(Point),
    Quadratic(Point),
}

struct OutlineBuilder {
    contours: Vec<Vec<Point>>,
    current: Vec<Point>,
    pen: Point,
    start: Point,
    last_control: LastControl,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self {
            contours: Vec::new(),
            current: Vec::new(),
            pen: Point::default(),
            start: Point::default(),
            last_control: LastControl::None,
        }
    }
}

impl OutlineBuilder {
    fn apply(&mut self, command: &Command) -> Result<(), PathError> {
        match command {
            Command::Move(pos, params) => {
                let values = numbers('M', params, 2)?;
                for (i, pair) in values.chunks_exact(2).enumerate() {
                    let to = self.resolve(pos, pair[0], pair[1]);
                    if i == 0 {
                        self.move_to(to);
                    } else {
                        self.line_to(to);
                    }
                }
                self.last_control = LastControl::None;
            }
            Command::Line(pos, params) => {
                for pair in numbers('L', params, 2)?.chunks_exact(2) {
                    let to = self.resolve(pos, pair[0], pair[1]);
                    self.line_to(to);
                }
                self.last_control = LastControl::None;
            }
            Command::HorizontalLine(pos, params) => {
                for &x in &numbers('H', params, 1)? {
                    let x = match pos {
                        Position::Absolute => x,
                        Position::Relative => self.pen.x + x,
                    };
                    self.line_to(Point::new(x, self.pen.y));
                }
                self.last_control = LastControl::None;
            }
            Command::VerticalLine(pos, params) => {
                for &y in &numbers('V', params, 1)? {
                    let y = match pos {
                        Position::Absolute => y,
                        Position::Relative => self.pen.y + y,
                    };
                    self.line_to(Point::new(self.pen.x, y));
                }
                self.last_control = LastControl::None;
            }
            Command::CubicCurve(pos, params) => {
                for v in numbers('C', params, 6)?.chunks_exact(6) {
                    let c1 = self.resolve(pos, v[0], v[1]);
                    let c2 = self.resolve(pos, v[2], v[3]);
                    let to = self.resolve(pos, v[4], v[5]);
                    self.cubic_to(c1, c2, to);
                }
            }
            Command::SmoothCubicCurve(pos, params) => {
                for v in numbers('S', params, 4)?.chunks_exact(4) {
                    let c1 = match self.last_control {
                        LastControl::Cubic(c) => reflect(c, self.pen),
                        _ => self.pen,
                    };
                    let c2 = self.resolve(pos, v[0], v[1]);
                    let to = self.resolve(pos, v[2], v[3]);
                    self.cubic_to(c1, c2, to);
                }
            }
            Command::QuadraticCurve(pos, params) => {
                for v in numbers('Q', params, 4)?.chunks_exact(4) {
                    let ctrl = self.resolve(pos, v[0], v[1]);
                    let to = self.resolve(pos, v[2], v[3]);
                    self.quadratic_to(ctrl, to);
                }
            }
            Command::SmoothQuadraticCurve(pos, params) => {
                for v in numbers('T', params, 2)?.chunks_exact(2) {
                    let ctrl = match self.last_control {
                        LastControl::Quadratic(c) => reflect(c, self.pen),
                        _ => self.pen,
                    };
                    let to = self.resolve(pos, v[0], v[1]);
                    self.quadratic_to(ctrl, to);
                }
            }
            Command::EllipticalArc(pos, params) => {
                for v in numbers('A', params, 7)?.chunks_exact(7) {
                    let arc = ArcParams {
                        rx: v[0],
                        ry: v[1],
                        rotation: v[2],
                        large_arc: v[3] != 0.0,
                        sweep: v[4] != 0.0,
                    };
                    let to = self.resolve(pos, v[5], v[6]);
                    let from = self.begin_segment();
                    flatten::arc(&mut self.current, from, arc, to);
                    self.pen = to;
                }
                self.last_control = LastControl::None;
            }
            Command::Close => {
                self.close_contour();
                self.pen = self.start;
                self.last_control = LastControl::None;
            }
        }
        Ok(())
    }

    fn resolve(&self, pos: &Position, x: f64, y: f64) -> Point {
        match pos {
            Position::Absolute => Point::new(x, y),
            Position::Relative => Point::new(self.pen.x + x, self.pen.y + y),
        }
    }

    fn move_to(&mut self, to: Point) {
        self.close_contour();
        self.current.push(to);
        self.pen = to;
        self.start = to;
    }

    /// Ensure an open contour exists, starting one at the pen after a `Z`.
    fn begin_segment(&mut self) -> Point {
        if self.current.is_empty() {
            self.current.push(self.pen);
            self.start = self.pen;
        }
        self.pen
    }

    fn line_to(&mut self, to: Point) {
        self.begin_segment();
        self.current.push(to);
        self.pen = to;
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        let from = self.begin_segment();
        flatten::cubic(&mut self.current, from, c1, c2, to);
        self.pen = to;
        self.last_control = LastControl::Cubic(c2);
    }

    fn quadratic_to(&mut self, ctrl: Point, to: Point) {
        let from = self.begin_segment();
        flatten::quadratic(&mut self.current, from, ctrl, to);
        self.pen = to;
        self.last_control = LastControl::Quadratic(ctrl);
    }

    fn close_contour(&mut self) {
        if !self.current.is_empty() {
            self.contours.push(std::mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> Outline {
        self.close_contour();
        Outline::from_polygons(self.contours)
    }
}

fn reflect(ctrl: Point, about: Point) -> Point {
    Point::new(2.0 * about.x - ctrl.x, 2.0 * about.y - ctrl.y)
}

/// Widen a command's parameters to f64, checking they come in whole groups.
fn numbers(command: char, params: &[f32], arity: usize) -> Result<Vec<f64>, PathError> {
    if params.is_empty() || params.len() % arity != 0 {
        return Err(PathError::Arity {
            command,
            arity,
            count: params.len(),
        });
    }
    if params.iter().any(|v| !v.is_finite()) {
        return Err(PathError::NonFinite);
    }
    Ok(params.iter().map(|&v| f64::from(v)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_commands_follow_the_pen() {
        let outline = Outline::parse("m 10 10 h 20 v 20 h -20 z").unwrap();
        assert_eq!(
            outline.contours()[0],
            vec![
                Point::new(10.0, 10.0),
                Point::new(30.0, 10.0),
                Point::new(30.0, 30.0),
                Point::new(10.0, 30.0),
            ]
        );
    }

    #[test]
    fn implicit_lineto_after_moveto() {
        let outline = Outline::parse("M 0 0 10 0 10 10").unwrap();
        assert_eq!(outline.contours()[0].len(), 3);
    }

    #[test]
    fn drawing_after_close_restarts_at_subpath_start() {
        let outline = Outline::parse("M 0 0 L 10 0 L 10 10 Z l 0 -5 l -5 0").unwrap();
        assert_eq!(outline.contours().len(), 2);
        assert_eq!(outline.contours()[1][0], Point::new(0.0, 0.0));
        assert_eq!(outline.contours()[1][1], Point::new(0.0, -5.0));
    }

    #[test]
    fn winding_counts_direction() {
        let cw = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let mut ccw = cw;
        ccw.reverse();
        let p = Point::new(5.0, 5.0);
        assert_eq!(winding_number(&cw, p).abs(), 1);
        assert_eq!(winding_number(&cw, p), -winding_number(&ccw, p));
        assert_eq!(winding_number(&cw, Point::new(15.0, 5.0)), 0);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        assert!(Outline::parse("M 0 0 L 10").is_err());
        assert!(Outline::parse("M 0 0 C 1 2 3 4").is_err());
    }

    #[test]
    fn leading_lineto_is_rejected() {
        assert_eq!(Outline::parse("L 10 10 Z"), Err(PathError::MissingMoveTo));
    }
}
