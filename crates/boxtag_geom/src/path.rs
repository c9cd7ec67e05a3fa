//! Generic outline path.
//!
//! A `Path` is a list of drawing commands. The box only ever uses straight
//! segments, but curves are kept so the path point model stays generic.

use serde::{Deserialize, Serialize};

use crate::Point;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Straight segment to the point.
    LineTo(Point),
    /// Quadratic curve: one control point, then the endpoint.
    QuadTo { ctrl: Point, to: Point },
    /// Cubic curve: two control points, then the endpoint.
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Close the current subpath. Carries no points.
    Close,
}

impl PathCommand {
    /// Points carried by this command, controls first, endpoint last.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (buf, len) = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => ([p, Point::ZERO, Point::ZERO], 1),
            PathCommand::QuadTo { ctrl, to } => ([ctrl, to, Point::ZERO], 2),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => ([ctrl1, ctrl2, to], 3),
            PathCommand::Close => ([Point::ZERO; 3], 0),
        };
        buf.into_iter().take(len)
    }

    fn map(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// An ordered list of drawing commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Point, to: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Rigid translation by `(dx, dy)`. Returns a new path.
    pub fn translated(&self, dx: f32, dy: f32) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.map(|p| p.offset(dx, dy)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_points_order() {
        let ctrl1 = Point::new(1.0, 1.0);
        let ctrl2 = Point::new(2.0, 2.0);
        let to = Point::new(3.0, 3.0);

        let cubic: Vec<_> = PathCommand::CubicTo { ctrl1, ctrl2, to }.points().collect();
        assert_eq!(cubic, vec![ctrl1, ctrl2, to]);

        let quad: Vec<_> = PathCommand::QuadTo { ctrl: ctrl1, to }.points().collect();
        assert_eq!(quad, vec![ctrl1, to]);

        assert_eq!(PathCommand::Close.points().count(), 0);
    }

    #[test]
    fn test_translated_moves_every_point() {
        let path = Path::new()
            .move_to(Point::new(0.0, 0.0))
            .quad_to(Point::new(5.0, 5.0), Point::new(10.0, 0.0))
            .close();

        let moved = path.translated(2.0, -1.0);
        let points: Vec<_> = moved.commands().iter().flat_map(|c| c.points()).collect();
        assert_eq!(
            points,
            vec![
                Point::new(2.0, -1.0),
                Point::new(7.0, 4.0),
                Point::new(12.0, -1.0)
            ]
        );
        assert_eq!(moved.commands().last(), Some(&PathCommand::Close));
    }
}
