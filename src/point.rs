use std::cmp::Ordering;
use std::fmt;

/// A point with exact integer coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance, exact for every pair of `i32` points.
    pub fn squared_distance(&self, other: &Point) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from(p: (i32, i32)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Rotational sense of three ordered points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    /// Clockwise.
    RightTurn,
    /// Counter-clockwise.
    LeftTurn,
}

/// Direction of the turn a -> b -> c, from the sign of the z coordinate of (b - a) x (c - a).
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let cross = (b.x as i128 - a.x as i128) * (c.y as i128 - a.y as i128)
        - (b.y as i128 - a.y as i128) * (c.x as i128 - a.x as i128);
    match cross.cmp(&0) {
        Ordering::Equal => Orientation::Collinear,
        Ordering::Greater => Orientation::LeftTurn,
        Ordering::Less => Orientation::RightTurn,
    }
}

#[cfg(test)]
mod tests {
    use crate::point::{orientation, Orientation, Point};

    #[test]
    fn turns() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        assert_eq!(orientation(a, b, Point::new(4, 4)), Orientation::LeftTurn);
        assert_eq!(orientation(a, b, Point::new(4, -4)), Orientation::RightTurn);
        assert_eq!(orientation(a, b, Point::new(9, 0)), Orientation::Collinear);
        assert_eq!(orientation(a, b, Point::new(-3, 0)), Orientation::Collinear);
    }

    #[test]
    fn reversing_the_triple_flips_the_turn() {
        let (a, b, c) = (Point::new(1, 2), Point::new(5, -3), Point::new(-2, 7));
        let forward = orientation(a, b, c);
        let backward = orientation(c, b, a);
        assert_ne!(forward, Orientation::Collinear);
        assert_ne!(forward, backward);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MIN);
        let c = Point::new(i32::MAX, i32::MAX);
        assert_eq!(orientation(a, b, c), Orientation::LeftTurn);
        assert_eq!(orientation(a, c, b), Orientation::RightTurn);
        assert_eq!(a.squared_distance(&b), (u32::MAX as i128) * (u32::MAX as i128));
    }

    #[test]
    fn point_disp() {
        assert_eq!(format!("{}", Point::from((-3, 12))), "-3 12");
    }
}
