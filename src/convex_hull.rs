//! Graham scan over integer points.
//!
//! The pipeline is split in pure stages so each one can be checked on its own:
//! pivot selection, angular sort around the pivot, collapsing of collinear runs and the stack scan.
//! Every geometric decision goes through [`orientation`].
use std::cmp::Ordering;
use crate::error::HullError;
use crate::point::{orientation, Orientation, Point};

/// Hull vertices in counter-clockwise order, pivot first. Always holds at least 3 points and every
/// consecutive triple (with wraparound) is a strict left turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HullBoundary {
    vertices: Vec<Point>,
}

impl HullBoundary {
    pub fn pivot(&self) -> Point {
        self.vertices[0]
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, a boundary holds at least 3 vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `p` lies inside the hull or on its boundary.
    pub fn contains(&self, p: Point) -> bool {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .all(|(a, b)| orientation(*a, *b, p) != Orientation::RightTurn)
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }
}

/// The point with the lowest y coordinate, ties broken by the lowest x. It is always a hull vertex.
pub fn lowest_point(points: &[Point]) -> Option<Point> {
    points.iter().copied().min_by_key(|p| (p.y, p.x))
}

/// Orders `points` counter-clockwise around `pivot`, the nearest point first along a shared ray.
///
/// `pivot` must be the [`lowest_point`] of the set. Copies of the pivot are dropped: every remaining
/// point then lies in the half-open upper half-plane of the pivot, so two points are collinear with
/// it only when they share the same ray and the comparator stays a strict weak ordering.
pub fn sort_by_polar_angle(pivot: Point, points: Vec<Point>) -> Vec<Point> {
    let mut points: Vec<Point> = points.into_iter().filter(|p| *p != pivot).collect();
    points.sort_by(|p1, p2| match orientation(pivot, *p1, *p2) {
        Orientation::LeftTurn => Ordering::Less,
        Orientation::RightTurn => Ordering::Greater,
        Orientation::Collinear => pivot.squared_distance(p1).cmp(&pivot.squared_distance(p2)),
    });
    points
}

/// Keeps only the last, i.e. farthest, point of each maximal run of points sharing a ray from the
/// pivot. Expects the output of [`sort_by_polar_angle`].
pub fn collapse_collinear_runs(pivot: Point, sorted: &[Point]) -> Vec<Point> {
    sorted
        .chunk_by(|p1, p2| orientation(pivot, *p1, *p2) == Orientation::Collinear)
        .filter_map(|run| run.last().copied())
        .collect()
}

/// Builds the hull from the pivot and the collapsed candidates (pivot excluded, angularly sorted).
///
/// The pivot and the first two candidates are pushed unconditionally, then every following candidate
/// pops the stack until it makes a left turn with the two entries below it.
pub fn stack_scan(pivot: Point, candidates: &[Point]) -> Result<HullBoundary, HullError> {
    let survivors = candidates.len() + 1;
    if survivors < 3 {
        return Err(HullError::InsufficientHull { survivors });
    }
    let mut stack = Vec::with_capacity(survivors);
    stack.extend_from_slice(&[pivot, candidates[0], candidates[1]]);
    for p in candidates[2..].iter().copied() {
        // The bottom two entries (pivot and the first ray) are hull vertices and never popped
        while let [_, .., second, top] = stack[..] {
            if orientation(second, top, p) == Orientation::LeftTurn {
                break;
            }
            log::trace!("Popping ({}) before pushing ({})", top, p);
            stack.pop();
        }
        stack.push(p);
    }
    Ok(HullBoundary { vertices: stack })
}

/// One hull computation. Each solver owns its pivot and point buffer.
#[derive(Debug)]
pub struct ConvexHullSolver {
    pivot: Point,
    points: Vec<Point>,
}

impl ConvexHullSolver {
    pub fn new(points: Vec<Point>) -> Result<ConvexHullSolver, HullError> {
        let pivot = lowest_point(&points).ok_or(HullError::EmptyInput)?;
        Ok(ConvexHullSolver { pivot, points })
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn solve(self) -> Result<HullBoundary, HullError> {
        let input_size = self.points.len();
        log::debug!("Pivot ({}) selected among {} points", self.pivot, input_size);
        let sorted = sort_by_polar_angle(self.pivot, self.points);
        let candidates = collapse_collinear_runs(self.pivot, &sorted);
        log::debug!(
            "{} points left after dropping pivot copies, {} after collapsing collinear runs",
            sorted.len(),
            candidates.len());
        let hull = stack_scan(self.pivot, &candidates)?;
        log::debug!("Hull has {} vertices out of {} input points", hull.len(), input_size);
        Ok(hull)
    }
}

pub fn convex_hull(points: Vec<Point>) -> Result<HullBoundary, HullError> {
    ConvexHullSolver::new(points)?.solve()
}
