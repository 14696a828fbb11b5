use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use plotly::{Layout, Plot, Scatter};
use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Legend};
use crate::convex_hull::convex_hull;
use crate::error::ProcessError;
use crate::point::Point;
use crate::point_set::{write_points, PointSet};

pub mod point;
pub mod error;
pub mod convex_hull;
pub mod point_set;

/// Computes the convex hull of the point set stored in `input` and writes it to `output`.
/// A plot of the points and of the hull is written to `plot` when provided.
///
/// Point sets without a proper hull (no points, fewer than 3 points or all points on one line) are not an error:
/// an empty hull is written and returned.
pub fn process_point_file(input: &Path, output: &Path, plot: Option<&Path>) -> Result<Vec<Point>, ProcessError> {
    let point_set = PointSet::from_file(input).map_err(|source| ProcessError::Input {
        path: input.display().to_string(),
        source,
    })?;
    log::info!("Computing the convex hull of '{}' ({} points)", point_set.name, point_set.points.len());
    let vertices = hull_vertices(&point_set);
    write_point_file(output, &vertices)?;
    log::info!("Wrote {} hull vertices to '{}'", vertices.len(), output.display());

    if let Some(plot) = plot {
        draw_hull_plot(&point_set, &vertices, plot).map_err(|source| ProcessError::Output {
            path: plot.display().to_string(),
            source,
        })?;
        log::info!("Hull plot written to '{}'", plot.display());
    }
    Ok(vertices)
}

/// Hull vertices in counter-clockwise order starting from the pivot, empty when the set has no proper hull.
pub fn hull_vertices(point_set: &PointSet) -> Vec<Point> {
    match convex_hull(point_set.points.clone()) {
        Ok(hull) => hull.into_vec(),
        Err(err) => {
            log::warn!("No convex hull for '{}': {}", point_set.name, err);
            Vec::new()
        }
    }
}

/// Writes a random point set in the input format, see [`PointSet::random`].
pub fn generate_point_file(path: &Path, count: usize, bound: i32, seed: Option<u64>) -> Result<PointSet, ProcessError> {
    let point_set = PointSet::random(count, bound, seed);
    write_point_file(path, &point_set.points)?;
    log::info!("Wrote {} random points ('{}') to '{}'", count, point_set.name, path.display());
    Ok(point_set)
}

fn write_point_file(path: &Path, points: &[Point]) -> Result<(), ProcessError> {
    let output_error = |source| ProcessError::Output { path: path.display().to_string(), source };
    let file = File::create(path).map_err(output_error)?;
    write_points(&mut BufWriter::new(file), points).map_err(output_error)
}

/// Draws the input points and the closed hull polygon in a single HTML plot.
pub fn draw_hull_plot(point_set: &PointSet, hull: &[Point], path: &Path) -> std::io::Result<()> {
    let mut plot = Plot::new();
    plot.set_layout(Layout::new()
        .title(Title::new(&*format!("Convex hull of \"{}\"", point_set.name)))
        .x_axis(Axis::new().title(Title::new("x")))
        .y_axis(Axis::new().title(Title::new("y")))
        .legend(Legend::new()));

    let trace = Scatter::new(
        point_set.points.iter().map(|p| p.x).collect(),
        point_set.points.iter().map(|p| p.y).collect())
        .mode(Mode::Markers)
        .name(format!("Points ({})", point_set.points.len()));
    plot.add_trace(trace);

    // Repeat the pivot to close the polygon
    let closed_hull: Vec<_> = hull.iter().chain(hull.first()).collect();
    let trace = Scatter::new(
        closed_hull.iter().map(|p| p.x).collect(),
        closed_hull.iter().map(|p| p.y).collect())
        .mode(Mode::LinesMarkers)
        .name(format!("Hull ({} vertices)", hull.len()))
        .text_array(closed_hull.iter().map(|p| format!("({}, {})", p.x, p.y)).collect());
    plot.add_trace(trace);

    fs::write(path, plot.to_html())
}
