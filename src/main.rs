use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use graham_hull::{generate_point_file, process_point_file};

/// Parse a strictly positive coordinate bound
fn parse_bound(s: &str) -> Result<i32, Box<dyn Error + Send + Sync + 'static>> {
    let bound = s.parse::<i32>().map_err(|_| format!("invalid bound: {s} (cannot parse)"))?;
    if bound <= 0 {
        return Err(format!("invalid bound: {s} (must be greater than 0)").into());
    }
    Ok(bound)
}

/// Computes the convex hull of a set of integer points with the Graham scan.
///
/// The input file holds the number of points followed by one `x y` pair per point.
/// The output file receives the number of hull vertices followed by the vertices in counter-clockwise order, starting
/// from the lowest (then leftmost) point. Sets without a proper hull produce an empty hull (`0`).
///
/// Set `RUST_LOG=debug` to follow the computation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read the points from (or to write them to, when generating).
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// File to write the hull vertices to.
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Also draw the points and their hull in an HTML plot at this path.
    #[arg(short, long)]
    plot: Option<PathBuf>,

    /// Write this many random points to the input file instead of computing a hull.
    #[arg(short, long)]
    generate: Option<usize>,

    /// Generated coordinates are drawn from -BOUND..=BOUND.
    #[arg(long, default_value_t = 100, value_parser = parse_bound)]
    bound: i32,

    /// Seed for reproducible point generation.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    let result = match args.generate {
        Some(count) => generate_point_file(&args.input, count, args.bound, args.seed).map(|_| ()),
        None => process_point_file(&args.input, &args.output, args.plot.as_deref()).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
