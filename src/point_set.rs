use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::error::InputError;
use crate::point::Point;

/// Raw input of a hull computation: a named sequence of points, possibly with duplicates.
///
/// The text format is a point count followed by that many `x y` integer pairs, all separated by whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    pub name: String,
    pub points: Vec<Point>,
}

impl PointSet {
    pub fn new(name: String, points: Vec<Point>) -> Self {
        Self { name, points }
    }

    pub fn from_reader<R: BufRead>(name: String, reader: R) -> Result<PointSet, InputError> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(String::from));
        }

        let (count_token, coordinate_tokens) = tokens.split_first().ok_or(InputError::MissingCount)?;
        let declared: usize = count_token.parse().map_err(|_| InputError::InvalidToken {
            position: 1,
            token: count_token.clone(),
        })?;
        if coordinate_tokens.len() != declared.saturating_mul(2) {
            return Err(InputError::CountMismatch { declared, found: coordinate_tokens.len() });
        }

        let coordinates = coordinate_tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<i32>().map_err(|_| InputError::InvalidToken {
                    position: index + 2,
                    token: token.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let points = coordinates
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Ok(PointSet::new(name, points))
    }

    pub fn from_file(path: &Path) -> Result<PointSet, InputError> {
        let file = File::open(path)?;
        PointSet::from_reader(path.display().to_string(), BufReader::new(file))
    }

    /// `count` points with coordinates drawn uniformly from `-bound..=bound`.
    /// A seed makes the set reproducible.
    pub fn random(count: usize, bound: i32, seed: Option<u64>) -> PointSet {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bound = bound.saturating_abs();
        let points = (0..count)
            .map(|_| Point::new(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound)))
            .collect();
        let name = match seed {
            Some(seed) => format!("random-{}-{}", count, seed),
            None => format!("random-{}", count),
        };
        PointSet::new(name, points)
    }
}

/// Writes the point count on the first line, then one `x y` pair per line.
pub fn write_points<W: Write>(writer: &mut W, points: &[Point]) -> std::io::Result<()> {
    writeln!(writer, "{}", points.len())?;
    for p in points {
        writeln!(writer, "{}", p)?;
    }
    writer.flush()
}
