use thiserror::Error;

/// Outcomes of a hull computation that do not yield a proper polygon.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullError {
    #[error("no points were supplied, the pivot is undefined")]
    EmptyInput,
    /// Fewer than three points remain once the pivot is chosen and collinear runs are collapsed.
    #[error("only {survivors} point(s) survive collinear collapsing, at least 3 are needed for a hull")]
    InsufficientHull { survivors: usize },
}

/// Malformed point source.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read point data: {0}")]
    Io(#[from] std::io::Error),
    #[error("the point count is missing")]
    MissingCount,
    #[error("token #{position} (\"{token}\") is not a valid integer")]
    InvalidToken { position: usize, token: String },
    #[error("{declared} point(s) declared but {found} coordinate(s) are available")]
    CountMismatch { declared: usize, found: usize },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("invalid input file \"{path}\": {source}")]
    Input { path: String, source: InputError },
    #[error("could not write \"{path}\": {source}")]
    Output { path: String, source: std::io::Error },
}
