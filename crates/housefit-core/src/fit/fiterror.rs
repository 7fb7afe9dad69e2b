use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum FitError {
    LengthMismatch { len_x: usize, len_y: usize },
    Empty,
    DegenerateX, // no variance in x
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::LengthMismatch { len_x, len_y } => {
                write!(f, "x and y have different lengths: {len_x} vs {len_y}")
            },
            FitError::Empty => {
                write!(f, "cannot fit an empty dataset")
            },
            FitError::DegenerateX => {
                write!(f, "degenerate x: no variance in x")
            },
        }
    }
}

impl std::error::Error for FitError {}

pub type FitOutcome<T> = Result<T, FitError>;
