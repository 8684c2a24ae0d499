use std::error::Error;
use std::fmt;

/// Invalid-argument conditions rejected before any simulation starts.
///
/// The engine never clamps or corrects bad input; it refuses up front and
/// leaves the batch untouched. An empty batch is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// Round Robin was given a quantum of zero, which would never make
    /// progress.
    InvalidQuantum(usize),
    /// A process was supplied with a zero burst; burst must be positive.
    ZeroBurst { name: String },
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedError::InvalidQuantum(q) => {
                write!(f, "round robin quantum must be positive, got {}", q)
            }
            SchedError::ZeroBurst { name } => {
                write!(f, "process {} has zero burst time", name)
            }
        }
    }
}

impl Error for SchedError {}
