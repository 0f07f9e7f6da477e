use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum DrillsError {
    /// An interval whose start lies after its end, formatted as `[start end]`
    MalformedInterval(String),

    /// The calculator was asked to divide by zero
    DivisionByZero,

    /// The calculator does not know the given operator
    UnknownOperator(String),

    /// A channel was closed before all values were delivered
    ChannelClosed,

    /// A worker thread panicked
    WorkerPanicked,

    /// The sleep duration of the given (1-based) task does not fit in a `Duration`
    DurationOverflow(u32),

    /// Error variant when interval data could not be parsed or written as JSON
    JsonError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),
}

impl Error for DrillsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::JsonError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for DrillsError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for DrillsError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonError {
            source: value
        }
    }
}

impl<T> From<crossbeam_channel::SendError<T>> for DrillsError {
    fn from(_: crossbeam_channel::SendError<T>) -> Self {
        Self::ChannelClosed
    }
}

impl Display for DrillsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::MalformedInterval(ref ival) =>
                write!(f, "Interval {ival} starts after it ends!"),
            Self::DivisionByZero =>
                write!(f, "error: num2 is 0"),
            Self::UnknownOperator(ref op) =>
                write!(f, "Unknown operator '{op}', expected one of + - * /"),
            Self::ChannelClosed =>
                write!(f, "The channel was closed before all values were sent!"),
            Self::WorkerPanicked =>
                write!(f, "A worker thread panicked!"),
            Self::DurationOverflow(task) =>
                write!(f, "The sleep duration of task {task} is too large!"),
            Self::JsonError { source: _ } =>
                write!(f, "Could not read or write interval JSON!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}
