use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::DrillsError;
use crate::intervals::Interval;

/// Read a JSON array of `[start, end]` pairs.
pub fn load_intervals<T>(reader: impl Read) -> Result<Vec<Interval<T>>, DrillsError>
where
    T: DeserializeOwned,
{
    let intervals: Vec<Interval<T>> = serde_json::from_reader(reader)?;

    Ok(intervals)
}

pub fn parse_intervals<T>(json: &str) -> Result<Vec<Interval<T>>, DrillsError>
where
    T: DeserializeOwned,
{
    load_intervals(json.as_bytes())
}

/// Write intervals as a single line JSON array of `[start, end]` pairs.
pub fn save_intervals<T>(intervals: &[Interval<T>], mut out: impl Write) -> Result<(), DrillsError>
where
    T: Copy + Serialize,
{
    serde_json::to_writer(&mut out, intervals)?;
    writeln!(out)?;

    Ok(())
}
