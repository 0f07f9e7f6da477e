//! Small, self-contained teaching drills.
//!
//! - [`intervals`]: merging closed integer intervals into a minimal disjoint cover.
//! - [`calculator`]: a two-operand arithmetic calculator.
//! - [`channels`]: producer/consumer pipelines over bounded and rendezvous channels.
//! - [`tasks`]: worker threads reporting back to the thread that spawned them.
//! - [`shapes`]: a `Shape` trait with rectangles and circles, and an employee record.
//!
//! The `drills` binary exposes each drill as a subcommand.

pub mod errors;
pub mod io;
pub mod intervals;
pub mod calculator;
pub mod channels;
pub mod tasks;
pub mod shapes;
