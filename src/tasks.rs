//! Independent worker threads reporting back to the spawning thread.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::errors::DrillsError;

fn join_all<T>(handles: Vec<thread::ScopedJoinHandle<'_, Result<T, DrillsError>>>) -> Result<Vec<T>, DrillsError> {
    handles.into_iter()
        .map(|handle| handle.join().map_err(|_| DrillsError::WorkerPanicked)?)
        .collect()
}

/// Run two workers over `0..limit`, one reporting the even values and one the odd values.
///
/// Every report is written to `sink` as `value is {i}`. The interleaving between the two workers
/// is up to the scheduler, but each worker reports its own values in increasing order. Returns
/// the values in the order they were written.
pub fn parity_workers<W: Write>(limit: u32, sink: &mut W) -> Result<Vec<u32>, DrillsError> {
    let (tx, rx) = crossbeam_channel::unbounded();

    thread::scope(|scope| {
        let handles: Vec<_> = [0, 1].into_iter()
            .map(|parity| {
                let tx = tx.clone();
                scope.spawn(move || -> Result<(), DrillsError> {
                    for i in (0..limit).filter(|i| i % 2 == parity) {
                        tx.send(i)?;
                    }

                    Ok(())
                })
            })
            .collect();

        // Only the workers hold senders now, so the loop below ends once both are done.
        drop(tx);

        let mut reported = Vec::new();
        for i in rx {
            writeln!(sink, "value is {i}")?;
            reported.push(i);
        }

        join_all(handles)?;

        Ok(reported)
    })
}

/// Spawn `count` tasks, where task `id` sleeps for `(id + 1) * unit` before reporting
/// `task is finished {id + 1}` to `sink`. Waits for all tasks and returns the 1-based task numbers
/// in completion order.
///
/// Fails with [`DrillsError::DurationOverflow`] before spawning anything if a sleep duration
/// does not fit in a `Duration`.
pub fn staggered_tasks<W: Write>(count: u32, unit: Duration, sink: &mut W) -> Result<Vec<u32>, DrillsError> {
    let delays = (1..=count)
        .map(|task| unit.checked_mul(task).ok_or(DrillsError::DurationOverflow(task)))
        .collect::<Result<Vec<_>, _>>()?;

    let (tx, rx) = crossbeam_channel::unbounded();

    thread::scope(|scope| {
        let handles: Vec<_> = delays.into_iter()
            .zip(1..)
            .map(|(delay, task)| {
                let tx = tx.clone();
                scope.spawn(move || -> Result<(), DrillsError> {
                    thread::sleep(delay);
                    debug!(task, "finished sleeping");

                    tx.send(task)?;

                    Ok(())
                })
            })
            .collect();

        drop(tx);

        let mut finished = Vec::with_capacity(count as usize);
        for task in rx {
            writeln!(sink, "task is finished {task}")?;
            finished.push(task);
        }

        join_all(handles)?;

        Ok(finished)
    })
}
