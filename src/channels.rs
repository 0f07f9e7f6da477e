//! Producer/consumer pipelines over crossbeam channels.
//!
//! A producer thread sends every value and then closes its end of the channel; a consumer thread
//! drains the channel until it is closed. Both threads are scoped and joined before returning.

use std::fmt::Display;
use std::io::Write;
use std::thread;

use tracing::{debug, trace};

use crate::errors::DrillsError;

/// Capacity of the channel used by [`buffered_pipe`].
pub const BUFFERED_CAPACITY: usize = 10;

pub const DEFAULT_NAME: &str = "Guest";

/// Send all `values` through a channel with the given capacity, and write each received value,
/// followed by a space, to `sink`.
///
/// A capacity of zero gives a rendezvous channel, where every send blocks until the consumer
/// takes the value. Returns the values in the order the consumer received them.
pub fn pipe<T, I, W>(values: I, capacity: usize, sink: &mut W) -> Result<Vec<T>, DrillsError>
where
    T: Display + Send,
    I: IntoIterator<Item=T> + Send,
    W: Write + Send,
{
    let (tx, rx) = crossbeam_channel::bounded::<T>(capacity);

    thread::scope(|scope| {
        let producer = scope.spawn(move || -> Result<(), DrillsError> {
            for value in values {
                debug!("value is {value}");
                tx.send(value)?;
            }

            // `tx` is dropped here, which closes the channel.
            Ok(())
        });

        let consumer = scope.spawn(move || -> Result<Vec<T>, DrillsError> {
            let mut received = Vec::new();
            for value in rx {
                trace!("received {value}");
                write!(sink, "{value} ")?;
                received.push(value);
            }

            Ok(received)
        });

        // A failing consumer makes the producer fail with a closed channel, so report the
        // consumer's error first.
        let received = consumer.join()
            .map_err(|_| DrillsError::WorkerPanicked)??;
        producer.join()
            .map_err(|_| DrillsError::WorkerPanicked)??;

        Ok(received)
    })
}

/// Send `0..limit` through a rendezvous channel.
pub fn unbuffered_pipe<W>(limit: i64, sink: &mut W) -> Result<Vec<i64>, DrillsError>
where
    W: Write + Send,
{
    pipe(0..limit, 0, sink)
}

/// Send `1..limit` through a channel holding up to [`BUFFERED_CAPACITY`] values, then write
/// `done` on its own line.
pub fn buffered_pipe<W>(limit: i64, sink: &mut W) -> Result<Vec<i64>, DrillsError>
where
    W: Write + Send,
{
    let received = pipe(1..limit, BUFFERED_CAPACITY, sink)?;
    writeln!(sink)?;
    writeln!(sink, "done")?;

    Ok(received)
}

pub fn greeting(name: &str) -> String {
    format!("Hello {name}")
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{buffered_pipe, greeting, pipe, unbuffered_pipe, DEFAULT_NAME};
    use crate::errors::DrillsError;

    #[test]
    fn test_unbuffered_pipe() {
        let mut out = Vec::new();
        let received = unbuffered_pipe(10, &mut out).unwrap();

        assert_eq!(received, (0..10).collect::<Vec<_>>());
        assert_eq!(String::from_utf8(out).unwrap(), "0 1 2 3 4 5 6 7 8 9 ");
    }

    #[test]
    fn test_buffered_pipe() {
        let mut out = Vec::new();
        let received = buffered_pipe(100, &mut out).unwrap();

        assert_eq!(received, (1..100).collect::<Vec<_>>());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("1 2 3 "));
        assert!(text.ends_with("98 99 \ndone\n"));
    }

    #[test]
    fn test_pipe_capacities() {
        for capacity in [0, 1, 3, 64] {
            let mut out = Vec::new();
            let words = vec!["a", "b", "c"];
            let received = pipe(words.clone(), capacity, &mut out).unwrap();

            assert_eq!(received, words);
            assert_eq!(out, b"a b c ");
        }

        let mut out = Vec::new();
        assert!(pipe(Vec::<i64>::new(), 0, &mut out).unwrap().is_empty());
        assert!(out.is_empty());
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_pipe_sink_error() {
        let result = pipe(0..1000, 0, &mut FailingWriter);
        assert!(matches!(result, Err(DrillsError::IOError(_))));
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(DEFAULT_NAME), "Hello Guest");
        assert_eq!(greeting("Ada"), "Hello Ada");
    }
}
