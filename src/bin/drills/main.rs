use std::fs;
use std::fs::File;
use std::io::{self, stdin, stdout, BufReader, IsTerminal, Read, Write};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use drills::calculator::{evaluate, Operator};
use drills::channels::{buffered_pipe, greeting, unbuffered_pipe};
use drills::intervals::{validate, Interval, MergedIntervals};
use drills::io::{load_intervals, parse_intervals, save_intervals};
use drills::shapes::{demo_shapes, Shape};
use drills::tasks::{parity_workers, staggered_tasks};

mod cli;

use cli::{CalcArgs, ChannelMode, ChannelsArgs, CliArgs, CliSubcommand, GreetArgs, MergeArgs, OutputType, TaskMode, TasksArgs};

/// Install a stderr logger. `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default()
        .with(stderr_log)
        .init();
}

fn calc_subcommand(args: &CalcArgs) -> Result<()> {
    let op: Operator = args.op.parse()
        .with_context(|| format!("Could not parse operator '{}'", args.op))?;

    let calculation = evaluate(args.num1, op, args.num2)?;
    println!("{calculation}");

    Ok(())
}

/// Read the intervals to merge from the command line argument, the input file, or `stdin_reader`,
/// in that order.
fn read_merge_input(args: &MergeArgs, stdin_reader: impl Read) -> Result<Vec<Interval<i64>>> {
    let intervals = if let Some(json) = &args.intervals {
        parse_intervals(json)
            .with_context(|| "Could not parse intervals given on the command line.")?
    } else if let Some(path) = &args.input {
        let file_in = File::open(path)
            .with_context(|| format!("Could not open {:?}", path))?;
        load_intervals(BufReader::new(file_in))
            .with_context(|| format!("Could not read intervals from {:?}", path))?
    } else {
        load_intervals(stdin_reader)
            .with_context(|| "Could not read intervals from standard input.")?
    };

    Ok(intervals)
}

fn run_merge(args: &MergeArgs, stdin_reader: impl Read, mut writer: impl Write) -> Result<()> {
    let intervals = read_merge_input(args, stdin_reader)?;

    if args.strict {
        validate(&intervals)?;
    }

    let merged = MergedIntervals::from_unsorted(&intervals);
    info!(num_input = intervals.len(), num_merged = merged.len(), coverage = %merged.coverage(), "merged intervals");

    match args.output_type {
        OutputType::Text => writeln!(writer, "{merged}")?,
        OutputType::Json => save_intervals(merged.as_slice(), &mut writer)?,
    }

    Ok(())
}

fn merge_subcommand(args: &MergeArgs) -> Result<()> {
    if args.intervals.is_none() && args.input.is_none() && stdin().is_terminal() {
        eprintln!("Reading intervals from standard input...");
    }

    // Determine where to write the intervals to
    let writer: Box<dyn Write> = if let Some(path) = &args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create {:?}", path))?;
        Box::new(file)
    } else {
        Box::new(stdout())
    };

    run_merge(args, stdin().lock(), writer)
}

fn channels_subcommand(args: &ChannelsArgs) -> Result<()> {
    let mut out = stdout();

    let received = match args.mode {
        ChannelMode::Unbuffered => {
            let received = unbuffered_pipe(args.count.unwrap_or(10), &mut out)?;
            writeln!(out)?;
            received
        },
        ChannelMode::Buffered => buffered_pipe(args.count.unwrap_or(100), &mut out)?,
    };
    debug!(num_received = received.len(), "channel closed");

    Ok(())
}

fn tasks_subcommand(args: &TasksArgs) -> Result<()> {
    let mut out = stdout();

    match args.mode {
        TaskMode::Parity => {
            parity_workers(args.limit, &mut out)?;
        },
        TaskMode::Staggered => {
            let finished = staggered_tasks(args.count, Duration::from_millis(args.unit_ms), &mut out)?;
            debug!(?finished, "all tasks finished");
        },
    }

    Ok(())
}

fn shapes_subcommand() -> Result<()> {
    let (shapes, employee) = demo_shapes();

    for shape in shapes.iter() {
        println!("{}", shape.area());
        println!("{}", shape.perimeter());
    }
    println!("{employee}");

    Ok(())
}

fn greet_subcommand(args: &GreetArgs) -> Result<()> {
    println!("{}", greeting(&args.name));

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        Some(CliSubcommand::Calc(v)) => calc_subcommand(v)?,
        Some(CliSubcommand::Merge(v)) => merge_subcommand(v)?,
        Some(CliSubcommand::Channels(v)) => channels_subcommand(v)?,
        Some(CliSubcommand::Tasks(v)) => tasks_subcommand(v)?,
        Some(CliSubcommand::Shapes) => shapes_subcommand()?,
        Some(CliSubcommand::Greet(v)) => greet_subcommand(v)?,
        None => return Err(anyhow!("No subcommand given.")),
    };

    Ok(())
}
