use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output formats for merged intervals
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Space separated pairs, e.g. `[[1 6] [8 10]]`
    Text,

    /// A JSON array of `[start, end]` pairs
    Json,
}

/// Which channel pipeline to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChannelMode {
    /// Every send waits for the consumer to receive the value
    Unbuffered,

    /// The producer can run up to ten values ahead of the consumer
    Buffered,
}

/// Which task demo to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TaskMode {
    /// Two workers reporting the even and the odd values of a range
    Parity,

    /// Tasks that sleep for increasing durations, waiting for all of them to finish
    Staggered,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Evaluate `num1 op num2`
    Calc(CalcArgs),

    /// Merge overlapping or touching closed intervals
    Merge(MergeArgs),

    /// Send values from a producer thread to a consumer thread over a channel
    Channels(ChannelsArgs),

    /// Run worker threads and wait for them to finish
    Tasks(TasksArgs),

    /// Print the area and perimeter of the demo shapes, and the demo employee
    Shapes,

    /// Print a greeting
    Greet(GreetArgs),
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Left operand
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub num1: f64,

    /// Right operand
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub num2: f64,

    /// Operator: + - * /
    #[arg(long, default_value = "+")]
    pub op: String,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Intervals as a JSON array of pairs, e.g. '[[1,3],[2,6]]'. If neither this nor an input
    /// file is given, intervals are read from stdin.
    #[clap(help_heading = "Inputs")]
    pub intervals: Option<String>,

    /// Read intervals from this JSON file
    #[arg(short, long, conflicts_with = "intervals")]
    #[clap(help_heading = "Inputs")]
    pub input: Option<PathBuf>,

    /// Reject intervals that start after they end instead of merging them as given
    #[arg(long)]
    #[clap(help_heading = "Inputs")]
    pub strict: bool,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,
}

#[derive(Args, Debug)]
pub struct ChannelsArgs {
    /// Channel pipeline to run
    #[arg(value_enum, short, long, default_value = "unbuffered")]
    pub mode: ChannelMode,

    /// Number of values to send. Defaults to 10 for the unbuffered and 100 for the buffered
    /// pipeline.
    #[arg(short = 'n', long)]
    pub count: Option<i64>,
}

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Task demo to run
    #[arg(value_enum, short, long, default_value = "staggered")]
    pub mode: TaskMode,

    /// Number of staggered tasks
    #[arg(short = 'n', long, default_value = "3")]
    pub count: u32,

    /// Sleep unit of the staggered tasks in milliseconds; task `i` sleeps for `i` units
    #[arg(long, default_value = "1000")]
    pub unit_ms: u64,

    /// Exclusive upper bound of the values reported by the parity workers
    #[arg(long, default_value = "10")]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct GreetArgs {
    /// Your name
    #[arg(long, default_value = drills::channels::DEFAULT_NAME)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{CliArgs, CliSubcommand, OutputType};

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let args = CliArgs::try_parse_from(["drills", "-vv", "calc", "--num1", "-3", "--num2", "2.5", "--op", "*"]).unwrap();
        assert_eq!(args.verbose, 2);

        match args.command {
            Some(CliSubcommand::Calc(calc)) => {
                assert_eq!(calc.num1, -3.0);
                assert_eq!(calc.num2, 2.5);
                assert_eq!(calc.op, "*");
            },
            other => panic!("Unexpected subcommand {:?}", other),
        }
    }

    #[test]
    fn test_parse_merge() {
        let args = CliArgs::try_parse_from(["drills", "merge", "[[1,3],[2,6]]", "-O", "json"]).unwrap();
        match args.command {
            Some(CliSubcommand::Merge(merge)) => {
                assert_eq!(merge.intervals.as_deref(), Some("[[1,3],[2,6]]"));
                assert_eq!(merge.output_type, OutputType::Json);
                assert!(!merge.strict);
            },
            other => panic!("Unexpected subcommand {:?}", other),
        }

        assert!(CliArgs::try_parse_from(["drills", "merge", "[[1,3]]", "-i", "ivals.json"]).is_err());
    }

    #[test]
    fn test_parse_greet_default() {
        let args = CliArgs::try_parse_from(["drills", "greet"]).unwrap();
        match args.command {
            Some(CliSubcommand::Greet(greet)) => assert_eq!(greet.name, "Guest"),
            other => panic!("Unexpected subcommand {:?}", other),
        }
    }
}
