use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Default)]
#[clap(
    version,
    name = "graycode",
    about = "Generate binary reflected Gray codes and watch them walk, one bit flip at a time"
)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, parse(from_occurrences))]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the Gray code walk in the terminal (default)
    Animate(AnimateArgs),
    /// Print the Gray code sequence
    List(ListArgs),
}

/// Options shared by every command that builds a sequence
#[derive(Args, Debug, Default, Clone)]
pub struct SequenceArgs {
    /// Number of bits per code
    #[clap(short = 'n', long, value_parser, allow_hyphen_values = true)]
    pub n_bits: Option<i64>,

    /// KDL config file [default: $GRAYCODE_CONFIG]
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct AnimateArgs {
    #[clap(flatten)]
    pub sequence: SequenceArgs,

    /// Delay between frames, e.g. "800ms" or "1s"
    #[clap(short, long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,

    /// Print without background colors
    #[clap(long)]
    pub no_color: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    #[clap(flatten)]
    pub sequence: SequenceArgs,

    /// Output format
    #[clap(short, long, value_enum, default_value = "codes")]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One code per line
    #[default]
    Codes,
    /// One status line per step, naming the flipped bit
    Steps,
    /// JSON array of steps
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let args = CliArgs::try_parse_from(["graycode"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_animate_args() {
        let args = CliArgs::try_parse_from([
            "graycode",
            "-vv",
            "animate",
            "-n",
            "3",
            "--interval",
            "250ms",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Some(Command::Animate(animate)) => {
                assert_eq!(animate.sequence.n_bits, Some(3));
                assert_eq!(animate.interval, Some(Duration::from_millis(250)));
                assert!(animate.no_color);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_bits_reach_validation() {
        let args = CliArgs::try_parse_from(["graycode", "list", "-n", "-3"]).unwrap();
        match args.command {
            Some(Command::List(list)) => assert_eq!(list.sequence.n_bits, Some(-3)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_list_format() {
        let args = CliArgs::try_parse_from(["graycode", "list", "--format", "json"]).unwrap();
        match args.command {
            Some(Command::List(list)) => assert_eq!(list.format, OutputFormat::Json),
            other => panic!("unexpected command: {:?}", other),
        }

        let args = CliArgs::try_parse_from(["graycode", "list"]).unwrap();
        match args.command {
            Some(Command::List(list)) => assert_eq!(list.format, OutputFormat::Codes),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_interval_rejected() {
        assert!(CliArgs::try_parse_from(["graycode", "animate", "--interval", "soon"]).is_err());
    }

    #[test]
    fn test_non_integer_bits_rejected() {
        assert!(CliArgs::try_parse_from(["graycode", "list", "-n", "2.5"]).is_err());
    }
}
