use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use graycode_client::{GrayCodeAnimation, Player, RenderStyle, TerminalSink};
use graycode_utils::{Config, ConfigError, ConfigOverrides, GrayCodeSequence, StepStatus};
use miette::IntoDiagnostic;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::{AnimateArgs, CliArgs, Command, ListArgs, OutputFormat, SequenceArgs};

/// Config file used when no --config is given
const CONFIG_ENV: &str = "GRAYCODE_CONFIG";

/// Send log records to stderr so they never mix with frames on stdout
pub(crate) fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
    if let Err(e) = installed {
        eprintln!("graycode: logging disabled: {}", e);
    }
}

pub(crate) fn dispatch(opts: CliArgs) -> miette::Result<()> {
    match resolve_command(opts.command, env::var_os(CONFIG_ENV)) {
        Command::List(args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            list(&args, &mut out)
        }
        Command::Animate(args) => animate(&args),
    }
}

/// Fill in the default command and the config file named by the environment.
///
/// A bare `graycode` animates. An explicit --config wins over the environment.
fn resolve_command(command: Option<Command>, env_config: Option<OsString>) -> Command {
    let mut command = command.unwrap_or_else(|| Command::Animate(AnimateArgs::default()));
    let sequence = match &mut command {
        Command::Animate(args) => &mut args.sequence,
        Command::List(args) => &mut args.sequence,
    };
    if sequence.config.is_none() {
        sequence.config = env_config.filter(|path| !path.is_empty()).map(PathBuf::from);
    }
    command
}

fn load_config(sequence: &SequenceArgs, overrides: ConfigOverrides) -> Result<Config, ConfigError> {
    let config = match &sequence.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let config = config.with_overrides(&overrides)?;
    log::debug!("Resolved config: {:?}", config);
    Ok(config)
}

fn animate(args: &AnimateArgs) -> miette::Result<()> {
    let config = load_config(
        &args.sequence,
        ConfigOverrides {
            n_bits: args.sequence.n_bits,
            frame_interval: args.interval,
            no_color: args.no_color,
        },
    )?;

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let style = if config.color && interactive {
        RenderStyle::Ansi
    } else {
        RenderStyle::Plain
    };
    log::info!(
        "Animating {}-bit Gray code ({:?} output, interactive: {})",
        config.n_bits,
        style,
        interactive
    );

    let sequence = GrayCodeSequence::generate(config.n_bits);
    let mut animation = GrayCodeAnimation::new(sequence, config.frame_interval).with_style(style);
    let mut player = Player::new(TerminalSink::new(stdout.lock(), interactive));

    player
        .play(&mut animation)
        .context("animation playback failed")
        .map_err(|e| miette::miette!("{:#}", e))?;
    Ok(())
}

fn list(args: &ListArgs, out: &mut impl Write) -> miette::Result<()> {
    let config = load_config(
        &args.sequence,
        ConfigOverrides {
            n_bits: args.sequence.n_bits,
            ..Default::default()
        },
    )?;
    let sequence = GrayCodeSequence::generate(config.n_bits);

    match args.format {
        OutputFormat::Codes => {
            for code in sequence.codes() {
                writeln!(out, "{}", code).into_diagnostic()?;
            }
        }
        OutputFormat::Steps => {
            for step in sequence.steps() {
                writeln!(out, "{}", step).into_diagnostic()?;
            }
        }
        OutputFormat::Json => {
            let steps: Vec<StepStatus> = sequence.steps().collect();
            serde_json::to_writer_pretty(&mut *out, &steps).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }
    out.flush().into_diagnostic()
}
