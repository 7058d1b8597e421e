mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use sylpass::{Entropy, GenerationRequest, Keystream, SystemEntropy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(
    name = "sylpass",
    version,
    about = "Syllable-based password generator with automatic and custom modes"
)]
struct Cli {
    /// Generation mode; asked interactively when omitted.
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Total password length for custom mode.
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Sequence the custom password starts with.
    #[arg(short, long)]
    sequence: Option<String>,

    /// Derive every random choice from this phrase instead of the system RNG.
    #[arg(long)]
    seed: Option<String>,

    /// Show the sequence while typing it.
    #[arg(long)]
    echo: bool,

    /// Print only the password.
    #[arg(short, long)]
    quiet: bool,

    /// Generate once and exit without offering a retry.
    #[arg(long)]
    once: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Mode {
    Auto,
    Custom,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sylpass=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut cli = Cli::parse();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let seed = cli.seed.take();
    let inputs = Inputs::from(cli);

    match seed {
        Some(seed) => run(inputs, &options, &mut Keystream::from_seed(&seed)),
        None => run(inputs, &options, &mut SystemEntropy::default()),
    }
}

struct Inputs {
    mode: Option<Mode>,
    length: Option<i64>,
    sequence: Option<Zeroizing<String>>,
    echo: bool,
    once: bool,
}

impl From<Cli> for Inputs {
    fn from(cli: Cli) -> Self {
        Self {
            mode: cli.mode,
            length: cli.length,
            sequence: cli
                .sequence
                .map(|s| Zeroizing::new(ui::normalize_input(&Zeroizing::new(s)))),
            echo: cli.echo,
            once: cli.once,
        }
    }
}

fn run<E: Entropy>(
    mut inputs: Inputs,
    options: &ui::DisplayOptions,
    entropy: &mut E,
) -> Result<()> {
    let mode = match inputs.mode {
        Some(mode) => mode,
        None => {
            ui::greet();
            ui::prompt_mode()?
        }
    };
    tracing::debug!(?mode, "mode selected");

    loop {
        let request = match mode {
            Mode::Auto => GenerationRequest::Automatic,
            Mode::Custom => {
                let length = match inputs.length.take() {
                    Some(length) => length,
                    None => ui::prompt_length()?,
                };
                let mnemonic = match inputs.sequence.take() {
                    Some(sequence) => sequence,
                    None => ui::prompt_sequence(inputs.echo)?,
                };
                GenerationRequest::Custom { length, mnemonic }
            }
        };

        match request.generate(entropy) {
            Ok(password) => ui::display_password(&password, mode, options),
            Err(e) => {
                ui::display_rejection(&e.to_string(), options);
                if inputs.once {
                    std::process::exit(1);
                }
            }
        }

        if inputs.once || ui::prompt_decision()? == ui::Decision::Accept {
            break;
        }
    }

    Ok(())
}
