//! Store-Keys CLI
//!
//! Derives raw store keys for a wasm chain from bech32 addresses:
//!
//! - `store-keys-cli decode <ADDRESS>` - raw bytes behind an address
//! - `store-keys-cli key <SEGMENT>...` - ordered concatenation of key segments
//! - `store-keys-cli contract <ADDRESS>` - contract metadata / contract store key
//! - `store-keys-cli namespaces` - registered namespace prefixes
//!
//! Keys are printed on stdout as lowercase hex; logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use store_keys::ConversionMode;
use tracing::debug;

use store_keys_cli::commands::{
    contract_command, decode_command, key_command, namespaces_command,
};
use store_keys_cli::config::Config;

#[derive(Parser)]
#[command(name = "store-keys-cli")]
#[command(about = "Derive wasm store keys from bech32 addresses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Conversion mode flag; falls back to STORE_KEYS_MODE when omitted
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Strict,
    Padded,
}

impl From<ModeArg> for ConversionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Strict => ConversionMode::Strict,
            ModeArg::Padded => ConversionMode::Padded,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a bech32 address to its raw bytes
    Decode {
        address: String,

        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Build a key from ordered segments
    ///
    /// Segments are kind:value with kind one of ns, hex, str, addr, len.
    /// Example: key ns:contract_store addr:wasm1... len:state addr:wasm1...
    Key {
        #[arg(required = true)]
        segments: Vec<String>,

        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Contract metadata key, or contract store key with --store-key-hex
    Contract {
        address: String,

        /// Key inside the contract's storage, as hex
        #[arg(long)]
        store_key_hex: Option<String>,

        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// List namespace prefixes
    Namespaces,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    debug!(mode = %config.mode, namespaces = config.prefixes.len(), "Configuration loaded");

    let output = match cli.command {
        Commands::Decode { address, mode } => {
            decode_command(&config, &address, config.mode_or_default(mode.map(Into::into)))?
        }
        Commands::Key { segments, mode } => {
            key_command(&config, &segments, config.mode_or_default(mode.map(Into::into)))?
        }
        Commands::Contract {
            address,
            store_key_hex,
            mode,
        } => contract_command(
            &config,
            &address,
            store_key_hex.as_deref(),
            config.mode_or_default(mode.map(Into::into)),
        )?,
        Commands::Namespaces => namespaces_command(&config),
    };

    println!("{}", output);
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose {
        "debug"
    } else {
        "warn,store_keys=info,store_keys_cli=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
