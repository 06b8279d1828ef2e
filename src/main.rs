//! custompin - time-windowed one-time PIN tool
//!
//! Derives short-lived PIN codes from a seed and a piece of user data,
//! and issues them per realm the way a host service would.

use clap::{Parser, Subcommand};
use custompin_core::error::{CustomPinError, PinError};
use custompin_core::init_logging;

mod cli;

use cli::args::{PolicyArg, TimeUnitArg};

#[derive(Parser)]
#[command(name = "custompin")]
#[command(about = "Time-windowed one-time PIN generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the generator and realm configuration file
    Init {
        /// strftime pattern selecting the time fields of a window
        #[arg(long, default_value = "%H:%M")]
        time_format: String,
        /// Unit of the look-ahead added to the current time
        #[arg(long, value_enum, default_value_t = TimeUnitArg::Minutes)]
        time_unit: TimeUnitArg,
        /// Number of time units in one window
        #[arg(long, default_value_t = 1)]
        window_ratio: u32,
        /// Widen windows by integer division (0 disables)
        #[arg(long, default_value_t = 0)]
        grace_divisor: u32,
        /// Realm name reported with issued PINs
        #[arg(long, default_value = "master")]
        realm: String,
        /// Realm display name, preferred over the name when set
        #[arg(long)]
        realm_display_name: Option<String>,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Derive a PIN code for a piece of data
    Generate {
        /// Data the code is bound to, e.g. a user identifier
        #[arg(long)]
        data: String,
        /// Secret seed
        #[arg(long, env = "CUSTOMPIN_SEED", hide_env_values = true)]
        seed: String,
        /// Output policy
        #[arg(long, value_enum, default_value_t = PolicyArg::Enforced)]
        policy: PolicyArg,
        /// Code length for the truncated and enforced policies
        #[arg(long)]
        length: Option<usize>,
    },
    /// Issue a PIN for a user and print the realm response as JSON
    Issue {
        /// Username the PIN is issued for
        #[arg(long)]
        username: String,
        /// Secret seed
        #[arg(long, env = "CUSTOMPIN_SEED", hide_env_values = true)]
        seed: String,
    },
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            time_format,
            time_unit,
            window_ratio,
            grace_divisor,
            realm,
            realm_display_name,
            force,
        } => cli::init::run_init(
            cli::init::InitOptions {
                time_format,
                time_unit: time_unit.into(),
                window_ratio,
                grace_divisor,
                realm,
                realm_display_name,
            },
            force,
        ),
        Commands::Generate {
            data,
            seed,
            policy,
            length,
        } => cli::generate::run_generate(&seed, &data, policy.with_length(length)),
        Commands::Issue { username, seed } => cli::issue::run_issue(seed, &username),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and caller-fixable input errors (exit code 2)
                CustomPinError::Config(_)
                | CustomPinError::Toml(_)
                | CustomPinError::TomlSerialize(_) => 2,
                CustomPinError::Pin(PinError::InvalidInput { .. }) => 2,
                // Runtime failures (exit code 1)
                CustomPinError::Pin(PinError::Generator { .. }) => 1,
                CustomPinError::Io(_) | CustomPinError::Json(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
