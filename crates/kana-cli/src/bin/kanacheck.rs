use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::{check_ops, config_ops};
use kana_cli::settings::{self, Settings};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanacheck", about = "Check that names are written in kana only")]
struct Cli {
    /// Path to a settings TOML file (defaults are embedded)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check names given as arguments
    Check {
        /// Names to check
        #[arg(required = true)]
        names: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check one name per line from a file ("-" for stdin)
    Batch {
        /// Path to the input file
        input_file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn load_settings(path: Option<&PathBuf>, json: bool) -> Settings {
    settings::load_with_overrides(path.map(PathBuf::as_path), json).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    })
}

fn finish(result: Result<bool, check_ops::CheckError>) -> ! {
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    process::exit(check_ops::exit_code(&result))
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Check { names, json } => {
            let s = load_settings(cli.config.as_ref(), json);
            finish(check_ops::check(&mut stdout, names, &s));
        }
        Command::Batch { input_file, json } => {
            let s = load_settings(cli.config.as_ref(), json);
            finish(check_ops::batch(&mut stdout, &input_file, &s));
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
