use clap::{Parser, Subcommand};

use numlet_cli::commands::convert_ops::OutputFormat;
use numlet_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "numtool", about = "Digit-to-letter conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert each input line to letters
    Convert {
        /// Input file (one entry per line); reads stdin when omitted or "-"
        file: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the digit-to-letter mapping
    Legend,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { file, format } => convert_ops::convert_cmd(file.as_deref(), format),
        Command::Legend => config_ops::legend(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
