mod commands;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use lectern_lib::config::LecternConfig;
use lectern_lib::model::{Category, Record};
use lectern_lib::table::SortOrder;
use log::debug;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::commands::TableOptions;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Render admin category trees and record tables in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Level written to the log file
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    /// Config file (defaults to config.json in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print a category tree from a JSON list
    Categories {
        file: PathBuf,

        /// Fail on duplicate ids and parent cycles
        #[arg(long)]
        strict: bool,

        /// Print one `depth id name` line per category
        #[arg(long)]
        flat: bool,
    },
    /// Print a JSON list as a table
    Table {
        file: PathBuf,

        /// Column specs: key[:title[:align]], comma separated
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        #[arg(long)]
        sort_by: Option<String>,

        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Ids of selected rows, comma separated
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
    },
    /// Print the page-number bar
    Pages {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        current: u32,

        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        last: u32,

        /// Pages shown either side of the current one
        #[arg(long)]
        delta: Option<u32>,
    },
}

fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    paths::rotate_logs();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level.min(LevelFilter::Warn),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    match paths::log_file() {
        Some(path) => match open_log_file(&path) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("Warning: file logging disabled, {}: {}", path.display(), e),
        },
        None => eprintln!("Warning: file logging disabled, no cache directory"),
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

fn load_config(path: Option<PathBuf>) -> Result<LecternConfig, CliError> {
    match path.or_else(paths::config_file) {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Ok(LecternConfig::load(&path)?)
        }
        None => Ok(LecternConfig::default()),
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let mut config = load_config(cli.config)?;

    match cli.command {
        Commands::Categories { file, strict, flat } => {
            if strict {
                config.tree.strict = true;
            }
            let (records, _) = commands::read_list::<Category>(&file)?;
            commands::categories(&records, &config, flat)
        }
        Commands::Table {
            file,
            columns,
            sort_by,
            order,
            select,
        } => {
            let (rows, page) = commands::read_list::<Record>(&file)?;
            let options = TableOptions {
                columns,
                sort_by,
                order,
                select,
            };
            commands::table(rows, page, &options, &config)
        }
        Commands::Pages {
            current,
            last,
            delta,
        } => Ok(format!("{}\n", commands::pages(current, last, delta, &config))),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
