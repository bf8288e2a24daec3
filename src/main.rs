use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use student_card::console;
use student_card::core::config::{self, CliOverrides, ResolvedConfig};

#[derive(Parser)]
#[command(name = "student-card", about = "Interactive student profile card generator")]
struct Args {
    /// Config file (default: ~/.student-card/config.toml, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Year stamped on new records as their creation year
    #[arg(long)]
    school_year: Option<i32>,

    /// Write a log to this file
    #[arg(long)]
    log_file: Option<String>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    // Console output belongs to the session, so logs only ever go to a file.
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config(args.config.as_deref())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            school_year: args.school_year,
            log_file: args.log_file,
            log_level: args.log_level,
        },
    );

    init_logging(&resolved);
    log::info!(
        "student-card starting, school year {}",
        resolved.school_year
    );

    console::run(&resolved)
}
