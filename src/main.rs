// SPDX-License-Identifier: MPL-2.0
use pawfeed::app::{self, paths, Flags};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};

const USAGE: &str = "\
Usage: pawfeed [OPTIONS] [VIDEO]...

Options:
  --lang <ID>          UI language (e.g. ko, en-US)
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory holding pawfeed.log
  --log-level <LEVEL>  off, error, warn, info, debug or trace (default: info)
  -h, --help           Print this help

Each VIDEO is a URL or file path appended to the feed.";

fn parse_args(mut args: pico_args::Arguments) -> Result<(Flags, LevelFilter), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let log_level = args
        .opt_value_from_str("--log-level")?
        .unwrap_or(LevelFilter::Info);

    let videos = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    Ok((
        Flags {
            lang,
            data_dir,
            config_dir,
            videos,
        },
        log_level,
    ))
}

/// Writes log records to `pawfeed.log` in the data directory, if it can be
/// created.
fn init_logging(level: LevelFilter) {
    let Some(path) = paths::get_log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let (flags, log_level) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("pawfeed: {error}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    init_logging(log_level);
    log::info!("PawFeed {} starting up", env!("CARGO_PKG_VERSION"));

    app::run(flags)
}
