use std::io;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::ErrorKind;
use log::{debug, error};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use termion::async_stdin;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

use workday::cli;
use workday::config;
use workday::workday::Workday;

const EXIT_USAGE: i32 = 2;
const EXIT_TERMINAL: i32 = 1;

fn main() {
    env_logger::init();
    process::exit(run());
}

fn run() -> i32 {
    let matches = match cli::build_cli().get_matches_from_safe(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed => {
                println!("{}", e.message);
                return EXIT_USAGE;
            }
            ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                eprintln!("{}", e.message);
                return EXIT_USAGE;
            }
        },
    };

    let file_options = match cli::config_path(&matches).or_else(config::default_path) {
        Some(path) => match config::load(&path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("error: {}", e);
                return EXIT_USAGE;
            }
        },
        None => config::Options::default(),
    };
    let flag_options = cli::flag_options(&matches);
    if file_options.help || flag_options.help {
        if let Err(e) = cli::write_usage(&mut io::stdout()) {
            error!("unable to print help: {}", e);
        }
        return EXIT_USAGE;
    }

    let config = match config::merge(file_options, flag_options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, matches.usage());
            return EXIT_USAGE;
        }
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    for &signal in &[SIGINT, SIGTERM, SIGHUP] {
        if let Err(e) = signal_hook::flag::register(signal, Arc::clone(&shutdown)) {
            eprintln!("error: unable to install signal handler: {}", e);
            return EXIT_TERMINAL;
        }
    }
    debug!("signal handlers installed");

    let stdout = io::stdout();
    let result = stdout.lock().into_raw_mode().and_then(|raw| {
        Workday::new(async_stdin(), AlternateScreen::from(raw), config.window, shutdown).run()
    });
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("terminal failure: {}", e);
            eprintln!("error: {}", e);
            EXIT_TERMINAL
        }
    }
}
