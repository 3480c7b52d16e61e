use std::io::{self, Write};
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::config::Options;

pub fn build_cli<'a, 'b>() -> App<'a, 'b> {
    App::new("workday")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Full-screen countdown to the end of the working day")
        .arg(
            Arg::with_name("start")
                .long("start")
                .short("s")
                .value_name("HH:MM")
                .help("The start of the working day, in 24hr hh:mm format (default: 9:00)")
                .takes_value(true),
        ).arg(
            Arg::with_name("end")
                .long("end")
                .short("e")
                .value_name("HH:MM")
                .help("The end of the working day, in 24hr hh:mm format (default: 17:00)")
                .takes_value(true),
        ).arg(
            Arg::with_name("config")
                .long("config")
                .value_name("PATH")
                .help("Settings file to read instead of ~/.workday")
                .takes_value(true),
        )
}

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    build_cli()
        .write_help(out)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.message))?;
    writeln!(out)
}

pub fn flag_options(matches: &ArgMatches) -> Options {
    Options {
        start: matches.value_of("start").map(str::to_owned),
        end: matches.value_of("end").map(str::to_owned),
        help: false,
    }
}

pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.value_of("config").map(PathBuf::from)
}
