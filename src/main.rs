// std imports
use std::{io::stdout, process};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use namefilter::{App, NameFilter, Options, cli, config, error::*};

const NAMEFILTER_DEBUG_LOG: &str = "NAMEFILTER_DEBUG_LOG";
const NAMEFILTER_DEBUG_LOG_STYLE: &str = "NAMEFILTER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(NAMEFILTER_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(NAMEFILTER_DEBUG_LOG)
                .write_style(NAMEFILTER_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());

    let (configs, no_default) = opt.configs();
    let mut settings = config::at(configs).no_default(no_default).load()?;
    opt.apply(&mut settings.filter);

    let filter = NameFilter::from_settings(&settings.filter)?;

    let inputs = opt
        .inputs()
        .iter()
        .map(|input| input.open())
        .collect::<Result<Vec<_>>>()?;

    let app = App::new(Options {
        filter,
        invert: opt.invert_match,
        count: opt.count,
    });

    log::debug!("run the app");

    let mut output = stdout().lock();
    match app.run(inputs, &mut output) {
        Ok(_) => Ok(()),
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
