use clap::Parser;
use colored::Colorize;
use flourish::Painter;
use inspiration::error::Result;
use inspiration::render::print_quote;
use inspiration::store::QuoteStore;
use inspiration::styles::INSPIRATION_THEME;
use inspiration::terminal::{terminal_columns, Layout};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(cli: &Cli) -> Result<()> {
    let store = match &cli.file {
        Some(path) => QuoteStore::new(path),
        None => QuoteStore::beside_executable()?,
    };
    debug!("Reading quotes from {}", store.path().display());

    let record = store.pick()?;

    let columns = cli.width.or_else(terminal_columns);
    let layout = Layout::from_columns(columns);
    debug!("Laying out for {:?} columns, card width {}", columns, layout.text_width);

    let painter = Painter::with_color(&INSPIRATION_THEME, cli.color.use_color());
    print_quote(&record, &layout, &painter)?;
    Ok(())
}
