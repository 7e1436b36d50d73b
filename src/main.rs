mod cli;
mod logging;

use calsheet::{CalendarBuilder, CalendarError};
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(year) => println!("Generated calendar for year {year}. Saved to {}.", cli.output.display()),
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32, CalendarError> {
    let mut builder = CalendarBuilder::new();
    if let Some(path) = &cli.style {
        builder = builder.with_style_file(path)?;
    }
    if let Some(code) = &cli.locale {
        builder = builder.with_locale_code(code)?;
    }
    if let Some(year) = cli.year {
        builder = builder.with_year(year);
    }

    let generator = builder.build();
    log::info!("Generating calendar for {} into {}", generator.year(), cli.output.display());
    generator.generate_to_file(&cli.output)?;
    Ok(generator.year())
}
