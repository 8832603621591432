use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use polar_calendar::{CalendarError, CalendarResult, FontBook, FontRole, Preset, Settings, Year};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "polar-calendar", version, about = "Render a year on a polar dial")]
struct Cli {
    /// Settings file (TOML, or JSON when the extension is `.json`).
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dawn twilight and temperature poster.
    Dawn(RenderArgs),
    /// Full-day twilight, temperature and precipitation poster.
    Day(RenderArgs),
    /// Dawn twilight, temperature and activities wallpaper (PNG only).
    Wallpaper(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// City to render instead of the configured `city_name`.
    city: Option<String>,

    /// Year to render instead of the configured `year`.
    #[arg(long)]
    year: Option<i32>,

    /// Output root instead of the configured `output_dir`.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the font families text will be set in and the number of loaded faces.
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalendarResult<()> {
    let (preset, args) = match cli.cmd {
        Command::Dawn(a) => (Preset::Dawn, a),
        Command::Day(a) => (Preset::Day, a),
        Command::Wallpaper(a) => (Preset::Wallpaper, a),
    };

    let mut settings = Settings::from_path(&cli.config)?;
    if let Some(city) = args.city {
        settings = settings.with_city(city);
    }
    if let Some(year) = args.year {
        settings.year = Year(year);
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = dir;
    }
    settings.validate()?;

    if args.dump_fonts {
        let fonts = FontBook::load(&settings.fonts);
        println!(
            "faces={} body={:?} title={:?}",
            fonts.face_count(),
            fonts.family(FontRole::Body),
            fonts.family(FontRole::Title)
        );
    }

    for path in polar_calendar::run(preset, &settings)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn report(err: &CalendarError) {
    match err {
        CalendarError::Config(msg) => eprintln!("Configuration error: {msg}"),
        CalendarError::Other(inner) => {
            eprintln!("Error: {} - {inner}", err.kind());
            for cause in inner.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }
        }
        CalendarError::Data(msg) | CalendarError::Render(msg) | CalendarError::Export(msg) => {
            eprintln!("Error: {} - {msg}", err.kind());
        }
    }
}
