use checkers::display_format::DisplayFormat;
use checkers::game::Game;
use checkers::piece::Color;
use chrono::Local;
use clap::Parser;
use env_logger::Target;
use frontend::control::Control;
use log::{LevelFilter, info};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "play checkers from the terminal")]
struct Arguments {
    #[arg(short, long, help = "read commands from a file instead of stdin")]
    script: Option<PathBuf>,

    #[arg(long, help = "append log output to this file instead of stderr")]
    log_file: Option<PathBuf>,

    #[arg(short, long, default_value_t = LevelFilter::Warn, help = "log level, RUST_LOG takes precedence")]
    level: LevelFilter,

    #[arg(long, default_value_t = false, help = "draw pieces with letters")]
    ascii: bool,

    #[arg(long, default_value_t = false, help = "disable colors and highlighting")]
    plain: bool,

    #[arg(long, help = "register the black player at startup")]
    black: Option<String>,

    #[arg(long, help = "register the white player at startup")]
    white: Option<String>,
}

fn init_logging(arguments: &Arguments) -> Result<(), Box<dyn Error>> {
    let target = match &arguments.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().append(true).create(true).open(path)?;
            Target::Pipe(Box::new(std::io::BufWriter::new(file)))
        }
        None => Target::Stderr,
    };

    env_logger::Builder::new()
        .filter_level(arguments.level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .target(target)
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = Arguments::parse();
    init_logging(&arguments)?;

    let mut game = Game::opening();
    for (name, color) in [(&arguments.black, Color::Black), (&arguments.white, Color::White)] {
        if let Some(name) = name {
            game.create_player(name, color)?;
        }
    }

    let format = DisplayFormat {
        unicode: !arguments.ascii,
        effects: !arguments.plain,
        ..DisplayFormat::pretty()
    };
    let mut control = Control::new(game, format, std::io::stdout().lock());
    match &arguments.script {
        Some(path) => {
            info!("reading commands from {}", path.display());
            control.run(BufReader::new(File::open(path)?))?;
        }
        None => control.run(std::io::stdin().lock())?,
    }

    Ok(())
}
