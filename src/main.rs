//! CLI entry point for starosta.

mod cli;

use clap::Parser;
use starosta::config::load_config;
use starosta::input::ConsoleInput;
use starosta::roster::Roster;
use starosta::session::Session;
use starosta::table::read_roster;
use starosta::ui::Renderer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(file) = &args.file {
        config.roster.file = file.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    let roster_path = PathBuf::from(&config.roster.file);

    // An absent or unreadable file degrades to an empty roster; the session
    // still runs so registration can start populating it.
    let students = match read_roster(&roster_path) {
        Ok(students) => students,
        Err(e) if e.is_missing_file() => {
            renderer.warn(&format!("Файл {} не найден", roster_path.display()));
            Vec::new()
        }
        Err(e) => {
            renderer.error(&format!("Не удалось прочитать файл: {e}"));
            Vec::new()
        }
    };

    let mut session = Session::new(Roster::new(students), roster_path);
    session.run(&mut ConsoleInput, &renderer);
}
