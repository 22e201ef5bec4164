use std::process::ExitCode;

use clap::Parser;
use mazecore::app::{App, cli::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = std::fs::create_dir_all(&cli.log_dir) {
        eprintln!("cannot create log directory {}: {}", cli.log_dir.display(), err);
        return ExitCode::FAILURE;
    }
    // Log to a file so records never interleave with the rendered maze
    let file_appender = tracing_appender::rolling::never(&cli.log_dir, "mazecore.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(cli.log_level)
        .with_ansi(false)
        .init();

    let app = App::default();
    match app.run(&cli.command, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("[app] {}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
