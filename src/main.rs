use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use smoko::Screen;
use smoko::core::config;
use std::fs::File;

#[derive(Parser)]
#[command(name = "smoko", about = "Terminal cigarette counter and posts browser")]
struct Args {
    /// Screen to open on startup
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to smoko.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("smoko.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A malformed config file is fatal; a missing one is not.
    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("smoko: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.screen.map(|s| s.as_str()));

    log::info!("Smoko starting up on the {} screen", resolved.screen);

    smoko::tui::run(resolved)
}
