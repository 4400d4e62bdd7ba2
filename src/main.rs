use clap::Parser;
use log::{info, warn};
use menuboard::StartScreen;
use menuboard::core::config::{self, CliOverrides};
use menuboard::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "menuboard", about = "Browse the menu and your order history")]
struct Args {
    /// Catalog API base URL (overrides config and MENUBOARD_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Currency locale for prices, e.g. en-US or pt-BR
    #[arg(long)]
    locale: Option<String>,

    /// Screen to open first
    #[arg(short, long, value_enum)]
    screen: Option<StartScreen>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to menuboard.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("menuboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        config::MenuboardConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            currency_locale: args.locale,
            start_screen: args.screen,
        },
    );

    info!("Menuboard starting up: {:?}", resolved);

    tui::run(resolved)
}
