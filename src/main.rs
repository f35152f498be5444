// clubcal - club events calendar
// Prints the calendar page as JSON; a few admin commands for rule documents

use clubcal::utils::logging::{init_logging, log_error_with_context};
use clubcal::{
    AdminHandlers, AppConfig, AppError, AppResult, CalendarData, Database, LocalFileStorage,
    SystemClock, UiState, View,
};
use log::{error, info};
use std::path::Path;

const USAGE: &str = "usage: clubcal [--annual] | upload-document <title> <file> | delete-document <id> | documents";

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting clubcal v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args).await {
        match &e {
            AppError::Anyhow(inner) => log_error_with_context(inner, "clubcal"),
            other => error!("{}", other),
        }
        eprintln!("{}", e.to_safe_string());
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    info!("Using database at {}", config.database_path.display());
    let db = Database::open(&config.database_path).await?;

    match args.first().map(String::as_str) {
        None | Some("--annual") => print_calendar(&config, &db, args.first().is_some()).await,
        Some("documents") => {
            let documents = db.get_documents().await?;
            println!("{}", serde_json::to_string_pretty(&documents)?);
            Ok(())
        }
        Some("upload-document") => match (args.get(1), args.get(2)) {
            (Some(title), Some(path)) => {
                let bytes = tokio::fs::read(path).await?;
                let file_name = Path::new(path)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(path.as_str());
                let document = admin(&config, db)
                    .upload_document(title, file_name, &bytes)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&document)?);
                Ok(())
            }
            _ => Err(AppError::invalid_input(USAGE)),
        },
        Some("delete-document") => match args.get(1) {
            Some(id) => admin(&config, db).delete_document(id).await,
            None => Err(AppError::invalid_input(USAGE)),
        },
        Some(_) => Err(AppError::invalid_input(USAGE)),
    }
}

fn admin(config: &AppConfig, db: Database) -> AdminHandlers<LocalFileStorage> {
    let storage = LocalFileStorage::new(config.storage_dir.clone(), config.public_base_url.clone());
    AdminHandlers::new(db, storage)
}

async fn print_calendar(config: &AppConfig, db: &Database, annual: bool) -> AppResult<()> {
    let settings = db.get_settings().await?;

    let mut state = UiState::new(config.year.unwrap_or(settings.display_year));
    state.select_category(config.category.clone());
    if annual {
        state.set_view(View::Annual);
    }

    let data = CalendarData::load(db).await?;
    let dashboard = data.dashboard(&state, &settings, &SystemClock);

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
