use clap::{Parser, Subcommand};
use importer::{CanonicalFormat, CanonicalTransformer, CanonicalValidator};
use std::path::{Path, PathBuf};
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "import")]
#[command(about = "Tournament fixture importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a single canonical JSON file
    Canonical {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Import every canonical JSON file found in a directory
    BulkImport {
        #[arg(long, default_value = "./imports")]
        directory: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("import={log_level},importer={log_level},storage={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Canonical {
            file,
            validate_only,
        } => {
            handle_canonical_import(file, validate_only, &cli.database_url).await?;
        }
        Commands::BulkImport {
            directory,
            validate_only,
        } => {
            handle_bulk_import(directory, validate_only, &cli.database_url).await?;
        }
    }

    Ok(())
}

async fn connect(database_url: &str) -> Result<Database, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");
    let db = Database::new(database_url).await?;
    db.run_migrations().await?;
    Ok(db)
}

async fn handle_canonical_import(
    file: PathBuf,
    validate_only: bool,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading canonical JSON from: {}", file.display());

    let canonical = load(&file).await?;

    tracing::info!(
        "Loaded {} venue(s), {} participant(s), {} event(s) (v{})",
        canonical.venues.len(),
        canonical.participants.len(),
        canonical.events.len(),
        canonical.format_version
    );

    let validation_report = CanonicalValidator::validate(&canonical)?;
    validation_report.log_warnings();
    tracing::info!("Validation successful");

    if validate_only {
        return Ok(());
    }

    let db = connect(database_url).await?;
    CanonicalTransformer::new(db.pool())
        .import_to_database(canonical)
        .await?;

    Ok(())
}

async fn handle_bulk_import(
    directory: PathBuf,
    validate_only: bool,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scanning directory for canonical JSON files: {}", directory.display());

    let mut json_files = Vec::new();
    let mut entries = tokio::fs::read_dir(&directory).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_dir() {
            let mut sub_entries = tokio::fs::read_dir(&path).await?;
            while let Some(sub_entry) = sub_entries.next_entry().await? {
                let sub_path = sub_entry.path();
                if is_json(&sub_path) {
                    json_files.push(sub_path);
                }
            }
        } else if is_json(&path) {
            json_files.push(path);
        }
    }

    if json_files.is_empty() {
        tracing::warn!("No JSON files found in {}", directory.display());
        return Ok(());
    }

    json_files.sort();
    tracing::info!("Found {} canonical JSON file(s)", json_files.len());

    let db = if validate_only {
        None
    } else {
        Some(connect(database_url).await?)
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for (idx, file_path) in json_files.iter().enumerate() {
        tracing::info!("[{}/{}] Processing: {}", idx + 1, json_files.len(), file_path.display());

        match process_canonical_file(file_path, db.as_ref()).await {
            Ok(()) => success_count += 1,
            Err(e) => {
                error_count += 1;
                tracing::error!("  Error: {}", e);
            }
        }
    }

    tracing::info!("Summary: {} succeeded, {} failed", success_count, error_count);

    if error_count > 0 {
        return Err(format!("{} file(s) failed to import", error_count).into());
    }

    Ok(())
}

async fn process_canonical_file(
    file_path: &Path,
    db: Option<&Database>,
) -> Result<(), Box<dyn std::error::Error>> {
    let canonical = load(file_path).await?;

    let validation_report = CanonicalValidator::validate(&canonical)?;
    for warning in &validation_report.warnings {
        tracing::warn!("  {}", warning);
    }

    if let Some(db) = db {
        CanonicalTransformer::new(db.pool())
            .import_to_database(canonical)
            .await?;
    }

    Ok(())
}

async fn load(path: &Path) -> importer::Result<CanonicalFormat> {
    let json_content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json_content)?)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
