use std::path::PathBuf;
use std::process::ExitCode;

use decklist_validator::{config, loader, DecklistValidator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Usage: `validate-decklist [DECKLIST] [SCHEMA]`
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args_os().skip(1);
    let decklist_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::EXAMPLE_DECKLIST_FILE));
    let schema_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_SCHEMA_FILE));

    let document = match loader::load_json(&decklist_path) {
        Ok(doc) => doc,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let result = DecklistValidator::builder()
        .schema_path(&schema_path)
        .build()
        .and_then(|v| v.validate(&document));

    match result {
        Ok(report) => {
            println!("{report}");
            if report.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            println!("Error: {e}");
            println!("Decklist failed validation.");
            ExitCode::from(2)
        }
    }
}
