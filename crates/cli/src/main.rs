use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::audience::{
    filter::{AudienceFilters, AudienceKind},
    record::{AudienceCreate, AudienceRecord},
};
use sqlgen::taxonomy::{SpecialtyColumns, TaxonomyTable, VerbatimSpecialties};
use std::collections::HashMap;
use tracing::{Level, info, warn};

mod commands;
mod error;

#[derive(Parser)]
#[command(
    name = "audiencesql",
    version = "0.0.1",
    about = "Compiles audience filters into feed queries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            filters,
            kind,
            bind,
            taxonomy,
        } => {
            let filters = load_filters(&filters).await?;
            let lookup = load_taxonomy(taxonomy.as_deref()).await?;

            if bind {
                let query =
                    sqlgen::compile_with(kind, &filters, &sqlgen::dialect::Postgres, lookup.as_ref());
                let json =
                    serde_json::to_string_pretty(&query).map_err(CliError::JsonSerialize)?;
                println!("{json}");
            } else {
                println!("{}", sqlgen::compile_text_with(kind, &filters, lookup.as_ref()));
            }
        }
        Commands::Payload {
            filters,
            kind,
            name,
            description,
        } => {
            let filters = load_filters(&filters).await?;
            let payload = AudienceCreate {
                name,
                description,
                filters,
            };
            payload.validate()?;

            info!("Payload validated for POST {}", kind.endpoint());
            let json = serde_json::to_string_pretty(&payload).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
        Commands::Inspect { audience, kind } => {
            let source = tokio::fs::read_to_string(&audience).await?;
            let record: AudienceRecord = serde_json::from_str(&source)?;
            inspect_record(&record, kind)?;
        }
    }

    Ok(())
}

async fn load_filters(path: &str) -> Result<AudienceFilters, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let filters = serde_json::from_str(&source)?;
    Ok(filters)
}

async fn load_taxonomy(path: Option<&str>) -> Result<Box<dyn SpecialtyColumns>, CliError> {
    match path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await?;
            let columns: HashMap<String, String> = serde_json::from_str(&source)?;
            info!("Loaded {} specialty taxonomy entries", columns.len());
            Ok(Box::new(TaxonomyTable::new(columns)))
        }
        None => Ok(Box::new(VerbatimSpecialties)),
    }
}

fn inspect_record(record: &AudienceRecord, kind: AudienceKind) -> Result<(), CliError> {
    let Some(filters) = &record.filters else {
        return Err(CliError::MissingFilters(record.id));
    };

    let sql = sqlgen::compile_text(kind, filters);
    match &record.sql_query {
        Some(stored) if *stored == sql => {
            info!("Audience {} stored query matches recompiled output", record.id);
        }
        Some(_) => {
            warn!(
                "Audience {} stored query differs from recompiled output",
                record.id
            );
        }
        None => {
            info!("Audience {} has no stored query", record.id);
        }
    }
    println!("{sql}");

    Ok(())
}
