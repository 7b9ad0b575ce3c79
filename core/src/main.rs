use clap::Parser;
use dicomview_core::cli::report::{CatalogReport, MetadataReport};
use dicomview_core::cli::{Cli, OutputFormat};
use dicomview_core::{DicomSeries, SeriesLoader};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    let mut catalog = match SeriesLoader::load(&cli.directory) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load series: {}", e);
            eprintln!("Error: Failed to load series: {}", e);
            process::exit(1);
        }
    };

    if catalog.is_empty() {
        eprintln!(
            "No usable DICOM series found in {}",
            cli.directory.display()
        );
        process::exit(1);
    }

    // The catalog itself is unordered; sort for stable display
    catalog.sort_by(|a, b| a.identifier().cmp(b.identifier()));

    output_catalog(&catalog, cli.format);

    if let Some(export_dir) = &cli.export {
        if let Err(e) = export_catalog(&catalog, export_dir) {
            error!("Export failed: {}", e);
            eprintln!("Error: Export failed: {}", e);
            process::exit(1);
        }
        println!(
            "Exported {} series to {}",
            catalog.len(),
            export_dir.display()
        );
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_catalog(catalog: &[DicomSeries], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", CatalogReport::new(catalog));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(catalog) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(catalog: &[DicomSeries]) -> Result<String, serde_json::Error> {
    use dicomview_core::SeriesMetadata;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SeriesJson<'a> {
        identifier: &'a str,
        frame_count: usize,
        metadata: &'a SeriesMetadata,
    }

    let summaries: Vec<SeriesJson> = catalog
        .iter()
        .map(|series| SeriesJson {
            identifier: series.identifier(),
            frame_count: series.frame_count(),
            metadata: series.metadata(),
        })
        .collect();

    serde_json::to_string_pretty(&summaries)
}

fn export_catalog(catalog: &[DicomSeries], dest: &Path) -> dicomview_core::Result<()> {
    for series in catalog {
        let series_dir = export_series(series, dest)?;
        info!(
            "exported series {} to {}",
            series.identifier(),
            series_dir.display()
        );
    }
    Ok(())
}

/// Writes one series as numbered PNG frames plus a metadata text file
fn export_series(series: &DicomSeries, dest: &Path) -> dicomview_core::Result<PathBuf> {
    let series_dir = dest.join(format!("series_{}", series.identifier()));
    fs::create_dir_all(&series_dir)?;

    let metadata = MetadataReport::new(series.metadata()).to_string();
    fs::write(series_dir.join("metadata.txt"), metadata)?;

    for (index, frame) in series.frames().iter().enumerate() {
        let frame_path = series_dir.join(format!("frame_{:03}.png", index + 1));
        frame.save(&frame_path)?;
    }

    Ok(series_dir)
}
