//! Command implementations for the DoomIndex CLI.
//!
//! Offline subcommands answer from a local dataset CSV and boundary
//! GeoJSON file; the others call the disaster query service.

use clap::Subcommand;
use doom_core::record::DisasterType;
use serde::Serialize;

pub mod dataset;
pub mod remote;

const DEFAULT_DATA: &str = "fixtures/data.csv";
const DEFAULT_GEOJSON: &str = "fixtures/countries.geo.json";

#[derive(Subcommand)]
pub enum Command {
    /// List the years with records for a country and disaster type
    Years {
        /// Dataset CSV
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: String,

        /// Country code, e.g. USA
        #[arg(short, long)]
        country: String,

        /// Disaster type label, e.g. Flood
        #[arg(short = 't', long)]
        disaster_type: DisasterType,
    },

    /// List the records of a country, disaster type and year
    Disasters {
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: String,

        #[arg(short, long)]
        country: String,

        #[arg(short = 't', long)]
        disaster_type: DisasterType,

        #[arg(short, long)]
        year: i32,
    },

    /// Print a country's boundary features and the map center
    Boundary {
        /// Boundary GeoJSON FeatureCollection
        #[arg(short, long, default_value = DEFAULT_GEOJSON)]
        geojson: String,

        /// Country code; matched upper-cased
        #[arg(short, long)]
        country: String,
    },

    /// Summarize deaths, affected population and losses for a selection
    Summary {
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: String,

        #[arg(short, long)]
        country: String,

        #[arg(short = 't', long)]
        disaster_type: DisasterType,

        #[arg(short, long)]
        year: i32,
    },

    /// Search the query service for disasters
    Search {
        #[arg(long)]
        term: String,
    },

    /// Fetch the narratives of one disaster
    Detail {
        /// Index of the disaster in the service's search results
        #[arg(long)]
        id: usize,
    },

    /// Ask the response chatbot about a disaster
    Chat {
        #[arg(long)]
        id: usize,

        #[arg(short, long)]
        question: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(command: Command, api_base_url: &str) -> anyhow::Result<()> {
    match command {
        Command::Years {
            data,
            country,
            disaster_type,
        } => {
            let records = dataset::load_records(&data)?;
            print_json(&dataset::years(&records, &country, disaster_type))
        }
        Command::Disasters {
            data,
            country,
            disaster_type,
            year,
        } => {
            let records = dataset::load_records(&data)?;
            print_json(&dataset::disasters(&records, &country, disaster_type, year)?)
        }
        Command::Boundary { geojson, country } => {
            let boundaries = dataset::load_boundaries(&geojson)?;
            print_json(&dataset::boundary(&boundaries, &country))
        }
        Command::Summary {
            data,
            country,
            disaster_type,
            year,
        } => {
            let records = dataset::load_records(&data)?;
            print_json(&dataset::summary(&records, &country, disaster_type, year)?)
        }
        Command::Search { term } => {
            let client = remote::client(api_base_url)?;
            print_json(&remote::search(&client, &term).await?)
        }
        Command::Detail { id } => {
            let client = remote::client(api_base_url)?;
            print_json(&client.detail(id).await?)
        }
        Command::Chat { id, question } => {
            let client = remote::client(api_base_url)?;
            println!("{}", remote::chat(&client, id, &question).await?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dataset_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_bytes!("../../fixtures/data.csv"))
            .unwrap();
        file
    }

    #[tokio::test]
    async fn test_run_offline_commands() {
        let file = dataset_file();
        let data = file.path().to_string_lossy().to_string();

        let years = Command::Years {
            data: data.clone(),
            country: "USA".to_string(),
            disaster_type: DisasterType::Flood,
        };
        run(years, "http://unused").await.unwrap();

        let summary = Command::Summary {
            data,
            country: "USA".to_string(),
            disaster_type: DisasterType::Flood,
            year: 2021,
        };
        run(summary, "http://unused").await.unwrap();
    }

    #[tokio::test]
    async fn test_run_reports_empty_selection() {
        let file = dataset_file();
        let command = Command::Disasters {
            data: file.path().to_string_lossy().to_string(),
            country: "USA".to_string(),
            disaster_type: DisasterType::Drought,
            year: 2020,
        };
        let err = run(command, "http://unused").await.unwrap_err();
        assert_eq!(err.to_string(), "No data found for selected criteria");
    }

    #[tokio::test]
    async fn test_run_missing_file() {
        let command = Command::Years {
            data: "/nonexistent/data.csv".to_string(),
            country: "USA".to_string(),
            disaster_type: DisasterType::Flood,
        };
        assert!(run(command, "http://unused").await.is_err());
    }
}
