use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Historical location of the dataset at the repository root
pub const DEFAULT_INPUT: &str = "sri_lanka_cities.json";

/// Historical migration path the output was always written to
pub const DEFAULT_OUTPUT: &str = "database/migrations/003_import_sri_lankan_cities.sql";

#[derive(Parser, Debug)]
#[command(name = "lk-cities-to-sql")]
#[command(version, about = "Generate a PostgreSQL/PostGIS migration from Sri Lanka city data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the SQL migration file from a cities JSON file
    Generate {
        /// Input JSON file (array of city records)
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output SQL migration path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Validate the input JSON and report skipped records without writing
    Check {
        /// Input JSON file (array of city records)
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },

    /// List the place names classified as major cities
    MajorCities,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
