use anyhow::Result;
use lk_cities_to_sql::{
    cli::{Cli, Commands},
    report::ConsoleReporter,
    schema::MAJOR_CITIES,
    writer::{check_dataset, generate_migration},
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate { input, output } => {
            let start = Instant::now();
            let mut reporter = ConsoleReporter::new();

            let stats = generate_migration(&input, &output, &mut reporter)?;

            let elapsed = start.elapsed();
            println!(
                "\nWrote {:?} ({} of {} records, {} skipped, {} errors) in {:.1}s",
                output,
                stats.written,
                stats.total,
                stats.skipped,
                stats.errors,
                elapsed.as_secs_f64()
            );
        }

        Commands::Check { input } => {
            let mut reporter = ConsoleReporter::new();

            let stats = check_dataset(&input, &mut reporter)?;

            println!(
                "\n{} records: {} valid, {} skipped, {} errors",
                stats.total, stats.written, stats.skipped, stats.errors
            );
        }

        Commands::MajorCities => {
            println!("Major cities:\n");
            for name in MAJOR_CITIES {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
