// src/bin/cli.rs
use sheet_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = cli::run()?;
    println!("Wrote {} records to {}", summary.records, summary.out_path.display());
    Ok(())
}
