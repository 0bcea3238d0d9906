use anyhow::Result;
use clap::Parser;

use expenso::data;

#[derive(Parser)]
#[command(name = "expenso", about = "Normalizes an exported transaction database into an expenses CSV.")]
struct Cli {
    /// File to process
    #[arg(long = "input_path", default_value = "../data/exported_database.csv")]
    input_path: String,

    /// Path to save the processed file
    #[arg(long = "output_path", default_value = "../data/expenses.csv")]
    output_path: String,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        // Errors go to stdout, consumers read the exit code.
        println!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let expenses = data::process_csv(&cli.input_path)?;
    data::export_csv(&cli.output_path, &expenses)?;

    Ok(())
}
