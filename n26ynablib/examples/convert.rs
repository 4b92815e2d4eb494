use n26ynablib::{config::Config, pipeline::convert_reader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: N26 CSV -> YNAB CSV (stdin -> stdout)
    let n = convert_reader(std::io::stdin().lock(), std::io::stdout().lock(), &Config::default())?;
    eprintln!("converted {n} transaction(s)");
    Ok(())
}
