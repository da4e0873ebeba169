use tracing::debug;

use uwb_drift::{BudgetConfig, DriftBudget, Result};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = BudgetConfig::default();
    debug!(?config, "computing sync drift budget");

    let budget = DriftBudget::new(config)?;
    println!("{}", budget.report());

    Ok(())
}
