//! Stats command implementation.

use crate::error::Result;
use crate::output::Formatter;
use orientador_catalog::Catalog;

/// Execute the stats command.
pub fn execute_stats(catalog: &Catalog, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_stats(&catalog.stats())?);
    Ok(())
}
