//! Kinds command implementation.

use crate::error::Result;
use crate::output::Formatter;
use inkwell_domain::RecordKind;

/// Execute the kinds command.
pub fn execute_kinds(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_kinds(&RecordKind::ALL)?);
    Ok(())
}
