//! Extraction command implementation.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use inkwell_domain::RecordKind;
use inkwell_extractor::Extractor;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Execute an extraction command.
pub fn execute_extract(
    kind: RecordKind,
    args: &InputArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args, io::stdin())?;
    debug!(kind = %kind, bytes = text.len(), "Read input");

    let record = extractor.extract(kind, &text);

    println!("{}", formatter.format_record(&record)?);
    if let Some(gaps) = formatter.gaps(&record) {
        println!("{}", gaps);
    }

    Ok(())
}

/// Read the text to extract from the inline argument, a file, or `stdin`.
pub fn read_input<R: Read>(args: &InputArgs, mut stdin: R) -> Result<String> {
    if let Some(text) = &args.text {
        Ok(text.clone())
    } else if args.stdin {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = &args.file {
        Ok(fs::read_to_string(file_path)?)
    } else {
        Err(CliError::InvalidInput(
            "Must specify text, --file, or --stdin".to_string(),
        ))
    }
}
