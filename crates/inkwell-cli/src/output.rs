//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use inkwell_domain::{Record, RecordKind, StructuredRecord, WorldSection};
use serde_json::{Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an extracted record.
    pub fn format_record(&self, record: &Record) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&record_json(record))?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(format_record_quiet(record)),
        }
    }

    /// Format a record as a two-column table.
    fn format_record_table(&self, record: &Record) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        for (name, value) in record.fields() {
            let value = if value.is_empty() { "-".to_string() } else { value };
            builder.push_record([name.to_string(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the supported record kinds.
    pub fn format_kinds(&self, kinds: &[RecordKind]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_kinds: Vec<Value> = kinds
                    .iter()
                    .map(|kind| {
                        serde_json::json!({
                            "kind": kind.as_str(),
                            "fields": Record::field_names(*kind),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_kinds)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Kind", "Fields"]);
                for kind in kinds {
                    builder.push_record([
                        kind.as_str().to_string(),
                        Record::field_names(*kind).join(", "),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(kinds
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Note listing the fields a record left empty, for table output only.
    pub fn gaps(&self, record: &Record) -> Option<String> {
        if self.format != OutputFormat::Table {
            return None;
        }
        let empty = record.empty_fields();
        if empty.is_empty() {
            return None;
        }
        Some(self.warning(&format!("Not found in text: {}", empty.join(", "))))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON object keyed by canonical field names; world sections stay objects.
pub fn record_json(record: &Record) -> Value {
    if let Record::World(world) = record {
        let mut object = Map::new();
        for section in WorldSection::ALL {
            let value = match world.entries(section) {
                None => Value::String(world.era.clone()),
                Some(entries) => serde_json::json!(entries),
            };
            object.insert(section.as_str().to_string(), value);
        }
        return Value::Object(object);
    }

    let object = record
        .fields()
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value)))
        .collect::<Map<_, _>>();
    Value::Object(object)
}

/// `field: value` for every non-empty field.
fn format_record_quiet(record: &Record) -> String {
    record
        .fields()
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}
