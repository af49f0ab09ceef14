use anyhow::Result;
use colored::Colorize;
use gradedesk_validation::{format_phone_mask, phone_digits, validate_phone};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{mark, print_json};

#[derive(Serialize)]
struct MaskOutput {
    masked: String,
    digits: String,
    valid: bool,
}

pub fn execute(phone: &str, format: OutputFormat) -> Result<()> {
    let masked = format_phone_mask(phone);
    let valid = validate_phone(&masked);

    match format {
        OutputFormat::Json => print_json(&MaskOutput {
            digits: phone_digits(&masked),
            masked,
            valid,
        })?,
        OutputFormat::Text => {
            let text = if valid { masked.normal() } else { masked.yellow() };
            println!("{} {}", mark(valid), text);
        }
    }

    Ok(())
}
