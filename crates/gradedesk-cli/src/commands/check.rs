use anyhow::{bail, Context, Result};
use colored::Colorize;
use gradedesk_validation::{field_message, Field, FormReport, RegistrationInput};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::OutputFormat;
use crate::output::{mark, print_json, print_requirements};
use crate::CheckArgs;

#[derive(Serialize)]
struct CheckOutput {
    valid: bool,
    report: FormReport,
    errors: BTreeMap<String, Vec<String>>,
}

pub fn execute(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let input = build_input(&args)?;
    let report = FormReport::evaluate(&input);
    let valid = report.is_valid();

    match format {
        OutputFormat::Json => print_json(&CheckOutput {
            valid,
            report,
            errors: report.errors(),
        })?,
        OutputFormat::Text => print_report(&report),
    }

    if !valid {
        bail!("Please fix the errors in the form before submitting");
    }

    Ok(())
}

/// Form values from the optional file, with command-line flags on top
fn build_input(args: &CheckArgs) -> Result<RegistrationInput> {
    let mut input = match &args.file {
        Some(path) => load_input(path)?,
        None => RegistrationInput::default(),
    };

    let overrides = [
        (Field::FullName, &args.full_name),
        (Field::Phone, &args.phone),
        (Field::Email, &args.email),
        (Field::Username, &args.username),
        (Field::Password1, &args.password),
        (Field::Password2, &args.confirm),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            input.set(field, value.as_str());
        }
    }

    Ok(input)
}

/// Reads form values from a `.json` file, or TOML for any other extension
pub fn load_input(path: &Path) -> Result<RegistrationInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {:?}", path))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let input = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse form file: {:?}", path))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse form file: {:?}", path))?
    };

    tracing::debug!(path = ?path, json = is_json, "form values loaded");
    Ok(input)
}

fn print_report(report: &FormReport) {
    println!("{}", "Registration form".bold());
    println!();

    for field in Field::ALL {
        let ok = report.field(field);
        if field == Field::Password1 {
            println!("  {} {}", mark(ok), field.id());
            print_requirements(&report.password, "      ");
        } else if ok {
            println!("  {} {}", mark(ok), field.id());
        } else {
            println!("  {} {}  {}", mark(ok), field.id(), field_message(field).yellow());
        }
    }

    println!();
    if report.is_valid() {
        println!("{}", "Form is valid, submission allowed".green().bold());
    } else {
        let invalid: Vec<_> = report.invalid_fields().iter().map(|f| f.id()).collect();
        println!("{} {}", "Invalid fields:".red().bold(), invalid.join(", "));
    }
}
