use anyhow::Result;
use colored::{ColoredString, Colorize};
use gradedesk_validation::PasswordRequirements;
use serde::Serialize;

pub fn mark(ok: bool) -> ColoredString {
    if ok {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_requirements(requirements: &PasswordRequirements, indent: &str) {
    for (requirement, met) in requirements.iter() {
        let line = if met {
            requirement.description().normal()
        } else {
            requirement.description().dimmed()
        };
        println!("{}{} {}", indent, mark(met), line);
    }
}
