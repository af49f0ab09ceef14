use anyhow::{bail, Result};
use colored::Colorize;
use gradedesk_validation::check_password_requirements;

use crate::config::OutputFormat;
use crate::output::{print_json, print_requirements};

pub fn execute(
    password: &str,
    full_name: &str,
    email: &str,
    username: &str,
    format: OutputFormat,
) -> Result<()> {
    let requirements = check_password_requirements(password, full_name, email, username);

    match format {
        OutputFormat::Json => print_json(&requirements)?,
        OutputFormat::Text => {
            println!("{}", "Password requirements".bold());
            print_requirements(&requirements, "  ");
        }
    }

    if !requirements.all_met() {
        bail!("Password does not meet the requirements");
    }

    Ok(())
}
