//! Doctor command - verify API key and configuration.

use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::llm::API_KEY_ENV;
use console::style;
use std::path::PathBuf;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings, config_path: Option<&str>) -> anyhow::Result<()> {
    Output::header("Recap Doctor");
    println!();

    let mut checks = Vec::new();

    println!("{}", style("API Configuration").bold());
    let api_check = check_api_key(std::env::var(API_KEY_ENV).ok().as_deref());
    api_check.print();
    checks.push(api_check);
    let model_check = CheckResult::ok("Model", &format!("{} @ {}", settings.llm.model, settings.llm.api_base));
    model_check.print();
    checks.push(model_check);

    println!();

    println!("{}", style("Configuration").bold());
    let path = config_path
        .map(Settings::expand_path)
        .unwrap_or_else(Settings::default_config_path);
    let config_check = check_config_file(&path);
    config_check.print();
    checks.push(config_check);

    let prompt_check = check_prompts(settings.prompts_dir());
    prompt_check.print();
    checks.push(prompt_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using Recap.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Recap is ready to use.");
    }

    Ok(())
}

/// Check the Google API key.
fn check_api_key(value: Option<&str>) -> CheckResult {
    let hint = format!("Set with: export {}='...'", API_KEY_ENV);
    match value {
        Some(key) if key.chars().count() > 12 => {
            CheckResult::ok(API_KEY_ENV, &format!("configured ({})", mask_key(key)))
        }
        Some("") => CheckResult::error(API_KEY_ENV, "empty", &hint),
        Some(_) => CheckResult::warning(
            API_KEY_ENV,
            "set but looks too short",
            "Google API keys are usually 39 characters",
        ),
        None => CheckResult::error(API_KEY_ENV, "not set", &hint),
    }
}

/// Keep the first and last four characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Check if config file exists and parses.
fn check_config_file(path: &PathBuf) -> CheckResult {
    if !path.exists() {
        return CheckResult::warning(
            "Config file",
            "using defaults",
            &format!("Create {} to override them", path.display()),
        );
    }

    match Settings::load_from(Some(path)) {
        Ok(_) => CheckResult::ok("Config file", &format!("{}", path.display())),
        Err(e) => CheckResult::error("Config file", &e.to_string(), "Fix the TOML syntax"),
    }
}

/// Check the custom prompt directory, if configured.
fn check_prompts(dir: Option<PathBuf>) -> CheckResult {
    let Some(dir) = dir else {
        return CheckResult::ok("Prompts", "built-in");
    };

    if !dir.join("summary.toml").exists() {
        return CheckResult::warning(
            "Prompts",
            &format!("{} has no summary.toml", dir.display()),
            "Built-in prompts will be used",
        );
    }

    match Prompts::load(Some(dir.as_path())) {
        Ok(_) => CheckResult::ok("Prompts", &format!("{}", dir.join("summary.toml").display())),
        Err(e) => CheckResult::error("Prompts", &e.to_string(), "Fix the TOML syntax"),
    }
}
