//! Subcommand handlers for patternkit.

use std::path::Path;

use tracing::info;

use patternkit_config::{Config, ConfigValidator, ValidationError};
use patternkit_core::PatternHost;
use patternkit_protocols::editor::EditorSnapshot;
use patternkit_protocols::pattern::Pattern;

use crate::bootstrap::{create_host, register_patterns, Rejected};
use crate::cli::OutputFormat;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build the host and register all configured patterns.
fn load_host(config: &Config) -> Result<PatternHost, Box<dyn std::error::Error>> {
    let host = create_host(config);
    register_patterns(&host, config)?;
    Ok(host)
}

/// List registered patterns.
pub(crate) fn list(config: &Config, format: OutputFormat, category: Option<&str>) -> CommandResult {
    let host = load_host(config)?;
    let patterns: Vec<_> = host
        .registry()
        .get_all()
        .into_iter()
        .filter(|p| category.is_none_or(|c| p.categories().contains(&c)))
        .collect();

    match format {
        OutputFormat::Json => {
            let records: Vec<&Pattern> = patterns.iter().map(|p| p.as_ref()).collect();
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if patterns.is_empty() {
                println!("No patterns registered.");
                return Ok(());
            }

            println!("{:<36} {:<36} {}", "NAME", "TITLE", "CATEGORIES");
            println!("{}", "-".repeat(90));
            for pattern in patterns {
                println!(
                    "{:<36} {:<36} {}",
                    pattern.name(),
                    pattern.title().unwrap_or("-"),
                    pattern.categories().join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Print one pattern as JSON.
pub(crate) fn show(config: &Config, name: &str) -> CommandResult {
    let host = load_host(config)?;
    let pattern = host
        .registry()
        .get(name)
        .ok_or_else(|| format!("Pattern \"{}\" is not registered", name))?;

    println!("{}", serde_json::to_string_pretty(&*pattern)?);
    Ok(())
}

/// Evaluate the template picker against an editor state file.
pub(crate) fn picker(config: &Config, state: &Path) -> CommandResult {
    let content = std::fs::read_to_string(state)?;
    let snapshot: EditorSnapshot = serde_json::from_str(&content)?;

    let host = create_host(config);
    let picker = host.picker();
    let available = picker.is_available(&snapshot);
    let visible = picker.is_visible(&snapshot);
    info!(available, visible, state = %state.display(), "Template picker evaluated");

    println!("available: {}", available);
    println!("visible:   {}", visible);
    Ok(())
}

/// Validate configuration and try registering every pattern definition.
pub(crate) fn check(config: &Config) -> CommandResult {
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error:   {}: {}", error.path, error.message);
    }

    let host = create_host(config);
    let rejected = register_patterns(&host, config)?;
    let rejected = unreported(&rejected, &result.errors);
    for item in &rejected {
        println!("error:   {}: {}", item.origin, item.error);
    }

    let errors = result.errors.len() + rejected.len();
    if errors > 0 {
        return Err(format!("{} configuration error(s)", errors).into());
    }

    println!(
        "ok: {} pattern(s), picker on '{}'",
        host.registry().len(),
        host.picker().post_type()
    );
    Ok(())
}

/// Rejections the validator has not already reported under the same origin.
fn unreported<'a>(rejected: &'a [Rejected], errors: &[ValidationError]) -> Vec<&'a Rejected> {
    rejected
        .iter()
        .filter(|item| {
            let origin = item.origin.to_string();
            !errors.iter().any(|error| {
                error.path == origin || error.path.starts_with(&format!("{}.", origin))
            })
        })
        .collect()
}
