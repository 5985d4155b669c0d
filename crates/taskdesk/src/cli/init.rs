/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When TaskdeskConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

use taskdesk::config::{ServerConfig, TaskdeskConfig};
use taskdesk::Identity;

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to Taskdesk Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a new configuration.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = ServerConfig::default();

    println!("\n{}", style("--- Server ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Backend URL")
        .default(defaults.base_url.clone())
        .interact_text()?;

    println!("\n{}", style("--- User ---").bold());
    let user_id: i64 = Input::with_theme(&theme)
        .with_prompt("User ID")
        .interact_text()?;

    let user_name: String = Input::with_theme(&theme)
        .with_prompt("User name")
        .interact_text()?;

    let config = TaskdeskConfig {
        server: ServerConfig {
            base_url,
            ..defaults
        },
        identity: Identity::new(user_id, user_name),
    };
    config.validate()?;

    let yaml = config.to_yaml()?;
    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
