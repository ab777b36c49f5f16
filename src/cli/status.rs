//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ghorg Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let file_exists = config_path.exists();
    let mut config = Config::load_at(opts.config_ref())?;

    if file_exists {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    if let Some(ref url) = opts.api_url {
        config.api_url = Some(url.clone());
    }

    println!();
    println!("{} API root: {}", "✓".green(), config.api_url());
    println!("{} Request timeout: {}s", "✓".green(), config.timeout_secs);

    match config.org {
        Some(ref org) => println!("{} Default organization: {}", "✓".green(), org),
        None => {
            println!("{} No default organization set", "○".dimmed());
            println!("  → Run 'ghorg init --org <ORG>' to set one");
        }
    }

    Ok(())
}
