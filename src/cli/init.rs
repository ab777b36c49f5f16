//! Init command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Write (or update) the config file.
///
/// An existing file keeps its other settings unless `force` is set.
pub fn run(opts: &GlobalOptions, org: Option<String>, force: bool) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    let mut config = if path.exists() && !force {
        Config::load_from(&path)?
    } else {
        Config::default()
    };

    if org.is_some() {
        config.org = org;
    }
    if opts.api_url.is_some() {
        config.api_url = opts.api_url.clone();
    }
    config.validate()?;
    config.save_to(&path)?;

    println!(
        "{} Wrote configuration to {}",
        "✓".green(),
        path.display().to_string().bold()
    );
    if let Some(ref org) = config.org {
        println!("  Default organization: {}", org);
    }

    Ok(())
}
