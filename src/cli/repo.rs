//! Repository listing command

use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::models::RepoDisplay;
use crate::output::{Formattable, json};

/// Run the repos command
///
/// JSON output is the list of repository names; the table adds license and
/// activity columns.
pub async fn list(opts: &GlobalOptions, name: Option<&str>, license: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.org_client(name)?;

    match ctx.format {
        OutputFormat::Json => {
            let names = client.public_repos(license).await?;
            debug!("Fetched {} repository names", names.len());
            println!("{}", json::format_json(&names)?);
        }
        OutputFormat::Table => {
            let repos = client.repos(license).await?;
            debug!("Fetched {} repositories", repos.len());
            let display: Vec<RepoDisplay> = repos.into_iter().map(RepoDisplay::from).collect();
            display.print(ctx.format)?;
        }
    }

    Ok(())
}
