//! Organization command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output::{Formattable, json};

/// Run the org command
pub async fn get(opts: &GlobalOptions, name: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.org_client(name)?;

    debug!("Fetching organization {}", client.org_name());
    let org = client.org().await?;

    match ctx.format {
        OutputFormat::Table => vec![OrgDisplay::from(org)].print(ctx.format)?,
        OutputFormat::Json => println!("{}", json::format_json(org)?),
    }

    Ok(())
}
