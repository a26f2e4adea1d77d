//! `gracenote register` - obtain a user ID from the service.

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::Context;
use crate::cli::args::RegisterArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: RegisterArgs) -> Result<()> {
    let client_id = ctx.require_client_id()?;
    let client_tag = ctx.require_client_tag()?;

    let mut client = ctx.client()?;
    let user_id = client
        .register(client_id, client_tag)
        .context("Registration failed")?;

    if !args.no_save {
        let mut config = ctx.config.clone();
        config.client_id = Some(client_id.to_string());
        config.client_tag = Some(client_tag.to_string());
        config.user_id = Some(user_id.clone());
        config.save(&ctx.config_path)?;
        tracing::debug!(path = %ctx.config_path.display(), "identity saved");
    }

    let endpoint = client
        .endpoint()
        .map(ToString::to_string)
        .unwrap_or_default();

    match ctx.output_format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "client_id": format!("{client_id}-{client_tag}"),
                "user_id": user_id,
                "endpoint": endpoint,
                "saved": !args.no_save,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Pretty => {
            println!("{} Registered.", "Success:".green().bold());
            println!("  {} {}", "user_id:".bold(), user_id);
            println!("  {} {}", "endpoint:".bold(), endpoint);
            if args.no_save {
                println!("{}", "Not saved: pass --user-id to whoami to reuse it".yellow());
            } else {
                println!("  {} {}", "saved to:".bold(), ctx.config_path.display());
            }
        }
    }

    Ok(())
}
