//! `gracenote whoami` - rebuild the identity locally.

use anyhow::Result;
use colored::Colorize;
use gracenote::{codec, IdentityClient};

use super::Context;
use crate::cli::args::WhoamiArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: WhoamiArgs) -> Result<()> {
    let client_id = ctx.require_client_id()?;
    let client_tag = ctx.require_client_tag()?;
    let user_id = args
        .user_id
        .or_else(|| ctx.config.user_id.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "User ID required.\n\n\
                 Run `gracenote register` first, or pass --user-id <ID>"
            )
        })?;

    let mut client = ctx.client()?;
    client.authenticate(client_id, client_tag, &user_id);

    print_identity(&client, ctx.output_format)
}

fn print_identity(client: &IdentityClient, format: OutputFormat) -> Result<()> {
    let (Some(identity), Some(endpoint)) = (client.identity(), client.endpoint()) else {
        anyhow::bail!("Client is not authenticated");
    };
    let auth = String::from_utf8(codec::encode(identity)?)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "client_id": identity.client_id,
                "user_id": identity.user_id,
                "endpoint": endpoint.as_str(),
                "auth": auth,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Pretty => {
            println!("{}", "Identity".bold().underline());
            println!();
            println!("  {} {}", "client:".bold(), identity.client_id);
            println!("  {} {}", "user:".bold(), identity.user_id);
            println!("  {} {}", "endpoint:".bold(), endpoint);
            println!("  {} {}", "auth:".bold(), auth.dimmed());
        }
    }

    Ok(())
}
