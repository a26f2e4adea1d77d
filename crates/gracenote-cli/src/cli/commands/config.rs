//! `gracenote config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Pretty => {
            let unset = || "(not set)".dimmed().to_string();

            println!("{}", "Current Configuration:".bold());
            println!();
            println!("  {} {}", "client_id:".bold(), config.client_id.clone().unwrap_or_else(unset));
            println!("  {} {}", "client_tag:".bold(), config.client_tag.clone().unwrap_or_else(unset));

            // User ID (masked)
            let user_display = config
                .user_id
                .as_deref()
                .map(mask)
                .unwrap_or_else(unset);
            println!("  {} {}", "user_id:".bold(), user_display);

            println!(
                "  {} {}",
                "timeout_secs:".bold(),
                config
                    .timeout_secs
                    .map_or_else(|| "30 (default)".to_string(), |t| t.to_string())
            );
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
        }
    }

    Ok(())
}

fn set_config(ctx: Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config;
    config.set(key, value)?;
    config.save(&ctx.config_path)?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());

    Ok(())
}

fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::mask;

    #[test]
    fn test_mask() {
        assert_eq!(mask("123456789-ABCDEF"), "1234...CDEF");
        assert_eq!(mask("short"), "****");
    }
}
