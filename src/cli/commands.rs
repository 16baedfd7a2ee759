//! Subcommand handlers.

use crate::cli::output::Output;
use crate::cli::{Cli, Commands};
use crate::storage::FileStore;
use crate::transport::ReqwestTransport;
use crate::utils::config::ClientConfig;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use sentinel_session::{
    Access, Claims, Navigator, SessionContext, SystemClock, LOGIN_FAILED_MESSAGE,
};
use std::sync::Arc;

/// The terminal has no page to navigate to; a redirect to the login route
/// becomes a prompt to sign in again.
pub struct TerminalNavigator {
    output: Output,
}

impl TerminalNavigator {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Navigator for TerminalNavigator {
    fn redirect(&self, path: &str) {
        tracing::debug!(path, "Redirect requested");
        self.output.hint("This command needs a valid session. Sign in with:");
        self.output.command("sentinel login -u <username>");
    }
}

/// Builds the session context for one invocation.
pub fn build_context(config: &ClientConfig, output: Output) -> SessionContext {
    SessionContext::new(
        config.api.clone(),
        Arc::new(FileStore::new(&config.state_path)),
        Arc::new(ReqwestTransport::new()),
        Arc::new(TerminalNavigator::new(output)),
        Arc::new(SystemClock),
    )
}

/// Runs the parsed command line.
pub async fn run(cli: Cli, output: Output) -> Result<()> {
    let config = ClientConfig::load(
        &cli.config,
        cli.api_url.as_deref(),
        cli.state_file.as_deref(),
    )?;
    tracing::debug!(
        api = config.api.base_url(),
        state = %config.state_path.display(),
        "Loaded configuration"
    );
    let ctx = build_context(&config, output);

    match cli.command {
        Commands::Login { username, password } => login(&ctx, output, &username, password).await,
        Commands::Logout => logout(&ctx, output),
        Commands::Chat { message } => chat(&ctx, output, &message).await,
        Commands::Status => status(&ctx, output).await,
        Commands::Whoami => whoami(&ctx, output),
    }
}

pub async fn login(
    ctx: &SessionContext,
    output: Output,
    username: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("  Password: ").context("Failed to read password")?,
    };

    ctx.login(username, &password)
        .await
        .context(LOGIN_FAILED_MESSAGE)?;

    output.success("Logged in");
    match ctx.guard().current_claims() {
        Some(claims) => print_claims(output, &claims),
        None => output.warning("Token stored, but its claims could not be read"),
    }
    Ok(())
}

/// Clears the stored credential. There is no page to leave, so unlike the
/// guard's logout this issues no redirect.
pub fn logout(ctx: &SessionContext, output: Output) -> Result<()> {
    ctx.tokens()
        .clear()
        .context("Failed to remove the stored credential")?;
    output.success("Logged out");
    Ok(())
}

pub async fn chat(ctx: &SessionContext, output: Output, message: &str) -> Result<()> {
    require_session(ctx)?;

    let response = ctx.api().chat(message).await?;
    output.reply("Sentinel", &response.reply);
    Ok(())
}

pub async fn status(ctx: &SessionContext, output: Output) -> Result<()> {
    output.info(&format!("Checking {}", ctx.api().config().base_url()));
    let health = ctx.api().health().await?;
    output.kv("Status", &health.status);
    Ok(())
}

pub fn whoami(ctx: &SessionContext, output: Output) -> Result<()> {
    require_session(ctx)?;

    match ctx.guard().current_claims() {
        Some(claims) => {
            print_claims(output, &claims);
            Ok(())
        }
        // Expired between the two checks.
        None => bail!("Session expired"),
    }
}

/// Runs the guard the way a navigation to `/chat` would.
fn require_session(ctx: &SessionContext) -> Result<()> {
    if ctx.guard().enforce() == Access::Deny {
        bail!("Not signed in");
    }
    Ok(())
}

fn print_claims(output: Output, claims: &Claims) {
    output.kv("Subject", &claims.subject);
    if let Some(role) = claims.role() {
        output.kv("Role", role);
    }
    output.kv("Expires", &format_expiry(claims.expires_at));
}

fn format_expiry(epoch_secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(epoch_secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_expiry(1_750_000_000), "2025-06-15 15:06:40 UTC");
    }
}
