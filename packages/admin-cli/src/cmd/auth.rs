//! Login, logout and identity commands

use admin_core::Capability;
use anyhow::Result;
use dialoguer::{Input, Password};

use crate::context::AppContext;

const CAPABILITIES: [Capability; 10] = [
    Capability::ViewDashboard,
    Capability::ManageCategories,
    Capability::DeleteCategories,
    Capability::ManagePosts,
    Capability::DeletePosts,
    Capability::ManageAds,
    Capability::CreateAds,
    Capability::ManageUsers,
    Capability::ManagePermissions,
    Capability::ReviewRoleRequests,
];

pub async fn login(ctx: &AppContext, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&ctx.theme())
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = Password::with_theme(&ctx.theme())
        .with_prompt("Password")
        .interact()?;

    let claims = ctx.client.sign_in(&email, &password).await?;

    ctx.print_success(&format!("Logged in as {} ({})", claims.name(), claims.role()));
    if let Some(path) = &ctx.config.session_file {
        ctx.print_info(&format!(
            "Session stored in {} for {} days",
            path.display(),
            ctx.config.session_ttl_days
        ));
    }
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.session.logout();
    ctx.print_success("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    let state = ctx.session.snapshot();
    let Some(claims) = state.claims() else {
        ctx.print_warning("Not logged in");
        return Ok(());
    };

    ctx.print_header(&format!("{} ({})", claims.name(), claims.role()));
    if let Some(expires_at) = claims.expires_at() {
        ctx.print_info(&format!("Token expires {}", expires_at.format("%Y-%m-%d %H:%M UTC")));
    }

    for capability in CAPABILITIES {
        let mark = if state.permits(capability) { "yes" } else { "no" };
        println!("  {:<20} {}", format!("{:?}", capability), mark);
    }
    Ok(())
}
