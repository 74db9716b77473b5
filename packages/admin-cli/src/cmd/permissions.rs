//! Staff account commands

use admin_core::resources::permission::{self, RoleChange, StaffDraft};
use admin_core::{Capability, Confirmation};
use anyhow::{Context, Result};
use clap::Subcommand;
use dialoguer::Password;

use crate::context::AppContext;
use crate::render;

#[derive(Subcommand)]
pub enum PermissionCommand {
    /// List staff accounts
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Create a staff account; the password is prompted for
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// admin, editor or publisher
        #[arg(long)]
        role: String,
    },

    /// Change the role of a staff account
    SetRole { id: String, role: String },

    /// Delete a staff account
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(ctx: &AppContext, cmd: PermissionCommand) -> Result<()> {
    ctx.require(Capability::ManagePermissions)?;
    let accounts = ctx.controller(permission::list_config());

    match cmd {
        PermissionCommand::List { page } => {
            accounts.set_page(page).await;
            let state = ctx.loaded(accounts.snapshot())?;

            ctx.print_header("Staff accounts");
            render::table(
                &["ID", "NAME", "EMAIL", "ROLE", ""],
                state
                    .data
                    .iter()
                    .map(|a| {
                        let protected = if ctx.config.is_protected_account(&a.email) {
                            "protected"
                        } else {
                            ""
                        };
                        vec![
                            a.id.clone(),
                            a.name.clone(),
                            a.email.clone(),
                            a.role.clone(),
                            protected.to_string(),
                        ]
                    })
                    .collect(),
            );
            ctx.print_list_footer(&state);
        }
        PermissionCommand::Create { name, email, role } => {
            let password = Password::with_theme(&ctx.theme())
                .with_prompt("Password for the new account")
                .with_confirmation("Repeat password", "Passwords do not match")
                .interact()?;
            let draft = StaffDraft {
                name,
                email,
                password,
                role: role.to_lowercase(),
            };
            let message = accounts.create(&draft).await?;
            ctx.print_success(&message);
        }
        PermissionCommand::SetRole { id, role } => {
            let message = accounts
                .update(&id, &RoleChange::new(role.to_lowercase()))
                .await?;
            ctx.print_success(&message);
        }
        PermissionCommand::Delete { id, yes } => {
            let account = permission::find(&ctx.client, &id)
                .await?
                .with_context(|| format!("No staff account with id {}", id))?;
            permission::ensure_deletable(&account, &ctx.config)?;

            if !ctx.confirm(
                &format!("Are you sure you want to delete {}?", account.email),
                yes,
            )? {
                ctx.print_info("Cancelled");
                return Ok(());
            }
            let message = accounts.remove(&id, Confirmation::confirmed()).await?;
            ctx.print_success(&message);
        }
    }
    Ok(())
}
