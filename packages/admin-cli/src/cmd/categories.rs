//! Category commands

use admin_core::resources::category::{self, CategoryDraft};
use admin_core::{Capability, Confirmation};
use anyhow::Result;
use clap::Subcommand;

use crate::context::AppContext;
use crate::render;

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List categories
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Add a category
    Add {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Rename or re-describe a category
    Update {
        id: String,
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Delete a category (admin only)
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(ctx: &AppContext, cmd: CategoryCommand) -> Result<()> {
    ctx.require(Capability::ManageCategories)?;
    let categories = ctx.controller(category::list_config());

    match cmd {
        CategoryCommand::List { page } => {
            categories.set_page(page).await;
            let state = ctx.loaded(categories.snapshot())?;

            ctx.print_header("Categories");
            render::table(
                &["ID", "NAME", "DESCRIPTION"],
                state
                    .data
                    .iter()
                    .map(|c| vec![c.id.clone(), c.name.clone(), c.description.clone()])
                    .collect(),
            );
            ctx.print_list_footer(&state);
        }
        CategoryCommand::Add { name, description } => {
            let message = categories
                .create(&CategoryDraft::new(name, description))
                .await?;
            ctx.print_success(&message);
        }
        CategoryCommand::Update {
            id,
            name,
            description,
        } => {
            let message = categories
                .update(&id, &CategoryDraft::new(name, description))
                .await?;
            ctx.print_success(&message);
        }
        CategoryCommand::Delete { id, yes } => {
            ctx.require(Capability::DeleteCategories)?;
            if !ctx.confirm("Are you sure you want to delete this category?", yes)? {
                ctx.print_info("Cancelled");
                return Ok(());
            }
            let message = categories.remove(&id, Confirmation::confirmed()).await?;
            ctx.print_success(&message);
        }
    }
    Ok(())
}
