//! User commands

use admin_core::resources::user;
use admin_core::Capability;
use anyhow::Result;
use clap::Subcommand;

use crate::context::AppContext;
use crate::render;

#[derive(Subcommand)]
pub enum UserCommand {
    /// List registered users, or search them by name or email
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(short, long)]
        search: Option<String>,
    },
}

pub async fn run(ctx: &AppContext, cmd: UserCommand) -> Result<()> {
    ctx.require(Capability::ManageUsers)?;
    let users = ctx.controller(user::list_config());

    match cmd {
        UserCommand::List { page, search } => {
            users.stage(|query| {
                if let Some(search) = search {
                    query.set_search_text(search);
                }
                query.set_page(page);
            });
            users.refresh().await;
            let state = ctx.loaded(users.snapshot())?;

            ctx.print_header("Users");
            render::table(
                &["ID", "NAME", "EMAIL", "ROLE", "JOINED"],
                state
                    .data
                    .iter()
                    .map(|u| {
                        vec![
                            u.id.clone(),
                            u.name.clone(),
                            u.email.clone(),
                            render::or_na(u.role.as_deref()),
                            render::date(u.created_at),
                        ]
                    })
                    .collect(),
            );
            ctx.print_list_footer(&state);
        }
    }
    Ok(())
}
