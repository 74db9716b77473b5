//! Publisher application commands

use admin_core::resources::role_request::{self, RoleDecision};
use admin_core::Capability;
use anyhow::Result;
use clap::Subcommand;

use crate::context::AppContext;
use crate::render;

#[derive(Subcommand)]
pub enum RoleRequestCommand {
    /// List publisher applications
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Accept an application
    Approve { id: String },

    /// Reject an application
    Reject { id: String },
}

pub async fn run(ctx: &AppContext, cmd: RoleRequestCommand) -> Result<()> {
    ctx.require(Capability::ReviewRoleRequests)?;
    let requests = ctx.controller(role_request::list_config());

    match cmd {
        RoleRequestCommand::List { page } => {
            requests.set_page(page).await;
            let state = ctx.loaded(requests.snapshot())?;

            ctx.print_header("Publisher requests");
            render::table(
                &["ID", "NAME", "EMAIL", "CONTACT", "STATUS", "APPLIED"],
                state
                    .data
                    .iter()
                    .map(|r| {
                        vec![
                            r.id.clone(),
                            r.name.clone(),
                            r.email.clone(),
                            r.contact.clone(),
                            render::or_na(r.verification_status.as_deref()),
                            render::date(r.created_at),
                        ]
                    })
                    .collect(),
            );
            ctx.print_list_footer(&state);
        }
        RoleRequestCommand::Approve { id } => decide(ctx, &requests, &id, RoleDecision::Accepted).await?,
        RoleRequestCommand::Reject { id } => decide(ctx, &requests, &id, RoleDecision::Rejected).await?,
    }
    Ok(())
}

async fn decide(
    ctx: &AppContext,
    requests: &admin_core::ResourceListController<role_request::RoleRequest>,
    id: &str,
    decision: RoleDecision,
) -> Result<()> {
    let message = requests.update(id, &decision).await?;
    ctx.print_success(&format!("{} ({})", message, decision.as_str()));
    Ok(())
}
