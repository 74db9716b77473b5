//! Ad commands

use admin_core::resources::ad::{self, AdDraft, AdStatus};
use admin_core::{Capability, Confirmation, FilterValue};
use anyhow::Result;
use clap::Subcommand;

use crate::context::AppContext;
use crate::render;

#[derive(Subcommand)]
pub enum AdCommand {
    /// Browse the ad catalog
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Pending, Approved, Rejected or All
        #[arg(short, long, default_value = "All")]
        status: String,
    },

    /// Create an ad (admin only)
    Create {
        #[arg(long)]
        business_name: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        link: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        address: String,
    },

    /// Delete an ad
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(ctx: &AppContext, cmd: AdCommand) -> Result<()> {
    ctx.require(Capability::ManageAds)?;
    let ads = ctx.controller(ad::list_config());

    match cmd {
        AdCommand::List { page, status } => {
            if !status.eq_ignore_ascii_case("all") && AdStatus::parse(&status).is_none() {
                ctx.print_warning(&format!("Unknown status {:?}; showing all ads", status));
            }
            ads.stage(|query| {
                query.set_filter(ad::FILTER_STATUS, FilterValue::Text(status));
                query.set_page(page);
            });
            ads.refresh().await;
            let state = ctx.loaded(ads.snapshot())?;

            ctx.print_header("Ads");
            render::table(
                &["ID", "BUSINESS", "TITLE", "STATUS", "CREATED BY", "CREATED"],
                state
                    .data
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.clone(),
                            a.business_name.clone(),
                            a.title.clone(),
                            render::or_na(a.status.as_deref()),
                            a.creator_name().to_string(),
                            render::date(a.created_at),
                        ]
                    })
                    .collect(),
            );
            ctx.print_list_footer(&state);
        }
        AdCommand::Create {
            business_name,
            title,
            link,
            description,
            address,
        } => {
            ctx.require(Capability::CreateAds)?;
            let draft = AdDraft {
                business_name,
                title,
                link,
                description,
                address,
            };
            let message = ads.create(&draft).await?;
            ctx.print_success(&message);
        }
        AdCommand::Delete { id, yes } => {
            if !ctx.confirm("Are you sure you want to delete this ad?", yes)? {
                ctx.print_info("Cancelled");
                return Ok(());
            }
            let message = ads.remove(&id, Confirmation::confirmed()).await?;
            ctx.print_success(&message);
        }
    }
    Ok(())
}
