//! Dashboard totals

use admin_core::resources::dashboard;
use admin_core::Capability;
use anyhow::Result;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    ctx.require(Capability::ViewDashboard)?;

    let stats = dashboard::fetch(&ctx.client).await?;

    ctx.print_header("Dashboard");
    println!("  Total users            {}", stats.total_users);
    println!("  New users today        {}", stats.total_users_today);
    println!("  Posts today            {}", stats.total_posts_today);
    println!("  Posts this month       {}", stats.total_posts_this_month);
    println!("  Posts this year        {}", stats.total_posts_this_year);
    Ok(())
}
