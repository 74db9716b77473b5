//! Post commands

use admin_core::resources::post::{self, Post, PostDraft};
use admin_core::{Capability, Confirmation, FilterValue};
use anyhow::{bail, Result};
use clap::Subcommand;

use crate::context::AppContext;
use crate::render;

#[derive(Subcommand)]
pub enum PostCommand {
    /// List posts
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Category name ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,
        /// Title contains
        #[arg(short, long)]
        title: Option<String>,
        /// Author name contains
        #[arg(short, long)]
        author: Option<String>,
        /// Featured posts only
        #[arg(short, long)]
        featured: bool,
    },

    /// Show one post
    Show { id: String },

    /// Edit a post; omitted fields keep their current value
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Category id
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        featured: Option<bool>,
        #[arg(long)]
        tag: Vec<String>,
    },

    /// Delete a post (admins and publishers)
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(ctx: &AppContext, cmd: PostCommand) -> Result<()> {
    ctx.require(Capability::ManagePosts)?;
    let posts = ctx.controller(post::list_config());

    match cmd {
        PostCommand::List {
            page,
            category,
            title,
            author,
            featured,
        } => {
            posts.stage(|query| {
                if let Some(category) = category {
                    query.set_filter(post::FILTER_CATEGORY, FilterValue::Text(category));
                }
                if let Some(author) = author {
                    query.set_filter(post::FILTER_AUTHOR, FilterValue::Text(author));
                }
                query.set_filter(post::FILTER_FEATURED, FilterValue::Flag(featured));
                if let Some(title) = title {
                    query.set_search_text(title);
                }
                query.set_page(page);
            });
            posts.refresh().await;

            let state = ctx.loaded(posts.snapshot())?;
            let session = ctx.session.snapshot();

            ctx.print_header("Posts");
            render::table(
                &["ID", "TITLE", "CATEGORY", "AUTHOR", "FEATURED", "LIKES", "VIEWS"],
                post::visible_to(&state.data, &session)
                    .map(|p| {
                        vec![
                            p.id.clone(),
                            p.title.clone(),
                            p.category_name().to_string(),
                            p.author_name().to_string(),
                            if p.featured { "yes" } else { "no" }.to_string(),
                            p.likes.to_string(),
                            p.views.to_string(),
                        ]
                    })
                    .collect(),
            );
            ctx.print_list_footer(&state);
        }
        PostCommand::Show { id } => {
            let post = fetch_visible(ctx, &id).await?;
            ctx.print_header(&post.title);
            println!("Category: {}", render::or_na(Some(post.category_name())));
            println!("Author:   {}", render::or_na(Some(post.author_name())));
            println!("Featured: {}", post.featured);
            println!("Tags:     {}", post.tags.join(", "));
            println!();
            println!("{}", post.content);
        }
        PostCommand::Update {
            id,
            title,
            content,
            category,
            featured,
            tag,
        } => {
            if !ctx.confirm("Are you sure you want to update this post?", ctx.quiet)? {
                ctx.print_info("Cancelled");
                return Ok(());
            }

            let current = fetch_visible(ctx, &id).await?;
            let mut draft = PostDraft::from(&current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(content) = content {
                draft.content = content;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(featured) = featured {
                draft.featured = featured;
            }
            if !tag.is_empty() {
                draft.tags = tag;
            }

            let message = posts.update(&id, &draft).await?;
            ctx.print_success(&message);
        }
        PostCommand::Delete { id, yes } => {
            ctx.require(Capability::DeletePosts)?;
            if !ctx.confirm("Are you sure you want to delete this post?", yes)? {
                ctx.print_info("Cancelled");
                return Ok(());
            }
            let message = posts.remove(&id, Confirmation::confirmed()).await?;
            ctx.print_success(&message);
        }
    }
    Ok(())
}

/// Load one post, refusing publishers someone else's.
async fn fetch_visible(ctx: &AppContext, id: &str) -> Result<Post> {
    let post: Post = ctx.client.fetch_json(&post::detail_request(id), false).await?;
    let session = ctx.session.snapshot();
    if post::visible_to(std::slice::from_ref(&post), &session).next().is_none() {
        bail!("Access denied: publishers can only manage their own posts");
    }
    Ok(post)
}
