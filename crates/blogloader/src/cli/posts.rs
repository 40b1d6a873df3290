use crate::prelude::{println, *};
use blogloader::{PaginatedResponse, Post, PostFilter, DEFAULT_FEATURED_COUNT, DEFAULT_PAGE_SIZE};
use colored::Colorize;

use super::{print_json, truncate_text};

#[derive(Debug, clap::Parser)]
#[command(name = "posts")]
#[command(about = "Blog post operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of posts, optionally filtered
    #[clap(name = "list")]
    List(ListOptions),

    /// List every published post
    #[clap(name = "all")]
    All(OutputOptions),

    /// Read a single post by slug
    #[clap(name = "get")]
    Get(GetOptions),

    /// Show the most recent posts
    #[clap(name = "featured")]
    Featured(FeaturedOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of posts per page
    #[arg(short, long, env = "BLOG_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: usize,

    /// Free-text search query
    #[arg(short, long, conflicts_with_all = ["category", "tag"])]
    pub query: Option<String>,

    /// Category slug
    #[arg(long, conflicts_with = "tag")]
    pub category: Option<String>,

    /// Tag slug
    #[arg(long)]
    pub tag: Option<String>,

    #[clap(flatten)]
    pub output: OutputOptions,
}

impl ListOptions {
    fn filter(&self) -> PostFilter {
        if let Some(query) = &self.query {
            PostFilter::Search(query.clone())
        } else if let Some(slug) = &self.category {
            PostFilter::Category(slug.clone())
        } else if let Some(slug) = &self.tag {
            PostFilter::Tag(slug.clone())
        } else {
            PostFilter::All
        }
    }

    /// Flags that reproduce the current filter on another page
    fn filter_args(&self) -> String {
        match self.filter() {
            PostFilter::All => String::new(),
            PostFilter::Search(query) => format!(" --query {query:?}"),
            PostFilter::Category(slug) => format!(" --category {slug}"),
            PostFilter::Tag(slug) => format!(" --tag {slug}"),
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Post slug
    pub slug: String,

    #[clap(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, clap::Args, Clone)]
pub struct FeaturedOptions {
    /// Number of posts to show
    #[arg(short, long, default_value_t = DEFAULT_FEATURED_COUNT)]
    pub count: usize,

    #[clap(flatten)]
    pub output: OutputOptions,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    match app.command {
        Commands::List(options) => {
            let page = client
                .posts_page(&options.filter(), options.page, options.limit)
                .await?;

            if options.output.json {
                print_json(&page)
            } else {
                println!("{}", format_page_text(&page, &options));
                Ok(())
            }
        }
        Commands::All(output) => {
            let posts = client.list_posts().await?;
            output_posts(&posts, "ALL POSTS", output.json)
        }
        Commands::Get(options) => {
            let post = client.get_post_by_slug(&options.slug).await?;

            if options.output.json {
                print_json(&post)
            } else {
                println!("{}", format_post_text(&post));
                Ok(())
            }
        }
        Commands::Featured(options) => {
            let posts = client.featured_posts(options.count).await?;
            output_posts(&posts, "FEATURED POSTS", options.output.json)
        }
    }
}

fn output_posts(posts: &[Post], heading: &str, json: bool) -> Result<()> {
    if json {
        return print_json(&posts);
    }

    println!("\n{}", heading.bright_cyan().bold());
    if posts.is_empty() {
        println!("{}", "No posts.".yellow());
    } else {
        posts_table(posts).printstd();
    }

    Ok(())
}

fn posts_table(posts: &[Post]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Title", "Slug", "Date", "Author", "Tags"]);

    for post in posts {
        table.add_row(prettytable::row![
            post.id,
            truncate_text(&post.title, 50),
            post.slug,
            post.date,
            post.author,
            post.tags.join(", ")
        ]);
    }

    table
}

/// Render a page of posts with navigation hints
fn format_page_text(page: &PaginatedResponse<Post>, options: &ListOptions) -> String {
    let mut result = String::new();
    let filter_args = options.filter_args();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "{} (Page {} of {})",
            options.filter().describe().to_uppercase(),
            page.current_page,
            page.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if page.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No posts on this page.".yellow()));
    } else {
        result.push_str(&posts_table(&page.items).to_string());
    }

    result.push_str(&format!(
        "\nShowing page {} of {} ({} total posts, {} per page)\n",
        page.current_page.to_string().bright_cyan().bold(),
        page.total_pages.to_string().bright_cyan().bold(),
        page.total_items,
        page.items_per_page
    ));

    if page.current_page < page.total_pages {
        result.push_str(&format!(
            "  {}: {}\n",
            "Next page".green(),
            format!(
                "blogloader posts list{} --page {}",
                filter_args,
                page.current_page + 1
            )
            .cyan()
        ));
    }
    if page.current_page > 1 {
        result.push_str(&format!(
            "  {}: {}\n",
            "Previous page".green(),
            format!(
                "blogloader posts list{} --page {}",
                filter_args,
                page.current_page - 1
            )
            .cyan()
        ));
    }

    result.push_str(&format!(
        "  {}: {}\n",
        "Read a post".green(),
        "blogloader posts get <slug>".cyan()
    ));

    result
}

fn format_post_text(post: &Post) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", post.title.bright_white().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!("{}: {}\n", "Slug".green(), post.slug));
    result.push_str(&format!("{}: {}\n", "Author".green(), post.author));
    result.push_str(&format!("{}: {}\n", "Date".green(), post.date));
    result.push_str(&format!("{}: {}\n", "Image".green(), post.image_url.cyan()));
    if !post.tags.is_empty() {
        result.push_str(&format!("{}: {}\n", "Tags".green(), post.tags.join(", ")));
    }

    if !post.description.is_empty() {
        result.push_str(&format!("\n{}\n", post.description.italic()));
    }

    result.push_str(&format!("\n{}\n", post.content));

    result
}
