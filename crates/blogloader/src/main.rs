use crate::prelude::{eprintln, *};
use blogloader::{BlogClient, BlogConfig, Environment};
use clap::Parser;

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Load posts, categories and tags from the blog REST API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the blog REST API
    #[clap(long, env = "BLOG_API_URL", global = true)]
    api_url: Option<String>,

    /// Execution context. `development` serves mock data when an endpoint returns 404.
    #[clap(long, env = "BLOG_ENV", global = true)]
    environment: Option<Environment>,

    /// Request timeout in seconds
    #[clap(long, env = "BLOG_TIMEOUT", global = true)]
    timeout: Option<u64>,

    /// Whether to display additional information.
    #[clap(long, env = "BLOGLOADER_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Build an API client from the environment plus command-line overrides
    pub fn client(&self) -> Result<BlogClient> {
        let config = BlogConfig::from_env()?.with_overrides(
            self.api_url.clone(),
            self.environment,
            self.timeout,
        );

        if self.verbose {
            eprintln!("Blog API: {} ({})", config.api_url, config.environment);
        }

        Ok(BlogClient::new(config)?)
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Blog post operations
    Posts(crate::cli::posts::App),

    /// List categories
    Categories(crate::cli::taxonomy::CategoriesOptions),

    /// List tags
    Tags(crate::cli::taxonomy::TagsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Posts(sub_app) => crate::cli::posts::run(sub_app, app.global).await,
        SubCommands::Categories(options) => {
            crate::cli::taxonomy::run_categories(options, app.global).await
        }
        SubCommands::Tags(options) => crate::cli::taxonomy::run_tags(options, app.global).await,
    }
}
