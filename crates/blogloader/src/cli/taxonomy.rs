use crate::prelude::{println, *};
use blogloader::{Category, Tag, DEFAULT_POPULAR_TAGS};
use colored::Colorize;

use super::{print_json, truncate_text};

#[derive(Debug, clap::Args, Clone)]
pub struct CategoriesOptions {
    /// Include the number of published posts per category
    #[arg(long)]
    pub with_post_count: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct TagsOptions {
    /// Only the N most used tags (10 when N is omitted)
    #[arg(long, value_name = "N")]
    pub popular: Option<Option<usize>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_categories(options: CategoriesOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    let categories = if options.with_post_count {
        client.list_categories_with_post_count().await?
    } else {
        client.list_categories().await?
    };

    if options.json {
        return print_json(&categories);
    }

    println!("\n{}", "CATEGORIES".bright_cyan().bold());
    if categories.is_empty() {
        println!("{}", "No categories.".yellow());
    } else {
        categories_table(&categories).printstd();
    }

    Ok(())
}

pub async fn run_tags(options: TagsOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    let (tags, heading) = match options.popular {
        Some(limit) => {
            let limit = limit.unwrap_or(DEFAULT_POPULAR_TAGS);
            (client.popular_tags(limit).await?, format!("TOP {limit} TAGS"))
        }
        None => (client.list_tags().await?, "TAGS".to_string()),
    };

    if options.json {
        return print_json(&tags);
    }

    println!("\n{}", heading.bright_cyan().bold());
    if tags.is_empty() {
        println!("{}", "No tags.".yellow());
    } else {
        tags_table(&tags).printstd();
    }

    Ok(())
}

fn count_cell(count: Option<u64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

fn categories_table(categories: &[Category]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "Slug", "Posts", "Color", "Description"]);

    for category in categories {
        table.add_row(prettytable::row![
            category.id,
            category.name,
            category.slug,
            count_cell(category.post_count),
            category.color.as_deref().unwrap_or("-"),
            truncate_text(category.description.as_deref().unwrap_or(""), 40)
        ]);
    }

    table
}

fn tags_table(tags: &[Tag]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "Slug", "Posts"]);

    for tag in tags {
        table.add_row(prettytable::row![
            tag.id,
            tag.name,
            tag.slug,
            count_cell(tag.post_count)
        ]);
    }

    table
}
