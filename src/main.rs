// src/main.rs
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use serde::Serialize;
use std::fs;
use wpfetch::{
    category_names, featured_image_url, format_date, strip_markup, summary_line, Category,
    Command, CommandLineInput, ContentRepository, Post, PostPage, RunConfig, WordPressClient,
};

/// Sets up logging configuration.
///
/// Log lines go to stderr so that stdout stays clean for listings and JSON.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("wpfetch.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs the selected operation and prints its result.
///
/// Every operation already collapses failures to empty results, so an
/// unreachable site prints an empty listing rather than an error.
async fn execute(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = WordPressClient::new(&config.client)?;
    let repository: &dyn ContentRepository = &client;
    log::info!("Using API base {}", client.api_base());

    match &config.command {
        command @ Command::Posts { .. } => {
            let query = command.post_query().unwrap_or_default();
            let page = repository.list_posts(&query).await;
            if config.json {
                print_json(&page)?;
            } else {
                print_post_page(&page, query.page);
            }
        }
        Command::Post { slug } => match repository.post_by_slug(slug).await {
            Some(post) if config.json => print_json(&post)?,
            Some(post) => print_post(&post),
            None => eprintln!("No post found for slug '{}'", slug),
        },
        Command::Slugs => {
            let slugs = repository.all_slugs().await;
            if config.json {
                print_json(&slugs)?;
            } else {
                slugs.iter().for_each(|slug| println!("{}", slug));
            }
        }
        Command::Categories => {
            let categories = repository.categories().await;
            if config.json {
                print_json(&categories)?;
            } else {
                print_categories(&categories);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_post_page(page: &PostPage, page_number: u32) {
    for post in &page.posts {
        println!("{}", summary_line(post));
    }
    println!("-- page {} of {}", page_number, page.total_pages);
}

fn print_post(post: &Post) {
    println!("{}", strip_markup(post.title.as_str()));
    println!("{}", format_date(&post.date));

    let categories = category_names(post);
    if !categories.is_empty() {
        println!("Categories: {}", categories.join(", "));
    }
    if let Some(url) = featured_image_url(post) {
        println!("Image: {}", url);
    }

    let excerpt = strip_markup(post.excerpt.as_str());
    if !excerpt.is_empty() {
        println!();
        println!("{}", excerpt);
    }
}

fn print_categories(categories: &[Category]) {
    for category in categories {
        println!(
            "{:>6}  {:<24} {} posts",
            category.id, category.slug, category.count
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = RunConfig::resolve(cli);

    execute(&config).await?;

    Ok(())
}
