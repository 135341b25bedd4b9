use anyhow::{Context, Result};
use article_core::application::{
    commands::articles::CreateArticleCommand, ports::ClockPort, services::ApplicationServices,
};
use article_core::config::AppConfig;
use article_core::infrastructure::time::SystemClock;
use std::io::Read;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let content = read_content(std::env::args().nth(1).as_deref())?;

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let services = ApplicationServices::new(clock, config.intro_chars(), config.top_words());

    let article = services.article_commands.create_article(CreateArticleCommand {
        title: config.title().to_owned(),
        author: config.author().to_owned(),
        content,
        publication_date: config.publication_date(),
    });
    tracing::info!(article = %article, "article loaded");

    let summary = services.article_queries.summarize(&article);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn read_content(path: Option<&str>) -> Result<String> {
    path.map_or_else(read_stdin, |path| {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    })
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    Ok(content)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
