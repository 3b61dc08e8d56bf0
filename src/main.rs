use std::sync::Arc;

use dotenvy::dotenv;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use netquizbot::{
    config::Config,
    database::{connection::Connection, question},
    schema::schema,
    state::QuizState,
};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_span_events(FmtSpan::ENTER)
        .with_ansi(true)
        .with_line_number(true)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        log::error!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load()?;

    let connection = Connection::connect(config.sqlite_path()).await?;
    connection.ensure_schema().await?;
    connection
        .seed_if_empty(&question::default_questions())
        .await?;

    let bot = Bot::new(config.bot_token());
    log::info!("Starting quiz bot...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![
            InMemStorage::<QuizState>::new(),
            Arc::new(connection)
        ])
        .default_handler(|update| async move {
            log::trace!("ignoring update {:?}", update.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
