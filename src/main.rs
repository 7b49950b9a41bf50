use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatseed::config::Config;
use chatseed::generator::ChatDataGenerator;
use chatseed::store::{postgres::PgStore, ChatStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatseed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load();
    tracing::info!(
        users = config.seed.user_count,
        messages_per_conversation = config.seed.messages_per_conversation,
        "starting demo-data seeder"
    );

    // Initialize database pool
    let db = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database_url())
        .await?;
    tracing::info!("Connected to PostgreSQL");

    // Run migrations
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("Database migrations completed");

    // Generate the full dataset; the summary pass runs last inside
    // generate_all, so the returned conversations are the ones to persist.
    let mut generator = ChatDataGenerator::new();
    let dataset = generator.generate_all(
        config.seed.user_count,
        config.seed.messages_per_conversation,
        &config.seed.current_user_id,
    );

    // Full replacement: wipe the previous run, then insert parents first.
    let store = PgStore::new(db);
    store.clear_all().await?;
    store.insert_users(&dataset.users).await?;
    store.insert_conversations(&dataset.conversations).await?;
    store.insert_participants(&dataset.participants).await?;
    store.insert_messages(&dataset.messages).await?;

    tracing::info!(
        users = dataset.users.len(),
        conversations = dataset.conversations.len(),
        participants = dataset.participants.len(),
        messages = dataset.messages.len(),
        "demo data seeded"
    );

    Ok(())
}
