use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedsnap::{
    Analytics, FakeApiService, FakeNetworkClient, FeedConfig, FeedPresenter, FeedRepository,
    FeedService,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedsnap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting feed snapshot demo...");

    // Load configuration
    let config = FeedConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Feed: {}, page size: {}",
        config.feed_title,
        config.page_size
    );

    // Wire the collaborator graph explicitly
    let client = FakeNetworkClient::new();
    let api = FakeApiService::new(client.clone());
    let repository = FeedRepository::new(api, config.clone());
    let presenter = FeedPresenter::new(config.feed_title.clone());
    let analytics = Analytics::new(config.enable_logging);
    let service = FeedService::new(repository, presenter, analytics, client);

    // Feed for a seeded user
    let feed = service.build_feed(1)?;
    tracing::info!("{}", feed.header);
    for row in &feed.rows {
        tracing::info!("  {} [{}]", row.title, row.subtitle.as_deref().unwrap_or("-"));
    }

    // Unknown user lands in the empty state, not an error
    let missing = service.build_feed(9_999)?;
    tracing::info!("unknown user -> {} ({} rows)", missing.header, missing.rows.len());

    // Sample-data pipeline
    let demo = service.demo_feed(5);
    tracing::info!("{}", demo.header);

    // Raw transport probes
    tracing::info!("ping /users/1 -> {}", service.ping("/users/1"));
    tracing::info!("ping /missing -> {}", service.ping("/missing"));

    Ok(())
}
