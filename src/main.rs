use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use stockroom::config::server::ServerConfig;
use stockroom::router::init_router;
use stockroom::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;

    sqlx::migrate!()
        .run(&state.db)
        .await
        .expect("Failed to run database migrations");

    let server_config = ServerConfig::from_env();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr())
        .await
        .unwrap();
    println!("🚀 Server running on http://localhost:{}", server_config.port);
    println!(
        "📖 API documentation available at http://localhost:{}/scalar",
        server_config.port
    );
    axum::serve(listener, app).await.unwrap();
}
