use axum::{Router, routing::get};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handlers;

use crate::handlers::index;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail on missing client credentials or an undersized signing secret
    // before accepting any traffic.
    vatsim_auth::init();

    let app = Router::new()
        .route("/", get(index))
        .merge(vatsim_auth_axum::router());

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {addr}");
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}
