mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8888".into())
        .parse()
        .expect("invalid PORT");

    let tokens = services::token::TokenConfig::from_env().expect("JWT_SECRET required");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let state = state::AppState::new(pool, tokens);

    // Optional sample roster so the review dashboard works out of the box.
    if services::seed::seed_enabled() {
        if let Err(e) = services::seed::seed_sample_data(&state.pool).await {
            tracing::error!(error = %e, "sample data seeding failed");
        }
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "autosure listening");
    axum::serve(listener, app).await.expect("server failed");
}
