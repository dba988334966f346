mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = config::port();
    let auth_config = config::AuthConfig::from_env();
    if auth_config.uses_default_secret() {
        tracing::warn!("JWT_SECRET_KEY not set; signing tokens with the built-in development secret");
    }

    let users = services::users::UserStore::seeded();
    tracing::info!(users = users.len(), "user directory loaded");

    let state = state::AppState::new(auth_config, users);

    // Serve the API alone if the Leptos shell cannot be configured.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR disabled; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "authgate listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
