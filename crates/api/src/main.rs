use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topnotes_api::auth::password::hash_password;
use topnotes_api::config::ServerConfig;
use topnotes_api::router::build_app_router;
use topnotes_api::state::AppState;
use topnotes_core::rate_limit::LoginRateLimiter;
use topnotes_db::models::admin::CreateAdmin;
use topnotes_db::repositories::AdminRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "topnotes_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = topnotes_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    topnotes_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    topnotes_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- First-admin provisioning ---
    seed_default_admin(&pool, &config).await;

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        login_limiter: Arc::new(LoginRateLimiter::default()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // ConnectInfo supplies peer addresses for rate-limit keying when no
    // forwarded-for header is present.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    tracing::info!("Server stopped");
}

/// Create the configured default admin when the table is empty and a seed
/// password was provided.
async fn seed_default_admin(pool: &topnotes_db::DbPool, config: &ServerConfig) {
    let Some(ref password) = config.seed_admin_password else {
        return;
    };

    let existing = AdminRepo::count(pool)
        .await
        .expect("Failed to count admin principals");
    if existing > 0 {
        return;
    }

    let password_hash = hash_password(password).expect("Failed to hash seed admin password");
    let input = CreateAdmin {
        name: config.default_admin_name.clone(),
        password_hash,
        is_staff: true,
        is_superuser: true,
    };
    AdminRepo::create(pool, &input)
        .await
        .expect("Failed to seed default admin");
    tracing::info!(name = %config.default_admin_name, "Seeded default admin principal");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
