use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use sh_api::{config, create_app, routes::password_reset::AppState, telemetry};
use sh_core::repositories::{
    InMemoryUserDirectory, InMemoryVerificationStore, UserDirectory, VerificationStore,
};
use sh_core::services::notification::Notifier;
use sh_core::services::password_reset::{
    PasswordResetService, PasswordResetServiceConfig, VerificationCleanupConfig,
    VerificationCleanupService,
};
use sh_infra::database::{DatabasePool, MySqlUserDirectory, MySqlVerificationStore};
use sh_infra::mail::create_notifier;
use sh_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging);

    log::info!(
        "Starting ServiceHub password reset API ({} environment)",
        config.environment
    );

    let notifier = create_notifier(&config.mail, config.reset.code_expiration_minutes)
        .context("Failed to configure mail delivery")?;

    match config.storage {
        StorageBackend::MySql => {
            let database = DatabasePool::new(config.database.clone())
                .await
                .context("Failed to connect to the database")?;
            database
                .run_migrations()
                .await
                .context("Failed to run database migrations")?;

            let pool = database.get_pool().clone();
            serve(
                config,
                Arc::new(MySqlUserDirectory::new(pool.clone())),
                Arc::new(MySqlVerificationStore::new(pool)),
                notifier,
            )
            .await?;

            database.close().await;
        }
        StorageBackend::Memory => {
            log::warn!("Using in-memory storage; accounts and codes are lost on restart");
            serve(
                config,
                Arc::new(InMemoryUserDirectory::new()),
                Arc::new(InMemoryVerificationStore::new()),
                notifier,
            )
            .await?;
        }
    }

    log::info!("Server stopped");
    Ok(())
}

/// Wire the reset service over the chosen backend and run the HTTP server
async fn serve<U, S>(
    config: AppConfig,
    user_directory: Arc<U>,
    verification_store: Arc<S>,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()>
where
    U: UserDirectory + 'static,
    S: VerificationStore + 'static,
{
    let cleanup = Arc::new(VerificationCleanupService::new(
        Arc::clone(&verification_store),
        VerificationCleanupConfig::from(&config.reset),
    ));
    let cleanup_task = cleanup.start_background_task();

    let reset_service = Arc::new(PasswordResetService::new(
        user_directory,
        verification_store,
        notifier,
        PasswordResetServiceConfig::from(&config.reset),
    ));
    let app_state = web::Data::new(AppState::new(reset_service));

    let bind_address = config.server.bind_address();
    log::info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    if let Some(task) = cleanup_task {
        task.abort();
    }

    Ok(())
}
