use anyhow::Context;

use curio_core::DomainError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    curio_observability::init();

    let bind_addr = std::env::var("CURIO_BIND_ADDR").unwrap_or_else(|_| {
        tracing::warn!("CURIO_BIND_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let (app, service) = match std::env::var("DATABASE_URL") {
        Ok(url) => curio_api::app::build_postgres(&url)
            .await
            .context("failed to initialize the Postgres store")?,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using the in-memory store");
            curio_api::app::build_in_memory()
        }
    };

    if std::env::var("CURIO_SEED_DEMO").as_deref() == Ok("1") {
        match curio_service::seed::load_demo_data(service.as_ref()).await {
            Ok(()) => {}
            Err(DomainError::DuplicateIdentity(_)) => {
                tracing::warn!("demo data already present; skipping seed");
            }
            Err(err) => return Err(err).context("demo seed failed"),
        }
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
