use anyhow::Context;
use smarthomie_api::modules;
use smarthomie_kernel::{settings::Settings, InitCtx};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load smarthomie settings")?;

    smarthomie_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.server.bind_address(),
        "smarthomie-api bootstrap starting"
    );

    let registry = modules::registry();
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!(
        modules = registry.module_count(),
        "smarthomie-api bootstrap complete"
    );

    let served = smarthomie_http::start_server(&registry, &settings).await;

    registry.stop_modules().await?;
    served
}
