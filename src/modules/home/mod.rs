use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use smarthomie_kernel::{InitCtx, Module};

/// Body returned by `GET /`
pub const GREETING: &str = "T'es pas au bon endroit, connard!";

/// Home module: answers the root path with a fixed greeting
pub struct HomeModule;

impl HomeModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for HomeModule {
    fn name(&self) -> &'static str {
        "home"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "home module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new().route("/", get(greeting))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Greeting",
                        "tags": ["Home"],
                        "responses": {
                            "200": {
                                "description": "Fixed greeting",
                                "content": {
                                    "text/plain": {
                                        "schema": {
                                            "type": "string"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }))
    }
}

async fn greeting() -> &'static str {
    GREETING
}

/// Create a new instance of the home module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(HomeModule::new())
}
