use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::get_config;
use crate::services::{ResolveService, ShortcutService};
use crate::storage::{SeaOrmStorage, ShortcutStore, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub resolve_service: Arc<ResolveService>,
    pub shortcut_service: Arc<ShortcutService>,
    pub route_config: RouteConfig,
}

#[derive(Clone, Debug)]
pub struct RouteConfig {
    pub go_prefix: String,
    pub api_prefix: String,
    pub health_prefix: String,
}

impl RouteConfig {
    pub fn from_config() -> Self {
        let config = get_config();
        Self {
            go_prefix: config.routes.go_prefix.clone(),
            api_prefix: config.routes.api_prefix.clone(),
            health_prefix: config.routes.health_prefix.clone(),
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、服务和路由配置
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let store: Arc<dyn ShortcutStore> = storage.clone();
    let resolve_service = Arc::new(ResolveService::new(store.clone()));
    let shortcut_service = Arc::new(ShortcutService::new(
        store,
        get_config().defaults.history_limit,
    ));

    let count = shortcut_service
        .count()
        .await
        .context("Failed to count shortcuts")?;
    info!("{} shortcuts loaded", count);

    let route_config = RouteConfig::from_config();
    debug!(
        "Pre-startup processing completed in {:?}",
        start_time.elapsed()
    );

    Ok(StartupContext {
        storage,
        resolve_service,
        shortcut_service,
        route_config,
    })
}
