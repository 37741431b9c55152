//! Application state and shared resources.

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::{info, warn};

use league_common::{ContentRepository, OfficialsWriter};
use storage::{ArtifactStore, MemoryPointerStore, PointerStore, RedisPointerStore, YamlCatalog};

use crate::config::{Args, SiteConfig};
use crate::metrics::MetricsCollector;
use crate::preview::PreviewService;

/// Shared application state. Immutable after startup.
pub struct AppState {
    pub repository: Arc<dyn ContentRepository>,
    pub officials: Arc<dyn OfficialsWriter>,
    pub preview: PreviewService,
    pub site: SiteConfig,
    pub metrics: Arc<MetricsCollector>,
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        officials: Arc<dyn OfficialsWriter>,
        pointers: Arc<dyn PointerStore>,
        artifacts: ArtifactStore,
        site: SiteConfig,
    ) -> Self {
        let metrics = Arc::new(MetricsCollector::new());
        let preview = PreviewService::new(
            repository.clone(),
            pointers,
            artifacts,
            metrics.clone(),
        );

        Self {
            repository,
            officials,
            preview,
            site,
            metrics,
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Connect every collaborator described by the configuration.
    pub async fn from_args(args: &Args) -> Result<Self> {
        let site = args.site()?;

        let catalog = Arc::new(YamlCatalog::load(&args.catalog, args.media_root.as_deref())?);

        let pointers: Arc<dyn PointerStore> = match &args.redis_url {
            Some(url) => {
                info!(prefix = %args.redis_prefix, "Using Redis preview pointers");
                Arc::new(
                    RedisPointerStore::connect(url)
                        .await?
                        .with_prefix(args.redis_prefix.clone()),
                )
            }
            None => {
                warn!("REDIS_URL not set, preview pointers are kept in memory");
                Arc::new(MemoryPointerStore::new())
            }
        };

        let artifacts = ArtifactStore::local(&args.upload_dir)?;
        info!(upload_dir = %args.upload_dir.display(), "Artifact store ready");

        Ok(Self::new(
            catalog.clone(),
            catalog,
            pointers,
            artifacts,
            site,
        ))
    }
}
