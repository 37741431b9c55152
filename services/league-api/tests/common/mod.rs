//! Shared setup for league-api integration tests.

#![allow(dead_code)]

use chrono_tz::Tz;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use league_api::{AppState, SiteConfig};
use storage::{ArtifactStore, MemoryPointerStore, PointerStore, YamlCatalog};
use test_utils::SAMPLE_CATALOG_YAML;

pub const SITE_URL: &str = "https://league.example";
pub const ADMIN_TOKEN: &str = "s3cret";

/// Cache key file name for the Hawks (10) and Owls (20) sample teams.
pub const HAWKS_OWLS_FILE: &str = "team_image_10_1767614400-20_1767688200.png";

pub struct TestApp {
    pub state: Arc<AppState>,
    pub pointers: Arc<MemoryPointerStore>,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn upload_path(&self, name: &str) -> PathBuf {
        self.uploads.path().join(name)
    }

    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(self.uploads.path()).unwrap().count()
    }
}

pub fn site() -> SiteConfig {
    SiteConfig::new(SITE_URL, Tz::UTC).with_admin_token(Some(ADMIN_TOKEN.to_string()))
}

pub fn sample_catalog() -> Arc<YamlCatalog> {
    Arc::new(YamlCatalog::from_yaml(SAMPLE_CATALOG_YAML).unwrap())
}

/// App over the sample catalog with in-memory pointers and a temp upload dir.
pub fn test_app() -> TestApp {
    test_app_with(sample_catalog())
}

pub fn test_app_with(catalog: Arc<YamlCatalog>) -> TestApp {
    let pointers = Arc::new(MemoryPointerStore::new());
    let uploads = TempDir::new().unwrap();
    let state = app_state(catalog, pointers.clone(), &uploads);
    TestApp {
        state,
        pointers,
        uploads,
    }
}

pub fn app_state(
    catalog: Arc<YamlCatalog>,
    pointers: Arc<dyn PointerStore>,
    uploads: &TempDir,
) -> Arc<AppState> {
    let artifacts = ArtifactStore::local(uploads.path()).unwrap();
    Arc::new(AppState::new(
        catalog.clone(),
        catalog,
        pointers,
        artifacts,
        site(),
    ))
}
