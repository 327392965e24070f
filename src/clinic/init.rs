use crate::api::ClinicApi;
use crate::config::ClinicConfig;
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use crate::store::Stores;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

pub struct ClinicContext {
    pub api: ClinicApi<FsBackend>,
    pub config: ClinicConfig,
    pub data_dir: PathBuf,
}

/// Build the API over `data_dir` and make sure the three record files exist.
///
/// Only a broken `clinic.toml` is fatal. Failing to create the record files
/// is logged and start-up carries on; reads will then degrade to empty.
pub fn initialize(data_dir: &Path) -> Result<ClinicContext> {
    let config = ClinicConfig::load(data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "loaded configuration");

    let backend = Rc::new(FsBackend::new(data_dir));
    let stores = Stores::new(backend, &config.resource_names(), config.malformed_lines);
    if let Err(e) = stores.ensure_all() {
        warn!(error = %e, "could not create data files");
    }

    Ok(ClinicContext {
        api: ClinicApi::new(stores),
        config,
        data_dir: data_dir.to_path_buf(),
    })
}
