//! # Configuration
//!
//! Configuration is loaded with [`confique`] from an optional `clinic.toml`
//! in the data directory, falling back to compiled defaults. A missing file
//! is not an error.
//!
//! The data directory itself is chosen before any config is read:
//! `--data-dir`, then `CLINIC_DATA_DIR`, then the current directory.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `patients_file` | `patients.txt` | Patient records |
//! | `doctors_file` | `doctors.txt` | Doctor records |
//! | `appointments_file` | `appointments.txt` | Appointment records |
//! | `malformed_lines` | `skip` | `skip`, `report` or `fail` on undecodable lines |

use crate::error::{ClinicError, Result};
use crate::store::{MalformedPolicy, ResourceNames};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "clinic.toml";

/// Configuration for the clinic tool, stored in `clinic.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    /// File holding patient records, relative to the data directory.
    #[config(default = "patients.txt")]
    pub patients_file: String,

    /// File holding doctor records, relative to the data directory.
    #[config(default = "doctors.txt")]
    pub doctors_file: String,

    /// File holding appointment records, relative to the data directory.
    #[config(default = "appointments.txt")]
    pub appointments_file: String,

    /// What to do with lines that cannot be decoded.
    #[config(default = "skip")]
    pub malformed_lines: MalformedPolicy,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        let names = ResourceNames::default();
        Self {
            patients_file: names.patients,
            doctors_file: names.doctors,
            appointments_file: names.appointments,
            malformed_lines: MalformedPolicy::default(),
        }
    }
}

impl ClinicConfig {
    /// Load `clinic.toml` from `data_dir`, or the defaults if there is none.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::builder()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()
            .map_err(|e| ClinicError::Config(e.to_string()))
    }

    pub fn resource_names(&self) -> ResourceNames {
        ResourceNames {
            patients: self.patients_file.clone(),
            doctors: self.doctors_file.clone(),
            appointments: self.appointments_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ClinicConfig::default();
        assert_eq!(config.patients_file, "patients.txt");
        assert_eq!(config.doctors_file, "doctors.txt");
        assert_eq!(config.appointments_file, "appointments.txt");
        assert_eq!(config.malformed_lines, MalformedPolicy::Skip);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ClinicConfig::load(dir.path()).unwrap();
        assert_eq!(config, ClinicConfig::default());
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "appointments_file = \"visits.txt\"\nmalformed_lines = \"fail\"\n",
        )
        .unwrap();

        let config = ClinicConfig::load(dir.path()).unwrap();
        assert_eq!(config.appointments_file, "visits.txt");
        assert_eq!(config.patients_file, "patients.txt");
        assert_eq!(config.malformed_lines, MalformedPolicy::Fail);
        assert_eq!(config.resource_names().appointments, "visits.txt");
    }

    #[test]
    fn test_invalid_policy_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "malformed_lines = \"explode\"\n",
        )
        .unwrap();

        let err = ClinicConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClinicError::Config(_)));
    }
}
