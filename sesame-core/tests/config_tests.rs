//! Configuration integration tests
//!
//! File round-trips through explicit paths so the user's real config
//! directory is never touched.

use sesame_core::config::toml_config::{load_config_from_path, save_config_to_path};
use sesame_core::config::{SesameConfig, TotpSettings, VaultSettings};
use sesame_core::error::{ConfigError, SesameError};
use sesame_core::otp::totp::{HashAlgorithm, TotpParameters};
use tempfile::tempdir;

#[test]
fn test_full_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = SesameConfig {
        vault: VaultSettings {
            service: "sesame-work".to_string(),
        },
        totp: TotpSettings {
            digits: 8,
            step: 60,
            algorithm: HashAlgorithm::Sha512,
        },
    };

    save_config_to_path(&config, &path).unwrap();
    let loaded = load_config_from_path(&path).unwrap();
    assert_eq!(loaded, config);

    let params = loaded.totp_parameters();
    assert_eq!(
        params,
        TotpParameters {
            digits: 8,
            step: 60,
            algorithm: HashAlgorithm::Sha512,
            epoch: 0,
        }
    );
}

#[test]
fn test_algorithm_names_are_lowercase() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(
        &path,
        "[totp]\ndigits = 7\nstep = 15\nalgorithm = \"sha256\"\n",
    )
    .unwrap();

    let loaded = load_config_from_path(&path).unwrap();
    assert_eq!(loaded.totp.algorithm, HashAlgorithm::Sha256);
    assert_eq!(loaded.totp.digits, 7);
    assert_eq!(loaded.totp.step, 15);
}

#[test]
fn test_missing_file_defaults() {
    let dir = tempdir().unwrap();
    let loaded = load_config_from_path(dir.path().join("nope.toml")).unwrap();
    assert_eq!(loaded, SesameConfig::default());
}

#[test]
fn test_save_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = SesameConfig::default();
    config.totp.digits = 0;

    let result = save_config_to_path(&config, &path);
    assert!(matches!(
        result,
        Err(SesameError::Config(ConfigError::ValidationError { .. }))
    ));
    assert!(!path.exists());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    save_config_to_path(&SesameConfig::default(), &path).unwrap();
    assert!(path.exists());
}
