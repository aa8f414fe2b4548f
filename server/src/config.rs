use std::{
    env,
    fmt::Display,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {key} value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub supabase_url: String,
    pub service_role_key: String,
    pub bcrypt_cost: u32,
    pub static_dir: Option<PathBuf>,
    pub cors_origins: Vec<String>,
}

const SECRETS_DIR: &str = "/run/secrets";

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok(), Path::new(SECRETS_DIR))
    }

    /// `lookup` reads a variable; secrets not found there are read from files in `secrets_dir`.
    pub fn from_source<F>(lookup: F, secrets_dir: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bcrypt_cost: u32 = try_load(var("BCRYPT_COST"), "BCRYPT_COST", "10")?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            port: try_load(var("PORT"), "PORT", "3000")?,
            supabase_url: var("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
            service_role_key: read_secret(
                var("SUPABASE_SERVICE_ROLE_KEY"),
                secrets_dir,
                "SUPABASE_SERVICE_ROLE_KEY",
            )?,
            bcrypt_cost,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            cors_origins: var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn try_load<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = value.unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");

        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

/// Environment first, then a mounted secret file.
fn read_secret(
    value: Option<String>,
    secrets_dir: &Path,
    secret_name: &'static str,
) -> Result<String, ConfigError> {
    if let Some(value) = value {
        return Ok(value);
    }

    read_to_string(secrets_dir.join(secret_name))
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");

            ConfigError::Missing(secret_name)
        })
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use super::*;

    fn load(vars: &[(&str, &str)], secrets_dir: &Path) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_source(|key| vars.get(key).cloned(), secrets_dir)
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("SUPABASE_URL", "http://localhost:54321"),
        ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
    ];

    #[test]
    fn defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&REQUIRED, dir.path()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.supabase_url, "http://localhost:54321");
        assert_eq!(config.service_role_key, "service-key");
        assert!(config.static_dir.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn missing_url() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(
            &[("SUPABASE_URL", "  "), REQUIRED[1]],
            dir.path(),
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Missing("SUPABASE_URL")));
    }

    #[test]
    fn bcrypt_cost_range() {
        let dir = tempfile::tempdir().unwrap();

        for cost in ["3", "32", "ten"] {
            let err = load(
                &[REQUIRED[0], REQUIRED[1], ("BCRYPT_COST", cost)],
                dir.path(),
            )
            .unwrap_err();

            assert!(
                matches!(err, ConfigError::Invalid { key: "BCRYPT_COST", .. }),
                "{cost}"
            );
        }

        let config = load(
            &[REQUIRED[0], REQUIRED[1], ("BCRYPT_COST", "4")],
            dir.path(),
        )
        .unwrap();
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn service_key_from_secret_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SUPABASE_SERVICE_ROLE_KEY"), "from-file\n").unwrap();

        let config = load(&[REQUIRED[0]], dir.path()).unwrap();
        assert_eq!(config.service_role_key, "from-file");

        // environment wins over the file
        let config = load(&REQUIRED, dir.path()).unwrap();
        assert_eq!(config.service_role_key, "service-key");
    }

    #[test]
    fn service_key_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&[REQUIRED[0]], dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Missing("SUPABASE_SERVICE_ROLE_KEY")));
    }

    #[test]
    fn cors_origins_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(
            &[
                REQUIRED[0],
                REQUIRED[1],
                ("CORS_ORIGINS", " http://localhost:8080 ,, https://tourisn.example,"),
                ("STATIC_DIR", "dist"),
                ("PORT", "8000"),
            ],
            dir.path(),
        )
        .unwrap();

        assert_eq!(
            config.cors_origins,
            ["http://localhost:8080", "https://tourisn.example"]
        );
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.port, 8000);
    }
}
