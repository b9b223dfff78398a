use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
pub mod models;
use dotenv;
pub use models::*;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "BOOKCHECK".to_string());

    let config_dir = resolve_config_dir();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    tracing::debug!(
        "loading config: default={}, env={}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(default_path.to_str().unwrap()).required(false))
        .add_source(File::with_name(env_path.to_str().unwrap()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

/// Locates the workspace `config/` directory. `BOOKCHECK_CONFIG_DIR` wins when
/// set; otherwise walk up from this crate's manifest dir to the workspace root.
fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = env::var("BOOKCHECK_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .ancestors()
        .nth(2) // go from crates/bookcheck_config to workspace root
        .unwrap()
        .to_path_buf();
    workspace_root.join("config")
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a `OnceCell`.
/// If not, it attempts to load the dotenv file named by `DOTENV_OVERRIDE`,
/// defaulting to a file named ".env".
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_section_defaults_match_reference_policy() {
        let verify = VerifyConfig::default();
        assert_eq!(verify.max_attempts, 3);
        assert_eq!(verify.retry_delay_ms, 1000);
        assert_eq!(verify.date_tolerance_hours, 24);
    }

    #[test]
    fn app_config_deserializes_with_minimal_sections() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{
                "api": { "base_url": "http://localhost:3001" },
                "auth": { "username": "admin", "password": "password123" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:3001");
        assert_eq!(cfg.api.request_timeout_secs, 30);
        assert_eq!(cfg.verify.max_attempts, 3);
    }
}
