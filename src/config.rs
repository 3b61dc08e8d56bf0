use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;

const DEFAULT_SQLITE_PATH: &str = "./database/quiz.db";

#[derive(Debug, Clone)]
pub struct Config {
    bot_token: String,
    sqlite_path: PathBuf,
}

impl Config {
    /// Reads `BOT_TOKEN` and `SQLITE_PATH` from the environment. `.env`
    /// overrides are already in the environment by this point (dotenvy is
    /// invoked at the top of `main`). The store path's parent directory is
    /// created if missing so the first SQLite open can succeed.
    pub fn load() -> Result<Self, ConfigError> {
        let bot_token = env::var("BOT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingBotToken)?;

        let sqlite_path = env::var("SQLITE_PATH")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SQLITE_PATH));

        if let Some(dir) = sqlite_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ConfigError::CreateStoreDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        Ok(Self {
            bot_token,
            sqlite_path,
        })
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn sqlite_path(&self) -> &Path {
        &self.sqlite_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so every case lives in one
    // test function to keep the parallel test runner away from them.
    #[test]
    fn load_reads_token_and_defaults_store_path() {
        env::remove_var("BOT_TOKEN");
        env::remove_var("SQLITE_PATH");
        assert!(matches!(Config::load(), Err(ConfigError::MissingBotToken)));

        env::set_var("BOT_TOKEN", "");
        assert!(matches!(Config::load(), Err(ConfigError::MissingBotToken)));

        env::set_var("BOT_TOKEN", "123:abc");
        let config = Config::load().expect("token set");
        assert_eq!(config.bot_token(), "123:abc");
        assert_eq!(config.sqlite_path(), Path::new(DEFAULT_SQLITE_PATH));

        let store = env::temp_dir().join("netquizbot-config-test").join("quiz.db");
        env::set_var("SQLITE_PATH", &store);
        let config = Config::load().expect("custom path");
        assert_eq!(config.sqlite_path(), store.as_path());
        assert!(store.parent().expect("parent").is_dir());

        env::remove_var("BOT_TOKEN");
        env::remove_var("SQLITE_PATH");
    }
}
