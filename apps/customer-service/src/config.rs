//! # Customer Service 設定
//!
//! 環境変数から API サーバーとデータベースの設定を読み込む。
//!
//! 起動時に一度だけ [`AppConfig::from_env`] で読み込み、以降は不変の値として
//! ルーター構築やプール作成に引き渡す。読み込み時点では値の存在や形式を検証しない。
//! 未設定の変数は空文字列となり、不正な値は使用時（バインド、DB 接続）にエラーとなる。

use std::{env, fmt};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// 設定値の解釈に失敗した
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidApiPort(String),

    #[error("DB_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidDbPort(String),
}

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub db:  DbConfig,
}

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス（`API_HOST`）
    pub host: String,
    /// ポート番号（`API_PORT`）
    pub port: String,
}

/// データベース接続の設定
#[derive(Clone)]
pub struct DbConfig {
    /// `DB_HOST`
    pub host:     String,
    /// `DB_PORT`
    pub port:     String,
    /// `DB_NAME`
    pub name:     String,
    /// `DB_USER`
    pub user:     String,
    /// `DB_PASSWORD`
    pub password: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる
    ///
    /// 見つからないキーは空文字列として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            api: ApiConfig {
                host: get("API_HOST"),
                port: get("API_PORT"),
            },
            db:  DbConfig {
                host:     get("DB_HOST"),
                port:     get("DB_PORT"),
                name:     get("DB_NAME"),
                user:     get("DB_USER"),
                password: get("DB_PASSWORD"),
            },
        }
    }
}

impl ApiConfig {
    /// `TcpListener::bind` に渡すホストとポートを返す
    pub fn listen_addr(&self) -> Result<(&str, u16), ConfigError> {
        let port = self
            .port
            .parse()
            .map_err(|_| ConfigError::InvalidApiPort(self.port.clone()))?;
        Ok((self.host.as_str(), port))
    }
}

impl DbConfig {
    /// sqlx の接続オプションを組み立てる
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let port = self
            .port
            .parse()
            .map_err(|_| ConfigError::InvalidDbPort(self.port.clone()))?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password))
    }
}

// パスワードをログに出さない
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn full_config() -> AppConfig {
        config_from(&[
            ("DB_HOST", "127.0.0.1"),
            ("DB_PORT", "5432"),
            ("DB_NAME", "contohDb"),
            ("DB_USER", "postgres"),
            ("DB_PASSWORD", "12345678"),
            ("API_HOST", "localhost"),
            ("API_PORT", "8888"),
        ])
    }

    #[test]
    fn test_各環境変数が対応するフィールドに読み込まれる() {
        let config = full_config();

        assert_eq!(config.api.host, "localhost");
        assert_eq!(config.api.port, "8888");
        assert_eq!(config.db.host, "127.0.0.1");
        assert_eq!(config.db.port, "5432");
        assert_eq!(config.db.name, "contohDb");
        assert_eq!(config.db.user, "postgres");
        assert_eq!(config.db.password, "12345678");
    }

    #[test]
    fn test_未設定の変数は空文字列になり読み込み自体は失敗しない() {
        let config = config_from(&[]);

        assert_eq!(config.api.host, "");
        assert_eq!(config.db.port, "");
    }

    #[test]
    fn test_listen_addrはホストとポート番号を返す() {
        let config = full_config();

        assert_eq!(config.api.listen_addr().unwrap(), ("localhost", 8888));
    }

    #[test]
    fn test_listen_addrは不正なポートでエラーを返す() {
        let config = config_from(&[("API_HOST", "localhost"), ("API_PORT", "http")]);

        assert!(matches!(
            config.api.listen_addr(),
            Err(ConfigError::InvalidApiPort(port)) if port == "http"
        ));
    }

    #[test]
    fn test_connect_optionsは設定値を反映する() {
        let options = full_config().db.connect_options().unwrap();

        assert_eq!(options.get_host(), "127.0.0.1");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("contohDb"));
        assert_eq!(options.get_username(), "postgres");
    }

    #[test]
    fn test_connect_optionsはdb_portが未設定ならエラーを返す() {
        let config = config_from(&[("DB_HOST", "127.0.0.1")]);

        assert!(matches!(
            config.db.connect_options(),
            Err(ConfigError::InvalidDbPort(_))
        ));
    }

    #[test]
    fn test_debug出力にパスワードを含まない() {
        let debug = format!("{:?}", full_config().db);

        assert!(!debug.contains("12345678"));
    }
}
