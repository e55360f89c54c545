use crate::error::{Error, Result};
use crate::ledger::{TransactionKind, User};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Scenario recorded by `puteamatai demo`.
#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Name passed to `greet` at the top of the statement.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// `PUTEAMATAI_USER` only renames the built-in user used when `[demo.user]` is absent.
    #[serde(default = "default_user")]
    pub user: User,
    #[serde(default = "default_transactions")]
    pub transactions: Vec<DemoTransaction>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            greeting: default_greeting(),
            user: default_user(),
            transactions: default_transactions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoTransaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: i64,
}

// Defaults
fn default_title() -> String {
    "PūteaMātai demo statement".into()
}
fn default_greeting() -> String {
    "Module System".into()
}
fn default_user_name() -> String {
    user_name_or_default(std::env::var("PUTEAMATAI_USER").ok())
}
fn user_name_or_default(from_env: Option<String>) -> String {
    from_env
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Demo User".into())
}
fn default_user() -> User {
    User {
        id: 1,
        name: default_user_name(),
        email: "demo@puteamatai.com".into(),
        active: Some(true),
    }
}
fn default_transactions() -> Vec<DemoTransaction> {
    vec![
        DemoTransaction {
            id: "demo-tx-1".into(),
            kind: TransactionKind::Credit,
            amount: 500,
        },
        DemoTransaction {
            id: "demo-tx-2".into(),
            kind: TransactionKind::Debit,
            amount: 150,
        },
    ]
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        let user = &self.demo.user;
        if user.name.trim().is_empty() {
            return Err(Error::config("demo.user.name cannot be empty"));
        }
        if !user.email.contains('@') {
            return Err(Error::config(format!(
                "demo.user.email is not an email address: {:?}",
                user.email
            )));
        }
        Ok(())
    }
}
