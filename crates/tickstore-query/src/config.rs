//! Connection settings for the tick store.

/// Configuration for the store client.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// HTTP endpoint of the ClickHouse server.
    pub url: String,
    /// Database holding the tick table.
    pub database: String,
    /// User name.
    pub user: String,
    /// Password, if the user has one.
    pub password: Option<String>,
    /// Table of `(instrument_token, timestamp, price)` rows.
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8123".to_string(),
            database: "default".to_string(),
            user: "default".to_string(),
            password: None,
            table: "tickdata".to_string(),
        }
    }
}

impl StoreConfig {
    /// Sets the server URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the database.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the user name.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the tick table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("table", &self.table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.url, "http://localhost:8123");
        assert_eq!(config.database, "default");
        assert_eq!(config.user, "default");
        assert_eq!(config.password, None);
        assert_eq!(config.table, "tickdata");
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::default()
            .with_url("http://ch:8123")
            .with_database("market")
            .with_table("ticks");

        assert_eq!(config.url, "http://ch:8123");
        assert_eq!(config.database, "market");
        assert_eq!(config.table, "ticks");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = StoreConfig::default().with_password("hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }
}
