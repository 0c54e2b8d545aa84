//! ClickHouse-backed tick store.

use async_trait::async_trait;
use clickhouse::query::RowCursor;
use clickhouse::sql::Identifier;
use clickhouse::{Client, Row};
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use tickstore_types::{Result, TickstoreError};
use tracing::debug;

use crate::store::{RangeQuery, RowStream, TickStore};
use crate::{MinuteCandleRow, StoreConfig, WindowCandleRow, sql};

/// Tick store backed by a ClickHouse server.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct ClickHouseStore {
    client: Client,
    config: StoreConfig,
}

impl ClickHouseStore {
    /// Creates a store client with the given configuration.
    ///
    /// No connection is made until the first query.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.url)
            .with_database(&config.database)
            .with_user(&config.user);
        if let Some(password) = &config.password {
            client = client.with_password(password);
        }
        Self { client, config }
    }

    /// Creates a store client with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Binds the shared range parameters and opens a result cursor.
    fn fetch<R>(&self, statement: &str, query: &RangeQuery) -> Result<RowCursor<R>>
    where
        R: Row,
    {
        debug!(
            table = %self.config.table,
            instrument_token = %query.instrument_token,
            start = %query.range.start_literal(),
            end = %query.range.end_literal(),
            "issuing candle query"
        );

        self.client
            .query(statement)
            .bind(Identifier(&self.config.table))
            .bind(query.instrument_token.get())
            .bind(query.range.start_literal())
            .bind(query.range.end_literal())
            .fetch::<R>()
            .map_err(classify)
    }
}

impl std::fmt::Debug for ClickHouseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickHouseStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TickStore for ClickHouseStore {
    async fn minute_candles(&self, query: &RangeQuery) -> Result<RowStream<'_, MinuteCandleRow>> {
        let cursor = self.fetch::<MinuteCandleRow>(sql::MINUTE_CANDLES, query)?;
        Ok(cursor_stream(cursor))
    }

    async fn window_candle(&self, query: &RangeQuery) -> Result<RowStream<'_, WindowCandleRow>> {
        let cursor = self.fetch::<WindowCandleRow>(sql::WINDOW_CANDLE, query)?;
        Ok(cursor_stream(cursor))
    }
}

/// Adapts a result cursor into a row stream that owns it.
fn cursor_stream<'a, R>(cursor: RowCursor<R>) -> RowStream<'a, R>
where
    R: Row + DeserializeOwned + Send + 'a,
{
    stream::try_unfold(cursor, |mut cursor| async move {
        let row = cursor.next().await.map_err(classify)?;
        Ok(row.map(|row| (row, cursor)))
    })
    .boxed()
}

/// Splits driver errors into row decoding failures and everything else.
fn classify(err: clickhouse::error::Error) -> TickstoreError {
    use clickhouse::error::Error;

    match &err {
        Error::NotEnoughData
        | Error::InvalidUtf8Encoding(_)
        | Error::InvalidTagEncoding(_)
        | Error::DeserializeAnyNotSupported
        | Error::SequenceMustHaveLength
        | Error::Custom(_) => TickstoreError::Scan(err.to_string()),
        _ => TickstoreError::Query(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::TryStreamExt;
    use tickstore_types::{InstrumentToken, TimeRange};

    #[test]
    fn test_classify_decode_errors() {
        use clickhouse::error::Error;

        assert!(classify(Error::NotEnoughData).is_scan());
        assert!(classify(Error::Custom("invalid type: string, expected f64".into())).is_scan());
        assert!(classify(Error::BadResponse("Code: 62. Syntax error".into())).is_query());
        assert!(classify(Error::TimedOut).is_query());
    }

    #[test]
    fn test_config_kept() {
        let store = ClickHouseStore::new(StoreConfig::default().with_table("ticks"));
        assert_eq!(store.config().table, "ticks");
        assert!(format!("{store:?}").contains("ticks"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_query_error() {
        // Nothing listens on port 1.
        let store = ClickHouseStore::new(StoreConfig::default().with_url("http://127.0.0.1:1"));
        let start = NaiveDate::from_ymd_opt(2024, 4, 8)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        let query = RangeQuery::new(
            InstrumentToken::new(109_122_823).unwrap(),
            TimeRange::minutes(start, 3).unwrap(),
        );

        let result = match store.minute_candles(&query).await {
            Ok(rows) => rows.try_collect::<Vec<_>>().await.map(|_| ()),
            Err(err) => Err(err),
        };

        assert!(result.unwrap_err().is_query());
    }
}
