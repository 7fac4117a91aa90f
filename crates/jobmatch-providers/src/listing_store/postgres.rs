//! PostgreSQL listing store
//!
//! Runs the rendered count and page statements over an r2d2 pool of
//! synchronous postgres connections. Each query runs on the blocking thread
//! pool so async callers are never stalled by network I/O.
//!
//! Expected columns of the listings table: `id`, `title`, `description`,
//! `skills text[]`, `company`, `location`, `salary_min`, `salary_max`,
//! `created_at`, `updated_at`, and a pgvector `skills_embedding` column used
//! by similarity ranking.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use jobmatch_application::ports::registry::{
    LISTING_STORE_PROVIDERS, ListingStoreProviderConfig, ListingStoreProviderEntry,
};
use jobmatch_domain::entities::{ListingRow, SkillsColumn, TimestampColumn};
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::ports::ListingStoreProvider;
use jobmatch_domain::value_objects::{Pagination, PredicateSet, RankingPlan};
use postgres::types::ToSql;
use postgres::{NoTls, Row};
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use tracing::debug;

use super::sql::{SqlParam, SqlStatement, is_valid_table_name, render_search};
use crate::constants::{
    LISTINGS_DEFAULT_TABLE, POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS,
    POSTGRES_DEFAULT_MAX_CONNECTIONS,
};

type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// PostgreSQL listing store settings
#[derive(Debug, Clone)]
pub struct PostgresStoreConfig {
    /// Connection URL
    pub url: String,
    /// Table holding listings
    pub table: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Idle connections kept open
    pub min_idle: Option<u32>,
    /// Time to wait for a pooled connection
    pub connection_timeout: Duration,
}

impl PostgresStoreConfig {
    /// Settings for `url` with default pool sizing
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            table: LISTINGS_DEFAULT_TABLE.to_string(),
            max_connections: POSTGRES_DEFAULT_MAX_CONNECTIONS,
            min_idle: None,
            connection_timeout: Duration::from_secs(POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }
}

/// PostgreSQL listing store
#[derive(Clone)]
pub struct PostgresListingStore {
    pool: PgPool,
    table: String,
}

impl PostgresListingStore {
    /// Build the connection pool. Connections are opened lazily.
    pub fn connect(config: &PostgresStoreConfig) -> Result<Self> {
        if !is_valid_table_name(&config.table) {
            return Err(Error::configuration(format!(
                "invalid listings table name '{}'",
                config.table
            )));
        }

        let pg_config = config.url.parse::<postgres::Config>().map_err(|e| {
            Error::configuration_with_source("invalid PostgreSQL connection URL", e)
        })?;
        let manager = PostgresConnectionManager::new(pg_config, NoTls);

        let pool = Pool::builder()
            .max_size(config.max_connections.max(1))
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build_unchecked(manager);

        Ok(Self {
            pool,
            table: config.table.clone(),
        })
    }

    async fn run<T, F>(&self, statement: SqlStatement, read: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(Vec<Row>) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| Error::database_with_source("failed to get a pooled connection", e))?;
            let params: Vec<&(dyn ToSql + Sync)> =
                statement.params.iter().map(as_to_sql).collect();
            let rows = conn
                .query(statement.sql.as_str(), &params)
                .map_err(|e| Error::database_with_source("listing query failed", e))?;
            read(rows)
        })
        .await
        .map_err(|e| Error::database_with_source("listing query task failed", e))?
    }
}

fn as_to_sql(param: &SqlParam) -> &(dyn ToSql + Sync) {
    match param {
        SqlParam::TextArray(values) => values,
        SqlParam::Text(value) => value,
        SqlParam::BigInt(value) => value,
    }
}

fn column_error(column: &str, e: postgres::Error) -> Error {
    Error::database_with_source(format!("unreadable column '{column}'"), e)
}

fn read_text(row: &Row, column: &str) -> Result<String> {
    row.try_get::<_, Option<String>>(column)
        .map(Option::unwrap_or_default)
        .map_err(|e| column_error(column, e))
}

fn read_skills(row: &Row) -> Result<SkillsColumn> {
    if let Ok(skills) = row.try_get::<_, Option<Vec<String>>>("skills") {
        return Ok(skills.map_or(SkillsColumn::Null, SkillsColumn::Array));
    }
    row.try_get::<_, Option<String>>("skills")
        .map(|text| text.map_or(SkillsColumn::Null, SkillsColumn::Text))
        .map_err(|e| column_error("skills", e))
}

fn read_timestamp(row: &Row, column: &str) -> Result<TimestampColumn> {
    if let Ok(instant) = row.try_get::<_, DateTime<Utc>>(column) {
        return Ok(TimestampColumn::Instant(instant));
    }
    if let Ok(naive) = row.try_get::<_, NaiveDateTime>(column) {
        return Ok(TimestampColumn::Instant(naive.and_utc()));
    }
    row.try_get::<_, String>(column)
        .map(TimestampColumn::Text)
        .map_err(|e| column_error(column, e))
}

fn read_listing(row: &Row) -> Result<ListingRow> {
    Ok(ListingRow {
        id: row.try_get("id").map_err(|e| column_error("id", e))?,
        title: read_text(row, "title")?,
        description: read_text(row, "description")?,
        skills: read_skills(row)?,
        company: read_text(row, "company")?,
        location: read_text(row, "location")?,
        salary_min: row
            .try_get("salary_min")
            .map_err(|e| column_error("salary_min", e))?,
        salary_max: row
            .try_get("salary_max")
            .map_err(|e| column_error("salary_max", e))?,
        created_at: read_timestamp(row, "created_at")?,
        updated_at: read_timestamp(row, "updated_at")?,
        similarity: row.try_get::<_, Option<f64>>("similarity").ok().flatten(),
    })
}

#[async_trait]
impl ListingStoreProvider for PostgresListingStore {
    async fn count(&self, predicates: &PredicateSet) -> Result<u64> {
        let statements = render_search(
            &self.table,
            predicates,
            &RankingPlan::ExactRecency,
            Pagination { limit: 0, offset: 0 },
        );
        debug!(sql = %statements.count.sql, "counting listings");

        self.run(statements.count, |rows| {
            let total: i64 = rows
                .first()
                .ok_or_else(|| Error::database("count query returned no rows"))?
                .try_get("total")
                .map_err(|e| column_error("total", e))?;
            u64::try_from(total).map_err(|_| Error::database("count query returned a negative total"))
        })
        .await
    }

    async fn fetch_page(
        &self,
        predicates: &PredicateSet,
        ranking: &RankingPlan,
        page: Pagination,
    ) -> Result<Vec<ListingRow>> {
        let statements = render_search(&self.table, predicates, ranking, page);
        debug!(sql = %statements.page.sql, "fetching listing page");

        self.run(statements.page, |rows| rows.iter().map(read_listing).collect())
            .await
    }

    async fn health_check(&self) -> Result<()> {
        let statement = SqlStatement {
            sql: "SELECT 1".to_string(),
            params: Vec::new(),
        };
        self.run(statement, |_| Ok(())).await
    }

    fn provider_name(&self) -> &str {
        "postgres"
    }
}

impl std::fmt::Debug for PostgresListingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("PostgresListingStore")
            .field("table", &self.table)
            .field("connections", &state.connections)
            .field("idle", &state.idle_connections)
            .finish()
    }
}

#[linkme::distributed_slice(LISTING_STORE_PROVIDERS)]
static POSTGRES_PROVIDER: ListingStoreProviderEntry = ListingStoreProviderEntry {
    name: "postgres",
    description: "PostgreSQL listing store (pgvector for similarity ranking)",
    factory: |config: &ListingStoreProviderConfig| {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| "postgres listing store requires a url".to_string())?;
        let mut settings = PostgresStoreConfig::new(url);
        if let Some(table) = &config.table {
            settings.table.clone_from(table);
        }
        if let Some(max) = config.max_connections {
            settings.max_connections = max;
        }
        settings.min_idle = config.min_idle;
        if let Some(timeout) = config.connection_timeout {
            settings.connection_timeout = timeout;
        }
        PostgresListingStore::connect(&settings)
            .map(|store| Arc::new(store) as Arc<dyn ListingStoreProvider>)
            .map_err(|e| e.to_string())
    },
};
