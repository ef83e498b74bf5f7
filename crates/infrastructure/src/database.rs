use shared::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// 起動時（接続・マイグレーション）のエラー
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// SQLite コネクションプール
///
/// 各クエリはプールから接続を借り、ステートメント終了時に返却する。
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 接続してマイグレーションを適用
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout);

        // インメモリDBは接続ごとに別DBになるため、接続を1本に固定して破棄させない
        let pool_options = if is_in_memory(&config.url) {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        sqlx::migrate!().run(&pool).await?;

        info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Database ready"
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
