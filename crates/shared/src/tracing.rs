use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// トレーシングサブスクライバーを初期化
/// `RUST_LOG` が未設定の場合は設定のデフォルトフィルタを使う
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    match config.format {
        // 構造化ログ（JSON）
        LogFormat::Json => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(false).pretty())
            .with(filter)
            .try_init(),
    }
}
