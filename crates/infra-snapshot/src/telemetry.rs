//! Tracing subscriber setup for hosts embedding the snapshot adapters

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use queuescope_core::{AppError, Result};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "queuescope_core=info,queuescope_infra_snapshot=info";

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
///
/// # Errors
/// - AppError::Config if the filter is invalid or a subscriber is already installed
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| AppError::Config(format!("invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("tracing subscriber: {}", e)))?;

    tracing::debug!(format = ?format, "Tracing initialized");
    Ok(())
}
