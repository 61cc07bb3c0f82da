use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use roster_config::{LogFormat, LoggingConfig};

/// Logs every request on the way in and its final status on the way out.
///
/// Sits outermost in the middleware stack, so it also sees 401s from the
/// auth layer and 500s produced by the panic guard.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
        route = %matched_path,
        "HTTP Request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %uri.path(),
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "HTTP Response"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %uri.path(),
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "HTTP Response"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %uri.path(),
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "HTTP Response"
            );
        }
    }

    response
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.level` applies to everything
/// except the HTTP plumbing crates, which are held at `warn`.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},tower_http=warn,hyper=warn,axum::rejection=trace",
            config.level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init(),
    }

    info!(level = %config.level, format = ?config.format, "Logging initialized");
}
