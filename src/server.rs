use std::future::Future;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

use crate::calculator::CalculationRequest;
use crate::error::CalculateError;

impl IntoResponse for CalculateError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}

/// 計算エンドポイント。ボディは Content-Type に関係なく JSON として扱う。
///
/// ボディの読み取りに失敗した場合（上限 2 MiB 超過など）も 401 を返す。
pub async fn calculate(
    body: Result<Bytes, BytesRejection>,
) -> Result<String, CalculateError> {
    let request = body
        .map_err(CalculateError::from)
        .and_then(|body| CalculationRequest::from_json(&body))
        .inspect_err(|e| {
            tracing::warn!(error = %e, "rejected calculation request");
        })?;

    let result = request.compute();
    tracing::debug!(
        op1 = request.op1,
        op2 = request.op2,
        is_add = request.is_add,
        result,
        "calculated"
    );
    Ok(result.to_string())
}

pub fn router() -> Router {
    Router::new().route("/calculate", post(calculate))
}

/// `shutdown` が完了するまでリクエストを処理する。
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "calc-service listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("calc-service stopped");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ。
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
