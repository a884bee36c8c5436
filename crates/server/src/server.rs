// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP API.
//!
//! - `POST /api/jq`: `EvalRequest` to `EvalResponse`
//! - `POST /api/jq/steps`: `StepsRequest` to `StepsResponse`
//! - `POST /api/explain`: `ExplainRequest` to `ExplainResponse`
//! - `GET /api/version`: `VersionResponse`
//!
//! Evaluation failures are reported as `200` with an `{ "error": ... }` body.
//! Only malformed bodies (`4xx`) and exceeded quotas (`429`) change the status.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, DefaultBodyLimit, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use lq_core::protocol::{
    EvalRequest, ExplainRequest, ExplainResponse, StepsRequest, VersionResponse,
};
use lq_core::tokenize;
use lq_sandbox::request::{eval, steps};
use lq_sandbox::Evaluator;

use crate::error::Result;
use crate::rate_limit::RATE_LIMITED_MESSAGE;
use crate::state::ServerState;

/// Version reported when jq cannot be queried.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Build the API router.
pub fn router<E>(state: ServerState<E>, body_limit: usize) -> Router
where
    E: Evaluator + 'static,
{
    Router::new()
        .route("/api/jq", post(eval_handler::<E>))
        .route("/api/jq/steps", post(steps_handler::<E>))
        .route("/api/explain", post(explain_handler))
        .route("/api/version", get(version_handler::<E>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            limit_requests::<E>,
        ))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind `addr` and serve until the process exits.
pub async fn run<E>(addr: SocketAddr, state: ServerState<E>, body_limit: usize) -> Result<()>
where
    E: Evaluator + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", listener.local_addr()?);
    serve(listener, state, body_limit).await
}

/// Serve on an already bound listener.
pub async fn serve<E>(listener: TcpListener, state: ServerState<E>, body_limit: usize) -> Result<()>
where
    E: Evaluator + 'static,
{
    let app = router(state, body_limit).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app).await?;
    Ok(())
}

async fn limit_requests<E>(
    State(state): State<ServerState<E>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response
where
    E: Evaluator + 'static,
{
    if !state.limiter().check(peer.ip(), Instant::now()).await {
        warn!("rate limited {}", peer.ip());
        return error_response(StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED_MESSAGE);
    }
    next.run(request).await
}

async fn eval_handler<E>(
    State(state): State<ServerState<E>>,
    body: std::result::Result<Json<EvalRequest>, JsonRejection>,
) -> Response
where
    E: Evaluator + 'static,
{
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected(rejection),
    };
    debug!(
        "eval: filter {} chars, options {:?}",
        request.filter.as_deref().map_or(0, |f| f.chars().count()),
        request.options
    );
    Json(eval(state.evaluator(), &request, state.limits()).await).into_response()
}

async fn steps_handler<E>(
    State(state): State<ServerState<E>>,
    body: std::result::Result<Json<StepsRequest>, JsonRejection>,
) -> Response
where
    E: Evaluator + 'static,
{
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected(rejection),
    };
    debug!(
        "steps: filter {} chars",
        request.filter.as_deref().map_or(0, |f| f.chars().count())
    );
    Json(steps(state.evaluator(), &request, state.limits()).await).into_response()
}

async fn explain_handler(body: std::result::Result<Json<ExplainRequest>, JsonRejection>) -> Response {
    match body {
        Ok(Json(request)) => Json(ExplainResponse {
            tokens: tokenize(&request.filter),
        })
        .into_response(),
        Err(rejection) => rejected(rejection),
    }
}

async fn version_handler<E>(State(state): State<ServerState<E>>) -> Json<VersionResponse>
where
    E: Evaluator + 'static,
{
    let version = state
        .evaluator()
        .version()
        .await
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
    Json(VersionResponse { version })
}

fn rejected(rejection: JsonRejection) -> Response {
    debug!("rejected body: {}", rejection.body_text());
    error_response(rejection.status(), &rejection.body_text())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
