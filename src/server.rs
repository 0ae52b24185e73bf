//! HTTP serving boundary
//!
//! Exposes `GET /api/v1/festivals`, returning the label-grouped data as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::data::FestivalSource;
use crate::service::{FestivalService, ServiceError};

/// Route serving the festival data
pub const FESTIVALS_ROUTE: &str = "/api/v1/festivals";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

async fn get_festivals<S: FestivalSource + 'static>(
    State(service): State<Arc<FestivalService<S>>>,
) -> Result<Response, ServiceError> {
    match service.get_data().await {
        Ok(labels) => Ok(Json(labels).into_response()),
        Err(e) => {
            service.observer().error("Error serving festival data", &e);
            Err(e)
        }
    }
}

/// Builds the router for the festivals API
pub fn build_router<S: FestivalSource + 'static>(service: Arc<FestivalService<S>>) -> Router {
    Router::new()
        .route(FESTIVALS_ROUTE, get(get_festivals::<S>))
        .with_state(service)
}

/// Serves the festivals API on `addr` until the process is stopped
pub async fn run<S: FestivalSource + 'static>(
    addr: SocketAddr,
    service: Arc<FestivalService<S>>,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    service.observer().info(&format!(
        "Listening on http://{}{}",
        listener.local_addr()?,
        FESTIVALS_ROUTE
    ));
    axum::serve(listener, build_router(service)).await
}
