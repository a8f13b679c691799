use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{self, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
};
use platform_api::{ApiError, ApiResult};
use products_hr::{Employee, EmployeeId, EmployeeRegistry, NewEmployee};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<EmployeeRegistry>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            registry: Arc::new(EmployeeRegistry::seeded()),
            config,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let employees = state.registry.len();
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, employees, "employee registry listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/employees",
            get(employees_by_gender_handler).post(create_employee_handler),
        )
        .route("/employees/{id}", get(employee_by_id_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

#[derive(Deserialize)]
struct GenderQuery {
    gender: String,
}

async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewEmployee>,
) -> (StatusCode, Json<Employee>) {
    let employee = state.registry.create(payload);
    (StatusCode::CREATED, Json(employee))
}

async fn employee_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<Json<Employee>> {
    state
        .registry
        .get_by_id(id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn employees_by_gender_handler(
    State(state): State<AppState>,
    Query(query): Query<GenderQuery>,
) -> ApiResult<Json<Vec<Employee>>> {
    state
        .registry
        .get_by_gender(&query.gender)
        .map(Json)
        .map_err(|err| ApiError::invalid(err.to_string()))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        employees: state.registry.len(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    employees: usize,
    version: &'static str,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
    info!("shutdown signal received");
}
