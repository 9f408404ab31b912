//! # API REST
//!
//! REST surface for the Careflow hospital-operations services.
//!
//! Handles:
//! - HTTP endpoints with axum (breadcrumb resolution, shifting requests,
//!   daily rounds)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, status mapping, CORS)
//!
//! Domain logic lives in `careflow-nav` and `careflow-records`; this crate
//! only translates between HTTP and those services.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post, put};
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use careflow_nav::{
    BreadcrumbResolver, Crumb, CrumbOverride, CurrentPage, Icon, MenuEntry, Overflow, OverrideMap,
    Trail,
};
use careflow_records::{
    shift_summary, Assignee, BloodPressure, CareConfig, ConsciousnessLevel, Consultation,
    DailyRound, Facility, Gender, Patient, RecordError, RecordStore, ReferralLetter, Rhythm,
    ShiftRecord, ShiftStatus,
};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CareConfig>,
    pub store: Arc<RecordStore>,
    pub resolver: Arc<BreadcrumbResolver>,
}

impl AppState {
    /// Assemble the shared state from resolved configuration.
    pub fn new(cfg: Arc<CareConfig>, store: Arc<RecordStore>) -> Self {
        Self {
            cfg,
            store,
            resolver: Arc::new(BreadcrumbResolver::default()),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Health check response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Breadcrumb resolution request.
#[derive(Serialize, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct BreadcrumbReq {
    /// Current navigation path; a missing path yields an empty trail.
    pub path: Option<String>,
    /// Per-segment display overrides.
    pub replacements: OverrideMap,
}

/// Shifting request listing.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ListShiftsRes {
    pub shifts: Vec<ShiftRecord>,
}

/// A shifting request with its derived display fields.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ShiftDetailsRes {
    pub record: ShiftRecord,
    /// Human label of the current status.
    pub status_label: String,
    /// Latest daily-round category, falling back to the consultation's.
    pub patient_category: Option<String>,
    /// Destination display name (external destination wins).
    pub assigned_facility_name: Option<String>,
}

impl ShiftDetailsRes {
    fn from_record(record: ShiftRecord) -> Self {
        Self {
            status_label: record.status.label().to_string(),
            patient_category: record.patient.effective_category().map(str::to_owned),
            assigned_facility_name: record.assigned_facility_name().map(str::to_owned),
            record,
        }
    }
}

/// Status update request, carrying a wire token such as
/// `TRANSFER_IN_PROGRESS`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateShiftStatusReq {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        resolve_breadcrumbs,
        list_shifts,
        get_shift,
        update_shift_status,
        delete_shift,
        shift_summary_text,
        shift_referral_letter,
        get_daily_round,
    ),
    components(schemas(
        HealthRes,
        BreadcrumbReq,
        Trail,
        Crumb,
        CrumbOverride,
        MenuEntry,
        CurrentPage,
        Overflow,
        Icon,
        ListShiftsRes,
        ShiftDetailsRes,
        UpdateShiftStatusReq,
        ShiftRecord,
        ShiftStatus,
        Assignee,
        Patient,
        Gender,
        Consultation,
        Facility,
        DailyRound,
        ConsciousnessLevel,
        Rhythm,
        BloodPressure,
    ))
)]
pub struct ApiDoc;

/// Build the application router, with Swagger UI and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/breadcrumbs", post(resolve_breadcrumbs))
        .route("/shifting", get(list_shifts))
        .route("/shifting/:id", get(get_shift))
        .route("/shifting/:id", delete(delete_shift))
        .route("/shifting/:id/status", put(update_shift_status))
        .route("/shifting/:id/summary", get(shift_summary_text))
        .route("/shifting/:id/letter", get(shift_referral_letter))
        .route(
            "/consultations/:consultation_id/daily-rounds/:id",
            get(get_daily_round),
        )
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Map a domain error onto an HTTP status and message.
///
/// Unexpected failures are logged here and surfaced as an opaque 500.
fn map_record_error(e: RecordError) -> (StatusCode, String) {
    let status = match &e {
        RecordError::NotFound(_) => StatusCode::NOT_FOUND,
        RecordError::TerminalStatus { .. } => StatusCode::CONFLICT,
        RecordError::UnknownStatus(_) | RecordError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("record operation failed: {e:?}");
        (status, "Internal error".into())
    } else {
        (status, e.to_string())
    }
}

// ============================================================================
// Handlers
// ============================================================================

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Careflow REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/breadcrumbs",
    request_body = BreadcrumbReq,
    responses(
        (status = 200, description = "Resolved breadcrumb trail", body = Trail)
    )
)]
/// Resolve a navigation path into a breadcrumb trail
///
/// Applies the caller's display overrides and the overflow-collapse policy.
/// Never fails: a missing or malformed path resolves to an empty trail.
#[axum::debug_handler]
async fn resolve_breadcrumbs(
    State(state): State<AppState>,
    Json(req): Json<BreadcrumbReq>,
) -> Json<Trail> {
    Json(state.resolver.trail(req.path.as_deref(), &req.replacements))
}

#[utoipa::path(
    get,
    path = "/shifting",
    responses(
        (status = 200, description = "All shifting requests, newest first", body = ListShiftsRes)
    )
)]
/// List all shifting requests
///
/// Unreadable record files are skipped with a warning rather than failing
/// the listing.
#[axum::debug_handler]
async fn list_shifts(State(state): State<AppState>) -> Json<ListShiftsRes> {
    Json(ListShiftsRes {
        shifts: state.store.list_shifts(),
    })
}

#[utoipa::path(
    get,
    path = "/shifting/{id}",
    params(("id" = Uuid, Path, description = "Shifting request id")),
    responses(
        (status = 200, description = "Shifting request details", body = ShiftDetailsRes),
        (status = 404, description = "Unknown shifting request")
    )
)]
/// Fetch one shifting request with its derived display fields
#[axum::debug_handler]
async fn get_shift(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<Json<ShiftDetailsRes>, (StatusCode, String)> {
    let record = state.store.get_shift(id).map_err(map_record_error)?;
    Ok(Json(ShiftDetailsRes::from_record(record)))
}

#[utoipa::path(
    put,
    path = "/shifting/{id}/status",
    params(("id" = Uuid, Path, description = "Shifting request id")),
    request_body = UpdateShiftStatusReq,
    responses(
        (status = 200, description = "Updated shifting request", body = ShiftDetailsRes),
        (status = 400, description = "Unknown status token"),
        (status = 404, description = "Unknown shifting request"),
        (status = 409, description = "Record is completed or cancelled")
    )
)]
/// Move a shifting request to a new status
///
/// # Errors
/// Returns `409 Conflict` for completed or cancelled records, which accept
/// no further updates.
#[axum::debug_handler]
async fn update_shift_status(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
    Json(req): Json<UpdateShiftStatusReq>,
) -> Result<Json<ShiftDetailsRes>, (StatusCode, String)> {
    let status: ShiftStatus = req.status.parse().map_err(map_record_error)?;
    let record = state
        .store
        .update_shift_status(id, status, Utc::now())
        .map_err(map_record_error)?;
    Ok(Json(ShiftDetailsRes::from_record(record)))
}

#[utoipa::path(
    delete,
    path = "/shifting/{id}",
    params(("id" = Uuid, Path, description = "Shifting request id")),
    responses(
        (status = 204, description = "Shifting request deleted"),
        (status = 404, description = "Unknown shifting request")
    )
)]
/// Delete a shifting request
#[axum::debug_handler]
async fn delete_shift(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.store.delete_shift(id).map_err(map_record_error)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/shifting/{id}/summary",
    params(("id" = Uuid, Path, description = "Shifting request id")),
    responses(
        (status = 200, description = "Plain-text patient-shift summary", body = String),
        (status = 404, description = "Unknown shifting request")
    )
)]
/// Compose the clipboard summary for a shifting request
#[axum::debug_handler]
async fn shift_summary_text(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<String, (StatusCode, String)> {
    let record = state.store.get_shift(id).map_err(map_record_error)?;
    Ok(shift_summary(
        &record,
        &state.cfg,
        Utc::now().date_naive(),
    ))
}

#[utoipa::path(
    get,
    path = "/shifting/{id}/letter",
    params(("id" = Uuid, Path, description = "Shifting request id")),
    responses(
        (status = 200, description = "Plain-text referral letter", body = String),
        (status = 404, description = "Unknown shifting request")
    )
)]
/// Compose the printable referral letter for a shifting request
#[axum::debug_handler]
async fn shift_referral_letter(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<String, (StatusCode, String)> {
    let record = state.store.get_shift(id).map_err(map_record_error)?;
    let letter = ReferralLetter::compose(&record, &state.cfg, Utc::now().date_naive());
    Ok(letter.render_text())
}

#[utoipa::path(
    get,
    path = "/consultations/{consultation_id}/daily-rounds/{id}",
    params(
        ("consultation_id" = Uuid, Path, description = "Consultation id"),
        ("id" = Uuid, Path, description = "Daily round id")
    ),
    responses(
        (status = 200, description = "One daily vital-sign round", body = DailyRound),
        (status = 404, description = "Unknown consultation or round")
    )
)]
/// Fetch one daily vital-sign round of a consultation
#[axum::debug_handler]
async fn get_daily_round(
    State(state): State<AppState>,
    AxumPath((consultation_id, id)): AxumPath<(Uuid, Uuid)>,
) -> Result<Json<DailyRound>, (StatusCode, String)> {
    let round = state
        .store
        .get_daily_round(consultation_id, id)
        .map_err(map_record_error)?;
    Ok(Json(round))
}
