//! Web server for the nutrition planner.
//!
//! The presentation collaborator: owns parsing of raw user fields into
//! domain values, calls the pure calculation core, and serves the static
//! frontend. All view concerns live here, none in the core.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Router,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::domain::{BiometricInput, Gender, Goal, UnitSystem};
use crate::macros::MacroSplit;
use crate::plan::{NutritionPlan, build_plan};
use crate::targets::TargetBand;
use crate::tdee::ActivityLevel;

// === JSON Request/Response Types ===

/// Raw user-entered fields, as submitted by the form.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    #[serde(default)]
    pub unit_system: Option<String>,
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    #[serde(default)]
    pub goal: Option<String>,
}

impl PlanRequest {
    /// Parses the raw fields into a typed input.
    ///
    /// Parsing is lenient where the original form was lenient: unknown
    /// gender reads as other, unknown unit system as metric, and a missing
    /// or unknown goal as weight loss. The activity-level key is left raw
    /// for the TDEE stage to validate against its closed enumeration.
    pub fn into_input(self) -> BiometricInput {
        BiometricInput {
            weight: self.weight,
            height: self.height,
            age: self.age,
            gender: Gender::from(self.gender.as_str()),
            activity_level: self.activity_level,
            unit_system: self
                .unit_system
                .as_deref()
                .map(UnitSystem::from)
                .unwrap_or(UnitSystem::Metric),
            body_fat_percentage: self.body_fat_percentage,
            goal: self
                .goal
                .as_deref()
                .and_then(Goal::from_key)
                .unwrap_or(Goal::WeightLoss),
        }
    }
}

/// The computed plan plus display helpers for the frontend.
#[derive(Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: NutritionPlan,
    /// Per-band calorie counts and percentage-bar shares, computed from the
    /// rounded gram values.
    pub macro_splits: BTreeMap<TargetBand, MacroSplit>,
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct ActivityLevelInfo {
    pub key: &'static str,
    pub multiplier: f64,
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router(static_dir: PathBuf) -> Router {
    Router::new()
        .route("/api/plan", post(create_plan))
        .route("/api/activity-levels", get(get_activity_levels))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}

/// Runs the web server.
pub async fn run_server(port: u16, static_dir: PathBuf) -> anyhow::Result<()> {
    let app = create_router(static_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("Server running at http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// === API Handlers ===

/// POST /api/plan - Compute a nutrition plan from raw user fields.
async fn create_plan(
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let input = request.into_input();

    let plan = build_plan(&input).map_err(|e| {
        log::warn!("plan request rejected: {}", e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let macro_splits: BTreeMap<TargetBand, MacroSplit> = plan
        .macro_plans
        .iter()
        .map(|(band, macros)| (*band, macros.split()))
        .collect();

    let summary = plan.summary();

    log::info!(
        "plan computed: {} ({}), tdee={}",
        plan.metabolic_info.bmr,
        plan.metabolic_info.bmr_method,
        plan.metabolic_info.tdee
    );

    Ok(Json(PlanResponse {
        plan,
        macro_splits,
        summary,
    }))
}

/// GET /api/activity-levels - The closed list of levels for the form.
async fn get_activity_levels() -> Json<Vec<ActivityLevelInfo>> {
    let levels = ActivityLevel::all()
        .iter()
        .map(|l| ActivityLevelInfo {
            key: l.key(),
            multiplier: l.multiplier(),
        })
        .collect();

    Json(levels)
}
