use crate::comparison::FeatureOption;
use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::form::{FormSession, FormView, PrefillOutcome};
use crate::glossary::Glossary;
use crate::models::{FieldUpdateRequest, PrefillRequest, ScoreRequest};
use crate::reference::{ReferenceSample, ReferenceTable};
use crate::render::{self, DashboardView};
use crate::scoring_client::ScoringClient;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use moka::future::Cache;
use moka::ops::compute::Op;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Maximum number of live form sessions.
const MAX_SESSIONS: u64 = 10_000;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the remote scoring API.
    pub scoring_client: ScoringClient,
    /// Feature labels, built once at start-up.
    pub glossary: Arc<Glossary>,
    /// Full reference table; `None` when the file could not be loaded.
    pub reference: Option<Arc<ReferenceTable>>,
    /// Comparison sample drawn from the reference table.
    pub sample: Option<Arc<ReferenceSample>>,
    /// Form sessions keyed by session id, expiring after the configured TTL.
    pub sessions: Cache<Uuid, FormSession>,
}

impl AppState {
    /// Assembles the state from a loaded configuration and optional reference table.
    pub fn new(config: Config, reference: Option<ReferenceTable>) -> Result<Self, AppError> {
        let scoring_client =
            ScoringClient::new(config.scoring_api_url.clone(), config.scoring_timeout())
                .context("Creating scoring client")?;
        let glossary = Arc::new(Glossary::builtin());

        let sample = reference.as_ref().map(|table| {
            let sample = table.sample(
                config.reference_sample_size,
                config.reference_sample_seed,
                &glossary,
            );
            tracing::info!(
                "Reference sample drawn: {} rows, {} comparable features",
                sample.rows(),
                sample.features().len()
            );
            Arc::new(sample)
        });

        let sessions = Cache::builder()
            .time_to_live(config.session_ttl())
            .max_capacity(MAX_SESSIONS)
            .build();

        Ok(Self {
            config,
            scoring_client,
            glossary,
            reference: reference.map(Arc::new),
            sample,
            sessions,
        })
    }

    async fn load_session(&self, id: Uuid) -> Result<FormSession, AppError> {
        self.sessions
            .get(&id)
            .await
            .ok_or_else(|| session_not_found(id))
    }

    /// Applies `change` to a stored session under the cache's per-key lock.
    ///
    /// Concurrent updates of one session run one after the other, each on the
    /// result of the previous one. A failed change leaves the session as it was.
    async fn update_session<T, F>(&self, id: Uuid, change: F) -> Result<(FormSession, T), AppError>
    where
        F: FnOnce(&mut FormSession) -> Result<T, AppError> + Send,
        T: Send,
    {
        let mut outcome = None;
        self.sessions
            .entry(id)
            .and_compute_with(|entry| {
                let op = match entry {
                    Some(entry) => {
                        let mut form = entry.into_value();
                        match change(&mut form) {
                            Ok(value) => {
                                outcome = Some(Ok((form.clone(), value)));
                                Op::Put(form)
                            }
                            Err(e) => {
                                outcome = Some(Err(e));
                                Op::Nop
                            }
                        }
                    }
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        outcome.unwrap_or_else(|| Err(session_not_found(id)))
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {} not found or expired", id))
}

/// Session id together with the current form.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub form: FormView,
}

#[derive(Debug, Serialize)]
pub struct PrefillResponse {
    pub session_id: Uuid,
    pub outcome: PrefillOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub form: FormView,
}

#[derive(Debug, Serialize)]
pub struct ReferenceFeaturesResponse {
    pub available: bool,
    pub sample_rows: usize,
    pub features: Vec<FeatureOption>,
}

/// Health check endpoint.
///
/// Returns the service status and whether reference data is loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "credit-dashboard",
            "version": env!("CARGO_PKG_VERSION"),
            "reference_data": state.reference.is_some(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// POST /api/v1/sessions
///
/// Opens a form session with every field at its default.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let session_id = Uuid::new_v4();
    let form = FormSession::new();
    let view = form.view(&state.glossary);
    state.sessions.insert(session_id, form).await;
    tracing::info!("Session {} created", session_id);

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            form: view,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let form = state.load_session(id).await?;
    Ok(Json(SessionResponse {
        session_id: id,
        form: form.view(&state.glossary),
    }))
}

/// PATCH /api/v1/sessions/:id/fields
///
/// Validates and stores form values. Nothing is stored if any value is invalid.
pub async fn update_fields(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<FieldUpdateRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (form, ()) = state
        .update_session(id, |form| Ok(form.apply(&request.fields)?))
        .await?;
    let view = form.view(&state.glossary);
    tracing::debug!("Session {}: {} fields updated", id, request.fields.len());

    Ok(Json(SessionResponse {
        session_id: id,
        form: view,
    }))
}

/// POST /api/v1/sessions/:id/reset
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let (form, ()) = state
        .update_session(id, |form| {
            form.reset();
            Ok(())
        })
        .await?;
    let view = form.view(&state.glossary);

    Ok(Json(SessionResponse {
        session_id: id,
        form: view,
    }))
}

/// POST /api/v1/sessions/:id/prefill
///
/// Loads a client from the reference table into the form. An unknown
/// identifier is reported as a warning, not an error.
pub async fn prefill_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<PrefillRequest>,
) -> Result<Json<PrefillResponse>, AppError> {
    if request.client_id <= 0 {
        return Err(AppError::BadRequest(
            "client_id must be a positive identifier".to_string(),
        ));
    }

    let reference = state.reference.as_deref();
    let (form, outcome) = state
        .update_session(id, |form| Ok(form.prefill(reference, request.client_id)))
        .await?;
    let view = form.view(&state.glossary);

    Ok(Json(PrefillResponse {
        session_id: id,
        warning: outcome.warning(),
        outcome,
        form: view,
    }))
}

/// POST /api/v1/sessions/:id/score
///
/// Stores the submitted values, sends the record to the scoring API once and
/// returns the rendered dashboard.
pub async fn score_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let (form, ()) = state
        .update_session(id, |form| Ok(form.apply(&request.fields)?))
        .await?;

    let record = form.to_record();
    let missing = record.missing_required();
    if !missing.is_empty() {
        return Err(AppError::InternalError(format!(
            "Record is missing required fields: {}",
            missing.join(", ")
        )));
    }

    let response = state
        .scoring_client
        .score(&record)
        .await
        .with_context(|| format!("Scoring session {}", id))?;

    let view = render::dashboard(
        &response,
        &record,
        &state.glossary,
        state.sample.as_deref(),
        &request.selection,
    );
    tracing::info!(
        "Session {}: decision {} at {:.2}%",
        id,
        view.decision.label(),
        view.gauge.value
    );

    Ok(Json(view))
}

/// GET /api/v1/reference/features
///
/// Features that can be compared against the reference population.
pub async fn reference_features(
    State(state): State<Arc<AppState>>,
) -> Json<ReferenceFeaturesResponse> {
    let response = match state.sample.as_deref() {
        Some(sample) => ReferenceFeaturesResponse {
            available: true,
            sample_rows: sample.rows(),
            features: sample
                .features()
                .iter()
                .map(|name| FeatureOption {
                    name: name.clone(),
                    label: state.glossary.label(name).to_string(),
                })
                .collect(),
        },
        None => ReferenceFeaturesResponse {
            available: false,
            sample_rows: 0,
            features: Vec::new(),
        },
    };
    Json(response)
}
