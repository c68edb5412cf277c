//! Turns a scoring response into dashboard view models.
//!
//! Nothing here draws; every view is plain serializable data that a
//! front-end can hand to its charting layer as-is.

use crate::comparison::{self, ComparisonPanel, ComparisonSelection};
use crate::glossary::Glossary;
use crate::models::{
    ClientRecord, Explanation, FieldValue, ScoringResponse, CLIENT_ID_COLUMN,
    DAYS_EMPLOYED_SENTINEL,
};
use crate::reference::ReferenceSample;
use serde::Serialize;
use std::collections::HashMap;

/// Number of features shown in the attribution chart.
pub const TOP_ATTRIBUTIONS: usize = 10;

const DAYS_PER_YEAR: f64 = 365.25;

// ============ Day-count Formatting ============

/// Approximate whole years in a signed day count.
///
/// Halves round to even, so 2.5 years reads as 2.
pub fn years_from_days(days: f64) -> i64 {
    (days.abs() / DAYS_PER_YEAR).round_ties_even() as i64
}

fn day_count(value: &FieldValue) -> Option<f64> {
    value.as_f64()
}

fn credit_end_reading(days: f64) -> String {
    if days < 0.0 {
        format!("in the past (about {} years ago)", years_from_days(days))
    } else if days > 0.0 {
        format!("in the future (in about {} years)", years_from_days(days))
    } else {
        "today".to_string()
    }
}

/// Hint shown next to day-count inputs of the form.
pub fn day_hint(feature: &str, value: &FieldValue) -> Option<String> {
    let days = day_count(value)?;
    match feature {
        "DAYS_BIRTH" => Some(format!("about {} years", years_from_days(days))),
        "DAYS_ID_PUBLISH" => Some(format!("about {} years ago", years_from_days(days))),
        "DAYS_EMPLOYED" => Some(if days == DAYS_EMPLOYED_SENTINEL as f64 {
            "not employed".to_string()
        } else if days < 0.0 {
            format!("about {} years of employment", years_from_days(days))
        } else {
            "non-standard (positive) employment length".to_string()
        }),
        "SK_ID_CURR_DAYS_CREDIT_ENDDATE_max" => Some(credit_end_reading(days)),
        _ => None,
    }
}

/// Display text of one field in the client profile.
pub fn display_value(feature: &str, value: &FieldValue) -> String {
    let Some(days) = day_count(value) else {
        return value.to_string();
    };
    match feature {
        "DAYS_BIRTH" => format!("{} years", years_from_days(days)),
        "DAYS_EMPLOYED" if days == DAYS_EMPLOYED_SENTINEL as f64 => "not employed".to_string(),
        "DAYS_EMPLOYED" => format!("{} years", years_from_days(days)),
        "DAYS_ID_PUBLISH" => format!("{} years ago", years_from_days(days)),
        "SK_ID_CURR_DAYS_CREDIT_ENDDATE_max" => credit_end_reading(days),
        _ => value.to_string(),
    }
}

// ============ Decision & Gauge ============

/// Credit decision derived from the predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Granted,
    Denied,
}

impl Decision {
    /// Class 0 means the probability fell below the threshold.
    pub fn from_class(prediction_class: i64) -> Self {
        if prediction_class == 0 {
            Decision::Granted
        } else {
            Decision::Denied
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Granted => "granted",
            Decision::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

/// Default-probability gauge split at the decision threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub title: &'static str,
    /// Probability of default, in percent.
    pub value: f64,
    pub axis_max: f64,
    /// Decision threshold, in percent.
    pub threshold: f64,
    pub threshold_color: &'static str,
    pub steps: Vec<GaugeStep>,
    pub decision: Decision,
    pub decision_label: &'static str,
    pub message: String,
    pub threshold_message: String,
}

pub fn gauge(response: &ScoringResponse) -> GaugeView {
    let value = response.probability_default * 100.0;
    let threshold = (response.optimal_threshold_used * 100.0).clamp(0.0, 100.0);
    let decision = Decision::from_class(response.prediction_class);

    let message = match decision {
        Decision::Granted => format!(
            "Decision: credit granted (default probability {:.2}%, below the threshold)",
            value
        ),
        Decision::Denied => format!(
            "Decision: credit denied (default probability {:.2}%, at or above the threshold)",
            value
        ),
    };

    GaugeView {
        title: "Client default probability",
        value,
        axis_max: 100.0,
        threshold,
        threshold_color: "red",
        steps: vec![
            GaugeStep {
                from: 0.0,
                to: threshold,
                color: "lightgreen",
            },
            GaugeStep {
                from: threshold,
                to: 100.0,
                color: "lightcoral",
            },
        ],
        decision,
        decision_label: decision.label(),
        message,
        threshold_message: format!("The decision threshold is {:.2}%.", threshold),
    }
}

// ============ Attribution Chart ============

/// Which way a feature pushed the default probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    IncreasesRisk,
    DecreasesRisk,
    Neutral,
}

impl Direction {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Direction::IncreasesRisk
        } else if value < 0.0 {
            Direction::DecreasesRisk
        } else {
            Direction::Neutral
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Direction::IncreasesRisk => "#b2182b",
            Direction::DecreasesRisk => "#2166ac",
            Direction::Neutral => "#f7f7f7",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributionBar {
    pub feature: String,
    pub label: String,
    pub value: f64,
    pub direction: Direction,
    pub color: &'static str,
}

/// Horizontal bar chart of the strongest attributions, largest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributionChart {
    pub title: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub bars: Vec<AttributionBar>,
    /// Expected model output the attributions are relative to.
    pub baseline: Option<f64>,
    pub legend: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttributionPanel {
    Chart(AttributionChart),
    Unavailable { warning: String },
}

impl AttributionPanel {
    pub fn chart(&self) -> Option<&AttributionChart> {
        match self {
            AttributionPanel::Chart(chart) => Some(chart),
            AttributionPanel::Unavailable { .. } => None,
        }
    }
}

/// The `limit` largest attributions by magnitude. Ties break on feature name.
pub fn top_attributions(values: &HashMap<String, f64>, limit: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = values.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);
    ranked
}

pub fn attribution_panel(response: &ScoringResponse, glossary: &Glossary) -> AttributionPanel {
    let values = match &response.explanation {
        Explanation::Available { values } => values,
        Explanation::Unavailable { reason } => {
            tracing::warn!("Attribution values unavailable: {}", reason);
            return AttributionPanel::Unavailable {
                warning: format!(
                    "Feature contributions could not be computed ({}). The scoring API's explainer may not be initialized.",
                    reason
                ),
            };
        }
    };

    let bars = top_attributions(values, TOP_ATTRIBUTIONS)
        .into_iter()
        .map(|(feature, value)| {
            let direction = Direction::of(value);
            AttributionBar {
                feature: feature.to_string(),
                label: glossary.label(feature).to_string(),
                value,
                direction,
                color: direction.color(),
            }
        })
        .collect();

    AttributionPanel::Chart(AttributionChart {
        title: "Top 10 factors behind this client's decision",
        x_axis_title: "Impact on default probability (attribution value)",
        y_axis_title: "Feature",
        bars,
        baseline: response.shap_expected_value,
        legend: vec![
            "Red bars increase the client's default probability.",
            "Blue bars decrease the client's default probability.",
            "Longer bars weigh more in the model's decision.",
        ],
    })
}

// ============ Client Profile ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub feature: String,
    pub label: String,
    pub value: String,
}

/// Key/value description of a submitted record.
pub fn profile_rows(record: &ClientRecord, glossary: &Glossary) -> Vec<ProfileRow> {
    record
        .ordered()
        .into_iter()
        .filter(|(feature, _)| *feature != CLIENT_ID_COLUMN)
        .map(|(feature, value)| ProfileRow {
            feature: feature.to_string(),
            label: glossary.label(feature).to_string(),
            value: display_value(feature, value),
        })
        .collect()
}

// ============ Dashboard ============

/// Everything shown after one submission.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub client_id: Option<i64>,
    pub probability_default: f64,
    pub prediction_class: i64,
    pub threshold: f64,
    pub decision: Decision,
    pub gauge: GaugeView,
    pub attribution: AttributionPanel,
    pub profile: Vec<ProfileRow>,
    pub comparisons: ComparisonPanel,
}

pub fn dashboard(
    response: &ScoringResponse,
    record: &ClientRecord,
    glossary: &Glossary,
    sample: Option<&ReferenceSample>,
    selection: &ComparisonSelection,
) -> DashboardView {
    DashboardView {
        client_id: record.get(CLIENT_ID_COLUMN).and_then(FieldValue::as_i64),
        probability_default: response.probability_default,
        prediction_class: response.prediction_class,
        threshold: response.optimal_threshold_used,
        decision: Decision::from_class(response.prediction_class),
        gauge: gauge(response),
        attribution: attribution_panel(response, glossary),
        profile: profile_rows(record, glossary),
        comparisons: comparison::panel(sample, record, glossary, selection),
    }
}
