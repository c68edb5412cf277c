use crate::comparison::ComparisonSelection;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============ Field Values ============

/// Value held by one feature of a client record.
///
/// Serialized untagged: numbers stay JSON numbers, categories stay strings.
/// Non-finite floats are never stored; a missing value is `None` at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Whole number (day counts, hours, children).
    Int(i64),
    /// Real number (scores, amounts, ratios).
    Float(f64),
    /// Enumerated label (gender, education level, occupation).
    Category(String),
}

impl FieldValue {
    /// Builds a float value, rejecting NaN and infinities.
    pub fn float(value: f64) -> Option<Self> {
        value.is_finite().then_some(FieldValue::Float(value))
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Category(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Category(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Parses one reference-table cell.
    ///
    /// Empty cells and the usual NaN spellings are missing values.
    pub fn parse_cell(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || matches!(raw, "nan" | "NaN" | "NA" | "null") {
            return None;
        }
        if let Ok(v) = raw.parse::<i64>() {
            return Some(FieldValue::Int(v));
        }
        if let Ok(v) = raw.parse::<f64>() {
            return FieldValue::float(v);
        }
        Some(FieldValue::Category(raw.to_string()))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Category(s) => write!(f, "{}", s),
        }
    }
}

// ============ Field Specifications ============

/// Type, bounds and default of a required form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Float {
        min: f64,
        max: f64,
        default: f64,
    },
    Int {
        min: i64,
        max: i64,
        default: i64,
    },
    Category {
        choices: &'static [&'static str],
        default: &'static str,
        /// Label substituted when the reference table has no value.
        placeholder: &'static str,
    },
}

/// A required field of every scoring request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Employment duration recorded for applicants without a current job.
pub const DAYS_EMPLOYED_SENTINEL: i64 = 365243;

/// Identifier column of the reference table.
pub const CLIENT_ID_COLUMN: &str = "SK_ID_CURR";

/// Outcome column stripped from the reference table.
pub const TARGET_COLUMN: &str = "TARGET";

pub const GENDER_CHOICES: &[&str] = &["M", "F", "XNA"];

pub const EDUCATION_CHOICES: &[&str] = &[
    "Secondary / secondary special",
    "Higher education",
    "Incomplete higher",
    "Lower secondary",
    "Academic degree",
];

pub const FAMILY_STATUS_CHOICES: &[&str] = &[
    "Married",
    "Single / not married",
    "Civil marriage",
    "Separated",
    "Widow",
];

pub const YES_NO_CHOICES: &[&str] = &["Y", "N"];

pub const OCCUPATION_CHOICES: &[&str] = &[
    "Laborers",
    "Core staff",
    "Accountants",
    "Managers",
    "Drivers",
    "Sales staff",
    "Cleaning staff",
    "Cooking staff",
    "Private service staff",
    "Medicine staff",
    "Security staff",
    "High skill tech staff",
    "Waiters/barmen staff",
    "Low-skill Laborers",
    "Realty agents",
    "Secretaries",
    "IT staff",
    "HR staff",
    "nan",
];

const fn float(name: &'static str, min: f64, max: f64, default: f64) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Float { min, max, default },
    }
}

const fn int(name: &'static str, min: i64, max: i64, default: i64) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Int { min, max, default },
    }
}

const fn category(
    name: &'static str,
    choices: &'static [&'static str],
    default: &'static str,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Category {
            choices,
            default,
            placeholder,
        },
    }
}

/// Fields that must be present in every scoring request, in form order.
pub const REQUIRED_FIELDS: &[FieldSpec] = &[
    float("EXT_SOURCE_1", 0.0, 1.0, 0.5),
    float("EXT_SOURCE_3", 0.0, 1.0, 0.5),
    float("AMT_CREDIT", 0.0, 5_000_000.0, 250_000.0),
    int("DAYS_BIRTH", -30_000, -7_000, -15_000),
    float("EXT_SOURCE_2", 0.0, 1.0, 0.5),
    float("AMT_ANNUITY", 0.0, 200_000.0, 25_000.0),
    float("SK_ID_CURR_CNT_INSTALMENT_FUTURE_mean", 0.0, 100.0, 0.0),
    int("DAYS_ID_PUBLISH", -10_000, -1, -1_000),
    float("SK_ID_CURR_DAYS_CREDIT_ENDDATE_max", -10_000.0, 10_000.0, 0.0),
    int("DAYS_EMPLOYED", -20_000, DAYS_EMPLOYED_SENTINEL, -2_000),
    category("CODE_GENDER", GENDER_CHOICES, "M", "XNA"),
    category(
        "NAME_EDUCATION_TYPE",
        EDUCATION_CHOICES,
        "Secondary / secondary special",
        "Unknown",
    ),
    category("NAME_FAMILY_STATUS", FAMILY_STATUS_CHOICES, "Married", "Unknown"),
    float("AMT_INCOME_TOTAL", 0.0, 5_000_000.0, 150_000.0),
    int("CNT_CHILDREN", 0, 20, 0),
    category("FLAG_OWN_CAR", YES_NO_CHOICES, "N", "Unknown"),
    category("FLAG_OWN_REALTY", YES_NO_CHOICES, "Y", "Unknown"),
    category("OCCUPATION_TYPE", OCCUPATION_CHOICES, "Laborers", "XNA"),
    float("REGION_POPULATION_RELATIVE", 0.0, 1.0, 0.018801),
    int("HOUR_APPR_PROCESS_START", 0, 23, 12),
];

/// Looks up the spec of a required field.
pub fn required_field(name: &str) -> Option<&'static FieldSpec> {
    REQUIRED_FIELDS.iter().find(|spec| spec.name == name)
}

/// Reason a value does not fit a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    UnknownField(String),
    WrongType { field: String, expected: &'static str },
    OutOfBounds { field: String, value: String, min: String, max: String },
    UnknownChoice { field: String, value: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "Unknown form field: {}", name),
            FieldError::WrongType { field, expected } => {
                write!(f, "Field {} expects {}", field, expected)
            }
            FieldError::OutOfBounds {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "Field {} value {} is outside [{}, {}]",
                field, value, min, max
            ),
            FieldError::UnknownChoice { field, value } => {
                write!(f, "Field {} does not accept '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for FieldError {}

impl FieldSpec {
    /// Default value shown on a fresh form.
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Float { default, .. } => FieldValue::Float(default),
            FieldKind::Int { default, .. } => FieldValue::Int(default),
            FieldKind::Category { default, .. } => FieldValue::Category(default.to_string()),
        }
    }

    /// Value substituted for a missing reference-table cell.
    ///
    /// Numeric placeholders are zero clamped into the field's bounds, so
    /// `DAYS_BIRTH` gets -7000 and `DAYS_ID_PUBLISH` gets -1.
    pub fn placeholder(&self) -> FieldValue {
        match self.kind {
            FieldKind::Float { min, max, .. } => FieldValue::Float(0.0_f64.clamp(min, max)),
            FieldKind::Int { min, max, .. } => FieldValue::Int(0_i64.clamp(min, max)),
            FieldKind::Category { placeholder, .. } => {
                FieldValue::Category(placeholder.to_string())
            }
        }
    }

    /// Converts a value to this field's kind without checking bounds.
    pub fn coerce(&self, value: &FieldValue) -> Result<FieldValue, FieldError> {
        let wrong_type = |expected| FieldError::WrongType {
            field: self.name.to_string(),
            expected,
        };
        match self.kind {
            FieldKind::Float { .. } => value
                .as_f64()
                .map(FieldValue::Float)
                .ok_or_else(|| wrong_type("a number")),
            FieldKind::Int { .. } => value
                .as_i64()
                .map(FieldValue::Int)
                .ok_or_else(|| wrong_type("a whole number")),
            FieldKind::Category { .. } => value
                .as_str()
                .map(|s| FieldValue::Category(s.to_string()))
                .ok_or_else(|| wrong_type("a label")),
        }
    }

    /// Coerces and checks a value submitted by the operator.
    pub fn validate(&self, value: &FieldValue) -> Result<FieldValue, FieldError> {
        let coerced = self.coerce(value)?;
        match (self.kind, &coerced) {
            (FieldKind::Float { min, max, .. }, FieldValue::Float(v)) => {
                if !(min..=max).contains(v) {
                    return Err(FieldError::OutOfBounds {
                        field: self.name.to_string(),
                        value: v.to_string(),
                        min: min.to_string(),
                        max: max.to_string(),
                    });
                }
            }
            (FieldKind::Int { min, max, .. }, FieldValue::Int(v)) => {
                if !(min..=max).contains(v) {
                    return Err(FieldError::OutOfBounds {
                        field: self.name.to_string(),
                        value: v.to_string(),
                        min: min.to_string(),
                        max: max.to_string(),
                    });
                }
            }
            (
                FieldKind::Category {
                    choices,
                    placeholder,
                    ..
                },
                FieldValue::Category(s),
            ) => {
                if s.as_str() != placeholder && !choices.contains(&s.as_str()) {
                    return Err(FieldError::UnknownChoice {
                        field: self.name.to_string(),
                        value: s.clone(),
                    });
                }
            }
            _ => {}
        }
        Ok(coerced)
    }

    /// Coerces a reference-table value, pulling numbers into bounds.
    ///
    /// Categories outside the choice list fall back to the placeholder.
    pub fn from_reference(&self, value: &FieldValue) -> Result<FieldValue, FieldError> {
        let coerced = self.coerce(value)?;
        Ok(match (self.kind, coerced) {
            (FieldKind::Float { min, max, .. }, FieldValue::Float(v)) => {
                FieldValue::Float(v.clamp(min, max))
            }
            (FieldKind::Int { min, max, .. }, FieldValue::Int(v)) => {
                FieldValue::Int(v.clamp(min, max))
            }
            (FieldKind::Category { choices, .. }, FieldValue::Category(s))
                if !choices.contains(&s.as_str()) =>
            {
                self.placeholder()
            }
            (_, other) => other,
        })
    }
}

// ============ Client Record ============

/// One loan applicant as sent to the scoring API.
///
/// Serialized as a flat JSON object with the feature names as keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ClientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of required fields absent from this record.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .filter(|spec| !self.fields.contains_key(spec.name))
            .map(|spec| spec.name)
            .collect()
    }

    /// Fields in display order: required fields first, then the rest by name.
    pub fn ordered(&self) -> Vec<(&str, &FieldValue)> {
        let mut out: Vec<(&str, &FieldValue)> = REQUIRED_FIELDS
            .iter()
            .filter_map(|spec| self.fields.get_key_value(spec.name))
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        out.extend(
            self.fields
                .iter()
                .filter(|(k, _)| required_field(k).is_none())
                .map(|(k, v)| (k.as_str(), v)),
        );
        out
    }
}

impl FromIterator<(String, FieldValue)> for ClientRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============ Scoring API Models ============

/// Per-feature explanation returned by the scoring API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Explanation {
    Available { values: HashMap<String, f64> },
    Unavailable { reason: String },
}

impl Default for Explanation {
    fn default() -> Self {
        Explanation::Unavailable {
            reason: "no attribution values returned".to_string(),
        }
    }
}

impl Explanation {
    /// Interprets the raw `shap_values` payload.
    ///
    /// The API signals a missing explainer with an object carrying an
    /// `error` or `info` key instead of attribution values.
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = payload else {
            return Explanation::default();
        };
        for marker in ["error", "info"] {
            if let Some(reason) = map.get(marker) {
                let reason = reason
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| reason.to_string());
                return Explanation::Unavailable { reason };
            }
        }
        if map.is_empty() {
            return Explanation::default();
        }
        let values: Option<HashMap<String, f64>> = map
            .iter()
            .map(|(k, v)| v.as_f64().map(|f| (k.clone(), f)))
            .collect();
        match values {
            Some(values) => Explanation::Available { values },
            None => Explanation::Unavailable {
                reason: "attribution payload contained non-numeric values".to_string(),
            },
        }
    }
}

fn deserialize_explanation<'de, D>(deserializer: D) -> Result<Explanation, D::Error>
where
    D: Deserializer<'de>,
{
    let payload = Option::<Value>::deserialize(deserializer)?;
    Ok(Explanation::from_payload(payload.as_ref()))
}

/// Parsed body of a successful scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResponse {
    pub probability_default: f64,
    pub prediction_class: i64,
    pub optimal_threshold_used: f64,
    #[serde(
        rename = "shap_values",
        default,
        deserialize_with = "deserialize_explanation"
    )]
    pub explanation: Explanation,
    #[serde(default)]
    pub shap_expected_value: Option<f64>,
}

// ============ Request Bodies ============

/// Body of `POST /api/v1/sessions/:id/prefill`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrefillRequest {
    pub client_id: i64,
}

/// Body of `PATCH /api/v1/sessions/:id/fields`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldUpdateRequest {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// Body of `POST /api/v1/sessions/:id/score`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    /// Form values submitted together with the request.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    /// Comparison plot features, given at the top level of the body.
    #[serde(flatten)]
    pub selection: ComparisonSelection,
}
