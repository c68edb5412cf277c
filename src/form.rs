//! Form collection: per-session field values, validation and prefill.

use crate::glossary::Glossary;
use crate::models::{
    required_field, ClientRecord, FieldError, FieldKind, FieldValue, CLIENT_ID_COLUMN,
    REQUIRED_FIELDS,
};
use crate::reference::ReferenceTable;
use crate::render::day_hint;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Field values of one operator session.
///
/// Required fields always hold a valid value. Extra historical features are
/// only present after a successful prefill.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    values: BTreeMap<&'static str, FieldValue>,
    extras: BTreeMap<String, FieldValue>,
    client_id: Option<i64>,
    updated_at: DateTime<Utc>,
}

/// Result of an identifier-based prefill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PrefillOutcome {
    /// The row was found and copied into the form.
    Loaded {
        client_id: i64,
        copied: usize,
        placeholders: usize,
        extras: usize,
    },
    /// No such identifier; the form was reset to its defaults.
    NotFound { client_id: i64 },
    /// No reference data was loaded; the form was left untouched.
    ReferenceUnavailable,
}

impl PrefillOutcome {
    /// Warning shown to the operator, if any.
    pub fn warning(&self) -> Option<String> {
        match self {
            PrefillOutcome::Loaded { .. } => None,
            PrefillOutcome::NotFound { client_id } => Some(format!(
                "Client ID {} was not found in the reference data; the form was reset to its defaults.",
                client_id
            )),
            PrefillOutcome::ReferenceUnavailable => Some(
                "Reference data is unavailable; clients cannot be loaded by ID.".to_string(),
            ),
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// A session with every required field at its default.
    pub fn new() -> Self {
        Self {
            values: REQUIRED_FIELDS
                .iter()
                .map(|spec| (spec.name, spec.default_value()))
                .collect(),
            extras: BTreeMap::new(),
            client_id: None,
            updated_at: Utc::now(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name).or_else(|| self.extras.get(name))
    }

    /// Required field values in form order.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        REQUIRED_FIELDS
            .iter()
            .filter_map(|spec| self.values.get(spec.name).map(|v| (spec.name, v)))
    }

    pub fn extras(&self) -> &BTreeMap<String, FieldValue> {
        &self.extras
    }

    /// Identifier of the client loaded by the last successful prefill.
    pub fn client_id(&self) -> Option<i64> {
        self.client_id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets one required field after validating it.
    pub fn set(&mut self, name: &str, value: &FieldValue) -> Result<(), FieldError> {
        let spec =
            required_field(name).ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        let value = spec.validate(value)?;
        self.values.insert(spec.name, value);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validates every update first and commits only if all pass.
    pub fn apply(&mut self, updates: &BTreeMap<String, FieldValue>) -> Result<(), FieldError> {
        let mut validated = Vec::with_capacity(updates.len());
        for (name, value) in updates {
            let spec =
                required_field(name).ok_or_else(|| FieldError::UnknownField(name.clone()))?;
            validated.push((spec.name, spec.validate(value)?));
        }
        if validated.is_empty() {
            return Ok(());
        }
        self.values.extend(validated);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Back to defaults, forgetting any loaded client.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Loads a client from the reference table by identifier.
    pub fn prefill(&mut self, table: Option<&ReferenceTable>, client_id: i64) -> PrefillOutcome {
        let Some(table) = table else {
            tracing::warn!("Prefill requested for {} without reference data", client_id);
            return PrefillOutcome::ReferenceUnavailable;
        };

        let Some(row) = table.find_by_id(client_id) else {
            tracing::warn!("Client ID {} not found in reference data", client_id);
            self.reset();
            return PrefillOutcome::NotFound { client_id };
        };

        let mut values = Self::new().values;
        let mut extras = BTreeMap::new();
        let (mut copied, mut placeholders) = (0, 0);

        for (column, cell) in row.cells() {
            if column == CLIENT_ID_COLUMN {
                continue;
            }
            match (required_field(column), cell) {
                (Some(spec), Some(value)) => match spec.from_reference(&value) {
                    Ok(value) => {
                        values.insert(spec.name, value);
                        copied += 1;
                    }
                    Err(e) => {
                        tracing::warn!("Client {}: {}; using placeholder", client_id, e);
                        values.insert(spec.name, spec.placeholder());
                        placeholders += 1;
                    }
                },
                (Some(spec), None) => {
                    values.insert(spec.name, spec.placeholder());
                    placeholders += 1;
                }
                (None, Some(value)) => {
                    extras.insert(column.to_string(), value);
                }
                (None, None) => {}
            }
        }

        tracing::info!(
            "Loaded client {}: {} fields copied, {} placeholders, {} extra features",
            client_id,
            copied,
            placeholders,
            extras.len()
        );

        let outcome = PrefillOutcome::Loaded {
            client_id,
            copied,
            placeholders,
            extras: extras.len(),
        };
        self.values = values;
        self.extras = extras;
        self.client_id = Some(client_id);
        self.updated_at = Utc::now();
        outcome
    }

    /// Builds the record sent to the scoring API.
    pub fn to_record(&self) -> ClientRecord {
        let mut record: ClientRecord = self
            .extras
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (name, value) in self.values() {
            record.insert(name, value.clone());
        }
        if let Some(id) = self.client_id {
            record.insert(CLIENT_ID_COLUMN, FieldValue::Int(id));
        }
        record
    }

    /// Renderable description of the form.
    pub fn view(&self, glossary: &Glossary) -> FormView {
        let fields = REQUIRED_FIELDS
            .iter()
            .filter_map(|spec| {
                let value = self.values.get(spec.name)?;
                let (kind, min, max, choices) = match spec.kind {
                    FieldKind::Float { min, max, .. } => ("float", Some(min), Some(max), None),
                    FieldKind::Int { min, max, .. } => {
                        ("int", Some(min as f64), Some(max as f64), None)
                    }
                    FieldKind::Category { choices, .. } => {
                        ("category", None, None, Some(choices.to_vec()))
                    }
                };
                Some(FieldView {
                    name: spec.name,
                    label: glossary.label(spec.name).to_string(),
                    kind,
                    value: value.clone(),
                    min,
                    max,
                    choices,
                    hint: day_hint(spec.name, value),
                })
            })
            .collect();

        FormView {
            client_id: self.client_id,
            fields,
            extra_features: self.extras.len(),
            updated_at: self.updated_at,
        }
    }
}

/// Form state as returned to the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub client_id: Option<i64>,
    pub fields: Vec<FieldView>,
    /// Historical features carried over from a prefill.
    pub extra_features: usize,
    pub updated_at: DateTime<Utc>,
}

/// One input of the form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub kind: &'static str,
    pub value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<&'static str>>,
    /// Plain-language reading of day-count fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
