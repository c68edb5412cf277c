//! Comparison plots of a client against the reference population sample.

use crate::glossary::Glossary;
use crate::models::{ClientRecord, FieldValue, DAYS_EMPLOYED_SENTINEL, EDUCATION_CHOICES};
use crate::reference::ReferenceSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Equal-width bins used for numeric histograms.
pub const HISTOGRAM_BINS: usize = 20;

const DAYS_PER_YEAR: f64 = 365.25;
const NOT_EMPLOYED: &str = "not employed";
const MISSING_LABEL: &str = "nan";

/// Features picked by the operator for the comparison plots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonSelection {
    pub histogram_feature: Option<String>,
    pub scatter_x: Option<String>,
    pub scatter_y: Option<String>,
}

/// A plot, or the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "plot", rename_all = "snake_case")]
pub enum PlotResult<T> {
    Ready(T),
    Skipped(String),
}

impl<T> PlotResult<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            PlotResult::Ready(plot) => Some(plot),
            PlotResult::Skipped(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureOption {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonPanel {
    Available {
        /// Features selectable for the histogram and scatter plot.
        features: Vec<FeatureOption>,
        histogram: PlotResult<HistogramView>,
        scatter: PlotResult<ScatterView>,
        credit_by_education: Option<BoxPlotView>,
    },
    Unavailable {
        warning: String,
    },
}

// ============ Axis Transforms ============

/// Position of a value on a plot axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Label(String),
}

/// Maps a raw value to its plotted form.
///
/// Age and employment length are shown in years; the employment sentinel
/// becomes a label of its own.
pub fn axis_value(feature: &str, value: &FieldValue) -> AxisValue {
    match (feature, value.as_f64()) {
        ("DAYS_EMPLOYED", Some(days)) if days == DAYS_EMPLOYED_SENTINEL as f64 => {
            AxisValue::Label(NOT_EMPLOYED.to_string())
        }
        ("DAYS_BIRTH" | "DAYS_EMPLOYED", Some(days)) => {
            AxisValue::Number(days.abs() / DAYS_PER_YEAR)
        }
        (_, Some(number)) => AxisValue::Number(number),
        (_, None) => AxisValue::Label(value.to_string()),
    }
}

pub fn axis_title(feature: &str, glossary: &Glossary) -> String {
    match feature {
        "DAYS_BIRTH" => "Age (years)".to_string(),
        "DAYS_EMPLOYED" => "Employment length (years)".to_string(),
        _ => glossary.label(feature).to_string(),
    }
}

// ============ Summaries ============

/// Five-number summary with 1.5 IQR whiskers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: usize,
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
}

pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let (low_fence, high_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let inside: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| (low_fence..=high_fence).contains(v))
        .collect();

    Some(BoxSummary {
        count: sorted.len(),
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_whisker: inside.first().copied().unwrap_or(q1),
        upper_whisker: inside.last().copied().unwrap_or(q3),
        outliers: sorted.len() - inside.len(),
    })
}

// ============ Histogram ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Where the client sits on a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientMarker {
    /// Dashed vertical line at a numeric position.
    Line { x: f64, annotation: String },
    /// Arrow pointing at a category.
    Category { label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramView {
    pub feature: String,
    pub title: String,
    pub x_axis_title: String,
    pub bins: Vec<HistogramBin>,
    pub categories: Vec<CategoryCount>,
    /// Marginal box plot of the numeric values.
    pub summary: Option<BoxSummary>,
    pub client: Option<ClientMarker>,
    pub missing: usize,
}

fn bin_values(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some(summary) = box_summary(values) else {
        return Vec::new();
    };
    let (min, max) = (summary.min, summary.max);
    if min == max {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();
    for v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

fn count_labels(labels: Vec<String>) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount { label, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Distribution of one feature in the sample with the client marked.
pub fn histogram(
    sample: &ReferenceSample,
    feature: &str,
    client_value: Option<&FieldValue>,
    glossary: &Glossary,
) -> PlotResult<HistogramView> {
    let Some(column) = sample.column(feature) else {
        return PlotResult::Skipped(format!(
            "Feature '{}' was not found in the reference data for the histogram.",
            glossary.label(feature)
        ));
    };

    let mut numbers = Vec::new();
    let mut labels = Vec::new();
    let mut missing = 0;
    for cell in column {
        match cell.as_ref().map(|v| axis_value(feature, v)) {
            Some(AxisValue::Number(n)) => numbers.push(n),
            Some(AxisValue::Label(l)) => labels.push(l),
            None => missing += 1,
        }
    }

    let client = client_value.map(|v| match axis_value(feature, v) {
        AxisValue::Number(x) => ClientMarker::Line {
            x,
            annotation: format!("Client: {:.2}", x),
        },
        AxisValue::Label(label) => ClientMarker::Category { label },
    });

    PlotResult::Ready(HistogramView {
        feature: feature.to_string(),
        title: format!(
            "Distribution of '{}' in the reference population",
            glossary.label(feature)
        ),
        x_axis_title: axis_title(feature, glossary),
        bins: bin_values(&numbers, HISTOGRAM_BINS),
        categories: count_labels(labels),
        summary: box_summary(&numbers),
        client,
        missing,
    })
}

// ============ Scatter ============

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub x_feature: String,
    pub y_feature: String,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub points: Vec<ScatterPoint>,
    /// Highlighted client point, when both of its values are numeric.
    pub client: Option<ScatterPoint>,
    /// Sample rows without a numeric value on both axes.
    pub dropped: usize,
}

fn numeric_axis(feature: &str, value: Option<&FieldValue>) -> Option<f64> {
    match axis_value(feature, value?) {
        AxisValue::Number(n) => Some(n),
        AxisValue::Label(_) => None,
    }
}

/// Two features of the sample plotted against each other.
pub fn scatter(
    sample: &ReferenceSample,
    x_feature: &str,
    y_feature: &str,
    record: &ClientRecord,
    glossary: &Glossary,
) -> PlotResult<ScatterView> {
    let (Some(xs), Some(ys)) = (sample.column(x_feature), sample.column(y_feature)) else {
        let absent = if sample.column(x_feature).is_none() {
            x_feature
        } else {
            y_feature
        };
        return PlotResult::Skipped(format!(
            "Feature '{}' is not present in the reference data; the bivariate plot cannot be drawn.",
            glossary.label(absent)
        ));
    };

    let mut points = Vec::with_capacity(xs.len());
    let mut dropped = 0;
    for (x, y) in xs.iter().zip(ys) {
        match (
            numeric_axis(x_feature, x.as_ref()),
            numeric_axis(y_feature, y.as_ref()),
        ) {
            (Some(x), Some(y)) => points.push(ScatterPoint { x, y }),
            _ => dropped += 1,
        }
    }

    let client = match (
        numeric_axis(x_feature, record.get(x_feature)),
        numeric_axis(y_feature, record.get(y_feature)),
    ) {
        (Some(x), Some(y)) => Some(ScatterPoint { x, y }),
        _ => None,
    };

    PlotResult::Ready(ScatterView {
        x_feature: x_feature.to_string(),
        y_feature: y_feature.to_string(),
        title: format!(
            "Relationship between '{}' and '{}'",
            glossary.label(x_feature),
            glossary.label(y_feature)
        ),
        x_axis_title: axis_title(x_feature, glossary),
        y_axis_title: axis_title(y_feature, glossary),
        points,
        client,
        dropped,
    })
}

// ============ Credit by Education ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub label: String,
    pub color: &'static str,
    pub summary: BoxSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotView {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub groups: Vec<BoxGroup>,
    pub client: Option<CategoryPoint>,
}

fn education_color(level: &str) -> &'static str {
    match level {
        "Higher education" => "blue",
        "Secondary / secondary special" => "green",
        "Incomplete higher" => "orange",
        "Lower secondary" => "red",
        "Academic degree" => "purple",
        _ => "gray",
    }
}

/// Credit amount distribution per education level.
///
/// `None` when the sample lacks either column.
pub fn credit_by_education(
    sample: &ReferenceSample,
    record: &ClientRecord,
    glossary: &Glossary,
) -> Option<BoxPlotView> {
    let credits = sample.column("AMT_CREDIT")?;
    let levels = sample.column("NAME_EDUCATION_TYPE")?;

    let mut by_level: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (credit, level) in credits.iter().zip(levels) {
        let Some(credit) = credit.as_ref().and_then(FieldValue::as_f64) else {
            continue;
        };
        let label = level
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| MISSING_LABEL.to_string());
        by_level.entry(label).or_default().push(credit);
    }

    // Known levels in form order, anything else after them by name
    let rank = |label: &str| {
        EDUCATION_CHOICES
            .iter()
            .position(|c| *c == label)
            .unwrap_or(EDUCATION_CHOICES.len())
    };
    let mut groups: Vec<BoxGroup> = by_level
        .into_iter()
        .filter_map(|(label, values)| {
            let summary = box_summary(&values)?;
            Some(BoxGroup {
                color: education_color(&label),
                label,
                summary,
            })
        })
        .collect();
    groups.sort_by(|a, b| {
        rank(&a.label)
            .cmp(&rank(&b.label))
            .then_with(|| a.label.cmp(&b.label))
    });

    let client = match (
        record.get("NAME_EDUCATION_TYPE").and_then(FieldValue::as_str),
        record.get("AMT_CREDIT").and_then(FieldValue::as_f64),
    ) {
        (Some(category), Some(value)) => Some(CategoryPoint {
            category: category.to_string(),
            value,
        }),
        _ => None,
    };

    Some(BoxPlotView {
        title: "Credit amount by education level".to_string(),
        x_axis_title: glossary.label("NAME_EDUCATION_TYPE").to_string(),
        y_axis_title: glossary.label("AMT_CREDIT").to_string(),
        groups,
        client,
    })
}

// ============ Panel ============

/// All comparison plots for one submission.
pub fn panel(
    sample: Option<&ReferenceSample>,
    record: &ClientRecord,
    glossary: &Glossary,
    selection: &ComparisonSelection,
) -> ComparisonPanel {
    let Some(sample) = sample.filter(|s| s.rows() > 0) else {
        return ComparisonPanel::Unavailable {
            warning: "Reference data is unavailable; comparison with other clients is disabled."
                .to_string(),
        };
    };

    let features = sample.features();
    let first = features.first().map(String::as_str);
    let second = features.get(1).map(String::as_str).or(first);

    let histogram = match selection.histogram_feature.as_deref().or(first) {
        Some(feature) => histogram(sample, feature, record.get(feature), glossary),
        None => PlotResult::Skipped(
            "No comparable feature was found in the reference data.".to_string(),
        ),
    };

    let scatter = match (
        selection.scatter_x.as_deref().or(first),
        selection.scatter_y.as_deref().or(second),
    ) {
        (Some(x), Some(y)) => scatter(sample, x, y, record, glossary),
        _ => PlotResult::Skipped(
            "No comparable features were found in the reference data for the bivariate plot."
                .to_string(),
        ),
    };

    ComparisonPanel::Available {
        features: features
            .iter()
            .map(|name| FeatureOption {
                name: name.clone(),
                label: glossary.label(name).to_string(),
            })
            .collect(),
        histogram,
        scatter,
        credit_by_education: credit_by_education(sample, record, glossary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate_linearly() {
        let summary = box_summary(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q3, 3.25);
        assert_eq!(summary.outliers, 0);
    }

    #[test]
    fn whiskers_exclude_outliers() {
        let summary = box_summary(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(summary.upper_whisker, 4.0);
        assert_eq!(summary.outliers, 1);
        assert_eq!(summary.max, 100.0);
    }

    #[test]
    fn bins_cover_every_value() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let bins = bin_values(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins.last().unwrap().end, 99.0);
    }

    #[test]
    fn constant_values_use_a_single_bin() {
        let bins = bin_values(&[3.0, 3.0, 3.0], HISTOGRAM_BINS);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn day_features_plot_in_years() {
        assert_eq!(
            axis_value("DAYS_BIRTH", &FieldValue::Int(-3653)),
            AxisValue::Number(3653.0 / 365.25)
        );
        assert_eq!(
            axis_value("DAYS_EMPLOYED", &FieldValue::Int(DAYS_EMPLOYED_SENTINEL)),
            AxisValue::Label("not employed".to_string())
        );
        assert_eq!(
            axis_value("AMT_CREDIT", &FieldValue::Float(1.5)),
            AxisValue::Number(1.5)
        );
    }
}
