/// Rendering tests for the dashboard view models
/// Covers day-count display, attribution ranking and comparison plots
use credit_dashboard::comparison::{
    self, ClientMarker, ComparisonPanel, ComparisonSelection, PlotResult,
};
use credit_dashboard::form::FormSession;
use credit_dashboard::glossary::Glossary;
use credit_dashboard::models::{
    ClientRecord, Explanation, FieldValue, ScoringResponse, CLIENT_ID_COLUMN,
};
use credit_dashboard::reference::ReferenceSample;
use credit_dashboard::render::{self, AttributionPanel, Direction, TOP_ATTRIBUTIONS};
use std::collections::HashMap;

fn response(values: &[(&str, f64)]) -> ScoringResponse {
    ScoringResponse {
        probability_default: 0.62,
        prediction_class: 1,
        optimal_threshold_used: 0.48,
        explanation: Explanation::Available {
            values: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        },
        shap_expected_value: None,
    }
}

fn int(v: i64) -> Option<FieldValue> {
    Some(FieldValue::Int(v))
}

fn float(v: f64) -> Option<FieldValue> {
    Some(FieldValue::Float(v))
}

fn category(v: &str) -> Option<FieldValue> {
    Some(FieldValue::Category(v.to_string()))
}

fn sample() -> ReferenceSample {
    ReferenceSample::new(
        vec![
            (
                "DAYS_BIRTH".to_string(),
                vec![int(-10_000), int(-12_000), int(-20_000), None, int(-25_000)],
            ),
            (
                "AMT_CREDIT".to_string(),
                vec![
                    float(100_000.0),
                    float(250_000.0),
                    float(500_000.0),
                    float(750_000.0),
                    None,
                ],
            ),
            (
                "NAME_EDUCATION_TYPE".to_string(),
                vec![
                    category("Higher education"),
                    category("Secondary / secondary special"),
                    category("Higher education"),
                    None,
                    category("Lower secondary"),
                ],
            ),
            (
                "DAYS_EMPLOYED".to_string(),
                vec![int(-1_000), int(365_243), int(-4_000), int(365_243), int(-500)],
            ),
        ],
        5,
    )
}

#[test]
fn test_only_exact_employment_sentinel_reads_not_employed() {
    let near = FieldValue::Float(365_243.7);
    assert_ne!(render::display_value("DAYS_EMPLOYED", &near), "not employed");
    assert_eq!(
        render::day_hint("DAYS_EMPLOYED", &near).as_deref(),
        Some("non-standard (positive) employment length")
    );
    assert!(matches!(
        comparison::axis_value("DAYS_EMPLOYED", &near),
        comparison::AxisValue::Number(_)
    ));

    let exact = FieldValue::Float(365_243.0);
    assert_eq!(render::display_value("DAYS_EMPLOYED", &exact), "not employed");
    assert_eq!(
        comparison::axis_value("DAYS_EMPLOYED", &exact),
        comparison::AxisValue::Label("not employed".to_string())
    );
}

#[test]
fn test_day_counts_display_in_years() {
    assert_eq!(
        render::display_value("DAYS_BIRTH", &FieldValue::Int(-15_000)),
        "41 years"
    );
    assert_eq!(
        render::display_value("DAYS_EMPLOYED", &FieldValue::Int(365_243)),
        "not employed"
    );
    assert_eq!(
        render::display_value("DAYS_EMPLOYED", &FieldValue::Int(-2_000)),
        "5 years"
    );
    assert_eq!(
        render::display_value("DAYS_ID_PUBLISH", &FieldValue::Int(-1_000)),
        "3 years ago"
    );
    assert_eq!(
        render::display_value("SK_ID_CURR_DAYS_CREDIT_ENDDATE_max", &FieldValue::Float(800.0)),
        "in the future (in about 2 years)"
    );
    assert_eq!(
        render::display_value("SK_ID_CURR_DAYS_CREDIT_ENDDATE_max", &FieldValue::Float(-1_200.0)),
        "in the past (about 3 years ago)"
    );
    assert_eq!(
        render::display_value("SK_ID_CURR_DAYS_CREDIT_ENDDATE_max", &FieldValue::Float(0.0)),
        "today"
    );
    assert_eq!(
        render::display_value("CODE_GENDER", &FieldValue::Category("F".to_string())),
        "F"
    );
}

#[test]
fn test_attribution_chart_keeps_top_ten_by_magnitude() {
    let values: Vec<(String, f64)> = (0..15)
        .map(|i| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            (format!("FEATURE_{:02}", i), sign * (i as f64 + 1.0) / 100.0)
        })
        .collect();
    let pairs: Vec<(&str, f64)> = values.iter().map(|(k, v)| (k.as_str(), *v)).collect();

    let panel = render::attribution_panel(&response(&pairs), &Glossary::builtin());
    let chart = panel.chart().unwrap();

    assert_eq!(chart.bars.len(), TOP_ATTRIBUTIONS);
    assert_eq!(chart.bars[0].feature, "FEATURE_14");
    assert_eq!(chart.bars[0].direction, Direction::IncreasesRisk);
    assert_eq!(chart.bars[1].direction, Direction::DecreasesRisk);
    assert_eq!(chart.bars.last().unwrap().feature, "FEATURE_05");
    // Unknown features keep their raw name as label
    assert_eq!(chart.bars[0].label, "FEATURE_14");
}

#[test]
fn test_attribution_labels_use_glossary() {
    let panel = render::attribution_panel(
        &response(&[("AMT_CREDIT", 0.2), ("CNT_CHILDREN", 0.0)]),
        &Glossary::builtin(),
    );
    let chart = panel.chart().unwrap();

    assert_eq!(chart.bars[0].label, "Requested credit amount");
    assert_eq!(chart.bars[1].direction, Direction::Neutral);
}

#[test]
fn test_unavailable_explanation_becomes_warning() {
    let mut resp = response(&[]);
    resp.explanation = Explanation::Unavailable {
        reason: "explainer not initialized".to_string(),
    };

    match render::attribution_panel(&resp, &Glossary::builtin()) {
        AttributionPanel::Unavailable { warning } => {
            assert!(warning.contains("explainer not initialized"))
        }
        other => panic!("expected a warning, got {:?}", other),
    }
}

#[test]
fn test_profile_lists_required_fields_first_without_identifier() {
    let mut record: ClientRecord = FormSession::new().to_record();
    record.insert(CLIENT_ID_COLUMN, FieldValue::Int(100_002));
    record.insert("AAA_EXTRA", FieldValue::Float(1.5));

    let rows = render::profile_rows(&record, &Glossary::builtin());

    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0].feature, "EXT_SOURCE_1");
    assert_eq!(rows.last().unwrap().feature, "AAA_EXTRA");
    assert!(rows.iter().all(|r| r.feature != CLIENT_ID_COLUMN));

    let view = render::dashboard(
        &response(&[]),
        &record,
        &Glossary::builtin(),
        None,
        &ComparisonSelection::default(),
    );
    assert_eq!(view.client_id, Some(100_002));
    assert!(matches!(view.comparisons, ComparisonPanel::Unavailable { .. }));
}

#[test]
fn test_histogram_marks_client_in_years() {
    let record = FormSession::new().to_record();
    let sample = sample();

    let plot = comparison::histogram(
        &sample,
        "DAYS_BIRTH",
        record.get("DAYS_BIRTH"),
        &Glossary::builtin(),
    );
    let view = plot.ready().unwrap();

    assert_eq!(view.missing, 1);
    assert_eq!(view.bins.iter().map(|b| b.count).sum::<usize>(), 4);
    assert_eq!(view.x_axis_title, "Age (years)");
    match view.client.as_ref().unwrap() {
        ClientMarker::Line { x, annotation } => {
            assert!((x - 15_000.0 / 365.25).abs() < 1e-9);
            assert_eq!(annotation, "Client: 41.07");
        }
        other => panic!("expected a line marker, got {:?}", other),
    }
}

#[test]
fn test_histogram_counts_not_employed_separately() {
    let sample = sample();

    let plot = comparison::histogram(
        &sample,
        "DAYS_EMPLOYED",
        Some(&FieldValue::Int(365_243)),
        &Glossary::builtin(),
    );
    let view = plot.ready().unwrap();

    assert_eq!(view.categories.len(), 1);
    assert_eq!(view.categories[0].label, "not employed");
    assert_eq!(view.categories[0].count, 2);
    assert_eq!(view.bins.iter().map(|b| b.count).sum::<usize>(), 3);
    assert_eq!(
        view.client,
        Some(ClientMarker::Category {
            label: "not employed".to_string()
        })
    );
}

#[test]
fn test_scatter_drops_incomplete_rows() {
    let record = FormSession::new().to_record();
    let sample = sample();

    let plot = comparison::scatter(
        &sample,
        "DAYS_BIRTH",
        "AMT_CREDIT",
        &record,
        &Glossary::builtin(),
    );
    let view = plot.ready().unwrap();

    assert_eq!(view.points.len(), 3);
    assert_eq!(view.dropped, 2);
    let client = view.client.unwrap();
    assert!((client.y - 250_000.0).abs() < 1e-9);

    let missing = comparison::scatter(
        &sample,
        "DAYS_BIRTH",
        "NOT_A_COLUMN",
        &record,
        &Glossary::builtin(),
    );
    assert!(matches!(missing, PlotResult::Skipped(msg) if msg.contains("NOT_A_COLUMN")));
}

#[test]
fn test_credit_by_education_groups_levels() {
    let record = FormSession::new().to_record();
    let view =
        comparison::credit_by_education(&sample(), &record, &Glossary::builtin()).unwrap();

    let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels.len(), 3);
    assert!(labels.contains(&"Higher education"));
    assert!(labels.contains(&"nan"));
    assert_eq!(*labels.last().unwrap(), "nan");
    let higher = view
        .groups
        .iter()
        .find(|g| g.label == "Higher education")
        .unwrap();
    assert_eq!(higher.color, "blue");
    assert_eq!(higher.summary.count, 2);

    let client = view.client.unwrap();
    assert_eq!(client.category, "Secondary / secondary special");
    assert!((client.value - 250_000.0).abs() < 1e-9);
}

#[test]
fn test_panel_defaults_to_first_features() {
    let record = FormSession::new().to_record();
    let sample = sample();

    let panel = comparison::panel(
        Some(&sample),
        &record,
        &Glossary::builtin(),
        &ComparisonSelection::default(),
    );

    let ComparisonPanel::Available {
        features,
        histogram,
        scatter,
        credit_by_education,
    } = panel
    else {
        panic!("expected comparisons to be available");
    };
    assert_eq!(features.len(), 4);
    assert_eq!(histogram.ready().unwrap().feature, "DAYS_BIRTH");
    let scatter = scatter.ready().unwrap();
    assert_eq!(scatter.x_feature, "DAYS_BIRTH");
    assert_eq!(scatter.y_feature, "AMT_CREDIT");
    assert!(credit_by_education.is_some());
}

#[test]
fn test_empty_sample_disables_comparisons() {
    let empty = ReferenceSample::new(Vec::new(), 0);
    let panel = comparison::panel(
        Some(&empty),
        &ClientRecord::new(),
        &Glossary::builtin(),
        &ComparisonSelection::default(),
    );
    assert!(matches!(panel, ComparisonPanel::Unavailable { .. }));
}

#[test]
fn test_top_attributions_breaks_ties_by_name() {
    let values: HashMap<String, f64> = [("B", 0.3), ("A", -0.3), ("C", 0.1)]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();

    let top = render::top_attributions(&values, 2);

    assert_eq!(top, vec![("A", -0.3), ("B", 0.3)]);
}
