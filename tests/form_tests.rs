/// Form session tests against a small reference table
/// Covers prefill outcomes, placeholders, clamping and atomic updates
use credit_dashboard::form::{FormSession, PrefillOutcome};
use credit_dashboard::glossary::Glossary;
use credit_dashboard::models::{
    required_field, FieldError, FieldValue, CLIENT_ID_COLUMN, REQUIRED_FIELDS,
};
use credit_dashboard::reference::ReferenceTable;
use std::collections::BTreeMap;
use std::io::Write;

const FIXTURE: &str = include_str!("fixtures/reference.csv");

fn table() -> ReferenceTable {
    ReferenceTable::from_reader(FIXTURE.as_bytes()).expect("fixture parses")
}

fn updates(pairs: &[(&str, FieldValue)]) -> BTreeMap<String, FieldValue> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_new_session_holds_defaults() {
    let form = FormSession::new();
    assert_eq!(form.values().count(), REQUIRED_FIELDS.len());
    assert_eq!(form.get("EXT_SOURCE_1"), Some(&FieldValue::Float(0.5)));
    assert_eq!(form.get("DAYS_BIRTH"), Some(&FieldValue::Int(-15_000)));
    assert_eq!(
        form.get("CODE_GENDER"),
        Some(&FieldValue::Category("M".to_string()))
    );
    assert_eq!(form.client_id(), None);
    assert!(form.extras().is_empty());
}

#[test]
fn test_reference_table_drops_outcome_column() {
    let table = table();
    assert_eq!(table.len(), 4);
    assert!(!table.has_column("TARGET"));
    assert!(table.has_column(CLIENT_ID_COLUMN));
    assert!(table.has_column("BUREAU_REQ_COUNT"));
}

#[test]
fn test_reference_table_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let table = ReferenceTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 4);
    assert!(table.find_by_id(100006).is_some());
}

#[test]
fn test_missing_reference_file_is_an_error() {
    let result = ReferenceTable::load(std::path::Path::new("/nonexistent/application_train.csv"));
    assert!(result.is_err());
}

#[test]
fn test_duplicate_identifier_keeps_first_row() {
    let csv = "SK_ID_CURR,EXT_SOURCE_1\n7,0.1\n7,0.9\n";
    let table = ReferenceTable::from_reader(csv.as_bytes()).unwrap();
    let row = table.find_by_id(7).unwrap();
    assert_eq!(row.get("EXT_SOURCE_1"), Some(FieldValue::Float(0.1)));
}

#[test]
fn test_prefill_copies_reference_row() {
    let table = table();
    let mut form = FormSession::new();

    let outcome = form.prefill(Some(&table), 100002);

    assert_eq!(
        outcome,
        PrefillOutcome::Loaded {
            client_id: 100002,
            copied: 7,
            placeholders: 0,
            extras: 1,
        }
    );
    assert_eq!(outcome.warning(), None);
    assert_eq!(form.client_id(), Some(100002));
    assert_eq!(form.get("EXT_SOURCE_1"), Some(&FieldValue::Float(0.083)));
    assert_eq!(form.get("DAYS_BIRTH"), Some(&FieldValue::Int(-9461)));
    // Columns absent from the table keep their defaults
    assert_eq!(form.get("EXT_SOURCE_3"), Some(&FieldValue::Float(0.5)));

    let record = form.to_record();
    assert_eq!(record.len(), REQUIRED_FIELDS.len() + 2);
    assert_eq!(record.get(CLIENT_ID_COLUMN), Some(&FieldValue::Int(100002)));
    assert_eq!(record.get("BUREAU_REQ_COUNT"), Some(&FieldValue::Int(1)));
    assert!(record.get("TARGET").is_none());
    assert!(record.missing_required().is_empty());
}

#[test]
fn test_prefill_uses_placeholders_for_missing_cells() {
    let table = table();
    let mut form = FormSession::new();

    let outcome = form.prefill(Some(&table), 100003);

    assert_eq!(
        outcome,
        PrefillOutcome::Loaded {
            client_id: 100003,
            copied: 5,
            placeholders: 2,
            extras: 1,
        }
    );
    assert_eq!(form.get("EXT_SOURCE_1"), Some(&FieldValue::Float(0.0)));
    assert_eq!(
        form.get("OCCUPATION_TYPE"),
        Some(&FieldValue::Category("XNA".to_string()))
    );
    assert_eq!(form.get("DAYS_EMPLOYED"), Some(&FieldValue::Int(365_243)));
}

#[test]
fn test_prefill_empty_day_counts_stay_valid() {
    let csv = "SK_ID_CURR,DAYS_BIRTH,DAYS_ID_PUBLISH\n42,,\n";
    let table = ReferenceTable::from_reader(csv.as_bytes()).expect("csv parses");
    let mut form = FormSession::new();

    form.prefill(Some(&table), 42);

    assert_eq!(form.get("DAYS_BIRTH"), Some(&FieldValue::Int(-7_000)));
    assert_eq!(form.get("DAYS_ID_PUBLISH"), Some(&FieldValue::Int(-1)));
    for (name, value) in form.values() {
        let spec = required_field(name).expect("required field");
        assert!(spec.validate(value).is_ok(), "{} = {:?}", name, value);
    }
}

#[test]
fn test_prefill_clamps_out_of_range_values() {
    let table = table();
    let mut form = FormSession::new();

    form.prefill(Some(&table), 100004);

    assert_eq!(form.get("AMT_CREDIT"), Some(&FieldValue::Float(5_000_000.0)));
    assert_eq!(
        form.get("OCCUPATION_TYPE"),
        Some(&FieldValue::Category("XNA".to_string()))
    );
    assert_eq!(
        form.get("CODE_GENDER"),
        Some(&FieldValue::Category("XNA".to_string()))
    );
    // Empty extra cells are skipped
    assert!(form.extras().is_empty());
}

#[test]
fn test_prefill_missing_education_uses_unknown() {
    let table = table();
    let mut form = FormSession::new();

    form.prefill(Some(&table), 100006);

    assert_eq!(
        form.get("NAME_EDUCATION_TYPE"),
        Some(&FieldValue::Category("Unknown".to_string()))
    );
}

#[test]
fn test_prefill_miss_resets_form() {
    let table = table();
    let mut form = FormSession::new();
    form.prefill(Some(&table), 100002);

    let outcome = form.prefill(Some(&table), 999_999);

    assert_eq!(outcome, PrefillOutcome::NotFound { client_id: 999_999 });
    assert!(outcome.warning().unwrap().contains("999999"));
    let fresh = FormSession::new();
    assert_eq!(
        form.values().collect::<Vec<_>>(),
        fresh.values().collect::<Vec<_>>()
    );
    assert_eq!(form.client_id(), None);
    assert!(form.extras().is_empty());
}

#[test]
fn test_prefill_without_reference_keeps_form() {
    let mut form = FormSession::new();
    form.set("CNT_CHILDREN", &FieldValue::Int(3)).unwrap();

    let outcome = form.prefill(None, 100002);

    assert_eq!(outcome, PrefillOutcome::ReferenceUnavailable);
    assert!(outcome.warning().is_some());
    assert_eq!(form.get("CNT_CHILDREN"), Some(&FieldValue::Int(3)));
}

#[test]
fn test_apply_is_all_or_nothing() {
    let mut form = FormSession::new();

    let result = form.apply(&updates(&[
        ("CNT_CHILDREN", FieldValue::Int(2)),
        ("EXT_SOURCE_2", FieldValue::Float(1.5)),
    ]));

    assert!(matches!(result, Err(FieldError::OutOfBounds { .. })));
    assert_eq!(form.get("CNT_CHILDREN"), Some(&FieldValue::Int(0)));
    assert_eq!(form.get("EXT_SOURCE_2"), Some(&FieldValue::Float(0.5)));
}

#[test]
fn test_apply_rejects_unknown_fields_and_choices() {
    let mut form = FormSession::new();

    let unknown = form.apply(&updates(&[("NOT_A_FIELD", FieldValue::Int(1))]));
    assert_eq!(
        unknown,
        Err(FieldError::UnknownField("NOT_A_FIELD".to_string()))
    );

    let bad_choice = form.set(
        "NAME_FAMILY_STATUS",
        &FieldValue::Category("Engaged".to_string()),
    );
    assert!(matches!(bad_choice, Err(FieldError::UnknownChoice { .. })));

    let wrong_type = form.set("AMT_CREDIT", &FieldValue::Category("lots".to_string()));
    assert!(matches!(wrong_type, Err(FieldError::WrongType { .. })));
}

#[test]
fn test_apply_coerces_whole_floats_to_integers() {
    let mut form = FormSession::new();

    form.apply(&updates(&[
        ("CNT_CHILDREN", FieldValue::Float(3.0)),
        ("AMT_CREDIT", FieldValue::Int(400_000)),
    ]))
    .unwrap();

    assert_eq!(form.get("CNT_CHILDREN"), Some(&FieldValue::Int(3)));
    assert_eq!(form.get("AMT_CREDIT"), Some(&FieldValue::Float(400_000.0)));
    assert!(form
        .set("CNT_CHILDREN", &FieldValue::Float(2.5))
        .is_err());
}

#[test]
fn test_reset_forgets_loaded_client() {
    let table = table();
    let mut form = FormSession::new();
    form.prefill(Some(&table), 100002);

    form.reset();

    assert_eq!(form.client_id(), None);
    assert!(form.extras().is_empty());
    assert_eq!(form.get("EXT_SOURCE_1"), Some(&FieldValue::Float(0.5)));
}

#[test]
fn test_view_describes_every_field() {
    let form = FormSession::new();
    let view = form.view(&Glossary::builtin());

    assert_eq!(view.fields.len(), REQUIRED_FIELDS.len());
    let birth = view
        .fields
        .iter()
        .find(|f| f.name == "DAYS_BIRTH")
        .unwrap();
    assert_eq!(birth.kind, "int");
    assert_eq!(birth.min, Some(-30_000.0));
    assert_eq!(birth.hint.as_deref(), Some("about 41 years"));

    let gender = view
        .fields
        .iter()
        .find(|f| f.name == "CODE_GENDER")
        .unwrap();
    assert_eq!(gender.kind, "category");
    assert_eq!(gender.label, "Gender");
    assert!(gender.choices.as_ref().unwrap().contains(&"F"));
}

#[test]
fn test_sample_is_seeded_and_limited_to_labelled_columns() {
    let table = table();
    let glossary = Glossary::builtin();

    let a = table.sample(2, 42, &glossary);
    let b = table.sample(2, 42, &glossary);

    assert_eq!(a.rows(), 2);
    assert_eq!(a.column("AMT_CREDIT"), b.column("AMT_CREDIT"));
    assert!(a.column(CLIENT_ID_COLUMN).is_none());
    assert!(a.column("BUREAU_REQ_COUNT").is_none());
    assert!(a.features().iter().any(|f| f == "DAYS_BIRTH"));

    let all = table.sample(1000, 42, &glossary);
    assert_eq!(all.rows(), 4);
}
