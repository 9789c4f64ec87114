//! End-to-end scenarios over small open-data style tables.

use vizprep_core::{
    DivergingScale, derive_diverging, derive_domains, infer_roles, normalize_and_aggregate,
    prepare_chart,
};
use vizprep_model::{DomainOptions, Layout, RawTable, ShapeError};

fn values(result: &vizprep_model::AggregateResult, category: &str) -> Vec<f64> {
    result
        .series_for(category)
        .expect("series present")
        .values()
        .collect()
}

#[test]
fn long_layout_sums_and_zero_fills() {
    let table = RawTable::from_strs(
        &["Year", "Description", "Count"],
        &[
            &["2015", "Investigation", "100"],
            &["2015", "Family Preservation", "50"],
            &["2016", "Investigation", "80,000"],
        ],
    );
    let roles = infer_roles(&table);
    let result = normalize_and_aggregate(&table, &roles).unwrap();

    assert_eq!(result.layout, Layout::Long);
    assert_eq!(result.periods, vec![2015, 2016]);
    assert_eq!(
        result.categories,
        vec!["Investigation".to_string(), "Family Preservation".to_string()]
    );
    assert_eq!(values(&result, "Investigation"), vec![100.0, 80_000.0]);
    assert_eq!(values(&result, "Family Preservation"), vec![50.0, 0.0]);
}

#[test]
fn wide_layout_turns_bad_cells_into_zero() {
    let table = RawTable::from_strs(
        &["Year", "CountyA", "CountyB"],
        &[&["2020", "5", "x"], &["2021", "", "3"]],
    );
    let roles = infer_roles(&table);
    let result = normalize_and_aggregate(&table, &roles).unwrap();

    assert_eq!(result.layout, Layout::Wide);
    assert_eq!(
        result.categories,
        vec!["CountyA".to_string(), "CountyB".to_string()]
    );
    assert_eq!(values(&result, "CountyA"), vec![5.0, 0.0]);
    assert_eq!(values(&result, "CountyB"), vec![0.0, 3.0]);
}

#[test]
fn malformed_period_drops_the_row() {
    let table = RawTable::from_strs(
        &["Year", "Description", "Count"],
        &[
            &["2015", "Investigation", "10"],
            &["unknown", "Investigation", "999"],
        ],
    );
    let prepared = prepare_chart(&table, &DomainOptions::default()).unwrap();

    assert_eq!(prepared.aggregate.periods, vec![2015]);
    assert_eq!(values(&prepared.aggregate, "Investigation"), vec![10.0]);
    assert_eq!(prepared.dropped_rows, 1);
}

#[test]
fn malformed_period_drops_wide_rows_too() {
    let table = RawTable::from_strs(
        &["Year", "CountyA"],
        &[&["2020", "1"], &["unknown", "7"]],
    );
    let result = normalize_and_aggregate(&table, &infer_roles(&table)).unwrap();
    assert_eq!(result.periods, vec![2020]);
    assert_eq!(values(&result, "CountyA"), vec![1.0]);
}

#[test]
fn diverging_domain_is_round_and_symmetric() {
    let domain = derive_diverging([-7.0, 3.0], 5);
    assert_eq!(domain.max_abs, 7.0);
    assert_eq!(domain.nice_ticks, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    assert_eq!(domain.bound, 10.0);

    let scale = DivergingScale::new(&domain, &DomainOptions::default());
    let s = scale.normalize(5.0).unwrap();
    assert!((s - 0.536).abs() < 1e-3, "score {s}");
    let position = scale.position(5.0).unwrap();
    assert!((position - 0.768).abs() < 1e-3, "position {position}");
}

#[test]
fn missing_period_column_is_reported() {
    let table = RawTable::from_strs(
        &["County", "Description", "Total"],
        &[&["Travis", "Investigation", "4"]],
    );
    let roles = infer_roles(&table);
    assert!(roles.period_is_fallback());

    let err = normalize_and_aggregate(&table, &roles).unwrap_err();
    assert!(matches!(err, ShapeError::MissingRequiredColumn { .. }));
    assert!(err.to_string().starts_with("no time-period column found"));
}

#[test]
fn bad_schema_and_empty_result_are_distinct() {
    let empty = RawTable::from_strs(&["Year", "Notes"], &[&["2020", "n/a"]]);
    let err = prepare_chart(&empty, &DomainOptions::default()).unwrap_err();
    assert!(matches!(err, ShapeError::NoQualifyingData { .. }));
}

#[test]
fn embedded_years_and_qualified_headers() {
    let table = RawTable::from_strs(
        &["Fiscal  Year", "Removal Reason", "Confirmed Victims"],
        &[
            &["FY 2019", "Neglect", "1,200"],
            &["FY 2018", "Neglect", "1,000"],
            &["FY 2019", "Neglect", "300"],
            &["FY 2019", "Physical Abuse", "-"],
        ],
    );
    let prepared = prepare_chart(&table, &DomainOptions::default()).unwrap();

    assert_eq!(prepared.roles.period_column, "Fiscal  Year");
    assert_eq!(prepared.aggregate.periods, vec![2018, 2019]);
    assert_eq!(values(&prepared.aggregate, "Neglect"), vec![1000.0, 1500.0]);
    assert!(prepared.aggregate.series_for("Physical Abuse").is_none());
    assert_eq!(prepared.domains.value_range.min, 0.0);
    assert_eq!(prepared.domains.value_range.max, 1500.0);
}

#[test]
fn domains_serialize_for_renderers() {
    let table = RawTable::from_strs(&["Year", "A"], &[&["2020", "-2"], &["2021", "4"]]);
    let prepared =
        prepare_chart(&table, &DomainOptions::default().with_diverging(true)).unwrap();
    let json = serde_json::to_value(&prepared.domains).expect("serialize domains");
    assert_eq!(json["periods"], serde_json::json!([2020, 2021]));
    assert_eq!(json["value_range"]["min"], serde_json::json!(-2.0));
    assert_eq!(json["diverging"]["bound"], serde_json::json!(4.0));

    let without = derive_domains(&prepared.aggregate, &DomainOptions::default());
    let json = serde_json::to_value(&without).expect("serialize domains");
    assert!(json.get("diverging").is_none());
}
