//! Tests for vizprep-model types.

use vizprep_model::{
    AggregateResult, ColumnRole, ColumnRoles, DivergingDomain, DomainOptions, Layout,
    PeriodExtent, RuleHit, ScaleDomains, Series, SeriesPoint, ValueRange,
};

fn sample_aggregate() -> AggregateResult {
    AggregateResult {
        layout: Layout::Long,
        periods: vec![2015, 2016],
        categories: vec!["Investigation".to_string(), "Family Preservation".to_string()],
        series: vec![
            Series {
                category: "Investigation".to_string(),
                points: vec![
                    SeriesPoint { period: 2015, value: 100.0 },
                    SeriesPoint { period: 2016, value: 80_000.0 },
                ],
            },
            Series {
                category: "Family Preservation".to_string(),
                points: vec![
                    SeriesPoint { period: 2015, value: 50.0 },
                    SeriesPoint { period: 2016, value: 0.0 },
                ],
            },
        ],
    }
}

#[test]
fn aggregate_totals_and_lookup() {
    let result = sample_aggregate();
    assert_eq!(result.period_totals(), vec![150.0, 80_000.0]);
    assert_eq!(
        result.series_for("Family Preservation").and_then(|s| s.value_at(2016)),
        Some(0.0)
    );
    assert_eq!(
        result.series_for("Investigation").and_then(|s| s.value_at(2014)),
        None
    );
    assert!(result.series_for("Missing").is_none());
    assert_eq!(result.values().count(), 4);
}

#[test]
fn aggregate_serializes() {
    let result = sample_aggregate();
    let json = serde_json::to_string(&result).expect("serialize aggregate");
    assert!(json.contains(r#""layout":"long""#));
    let round: AggregateResult = serde_json::from_str(&json).expect("deserialize aggregate");
    assert_eq!(round, result);
}

#[test]
fn roles_pick_layout() {
    let mut roles = ColumnRoles {
        period_column: "Year".to_string(),
        category_column: Some("Description".to_string()),
        measure_column: Some("Count".to_string()),
        hits: vec![RuleHit {
            role: ColumnRole::Period,
            rule: "period.exact".to_string(),
            column: "Year".to_string(),
        }],
    };
    assert_eq!(roles.layout(), Layout::Long);
    assert!(!roles.period_is_fallback());

    roles.measure_column = None;
    assert_eq!(roles.layout(), Layout::Wide);

    roles.hits.clear();
    assert!(roles.period_is_fallback());
}

#[test]
fn scale_domains_omit_missing_diverging() {
    let domains = ScaleDomains {
        periods: vec![2020, 2021],
        period_extent: Some(PeriodExtent { min: 2020, max: 2021 }),
        period_tick_count: 2,
        categories: vec!["A".to_string()],
        value_range: ValueRange { min: 0.0, max: 5.0 },
        diverging: None,
    };
    let json = serde_json::to_value(&domains).expect("serialize domains");
    assert!(json.get("diverging").is_none());
    assert_eq!(json["value_range"]["max"], serde_json::json!(5.0));

    let with = ScaleDomains {
        diverging: Some(DivergingDomain {
            max_abs: 7.0,
            nice_ticks: vec![-10.0, -5.0, 0.0, 5.0, 10.0],
            bound: 10.0,
        }),
        ..domains
    };
    let json = serde_json::to_value(&with).expect("serialize domains");
    assert_eq!(json["diverging"]["bound"], serde_json::json!(10.0));
}

#[test]
fn diverging_domain_is_symmetric() {
    let domain = DivergingDomain {
        max_abs: 3.5,
        nice_ticks: vec![-4.0, -2.0, 0.0, 2.0, 4.0],
        bound: 4.0,
    };
    assert_eq!(domain.lower(), -4.0);
    assert_eq!(domain.upper(), 4.0);
}

#[test]
fn options_round_trip_through_json() {
    let options = DomainOptions::default()
        .with_diverging(true)
        .with_zero_floor(false)
        .with_gamma(0.75);
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: DomainOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
}
