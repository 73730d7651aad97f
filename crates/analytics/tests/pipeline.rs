//! Black-box run of both pipeline paths over the generated sample dataset.

use stockwatch_analytics::{ForecastEngine, analyze_disruption, calculate_current_stock, recommend};
use stockwatch_fixtures::{DriftForecaster, SampleData};

#[test]
fn stock_view_covers_every_sampled_product() {
    let data = SampleData::generate();

    let view = calculate_current_stock(&data.ledger, &data.catalog);

    assert_eq!(view.len(), data.catalog.len());
    let ids: Vec<&str> = view.iter().map(|l| l.product_id.as_str()).collect();
    assert_eq!(ids, vec!["P001", "P002", "P003"]);
}

#[test]
fn recommendations_only_flag_products_below_minimum() {
    let data = SampleData::generate();

    let view = calculate_current_stock(&data.ledger, &data.catalog);
    let recommendations = recommend(&view);

    for rec in &recommendations {
        assert!(rec.current_stock < i64::from(rec.min_stock));
        assert!(rec.recommended_order > 0);
        assert_eq!(
            rec.current_stock + rec.recommended_order as i64,
            i64::from(rec.max_stock)
        );
    }
}

#[test]
fn disruption_risk_is_bounded_for_every_product() {
    let data = SampleData::generate();
    let engine = ForecastEngine::new(DriftForecaster);

    for definition in data.catalog.iter() {
        let analysis =
            analyze_disruption(&engine, &data.ledger, &data.catalog, definition.product_id())
                .expect("full-year series must be forecastable");

        assert!((0.0..=100.0).contains(&analysis.risk_percentage));
        assert_eq!(analysis.forecast.horizon(), 30);
    }
}
