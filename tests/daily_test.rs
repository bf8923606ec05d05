//! Tests for daily sentiment aggregation

mod common;

use common::{assert_close, date, scored_row};
use headline_sentiment::analytics::{aggregate_daily, for_symbol, DailyAggregator};
use headline_sentiment::models::DailyKey;

#[test]
fn test_means_per_date_and_symbol() {
    let rows = vec![
        scored_row(date(2024, 1, 1), "ACME", 0.1, 0.7, 0.2),
        scored_row(date(2024, 1, 1), "ACME", 0.3, 0.5, 0.2),
        scored_row(date(2024, 1, 1), "BETA", 0.0, 1.0, 0.0),
        scored_row(date(2024, 1, 2), "ACME", 0.5, 0.5, 0.0),
    ];

    let records = aggregate_daily(&rows);
    assert_eq!(records.len(), 3);

    let acme = &records[0];
    assert_eq!(acme.key(), DailyKey::new(date(2024, 1, 1), "ACME"));
    assert_close(acme.neg, 0.2);
    assert_close(acme.neu, 0.6);
    assert_close(acme.pos, 0.2);
    assert_eq!(acme.rows, 2);

    assert_eq!(records[1].symbol, "BETA");
    assert_eq!(records[2].date, date(2024, 1, 2));
}

#[test]
fn test_compound_is_not_averaged() {
    let mut row = scored_row(date(2024, 3, 1), "ACME", 0.0, 0.5, 0.5);
    row.compound = 0.9;

    let records = aggregate_daily(&[row]);
    let json = serde_json::to_value(&records[0]).unwrap();

    assert!(json.get("compound").is_none());
    assert_eq!(json["stock"], "ACME");
    assert_eq!(json["date"], "2024-03-01");
}

#[test]
fn test_incremental_aggregation() {
    let mut aggregator = DailyAggregator::new();
    assert!(aggregator.is_empty());

    aggregator.push(&scored_row(date(2024, 1, 1), "ACME", 0.2, 0.8, 0.0));
    aggregator.push(&scored_row(date(2024, 1, 1), "ACME", 0.4, 0.6, 0.0));

    let mut later = DailyAggregator::new();
    later.push(&scored_row(date(2024, 1, 1), "ACME", 0.6, 0.4, 0.0));
    later.push(&scored_row(date(2024, 1, 5), "ACME", 0.0, 1.0, 0.0));
    aggregator.merge(&later);

    let records = aggregator.finish();
    assert_eq!(aggregator.len(), 2);
    assert_close(records[0].neg, 0.4);
    assert_eq!(records[0].rows, 3);
    assert_eq!(records[1].rows, 1);
}

#[test]
fn test_symbol_history_in_date_order() {
    let records = aggregate_daily(&[
        scored_row(date(2024, 2, 3), "ACME", 0.0, 1.0, 0.0),
        scored_row(date(2024, 2, 1), "ACME", 0.0, 1.0, 0.0),
        scored_row(date(2024, 2, 2), "BETA", 0.0, 1.0, 0.0),
    ]);

    let dates: Vec<_> = for_symbol(&records, "ACME").iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date(2024, 2, 1), date(2024, 2, 3)]);
}
