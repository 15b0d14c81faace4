//! Percentile calculator tests

use hms_application::{nearest_rank, network_percentile};
use hms_domain::value_objects::{NetworkRate, NetworkSample, PercentileQuery};

fn samples(rates: &[(u64, u64)]) -> Vec<NetworkSample> {
    rates
        .iter()
        .enumerate()
        .map(|(i, (received, sent))| {
            NetworkSample::measured(i as i64 * 1000, NetworkRate::new(*received, *sent))
        })
        .collect()
}

#[test]
fn test_nearest_rank_median_of_five() {
    assert_eq!(nearest_rank(vec![10, 20, 30, 40, 50], 50), 30);
}

#[test]
fn test_nearest_rank_sorts_input() {
    assert_eq!(nearest_rank(vec![50, 10, 40, 20, 30], 50), 30);
}

#[test]
fn test_nearest_rank_empty_is_zero() {
    assert_eq!(nearest_rank(Vec::new(), 95), 0);
}

#[test]
fn test_nearest_rank_does_not_interpolate() {
    // floor(0.95 * 3) = 2
    assert_eq!(nearest_rank(vec![1, 2, 3, 100], 95), 3);
    assert_eq!(nearest_rank(vec![1, 2, 3, 100], 99), 3);
}

#[test]
fn test_network_percentile_builds_three_series() {
    let history = samples(&[(10, 50), (20, 5), (30, 35), (40, 0), (50, 60)]);
    let result = network_percentile(&history, PercentileQuery::new(60, 50));

    assert_eq!(result.received_percentile, 30);
    // sent sorted: 0 5 35 50 60
    assert_eq!(result.sent_percentile, 35);
    // max per sample: 50 20 35 40 60 -> 20 35 40 50 60
    assert_eq!(result.max_percentile, 40);
    assert_eq!(result.samples, 5);
}

#[test]
fn test_network_percentile_uses_only_last_window() {
    let history = samples(&[(1000, 0), (1000, 0), (10, 0), (20, 0), (30, 0)]);
    let result = network_percentile(&history, PercentileQuery::new(3, 99));

    assert_eq!(result.samples, 3);
    assert_eq!(result.received_percentile, 20);
    assert_eq!(result.window, 3);
}

#[test]
fn test_network_percentile_clamps_query() {
    let history = samples(&[(10, 0), (20, 0), (30, 0)]);

    let result = network_percentile(&history, PercentileQuery::new(0, 0));
    assert_eq!(result.window, 1);
    assert_eq!(result.percentile, 1);
    assert_eq!(result.samples, 1);
    assert_eq!(result.received_percentile, 30);

    let result = network_percentile(&history, PercentileQuery::new(60, 200));
    assert_eq!(result.percentile, 99);
}

#[test]
fn test_network_percentile_of_empty_history() {
    let result = network_percentile(&[], PercentileQuery::default());
    assert_eq!(result.samples, 0);
    assert_eq!(result.received_percentile, 0);
    assert_eq!(result.sent_percentile, 0);
    assert_eq!(result.max_percentile, 0);
    assert_eq!(result.window, 60);
    assert_eq!(result.percentile, 95);
}
