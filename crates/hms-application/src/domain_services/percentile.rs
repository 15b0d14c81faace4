//! Nearest-rank percentiles over network history

use hms_domain::value_objects::{NetworkPercentile, NetworkSample, PercentileQuery};

/// Nearest-rank percentile: sort ascending, take index `floor(p/100 * (n-1))`
///
/// An empty input yields 0. No interpolation.
pub fn nearest_rank(mut values: Vec<u64>, percentile: u8) -> u64 {
    if values.is_empty() {
        return 0;
    }
    values.sort_unstable();
    let last = values.len() - 1;
    let rank = (f64::from(percentile) / 100.0 * last as f64).floor() as usize;
    values[rank.min(last)]
}

/// Percentiles of received, sent and per-sample max over the last `window` samples
///
/// `samples` is the full history, oldest first; the query is normalized
/// before use.
pub fn network_percentile(samples: &[NetworkSample], query: PercentileQuery) -> NetworkPercentile {
    let query = query.normalized();
    let start = samples.len().saturating_sub(query.window);
    let window = &samples[start..];

    let received: Vec<u64> = window.iter().map(|s| s.received_rate).collect();
    let sent: Vec<u64> = window.iter().map(|s| s.sent_rate).collect();
    let max: Vec<u64> = window
        .iter()
        .map(|s| s.received_rate.max(s.sent_rate))
        .collect();

    NetworkPercentile {
        window: query.window,
        percentile: query.percentile,
        received_percentile: nearest_rank(received, query.percentile),
        sent_percentile: nearest_rank(sent, query.percentile),
        max_percentile: nearest_rank(max, query.percentile),
        samples: window.len(),
    }
}
