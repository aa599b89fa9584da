use chrono::Local;

/// Local wall-clock time as ISO-8601 without offset, microsecond precision,
/// e.g. `2025-06-01T09:30:00.123456`.
pub fn local_iso_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
