//! Tests for the raw request handlers
//!
//! These tests verify the end-to-end handler semantics:
//! - Absence reported through the not_found flag, never an error
//! - Put/get round-trips and delete
//! - Column family isolation
//! - Scan ordering, limit, and short-circuit behavior
//! - Snapshot isolation and handler-level concurrency

use bytes::Bytes;

use rawkv::protocol::{
    RawDeleteRequest, RawGetRequest, RawPutRequest, RawScanRequest, RequestContext,
};
use rawkv::{Server, StandaloneStorage, Storage, StorageReader};

// =============================================================================
// Helper Functions
// =============================================================================

fn server() -> Server<StandaloneStorage> {
    Server::new(StandaloneStorage::in_memory().unwrap())
}

fn ctx() -> RequestContext {
    RequestContext::default()
}

fn raw_put(server: &Server<StandaloneStorage>, cf: &str, key: &'static [u8], value: &'static [u8]) {
    server
        .raw_put(RawPutRequest {
            context: ctx(),
            cf: cf.to_string(),
            key: Bytes::from_static(key),
            value: Bytes::from_static(value),
        })
        .unwrap();
}

fn raw_get(
    server: &Server<StandaloneStorage>,
    cf: &str,
    key: &'static [u8],
) -> (Bytes, bool) {
    let resp = server
        .raw_get(RawGetRequest {
            context: ctx(),
            cf: cf.to_string(),
            key: Bytes::from_static(key),
        })
        .unwrap();
    (resp.value, resp.not_found)
}

fn raw_scan(
    server: &Server<StandaloneStorage>,
    cf: &str,
    start_key: &'static [u8],
    limit: u32,
) -> Vec<(Bytes, Bytes)> {
    server
        .raw_scan(RawScanRequest {
            context: ctx(),
            cf: cf.to_string(),
            start_key: Bytes::from_static(start_key),
            limit,
        })
        .unwrap()
        .kvs
        .into_iter()
        .map(|pair| (pair.key, pair.value))
        .collect()
}

// =============================================================================
// Get/Put/Delete Tests
// =============================================================================

#[test]
fn test_get_absent_sets_not_found() {
    let server = server();

    let (value, not_found) = raw_get(&server, "default", b"never_written");

    assert!(not_found);
    assert!(value.is_empty());
}

#[test]
fn test_put_get_round_trip() {
    let server = server();
    raw_put(&server, "default", b"key1", b"value1");

    let (value, not_found) = raw_get(&server, "default", b"key1");

    assert!(!not_found);
    assert_eq!(value, Bytes::from_static(b"value1"));
}

#[test]
fn test_put_overwrites_previous_value() {
    let server = server();
    raw_put(&server, "default", b"key1", b"old");
    raw_put(&server, "default", b"key1", b"new");

    let (value, not_found) = raw_get(&server, "default", b"key1");

    assert!(!not_found);
    assert_eq!(value, Bytes::from_static(b"new"));
}

#[test]
fn test_delete_erases() {
    let server = server();
    raw_put(&server, "default", b"key1", b"value1");

    server
        .raw_delete(RawDeleteRequest {
            context: ctx(),
            cf: "default".to_string(),
            key: Bytes::from_static(b"key1"),
        })
        .unwrap();

    let (_, not_found) = raw_get(&server, "default", b"key1");
    assert!(not_found);
}

#[test]
fn test_cf_isolation() {
    let server = server();
    raw_put(&server, "cf1", b"shared", b"v1");

    let (_, not_found) = raw_get(&server, "cf2", b"shared");
    assert!(not_found);

    raw_put(&server, "cf2", b"shared", b"v2");
    assert_eq!(raw_get(&server, "cf1", b"shared").0, Bytes::from_static(b"v1"));
    assert_eq!(raw_get(&server, "cf2", b"shared").0, Bytes::from_static(b"v2"));
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_scan_ordering_and_limit() {
    let server = server();
    // Arbitrary insertion order
    raw_put(&server, "default", b"c", b"3");
    raw_put(&server, "default", b"a", b"1");
    raw_put(&server, "default", b"d", b"4");
    raw_put(&server, "default", b"b", b"2");

    let kvs = raw_scan(&server, "default", b"b", 2);

    assert_eq!(
        kvs,
        vec![
            (Bytes::from_static(b"b"), Bytes::from_static(b"2")),
            (Bytes::from_static(b"c"), Bytes::from_static(b"3")),
        ]
    );
}

#[test]
fn test_scan_short_circuit() {
    let server = server();
    raw_put(&server, "default", b"x", b"1");
    raw_put(&server, "default", b"y", b"2");

    let kvs = raw_scan(&server, "default", b"x", 10);

    assert_eq!(kvs.len(), 2);
    assert_eq!(kvs[0].0, Bytes::from_static(b"x"));
    assert_eq!(kvs[1].0, Bytes::from_static(b"y"));
}

#[test]
fn test_scan_starts_at_first_key_geq_start() {
    let server = server();
    raw_put(&server, "default", b"a", b"1");
    raw_put(&server, "default", b"c", b"3");

    let kvs = raw_scan(&server, "default", b"b", 10);

    assert_eq!(kvs.len(), 1);
    assert_eq!(kvs[0].0, Bytes::from_static(b"c"));
}

#[test]
fn test_scan_past_last_key_is_empty() {
    let server = server();
    raw_put(&server, "default", b"a", b"1");

    assert!(raw_scan(&server, "default", b"z", 10).is_empty());
}

#[test]
fn test_scan_missing_cf_is_empty() {
    let server = server();
    assert!(raw_scan(&server, "never_written", b"", 10).is_empty());
}

#[test]
fn test_scan_limit_zero_is_empty() {
    let server = server();
    raw_put(&server, "default", b"a", b"1");

    assert!(raw_scan(&server, "default", b"", 0).is_empty());
}

#[test]
fn test_scan_does_not_cross_cf() {
    let server = server();
    raw_put(&server, "cf1", b"a", b"1");
    raw_put(&server, "cf2", b"b", b"2");

    let kvs = raw_scan(&server, "cf1", b"", 10);

    assert_eq!(kvs.len(), 1);
    assert_eq!(kvs[0].0, Bytes::from_static(b"a"));
}

// =============================================================================
// Snapshot Isolation Tests
// =============================================================================

#[test]
fn test_reader_ignores_put_issued_after_acquisition() {
    let server = server();
    let reader = server.storage().reader(&ctx()).unwrap();

    raw_put(&server, "default", b"k", b"v");

    assert_eq!(reader.get_cf("default", b"k").unwrap(), None);
    reader.close();

    let (_, not_found) = raw_get(&server, "default", b"k");
    assert!(!not_found);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_handlers_over_one_storage() {
    let server = server();
    let server = &server;

    crossbeam::thread::scope(|s| {
        for t in 0u8..4 {
            s.spawn(move |_| {
                for i in 0u8..16 {
                    let key = Bytes::from(vec![t, i]);
                    server
                        .raw_put(RawPutRequest {
                            context: ctx(),
                            cf: "default".to_string(),
                            key: key.clone(),
                            value: Bytes::from(vec![i]),
                        })
                        .unwrap();

                    let resp = server
                        .raw_get(RawGetRequest {
                            context: ctx(),
                            cf: "default".to_string(),
                            key,
                        })
                        .unwrap();
                    assert!(!resp.not_found);
                    assert_eq!(resp.value, Bytes::from(vec![i]));
                }
            });
        }
    })
    .unwrap();

    // 4 writers x 16 distinct keys
    let kvs = raw_scan(server, "default", b"", 100);
    assert_eq!(kvs.len(), 64);
}
