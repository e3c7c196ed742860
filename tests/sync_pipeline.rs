// tests/sync_pipeline.rs

//! End-to-end tests for the index synchronization pipeline: batch downloads
//! against a loopback HTTP server, and full `Mirror::update` runs.

use std::collections::HashMap;
use std::fs;

use aptsync::{
    uri_to_filename, DownloadManager, DownloadRequest, DownloadStats, Error, Mirror, SourceEntry,
};
use uuid::Uuid;

mod common;

use common::{gzip, spawn_http_server, unreachable_addr, CollectingReporter};

#[test]
fn test_download_batch_with_one_unreachable_host() {
    let mut routes = HashMap::new();
    routes.insert("/one_Packages.gz".to_string(), gzip(b"Package: one\n"));
    routes.insert("/two_Packages.gz".to_string(), gzip(b"Package: two\n"));
    let addr = spawn_http_server(routes);
    let dead = unreachable_addr();

    let dir = tempfile::tempdir().unwrap();
    let requests = vec![
        DownloadRequest::new(
            format!("http://{addr}/one_Packages.gz"),
            dir.path().join("one_Packages.gz"),
        ),
        DownloadRequest::new(
            format!("http://{dead}/three_Packages.gz"),
            dir.path().join("three_Packages.gz"),
        ),
        DownloadRequest::new(
            format!("http://{addr}/two_Packages.gz"),
            dir.path().join("two_Packages.gz"),
        ),
    ];

    let manager = DownloadManager::new(4).unwrap();
    let reporter = CollectingReporter::new();
    let stats = manager.download(requests, &reporter).unwrap();

    // Exactly one outcome per request, exactly one failure.
    assert_eq!(stats, DownloadStats { completed: 2, failed: 1 });
    assert_eq!(reporter.info_messages().len(), 2);

    let errors = reporter.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].contains(&dead.to_string()),
        "failure should reference the unreachable host: {}",
        errors[0]
    );

    // Files exist for the reachable destinations only.
    assert!(dir.path().join("one_Packages.gz").exists());
    assert!(dir.path().join("two_Packages.gz").exists());
    assert!(!dir.path().join("three_Packages.gz").exists());
}

#[test]
fn test_update_downloads_and_extracts_all_components() {
    let main_index = b"Package: hello\nVersion: 2.10\n";
    let restricted_index = b"Package: firmware\nVersion: 1.0\n";

    let mut routes = HashMap::new();
    routes.insert(
        "/ubuntu/dists/trusty/main/binary-amd64/Packages.gz".to_string(),
        gzip(main_index),
    );
    routes.insert(
        "/ubuntu/dists/trusty/restricted/binary-amd64/Packages.gz".to_string(),
        gzip(restricted_index),
    );
    let addr = spawn_http_server(routes);

    let dir = tempfile::tempdir().unwrap();
    let mut mirror = Mirror::new(dir.path().join("mirror"), 4).unwrap();
    let entry = SourceEntry::from_line(
        &format!("deb http://{addr}/ubuntu trusty main restricted"),
        Uuid::new_v4,
    )
    .unwrap();
    mirror.sources.add(entry);

    let reporter = CollectingReporter::new();
    mirror.update(&reporter).unwrap();

    assert!(reporter.error_messages().is_empty());
    // Two downloads plus two extractions reported.
    assert_eq!(reporter.info_messages().len(), 4);

    let index_dir = mirror.index_dir();
    let main_name = uri_to_filename(&format!("http://{addr}/ubuntu/dists/trusty/main"));
    let restricted_name = uri_to_filename(&format!("http://{addr}/ubuntu/dists/trusty/restricted"));

    assert!(index_dir.join(format!("{main_name}_Packages.gz")).exists());
    assert_eq!(
        fs::read(index_dir.join(format!("{main_name}_Packages"))).unwrap(),
        main_index
    );
    assert_eq!(
        fs::read(index_dir.join(format!("{restricted_name}_Packages"))).unwrap(),
        restricted_index
    );
}

#[test]
fn test_update_absorbs_per_request_download_failures() {
    let main_index = b"Package: hello\n";

    let mut routes = HashMap::new();
    routes.insert(
        "/debian/dists/stable/main/binary-amd64/Packages.gz".to_string(),
        gzip(main_index),
    );
    // No route for the contrib component: that request gets a 404.
    let addr = spawn_http_server(routes);

    let dir = tempfile::tempdir().unwrap();
    let mut mirror = Mirror::new(dir.path().join("mirror"), 2).unwrap();
    let entry = SourceEntry::from_line(
        &format!("deb http://{addr}/debian stable main contrib"),
        Uuid::new_v4,
    )
    .unwrap();
    mirror.sources.add(entry);

    let reporter = CollectingReporter::new();
    mirror.update(&reporter).unwrap();

    let errors = reporter.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("404"), "expected an HTTP 404 failure: {}", errors[0]);

    let index_dir = mirror.index_dir();
    let main_name = uri_to_filename(&format!("http://{addr}/debian/dists/stable/main"));
    let contrib_name = uri_to_filename(&format!("http://{addr}/debian/dists/stable/contrib"));

    assert_eq!(
        fs::read(index_dir.join(format!("{main_name}_Packages"))).unwrap(),
        main_index
    );
    assert!(!index_dir.join(format!("{contrib_name}_Packages.gz")).exists());
}

#[test]
fn test_update_aborts_when_extraction_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = Mirror::new(dir.path().join("mirror"), 2).unwrap();

    // A stale, corrupt compressed index poisons the extraction pass.
    fs::create_dir_all(mirror.index_dir()).unwrap();
    fs::write(mirror.index_dir().join("stale_Packages.gz"), b"not gzip").unwrap();

    let reporter = CollectingReporter::new();
    let result = mirror.update(&reporter);

    assert!(matches!(result, Err(Error::ExtractError(_))));
    assert_eq!(reporter.error_messages().len(), 1);
}
