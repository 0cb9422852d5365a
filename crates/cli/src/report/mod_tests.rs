// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::category_result;
use chrono::TimeZone;
use tempfile::tempdir;

fn outcome(h: u32, m: u32) -> RunOutcome {
    let results = vec![category_result("bdo", false, "boom")];
    let mut summary = RunSummary::default();
    summary.record(&results[0]);
    RunOutcome {
        started_at: Local.with_ymd_and_hms(2026, 1, 2, h, m, 30).unwrap(),
        summary,
        results,
    }
}

#[test]
fn file_name_uses_minute_resolution() {
    let started = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 59).unwrap();
    assert_eq!(
        report_file_name(started),
        "sharon-test-report-2026-01-02-0304.html"
    );
}

#[test]
fn file_name_is_zero_padded() {
    let started = Local.with_ymd_and_hms(2026, 11, 30, 23, 0, 0).unwrap();
    assert_eq!(
        report_file_name(started),
        "sharon-test-report-2026-11-30-2300.html"
    );
}

#[test]
fn write_creates_missing_reports_dir() {
    let dir = tempdir().unwrap();
    let reports = dir.path().join("nested/reports");

    let report = write_report(&reports, &outcome(14, 7)).unwrap();

    assert_eq!(report.file_name(), "sharon-test-report-2026-01-02-1407.html");
    assert_eq!(report.file_path, reports.join(report.file_name()));
    assert_eq!(report.summary.failed_categories, 1);
    assert_eq!(report.results.len(), 1);
    let html = std::fs::read_to_string(&report.file_path).unwrap();
    assert!(html.contains("boom"));
}

#[test]
fn same_minute_overwrites() {
    let dir = tempdir().unwrap();
    let first = write_report(dir.path(), &outcome(8, 15)).unwrap();

    let mut second_outcome = outcome(8, 15);
    second_outcome.results[0].raw_output = "second run".to_string();
    let second = write_report(dir.path(), &second_outcome).unwrap();

    assert_eq!(first.file_path, second.file_path);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    let html = std::fs::read_to_string(&second.file_path).unwrap();
    assert!(html.contains("second run"));
    assert!(!html.contains("boom"));
}

#[test]
fn unwritable_dir_is_an_io_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let err = write_report(&blocker, &outcome(1, 1)).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
