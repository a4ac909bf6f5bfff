//! Tests for the results file loader

use lhci_notify::adapters::file::FileResultLoader;
use lhci_notify::core::ports::{LoadError, ResultSource};

use super::common::{SCENARIO_JSON, TestWorkspace};

#[test]
fn missing_file_is_not_found() {
    let ws = TestWorkspace::new();
    let loader = FileResultLoader::new(ws.results_path());

    let err = loader.load().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn missing_file_loads_as_empty() {
    let ws = TestWorkspace::new();
    let loader = FileResultLoader::new(ws.results_path());

    let grouped = loader.load_or_empty().unwrap();
    assert!(grouped.is_empty());
}

#[test]
fn invalid_json_is_a_parse_error() {
    let ws = TestWorkspace::new();
    ws.write_results("[{\"url\": ");
    let loader = FileResultLoader::new(ws.results_path());

    assert!(matches!(loader.load(), Err(LoadError::Parse { .. })));
    assert!(matches!(loader.load_or_empty(), Err(LoadError::Parse { .. })));
}

#[test]
fn non_array_is_a_parse_error() {
    let ws = TestWorkspace::new();
    ws.write_results(r#"{"url": "https://a.com"}"#);
    let loader = FileResultLoader::new(ws.results_path());

    assert!(matches!(loader.load(), Err(LoadError::Parse { .. })));
}

#[test]
fn record_without_url_is_a_parse_error() {
    let ws = TestWorkspace::new();
    ws.write_results(
        r#"[{"auditId":"x","auditTitle":"T","operator":"<=","expected":1,"actual":2}]"#,
    );
    let loader = FileResultLoader::new(ws.results_path());

    let err = loader.load().unwrap_err();
    assert!(err.to_string().contains("malformed assertion results"));
}

#[test]
fn loads_and_groups_scenario() {
    let ws = TestWorkspace::new();
    ws.write_results(SCENARIO_JSON);
    let loader = FileResultLoader::new(ws.results_path());

    let grouped = loader.load().unwrap();
    assert_eq!(grouped.len(), 1);
    let results = grouped.get("https://a.com").unwrap();
    assert_eq!(results[0].key(), "x.y");
    assert_eq!(results[0].expected, "100");
    assert_eq!(results[0].actual, "150");
}

#[test]
fn empty_array_loads_as_empty() {
    let ws = TestWorkspace::new();
    ws.write_results("[]");
    let loader = FileResultLoader::new(ws.results_path());

    assert!(loader.load().unwrap().is_empty());
}

#[test]
fn lighthouse_output_with_extra_fields_loads() {
    let ws = TestWorkspace::new();
    ws.write_results(
        r#"[
          {"name":"maxNumericValue","expected":2000,"actual":3512.7,"values":[3512.7],
           "operator":"<=","passed":false,"auditProperty":null,"auditId":"first-contentful-paint",
           "level":"error","url":"https://b.com/","auditTitle":"First Contentful Paint",
           "auditDocumentationLink":"https://web.dev/fcp/"},
          {"name":"minScore","expected":0.9,"actual":0.72,"values":[0.72],"operator":">=",
           "passed":false,"auditProperty":"performance","auditId":"categories",
           "level":"warn","url":"https://b.com/","auditTitle":"Performance"}
        ]"#,
    );
    let loader = FileResultLoader::new(ws.results_path());

    let grouped = loader.load().unwrap();
    let results = grouped.get("https://b.com/").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].key(), "first-contentful-paint");
    assert_eq!(results[0].actual, "3512.7");
    assert_eq!(results[1].key(), "categories.performance");
}
