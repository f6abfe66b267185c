//! BDD-style scenarios for the full pipeline.

use sqreport_core::{ErrorCode, PreparedReport, RenderOptions, ReportInputs, generate};
use sqreport_core::types::{GateStatus, InputKind};

const GATE: &str = r#"{"projectStatus":{"status":"ERROR","conditions":[{"metricKey":"coverage","actualValue":"40.0","status":"ERROR","comparator":"LT","errorThreshold":"60.0"}]}}"#;

const MEASURES: &str = r#"{
  "component": {
    "key": "petclinic",
    "measures": [
      {"metric": "coverage", "value": "71.4"},
      {"metric": "line_coverage", "value": "80.0"},
      {"metric": "branch_coverage", "value": "57.0"},
      {"metric": "lines_to_cover", "value": "10"},
      {"metric": "uncovered_lines", "value": "2"},
      {"metric": "conditions_to_cover", "value": "10"},
      {"metric": "complexity", "value": "12"},
      {"metric": "alert_status", "value": "ERROR"}
    ]
  }
}"#;

const ISSUES: &str = r#"{"issues":[
  {"component":"proj:src/A.java","line":3,"message":"a1","severity":"MAJOR","rule":"java:S1"},
  {"component":"proj:src/A.java","line":9,"message":"a2","severity":"MINOR","rule":"java:S2"},
  {"component":"proj:src/B.java","line":1,"message":"b1","severity":"INFO","rule":"java:S3"}
]}"#;

#[test]
fn given_all_inputs_when_generated_then_every_artifact_is_produced() {
    let inputs = ReportInputs::from_json(GATE, MEASURES, Some(ISSUES)).expect("parse");

    let artifacts = generate(&inputs, &RenderOptions::default()).expect("generate");

    assert_eq!(artifacts.gate.status, GateStatus::Error);
    assert!(artifacts.html.contains("status-fail"));
    assert!(artifacts.cobertura.contains(r#"lines-covered="8" lines-valid="10""#));
    let checkstyle = artifacts.checkstyle.expect("checkstyle");
    assert_eq!(checkstyle.matches("<file ").count(), 2);
}

#[test]
fn given_one_model_when_rendered_then_html_and_cobertura_agree() {
    let inputs = ReportInputs::from_json(GATE, MEASURES, None).expect("parse");

    let artifacts = generate(&inputs, &RenderOptions::default()).expect("generate");

    // line_coverage 80 -> 80% bar and 0.8000 rate; branch 57 -> 57% and 0.5700
    assert!(artifacts.html.contains("<strong>Line Coverage</strong> 80%"));
    assert!(artifacts.cobertura.contains(r#"line-rate="0.8000""#));
    assert!(artifacts.html.contains("<strong>Branch Coverage</strong> 57%"));
    assert!(artifacts.cobertura.contains(r#"branch-rate="0.5700""#));
    assert!(artifacts.cobertura.contains(r#"condition-coverage="57.0% (6/10)""#));
    assert!(artifacts.html.contains(
        r#"<tr data-key="branches_covered"><td>Covered Branches</td><td class="num">6</td></tr>"#
    ));
}

#[test]
fn given_malformed_json_when_parsed_then_invalid_json_names_the_input() {
    let err = ReportInputs::from_json(GATE, "{not json", None).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidJson);
    assert_eq!(err.input(), Some(InputKind::Measures));
}

#[test]
fn given_array_issues_when_parsed_then_input_shape_error() {
    let err = ReportInputs::from_json(GATE, MEASURES, Some("[]")).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InputShape);
    assert_eq!(err.input(), Some(InputKind::Issues));
}

#[test]
fn given_partial_inputs_when_generated_then_report_still_renders() {
    let inputs = ReportInputs::from_json(
        r#"{"projectStatus": {}}"#,
        r#"{"component": {"measures": [{"metric": "coverage", "value": "n/a"}]}}"#,
        Some(r#"{"issues": [{}]}"#),
    )
    .expect("parse");

    let artifacts = generate(&inputs, &RenderOptions::default()).expect("generate");

    assert_eq!(artifacts.gate.status, GateStatus::Unknown);
    assert_eq!(artifacts.model.coverage_percent(), 0.0);
    assert_eq!(artifacts.model.textual_value("coverage"), Some("n/a"));
    assert!(artifacts.html.contains("<strong>Coverage</strong> 0%"));
    assert!(artifacts.checkstyle.expect("checkstyle").contains(r#"<file name="unknown">"#));
}

#[test]
fn given_prepared_report_when_streamed_then_matches_buffered_render() {
    let inputs = ReportInputs::from_json(GATE, MEASURES, Some(ISSUES)).expect("parse");
    let prepared = PreparedReport::new(&inputs).expect("prepare");
    let options = RenderOptions::default();

    let mut cobertura = Vec::new();
    prepared.write_cobertura(&options.cobertura, &mut cobertura).expect("write");
    let mut checkstyle = Vec::new();
    assert!(prepared.write_checkstyle(&mut checkstyle).expect("write"));

    assert_eq!(String::from_utf8(cobertura).expect("utf8"), prepared.render_cobertura(&options.cobertura));
    assert_eq!(Some(String::from_utf8(checkstyle).expect("utf8")), prepared.render_checkstyle());
}
