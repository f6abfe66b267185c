//! Fuzz target for the XML renderers.
//!
//! Rendered documents must carry only legal XML characters and balanced
//! markup, whatever strings the inputs contain.

#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sqreport_cobertura::CoberturaOptions;
use sqreport_issues::normalize_issues;
use sqreport_model::{MetricsModel, raw_measures_from_json};
use sqreport_xml::is_xml_char;

fn assert_well_formed(xml: &str) {
    assert!(xml.chars().all(is_xml_char));
    assert_eq!(xml.matches('<').count(), xml.matches('>').count());
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Ok(doc) = serde_json::from_str::<Value>(&text) {
        let checkstyle = sqreport_checkstyle::render(&normalize_issues(&doc));
        assert_well_formed(&checkstyle);

        let mut model = MetricsModel::from_measures(&raw_measures_from_json(&doc));
        // Keep the synthetic line block small.
        if model.lines_to_cover() > 10_000 {
            model = MetricsModel::default();
        }
        let options = CoberturaOptions::default();
        assert_well_formed(&sqreport_cobertura::render(&model, &options));
    }

    let options = CoberturaOptions {
        source: text.to_string(),
        package: text.to_string(),
        class_name: text.to_string(),
        filename: text.to_string(),
    };
    assert_well_formed(&sqreport_cobertura::render(&MetricsModel::default(), &options));
});
