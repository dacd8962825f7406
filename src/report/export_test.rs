/// Tests for report export
///
/// Documents are rendered with a pinned generation time so byte-level
/// comparisons are meaningful.

#[cfg(test)]
mod tests {
    use crate::error::ReportError;
    use crate::report::export::*;
    use crate::report::{HeadlineMode, aggregate, headline_stats};
    use crate::source::{FixtureSource, RecordSource};
    use crate::types::EventRecord;
    use chrono::{Local, TimeZone};

    fn fixture() -> Vec<EventRecord> {
        FixtureSource.fetch_records().unwrap()
    }

    fn pinned_options(mode: HeadlineMode) -> DocumentOptions {
        let mut options = DocumentOptions::default();
        options.headline_mode = mode;
        options.generated_at = Local.with_ymd_and_hms(2024, 1, 15, 15, 0, 0).unwrap();
        options
    }

    fn render(records: &[EventRecord], mode: HeadlineMode) -> String {
        let model = aggregate(records).unwrap();
        String::from_utf8(render_report(records, &model, &pinned_options(mode)).unwrap()).unwrap()
    }

    fn without_generated_line(doc: &str) -> String {
        doc.lines().filter(|l| !l.contains("Generated at:")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = fixture();
        assert_eq!(render(&records, HeadlineMode::Derived), render(&records, HeadlineMode::Derived));
    }

    #[test]
    fn test_render_differs_only_in_generated_at() {
        let records = fixture();
        let model = aggregate(&records).unwrap();

        let first = render_report(&records, &model, &DocumentOptions::default()).unwrap();
        let mut later = DocumentOptions::default();
        later.generated_at = later.generated_at + chrono::Duration::hours(3);
        let second = render_report(&records, &model, &later).unwrap();

        let first = String::from_utf8(first).unwrap();
        let second = String::from_utf8(second).unwrap();
        assert_ne!(first, second);
        assert_eq!(without_generated_line(&first), without_generated_line(&second));
    }

    #[test]
    fn test_sections_in_order() {
        let doc = render(&fixture(), HeadlineMode::Derived);

        let body = doc.find("<body>").unwrap();
        let title = doc.find("<h1>").unwrap();
        let generated = doc.find("Generated at: 2024-01-15 15:00:00").unwrap();
        let overview = doc.find("<h2>Flight Status Overview</h2>").unwrap();
        let headline = doc.find("<div class=\"summary-row\">").unwrap();
        let table = doc.find("<h2>Flight Events Log</h2>").unwrap();

        // The stylesheet mentions .summary-row too; anchors must be element markup
        assert!(doc.find(".summary-row").unwrap() < body);
        assert!(body < title);
        assert!(title < generated);
        assert!(generated < overview);
        assert!(overview < headline);
        assert!(headline < table);
    }

    #[test]
    fn test_pie_gradient_and_legend() {
        let doc = render(&fixture(), HeadlineMode::Derived);

        // 5 completed, 2 resolved
        assert!(doc.contains("conic-gradient(#22c55e 0.00% 71.43%, #3b82f6 71.43% 100.00%)"));
        assert!(doc.contains("completed – 5 (71.4%)"));
        assert!(doc.contains("resolved – 2 (28.6%)"));
    }

    #[test]
    fn test_table_rows_keep_input_order() {
        let records = fixture();
        let doc = render(&records, HeadlineMode::Derived);

        let mut last = 0;
        for record in &records {
            let pos = doc.find(&format!("<td>{}</td>", record.timestamp)).unwrap();
            assert!(pos > last, "row for {} out of order", record.timestamp);
            last = pos;
        }
        assert_eq!(doc.matches("<tr><td>").count(), records.len());
    }

    #[test]
    fn test_table_cells_use_shared_categories() {
        let doc = render(&fixture(), HeadlineMode::Derived);
        assert!(doc.contains("<span class=\"tag cat-success\">completed</span>"));
        assert!(doc.contains("<span class=\"tag cat-info\">resolved</span>"));
        assert!(doc.contains("<span class=\"tag cat-urgent\">STAT</span>"));
        assert!(doc.contains("<span class=\"tag cat-standard\">Standard</span>"));
    }

    #[test]
    fn test_derived_headline_in_document() {
        let doc = render(&fixture(), HeadlineMode::Derived);
        assert!(doc.contains("<div class=\"summary-title\">Completed Flights</div><div class=\"summary-number\">5</div>"));
        assert!(doc.contains("<div class=\"summary-number\">100.0%</div>"));
        assert!(!doc.contains("98.7%"));
    }

    #[test]
    fn test_static_placeholders_in_document() {
        let doc = render(&fixture(), HeadlineMode::Static);
        assert!(doc.contains("<div class=\"summary-title\">Completed Flights</div><div class=\"summary-number\">24</div>"));
        assert!(doc.contains("<div class=\"summary-number\">98.7%</div>"));
    }

    #[test]
    fn test_empty_records_render() {
        let doc = render(&[], HeadlineMode::Derived);
        assert!(doc.contains("Total events: 0"));
        assert!(doc.contains("No events"));
        assert!(!doc.contains("conic-gradient"));
        assert!(doc.contains("<div class=\"summary-number\">N/A</div>"));
    }

    #[test]
    fn test_record_text_is_escaped() {
        let mut records = fixture();
        records[0].event = "<script>alert('x')</script>".to_string();
        records[0].location = "Ben & Jerry's \"Base\"".to_string();
        let doc = render(&records, HeadlineMode::Derived);

        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(doc.contains("Ben &amp; Jerry&#39;s &quot;Base&quot;"));
    }

    #[test]
    fn test_write_html_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        let records = fixture();
        let model = aggregate(&records).unwrap();

        write_html_report(&path, &records, &model, &pinned_options(HeadlineMode::Derived)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("PEGA-002"));
    }

    #[test]
    fn test_write_html_report_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.html");
        let records = fixture();
        let model = aggregate(&records).unwrap();

        let err = write_html_report(&path, &records, &model, &DocumentOptions::default()).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(err.to_string().contains("report.html"));
    }

    #[test]
    fn test_export_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let records = fixture();
        let model = aggregate(&records).unwrap();
        let headline = headline_stats(&records, &model, HeadlineMode::Derived);

        export_json_report(&path, &records, &model, &headline, &Local::now()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total"], 7);
        assert_eq!(value["status_breakdown"][0]["status"], "completed");
        assert_eq!(value["status_breakdown"][0]["count"], 5);
        assert_eq!(value["segments"][1]["end_fraction"], 1.0);
        assert_eq!(value["headline"]["stat_alerts"], 1);
        assert_eq!(value["headline"]["mode"], "derived");
        assert_eq!(value["records"].as_array().unwrap().len(), 7);
    }
}
