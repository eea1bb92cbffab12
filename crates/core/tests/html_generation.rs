// End-to-end HTML generation tests
use pretty_assertions::assert_eq;
use regex::Regex;
use tabrs_core::api::{self, ExportConfig};
use tabrs_core::core::output::HtmlOutputHandler;
use tabrs_core::core::tabset::TabInput;

fn sample_tabs() -> Vec<TabInput> {
    vec![
        TabInput::new("One", "First"),
        TabInput::new("Two", "Second"),
        TabInput::new("Three", "Third"),
    ]
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_structural_count_invariant() {
    for n in [0usize, 1, 3, 7] {
        let tabs: Vec<TabInput> = (0..n)
            .map(|i| TabInput::new(format!("T{i}"), format!("C{i}")))
            .collect();
        let html = HtmlOutputHandler::generate_html(&tabs);

        // Markup-shaped needles: the <style> block also mentions the
        // tablist/tabpanel roles in attribute selectors
        assert_eq!(count_occurrences(&html, "role=\"tab\""), n, "tabs for n={n}");
        assert_eq!(
            count_occurrences(&html, "role=\"tabpanel\" aria-labelledby"),
            n,
            "panels for n={n}"
        );
        assert_eq!(
            count_occurrences(&html, "<input type=\"radio\""),
            n,
            "radios for n={n}"
        );
        assert_eq!(
            count_occurrences(&html, "<div role=\"tablist\""),
            1,
            "tablist for n={n}"
        );
    }
}

#[test]
fn test_referential_integrity() {
    let html = HtmlOutputHandler::generate_html(&sample_tabs());

    let radio_re =
        Regex::new(r#"<input type="radio" name="([^"]+)" id="([^"]+)"( checked)? aria-controls="([^"]+)" />"#)
            .unwrap();
    let label_re = Regex::new(r#"<label for="([^"]+)" role="tab" aria-controls="([^"]+)">"#).unwrap();
    let panel_re =
        Regex::new(r#"<section id="([^"]+)" role="tabpanel" aria-labelledby="([^"]+)">"#).unwrap();

    let radios: Vec<_> = radio_re.captures_iter(&html).collect();
    let labels: Vec<_> = label_re.captures_iter(&html).collect();
    let panels: Vec<_> = panel_re.captures_iter(&html).collect();

    assert_eq!(radios.len(), 3);
    assert_eq!(labels.len(), 3);
    assert_eq!(panels.len(), 3);

    for i in 0..3 {
        let radio_id = &radios[i][2];
        let radio_controls = &radios[i][4];
        let label_for = &labels[i][1];
        let label_controls = &labels[i][2];
        let panel_id = &panels[i][1];
        let panel_labelledby = &panels[i][2];

        assert_eq!(label_for, radio_id, "label {i} must target its radio");
        assert_eq!(label_controls, panel_id, "label {i} must control its panel");
        assert_eq!(radio_controls, panel_id, "radio {i} must control its panel");
        assert_eq!(panel_labelledby, radio_id, "panel {i} must be labelled by its radio");
    }

    // All radios share one name so the group is mutually exclusive
    assert!(radios.iter().all(|c| c[1] == radios[0][1]));
}

#[test]
fn test_default_selection_is_first_radio() {
    let html = HtmlOutputHandler::generate_html(&sample_tabs());

    assert_eq!(count_occurrences(&html, " checked"), 1);

    let radio_re = Regex::new(r#"<input type="radio" [^>]+/>"#).unwrap();
    let radios: Vec<_> = radio_re.find_iter(&html).map(|m| m.as_str()).collect();
    assert!(radios[0].contains(" checked"));
    assert!(radios[1..].iter().all(|r| !r.contains(" checked")));
}

#[test]
fn test_title_fallback_is_positional() {
    let tabs = vec![
        TabInput::new("First", "a"),
        TabInput::new("Second", "b"),
        TabInput::new("", "x"),
    ];
    let html = HtmlOutputHandler::generate_html(&tabs);
    assert!(html.contains(">Tab 3</label>"));
    assert!(!html.contains(">Tab 1</label>"));
    assert!(!html.contains(">Tab 2</label>"));
}

#[test]
fn test_titles_and_content_are_escaped() {
    let tabs = vec![TabInput::new(
        "<script>alert('x')</script>",
        "a < b & \"c\"\nd > e",
    )];
    let html = HtmlOutputHandler::generate_html(&tabs);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("a &lt; b &amp; &quot;c&quot;<br>d &gt; e"));
}

#[test]
fn test_sibling_order_radios_then_tablist_then_panels() {
    // The stylesheet only uses `~`, which matches later siblings, so the
    // radios must come first, then the tablist, then the panels.
    let html = HtmlOutputHandler::generate_html(&sample_tabs());

    let last_radio = html.rfind("<input type=\"radio\"").unwrap();
    let tablist = html.find("<div role=\"tablist\"").unwrap();
    let first_panel = html.find("<section id=").unwrap();

    assert!(last_radio < tablist);
    assert!(tablist < first_panel);
}

#[test]
fn test_empty_tab_set_is_well_formed() {
    let html = HtmlOutputHandler::generate_html(&[]);

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.ends_with("</html>"));
    assert_eq!(count_occurrences(&html, "<div role=\"tablist\""), 1);
    assert_eq!(count_occurrences(&html, "role=\"tab\""), 0);
    assert_eq!(count_occurrences(&html, "<input"), 0);
    assert_eq!(count_occurrences(&html, "<section"), 0);
}

#[test]
fn test_end_to_end_example() {
    let output = api::export(ExportConfig::new().add_tab("Overview", "Hello world"))
        .expect("export failed");

    assert!(output.html.contains("<!doctype html>"));
    assert_eq!(count_occurrences(&output.html, "<div role=\"tablist\""), 1);
    assert!(output.html.contains(">Overview</label>"));
    assert!(output.html.contains("Hello world"));
    assert!(output.uid.starts_with("tabs-"));
}

#[test]
fn test_documents_differ_only_in_uid() {
    let tabs = vec![
        TabInput::new("Intro", "Line 1\nLine 2"),
        TabInput::new("Details", "More info here"),
    ];

    let uid_re = Regex::new(r#"<div id="(tabs-[0-9a-z]+)" role="region""#).unwrap();

    let first = HtmlOutputHandler::generate_html(&tabs);
    let second = HtmlOutputHandler::generate_html(&tabs);

    let first_uid = uid_re.captures(&first).expect("no uid in first")[1].to_string();
    let second_uid = uid_re.captures(&second).expect("no uid in second")[1].to_string();
    assert_ne!(first_uid, second_uid);

    assert_eq!(
        first.replace(&first_uid, "UID"),
        second.replace(&second_uid, "UID")
    );
}

#[test]
fn test_fixed_uid_output_is_reproducible() {
    let tabs = vec![TabInput::new("Overview", "Hello world")];
    let html = HtmlOutputHandler::generate_html_with_uid(&tabs, "tabs-x");

    let expected = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Tabs</title>
<style>
#tabs-x { margin:16px }
#tabs-x [role="tablist"] { display:flex; gap:8px; flex-wrap:wrap }
#tabs-x input[type="radio"] { position:absolute; opacity:0; width:1px; height:1px; } /* keep focusable */
#tabs-x label[for] { padding:8px 12px; border:1px solid #0003; border-radius:8px; cursor:pointer }
#tabs-x [role="tabpanel"] { display:none; margin-top:12px; padding:12px; border:1px solid #0002; border-radius:8px }
#tabs-x-tab-0:checked ~ #tabs-x-list label[for="tabs-x-tab-0"] { border-bottom:2px solid #0a66c2 }
#tabs-x-tab-0:focus ~ #tabs-x-list label[for="tabs-x-tab-0"] { outline:2px solid #ffbf47; outline-offset:2px }
#tabs-x-tab-0:checked ~ #tabs-x-panel-0 { display:block }
</style>
</head>
<body>
<div id="tabs-x" role="region" aria-label="Tabs">
  <input type="radio" name="tabs-x-set" id="tabs-x-tab-0" checked aria-controls="tabs-x-panel-0" />
  <div role="tablist" aria-label="Tabs" id="tabs-x-list">
      <label for="tabs-x-tab-0" role="tab" aria-controls="tabs-x-panel-0">Overview</label>
  </div>
  <section id="tabs-x-panel-0" role="tabpanel" aria-labelledby="tabs-x-tab-0">
    Hello world
  </section>
</div>
</body>
</html>"#;

    assert_eq!(html, expected);
}

#[test]
fn test_invalid_uid_override_is_rejected() {
    let result = api::export(ExportConfig::new().add_tab("A", "b").uid("bad uid"));
    assert!(result.is_err());

    let result = api::export(ExportConfig::new().add_tab("A", "b").uid(""));
    assert!(result.is_err());
}
