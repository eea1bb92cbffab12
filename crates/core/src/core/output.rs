use tracing::debug;

use crate::core::tabset::TabInput;
use crate::util::html::HtmlEscape;
use crate::util::ident;

pub struct HtmlOutputHandler;

impl HtmlOutputHandler {
    /// Generate a standalone CSS-only interactive HTML document using the
    /// radio+label technique. No classes are used; selectors rely on
    /// element/attribute/ID only, so every id is namespaced by a fresh
    /// random prefix.
    pub fn generate_html(tabs: &[TabInput]) -> String {
        Self::generate_html_with_uid(tabs, &ident::fresh_uid())
    }

    /// Deterministic entry point: same tabs + same uid yields the same
    /// document byte-for-byte.
    ///
    /// Document order is load-bearing: radios must precede the tablist and
    /// the panels as siblings because the stylesheet only uses the
    /// general-sibling combinator (`~`), which matches later siblings.
    pub fn generate_html_with_uid(tabs: &[TabInput], uid: &str) -> String {
        debug!("Generating tabs document: {} tabs, uid '{}'", tabs.len(), uid);

        let list_id = format!("{uid}-list");

        let base_css = format!(
            "#{uid} {{ margin:16px }}\n\
             #{uid} [role=\"tablist\"] {{ display:flex; gap:8px; flex-wrap:wrap }}\n\
             #{uid} input[type=\"radio\"] {{ position:absolute; opacity:0; width:1px; height:1px; }} /* keep focusable */\n\
             #{uid} label[for] {{ padding:8px 12px; border:1px solid #0003; border-radius:8px; cursor:pointer }}\n\
             #{uid} [role=\"tabpanel\"] {{ display:none; margin-top:12px; padding:12px; border:1px solid #0002; border-radius:8px }}"
        );

        let active_label_rules = tabs
            .iter()
            .enumerate()
            .map(|(i, _)| {
                format!(
                    "#{uid}-tab-{i}:checked ~ #{list_id} label[for=\"{uid}-tab-{i}\"] {{ border-bottom:2px solid #0a66c2 }}"
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        // Keyboard focus outline on the associated label when the hidden radio is focused
        let focus_label_rules = tabs
            .iter()
            .enumerate()
            .map(|(i, _)| {
                format!(
                    "#{uid}-tab-{i}:focus ~ #{list_id} label[for=\"{uid}-tab-{i}\"] {{ outline:2px solid #ffbf47; outline-offset:2px }}"
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let panel_visibility_rules = tabs
            .iter()
            .enumerate()
            .map(|(i, _)| format!("#{uid}-tab-{i}:checked ~ #{uid}-panel-{i} {{ display:block }}"))
            .collect::<Vec<_>>()
            .join("\n");

        let style_tag = format!(
            "<style>\n{base_css}\n{active_label_rules}\n{focus_label_rules}\n{panel_visibility_rules}\n</style>"
        );

        let radios = tabs
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let checked = if i == 0 { " checked" } else { "" };
                format!(
                    "  <input type=\"radio\" name=\"{uid}-set\" id=\"{uid}-tab-{i}\"{checked} aria-controls=\"{uid}-panel-{i}\" />"
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let labels = tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let title = if tab.title.is_empty() {
                    format!("Tab {}", i + 1)
                } else {
                    HtmlEscape::escape_content(&tab.title)
                };
                format!(
                    "      <label for=\"{uid}-tab-{i}\" role=\"tab\" aria-controls=\"{uid}-panel-{i}\">{title}</label>"
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let panels = tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                format!(
                    "  <section id=\"{uid}-panel-{i}\" role=\"tabpanel\" aria-labelledby=\"{uid}-tab-{i}\">\n    {}\n  </section>",
                    HtmlEscape::text_to_html(&tab.content)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let markup = [
            format!("<div id=\"{uid}\" role=\"region\" aria-label=\"Tabs\">"),
            radios,
            format!("  <div role=\"tablist\" aria-label=\"Tabs\" id=\"{list_id}\">"),
            labels,
            "  </div>".to_string(),
            panels,
            "</div>".to_string(),
        ]
        .join("\n");

        [
            "<!doctype html>",
            "<html lang=\"en\">",
            "<head>",
            "  <meta charset=\"utf-8\">",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "  <title>Tabs</title>",
            style_tag.as_str(),
            "</head>",
            "<body>",
            markup.as_str(),
            "</body>",
            "</html>",
        ]
        .join("\n")
    }
}
