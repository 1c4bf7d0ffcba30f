// HTML renderer - Bound view document to the fixed dashboard page
use crate::application::ui_actions::EXPORT_PLACEHOLDER_MESSAGE;
use crate::domain::document::{
    base_latency_id, improvement_id, optimized_latency_id, ViewDocument, GENERATION_DATE,
    IMAGE_MODAL, IMAGE_MODAL_LABEL, MODAL_IMAGE, OVERALL_LATENCY_IMPROVEMENT,
    RESOURCE_UTILIZATION_IMPROVEMENT, SHOW_CLASS, SIMULATION_RESULTS_TABLE,
};
use crate::infrastructure::config::{GallerySection, ImageSettings, ViewSettings};
use std::fmt::Write;

const PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com/800x400";

const RESULT_COLUMNS: [&str; 8] = [
    "Configuration",
    "Slice",
    "Parameter",
    "Value",
    "Latency (ms)",
    "SLA Violations",
    "Block Ratio",
    "Handover Ratio",
];

/// Render the complete dashboard page
pub fn render_dashboard(doc: &ViewDocument, view: &ViewSettings) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>{css}</style>
</head>
<body>
    <div class="container-fluid px-4">
        <div class="row my-4">
            <div class="col">
                <h1 class="text-center">{title}</h1>
                <p class="text-center text-muted">Visualizing performance improvements across network slices</p>
                <div class="btn-group">
                    <button class="btn btn-outline-primary" onclick="printDashboard()">Print</button>
                    <button class="btn btn-outline-secondary" onclick="exportToPDF()">Export PDF</button>
                </div>
            </div>
        </div>
        {kpis}
        {slices}
        {visualizations}
        <footer class="text-center text-muted">
            5G Network Slicing Optimization Analysis - Generated on {date}
        </footer>
    </div>
    {modal}
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js"></script>
    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(&view.title),
        css = inline_css(),
        kpis = render_kpis(doc),
        slices = render_slice_table(doc, &view.slices),
        visualizations = render_visualizations(doc, &view.images),
        date = render_element(doc, "span", GENERATION_DATE),
        modal = render_modal(doc),
        js = inline_javascript(),
    )
}

fn render_kpis(doc: &ViewDocument) -> String {
    let card = |id: &str, caption: &str| {
        format!(
            r#"<div class="col-md-6">
                <div class="card"><div class="card-body">
                    <h2 class="card-text text-center">{value}%</h2>
                    <p class="text-center text-muted">{caption}</p>
                </div></div>
            </div>"#,
            value = render_element(doc, "span", id),
            caption = caption,
        )
    };

    format!(
        r#"<div class="row mb-4">{}{}</div>"#,
        card(OVERALL_LATENCY_IMPROVEMENT, "Reduction in overall latency"),
        card(RESOURCE_UTILIZATION_IMPROVEMENT, "Increase in resource efficiency"),
    )
}

fn render_slice_table(doc: &ViewDocument, slices: &[String]) -> String {
    let mut rows = String::new();
    for slice in slices {
        let _ = write!(
            rows,
            "<tr><td>{}</td>{}{}<td>{}%</td></tr>",
            html_escape(&display_slice_name(slice)),
            render_element(doc, "td", &base_latency_id(slice)),
            render_element(doc, "td", &optimized_latency_id(slice)),
            render_element(doc, "span", &improvement_id(slice)),
        );
    }

    format!(
        r#"<div class="card mb-4">
            <div class="card-header"><h5 class="card-title mb-0">Network Slice Performance</h5></div>
            <div class="card-body table-responsive">
                <table class="table table-striped table-hover">
                    <thead class="table-dark"><tr><th>Slice</th><th>Base Latency (ms)</th><th>Optimized Latency (ms)</th><th>Improvement</th></tr></thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>"#
    )
}

/// Tabbed visualization sections; the simulation tab also holds the results table
fn render_visualizations(doc: &ViewDocument, images: &[ImageSettings]) -> String {
    let sections: Vec<GallerySection> = GallerySection::ALL
        .into_iter()
        .filter(|&s| s == GallerySection::Simulation || images.iter().any(|i| i.section == s))
        .collect();

    let mut tabs = String::new();
    let mut panes = String::new();
    for (i, section) in sections.into_iter().enumerate() {
        let active = i == 0;
        let id = section.id();
        let _ = write!(
            tabs,
            r##"<li class="nav-item" role="presentation"><button class="nav-link{active_class}" id="{id}-tab" data-bs-toggle="tab" data-bs-target="#{id}" type="button" role="tab" aria-controls="{id}" aria-selected="{active}">{label}</button></li>"##,
            active_class = if active { " active" } else { "" },
            label = section.label(),
        );

        let mut content = String::new();
        if section == GallerySection::Simulation {
            content.push_str(&render_results_table(doc));
        }
        for image in images.iter().filter(|i| i.section == section) {
            content.push_str(&render_image(image));
        }

        let _ = write!(
            panes,
            r#"<div class="tab-pane fade{pane_class}" id="{id}" role="tabpanel" aria-labelledby="{id}-tab"><div class="row">{content}</div></div>"#,
            pane_class = if active { " show active" } else { "" },
        );
    }

    format!(
        r#"<div class="card mb-4">
            <div class="card-header">
                <ul class="nav nav-tabs card-header-tabs" id="viz-tabs" role="tablist">{tabs}</ul>
            </div>
            <div class="card-body">
                <div class="tab-content" id="viz-tabs-content">{panes}</div>
            </div>
        </div>"#
    )
}

fn render_image(image: &ImageSettings) -> String {
    format!(
        r#"<div class="col-md-6 mb-3"><div class="card"><div class="card-header">{title}</div><div class="card-body">
                <img src="{src}" alt="{title}" data-title="{title}" data-placeholder="{placeholder}" class="img-fluid" onerror="usePlaceholder(this)" onclick="openImageModal(this.dataset.title, this.getAttribute('src'))">
            </div></div></div>"#,
        title = html_escape(&image.title),
        src = html_escape(&image.src),
        placeholder = html_escape(&placeholder_url(image)),
    )
}

/// Stand-in image URL labelled with the file name, or the title when the name is empty
pub fn placeholder_url(image: &ImageSettings) -> String {
    let file = image.src.rsplit('/').next().unwrap_or_default();
    let stem = file.split('.').next().unwrap_or_default();
    let text = if stem.is_empty() {
        image.title.replace(' ', "+")
    } else {
        stem.replace('_', "+")
    };
    format!("{}?text={}", PLACEHOLDER_BASE_URL, text)
}

fn render_results_table(doc: &ViewDocument) -> String {
    // The tbody exists only when the document still carries the table element
    let body = match doc.rows(SIMULATION_RESULTS_TABLE) {
        Some(rows) => {
            let mut body = String::new();
            for row in rows {
                let class = row
                    .class
                    .as_deref()
                    .map(|c| format!(r#" class="{}""#, html_escape(c)))
                    .unwrap_or_default();
                let _ = write!(body, "<tr{}>", class);
                for cell in &row.cells {
                    let _ = write!(body, "<td>{}</td>", html_escape(cell));
                }
                body.push_str("</tr>");
            }
            format!(r#"<tbody id="{SIMULATION_RESULTS_TABLE}">{body}</tbody>"#)
        }
        None => String::new(),
    };

    let header: String = RESULT_COLUMNS
        .iter()
        .map(|c| format!("<th>{}</th>", c))
        .collect();

    format!(
        r#"<div class="col-12 mb-3 table-responsive">
            <table class="table table-sm table-striped table-hover">
                <thead class="table-dark"><tr>{header}</tr></thead>
                {body}
            </table>
        </div>"#
    )
}

fn render_modal(doc: &ViewDocument) -> String {
    let Some(modal) = doc.element(IMAGE_MODAL) else {
        return String::new();
    };
    let shown = modal.has_class(SHOW_CLASS);
    let src = doc
        .element(MODAL_IMAGE)
        .and_then(|e| e.attribute("src"))
        .unwrap_or_default();

    format!(
        r#"<div class="modal fade{show}" id="{IMAGE_MODAL}" tabindex="-1" aria-labelledby="{IMAGE_MODAL_LABEL}"{style}>
        <div class="modal-dialog modal-xl"><div class="modal-content">
            <div class="modal-header">
                {label}
                <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
            </div>
            <div class="modal-body text-center">
                <img id="{MODAL_IMAGE}" src="{src}" class="img-fluid" alt="Visualization">
            </div>
        </div></div>
    </div>"#,
        show = if shown { " show" } else { "" },
        style = if shown { r#" style="display: block;""# } else { r#" aria-hidden="true""# },
        label = render_element(doc, "h5", IMAGE_MODAL_LABEL),
        src = html_escape(src),
    )
}

/// Render one document element, or nothing when it is absent
fn render_element(doc: &ViewDocument, tag: &str, id: &str) -> String {
    let Some(element) = doc.element(id) else {
        return String::new();
    };

    let class = if element.classes.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, html_escape(&element.classes.join(" ")))
    };

    format!(
        r#"<{tag} id="{id}"{class}>{text}</{tag}>"#,
        id = html_escape(id),
        text = html_escape(element.text.as_deref().unwrap_or_default()),
    )
}

/// Human-facing slice label: "urllc" -> "URLLC", "iot" -> "IoT", "data" -> "Data"
pub fn display_slice_name(slice: &str) -> String {
    match slice.to_lowercase().as_str() {
        "urllc" => "URLLC".to_string(),
        "embb" => "eMBB".to_string(),
        "iot" => "IoT".to_string(),
        _ => {
            let mut chars = slice.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Minimal HTML entity escaping for untrusted content
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn inline_css() -> &'static str {
    r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #f8f9fa; color: #333; padding-bottom: 30px; }
.card { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); margin-bottom: 20px; }
.img-fluid { cursor: pointer; transition: transform 0.3s ease; }
.img-fluid:hover { transform: scale(1.02); }
.table th { background-color: #2c3e50; color: white; }
#simulation-results-table tr.slice-urllc td:nth-child(2) { background-color: rgba(78, 115, 223, 0.1); font-weight: 500; }
#simulation-results-table tr.slice-iot td:nth-child(2) { background-color: rgba(28, 200, 138, 0.1); font-weight: 500; }
#simulation-results-table tr.slice-data td:nth-child(2) { background-color: rgba(246, 194, 62, 0.1); font-weight: 500; }
@media print {
    .btn-group, .modal { display: none !important; }
    .card { break-inside: avoid; box-shadow: none; border: 1px solid #ddd; }
}
"#
}

fn inline_javascript() -> String {
    format!(
        r#"
function openImageModal(title, imageSrc) {{
    const modalTitle = document.getElementById('{IMAGE_MODAL_LABEL}');
    const modalImage = document.getElementById('{MODAL_IMAGE}');
    if (modalTitle && modalImage) {{
        modalTitle.textContent = title;
        modalImage.src = imageSrc;
        new bootstrap.Modal(document.getElementById('{IMAGE_MODAL}')).show();
    }} else {{
        console.error("Modal elements not found");
    }}
}}
function printDashboard() {{
    window.print();
}}
function exportToPDF() {{
    alert({message});
}}
function usePlaceholder(img) {{
    img.onerror = null;
    if (img.dataset.placeholder) {{
        img.src = img.dataset.placeholder;
    }}
}}
function replaceMissingImagesWithPlaceholders() {{
    document.querySelectorAll('img[data-placeholder]').forEach(img => {{
        if (img.complete && img.naturalWidth === 0) {{
            usePlaceholder(img);
        }}
    }});
}}
document.addEventListener('DOMContentLoaded', replaceMissingImagesWithPlaceholders);
"#,
        message = js_string(EXPORT_PLACEHOLDER_MESSAGE),
    )
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::TableRow;

    fn document_with_rows(rows: Vec<TableRow>) -> ViewDocument {
        let mut doc = ViewDocument::dashboard_template(&["urllc", "iot"]);
        *doc.rows_mut(SIMULATION_RESULTS_TABLE).unwrap() = rows;
        doc
    }

    #[test]
    fn test_renders_bound_values() {
        let mut doc = document_with_rows(Vec::new());
        let element = doc.element_mut("urllc-improvement").unwrap();
        element.set_text("0.8");
        element.add_class("text-success");

        let html = render_dashboard(&doc, &ViewSettings::default());

        assert!(html.contains(r#"<span id="urllc-improvement" class="text-success">0.8</span>"#));
        assert!(html.contains(r#"<td id="iot-base-latency">0.000</td>"#));
        assert!(html.contains("<td>URLLC</td>"));
        assert!(html.contains(r#"<tbody id="simulation-results-table"></tbody>"#));
    }

    #[test]
    fn test_result_cells_are_escaped() {
        let doc = document_with_rows(vec![TableRow {
            cells: vec!["<script>".to_string(), "urllc".to_string()],
            class: Some("slice-urllc".to_string()),
        }]);

        let html = render_dashboard(&doc, &ViewSettings::default());

        assert!(html.contains(r#"<tr class="slice-urllc"><td>&lt;script&gt;</td><td>urllc</td></tr>"#));
        assert!(!html.contains("<td><script>"));
    }

    #[test]
    fn test_shown_modal_renders_open() {
        let mut doc = document_with_rows(Vec::new());
        doc.element_mut(IMAGE_MODAL).unwrap().add_class(SHOW_CLASS);
        doc.element_mut(IMAGE_MODAL_LABEL).unwrap().set_text("Latency");
        doc.element_mut(MODAL_IMAGE).unwrap().set_attribute("src", "images/latency.png");

        let html = render_dashboard(&doc, &ViewSettings::default());

        assert!(html.contains(r#"class="modal fade show""#));
        assert!(html.contains(r#"<h5 id="imageModalLabel">Latency</h5>"#));
        assert!(html.contains(r#"src="images/latency.png""#));
    }

    #[test]
    fn test_images_grouped_into_tabs() {
        let doc = document_with_rows(Vec::new());
        let view = ViewSettings {
            images: vec![
                ImageSettings {
                    title: "Latency Comparison".to_string(),
                    src: "images/slice_latency_comparison.png".to_string(),
                    section: GallerySection::Latency,
                },
                ImageSettings {
                    title: "Approach Comparison".to_string(),
                    src: "images/approach_comparison.png".to_string(),
                    section: GallerySection::Resource,
                },
            ],
            ..ViewSettings::default()
        };

        let html = render_dashboard(&doc, &view);

        // first populated section is active; the results tab is always present
        assert!(html.contains(r#"<button class="nav-link active" id="latency-tab""#));
        assert!(html.contains(r#"id="resource-tab""#));
        assert!(html.contains(r#"id="simulation-tab""#));
        assert!(!html.contains(r#"id="summary-tab""#));
        assert!(!html.contains(r#"id="comparison-tab""#));

        let latency_pane = html.find(r#"<div class="tab-pane fade show active" id="latency""#).unwrap();
        let resource_pane = html.find(r#"id="resource" role="tabpanel""#).unwrap();
        let image = html.find("images/slice_latency_comparison.png").unwrap();
        assert!(latency_pane < image && image < resource_pane);

        let simulation_pane = html.find(r#"id="simulation" role="tabpanel""#).unwrap();
        let table = html.find(r#"<tbody id="simulation-results-table">"#).unwrap();
        assert!(simulation_pane < table);
    }

    #[test]
    fn test_default_gallery_fills_every_tab() {
        let html = render_dashboard(&document_with_rows(Vec::new()), &ViewSettings::default());
        for section in GallerySection::ALL {
            assert!(html.contains(&format!(r#"id="{}-tab""#, section.id())));
        }
        assert!(html.contains(r#"<button class="nav-link active" id="summary-tab""#));
    }

    #[test]
    fn test_images_fall_back_to_placeholders() {
        let image = ImageSettings {
            title: "Slice Requirements".to_string(),
            src: "images/slice_requirements.png".to_string(),
            section: GallerySection::Resource,
        };
        assert_eq!(
            placeholder_url(&image),
            "https://via.placeholder.com/800x400?text=slice+requirements"
        );

        let untitled = ImageSettings {
            src: "images/".to_string(),
            ..image.clone()
        };
        assert_eq!(
            placeholder_url(&untitled),
            "https://via.placeholder.com/800x400?text=Slice+Requirements"
        );

        let html = render_image(&image);
        assert!(html.contains(
            r#"data-placeholder="https://via.placeholder.com/800x400?text=slice+requirements""#
        ));
        assert!(html.contains(r#"onerror="usePlaceholder(this)""#));
        assert!(inline_javascript().contains("function replaceMissingImagesWithPlaceholders()"));
    }

    #[test]
    fn test_display_slice_name() {
        assert_eq!(display_slice_name("urllc"), "URLLC");
        assert_eq!(display_slice_name("iot"), "IoT");
        assert_eq!(display_slice_name("data"), "Data");
        assert_eq!(display_slice_name(""), "");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
