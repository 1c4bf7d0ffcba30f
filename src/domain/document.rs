// View document - the dashboard template as elements addressed by id
use super::simulation::TableRow;
use serde::Serialize;
use std::collections::BTreeMap;

pub const OVERALL_LATENCY_IMPROVEMENT: &str = "overall-latency-improvement";
pub const RESOURCE_UTILIZATION_IMPROVEMENT: &str = "resource-utilization-improvement";
pub const SIMULATION_RESULTS_TABLE: &str = "simulation-results-table";
pub const IMAGE_MODAL: &str = "imageModal";
pub const IMAGE_MODAL_LABEL: &str = "imageModalLabel";
pub const MODAL_IMAGE: &str = "modalImage";
pub const GENERATION_DATE: &str = "generation-date";

/// Class a shown modal carries
pub const SHOW_CLASS: &str = "show";

pub fn base_latency_id(slice: &str) -> String {
    format!("{}-base-latency", slice)
}

pub fn optimized_latency_id(slice: &str) -> String {
    format!("{}-opt-latency", slice)
}

pub fn improvement_id(slice: &str) -> String {
    format!("{}-improvement", slice)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub text: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewDocument {
    elements: BTreeMap<String, Element>,
    tables: BTreeMap<String, Vec<TableRow>>,
}

impl ViewDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the fixed dashboard template with one latency row per slice
    pub fn dashboard_template<S: AsRef<str>>(slices: &[S]) -> Self {
        let mut doc = Self::new();

        doc.insert(OVERALL_LATENCY_IMPROVEMENT, Element::with_text("0.0"));
        doc.insert(RESOURCE_UTILIZATION_IMPROVEMENT, Element::with_text("0.0"));

        for slice in slices {
            let slice = slice.as_ref();
            doc.insert(&base_latency_id(slice), Element::with_text("0.000"));
            doc.insert(&optimized_latency_id(slice), Element::with_text("0.000"));
            doc.insert(&improvement_id(slice), Element::with_text("0.0"));
        }

        doc.insert_table(SIMULATION_RESULTS_TABLE);

        doc.insert(IMAGE_MODAL, Element::default());
        doc.insert(IMAGE_MODAL_LABEL, Element::default());
        let mut modal_image = Element::default();
        modal_image.set_attribute("src", "");
        doc.insert(MODAL_IMAGE, modal_image);

        doc.insert(GENERATION_DATE, Element::default());

        doc
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.tables.remove(id);
        self.elements.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.text.as_deref())
    }

    /// Register a table body element that holds rows
    pub fn insert_table(&mut self, id: &str) {
        self.insert(id, Element::default());
        self.tables.insert(id.to_string(), Vec::new());
    }

    pub fn rows(&self, id: &str) -> Option<&[TableRow]> {
        self.tables.get(id).map(Vec::as_slice)
    }

    pub fn rows_mut(&mut self, id: &str) -> Option<&mut Vec<TableRow>> {
        self.tables.get_mut(id)
    }
}
