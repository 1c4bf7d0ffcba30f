// UI actions - modal viewer, print and the PDF export placeholder
use crate::domain::document::{ViewDocument, IMAGE_MODAL, IMAGE_MODAL_LABEL, MODAL_IMAGE, SHOW_CLASS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EXPORT_PLACEHOLDER_MESSAGE: &str =
    "Exporting dashboard to PDF. This feature requires additional PDF generation libraries.";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    OpenImageModal { title: String, src: String },
    Print,
    ExportPdf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    ModalShown { title: String, src: String },
    /// Client should invoke the platform print dialog
    Print,
    Alert { message: String },
    Ignored,
}

/// Modal state as it stands in a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    pub shown: bool,
    pub title: Option<String>,
    pub src: Option<String>,
}

impl ModalView {
    pub fn from_document(doc: &ViewDocument) -> Self {
        Self {
            shown: doc.element(IMAGE_MODAL).is_some_and(|e| e.has_class(SHOW_CLASS)),
            title: doc.text(IMAGE_MODAL_LABEL).map(str::to_string),
            src: doc
                .element(MODAL_IMAGE)
                .and_then(|e| e.attribute("src"))
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("modal element {0} not found")]
    MissingElement(&'static str),
}

/// Apply an action to the document; failures are logged and leave it untouched
pub fn apply_action(doc: &mut ViewDocument, action: UiAction) -> ActionOutcome {
    match action {
        UiAction::OpenImageModal { title, src } => match open_image_modal(doc, &title, &src) {
            Ok(()) => ActionOutcome::ModalShown { title, src },
            Err(e) => {
                tracing::error!("Modal elements not found: {}", e);
                ActionOutcome::Ignored
            }
        },
        UiAction::Print => ActionOutcome::Print,
        UiAction::ExportPdf => ActionOutcome::Alert {
            message: EXPORT_PLACEHOLDER_MESSAGE.to_string(),
        },
    }
}

pub fn open_image_modal(doc: &mut ViewDocument, title: &str, src: &str) -> Result<(), ActionError> {
    for id in [IMAGE_MODAL_LABEL, MODAL_IMAGE, IMAGE_MODAL] {
        if !doc.contains(id) {
            return Err(ActionError::MissingElement(id));
        }
    }

    if let Some(label) = doc.element_mut(IMAGE_MODAL_LABEL) {
        label.set_text(title);
    }
    if let Some(image) = doc.element_mut(MODAL_IMAGE) {
        image.set_attribute("src", src);
    }
    if let Some(modal) = doc.element_mut(IMAGE_MODAL) {
        modal.add_class(SHOW_CLASS);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_image_modal() {
        let mut doc = ViewDocument::dashboard_template(&["urllc"]);
        let outcome = apply_action(
            &mut doc,
            UiAction::OpenImageModal {
                title: "Latency".to_string(),
                src: "images/latency.png".to_string(),
            },
        );

        assert!(matches!(outcome, ActionOutcome::ModalShown { .. }));
        assert_eq!(doc.text(IMAGE_MODAL_LABEL), Some("Latency"));
        assert_eq!(
            doc.element(MODAL_IMAGE).unwrap().attribute("src"),
            Some("images/latency.png")
        );
        assert!(doc.element(IMAGE_MODAL).unwrap().has_class(SHOW_CLASS));
        assert_eq!(
            ModalView::from_document(&doc),
            ModalView {
                shown: true,
                title: Some("Latency".to_string()),
                src: Some("images/latency.png".to_string()),
            }
        );
    }

    #[test]
    fn test_closed_modal_view() {
        let doc = ViewDocument::dashboard_template(&["urllc"]);
        assert_eq!(
            ModalView::from_document(&doc),
            ModalView {
                shown: false,
                title: None,
                src: None
            }
        );
    }

    #[test]
    fn test_open_modal_without_elements_is_a_noop() {
        let mut doc = ViewDocument::dashboard_template(&["urllc"]);
        doc.remove(MODAL_IMAGE);
        let before = doc.clone();

        let outcome = apply_action(
            &mut doc,
            UiAction::OpenImageModal {
                title: "Latency".to_string(),
                src: "images/latency.png".to_string(),
            },
        );

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_print_and_export() {
        let mut doc = ViewDocument::new();
        assert_eq!(apply_action(&mut doc, UiAction::Print), ActionOutcome::Print);
        assert_eq!(
            apply_action(&mut doc, UiAction::ExportPdf),
            ActionOutcome::Alert {
                message: EXPORT_PLACEHOLDER_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_action_wire_format() {
        let action: UiAction = serde_json::from_str(
            r#"{"action": "open_image_modal", "title": "Resources", "src": "images/res.png"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            UiAction::OpenImageModal {
                title: "Resources".to_string(),
                src: "images/res.png".to_string()
            }
        );

        let print: UiAction = serde_json::from_str(r#"{"action": "print"}"#).unwrap();
        assert_eq!(print, UiAction::Print);
    }
}
