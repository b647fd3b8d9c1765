//! Signature pad capture.
//!
//! The pad widget owns drawing; this layer only reads the raster out at
//! submit time, behind existence checks so a page without the pad still
//! submits.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

pub const SIGNATURE_CANVAS_ID: &str = "signature-pad";

/// Read the signature as a data URL, or None when the canvas is absent
/// or untouched. The pad widget keeps `data-empty="true"` on the canvas
/// until the first stroke.
pub fn capture_signature(document: &Document) -> Option<String> {
    let canvas = document
        .get_element_by_id(SIGNATURE_CANVAS_ID)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;

    if canvas.get_attribute("data-empty").as_deref() == Some("true") {
        return None;
    }

    canvas.to_data_url().ok()
}
