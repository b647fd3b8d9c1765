//! Server-rendered page data.

use shared::ProjectInfo;
use web_sys::Document;

pub const PROJECT_DATA_ID: &str = "project-data";

/// Projects embedded by the Django template as a `json_script` block.
/// None when the block is missing or unparseable; callers fall back to
/// the projects API.
pub fn embedded_projects(document: &Document) -> Option<Vec<ProjectInfo>> {
    let element = document.get_element_by_id(PROJECT_DATA_ID)?;
    let payload = element.text_content()?;
    serde_json::from_str(&payload).ok()
}
