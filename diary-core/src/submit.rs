//! Submit-time serialization.
//!
//! The diary form posts natively; right before the browser submit, every
//! non-empty category list is materialized into a hidden `{category}_json`
//! input the server parses back. The signature pad's data URL rides along
//! the same way.

use crate::store::EntryListStore;
use shared::{CategoryKind, HiddenField};

pub const SIGNATURE_FIELD: &str = "signature_data";

/// Build the hidden inputs to inject before the native form POST. Empty
/// lists produce no field; an absent or blank signature produces no field.
pub fn build_hidden_fields(
    store: &EntryListStore,
    signature_data_url: Option<&str>,
) -> Result<Vec<HiddenField>, serde_json::Error> {
    let mut fields = Vec::new();

    if !store.materials.is_empty() {
        fields.push(json_field(
            CategoryKind::Materials,
            serde_json::to_string(&store.materials.records())?,
        ));
    }
    if !store.equipment.is_empty() {
        fields.push(json_field(
            CategoryKind::Equipment,
            serde_json::to_string(&store.equipment.records())?,
        ));
    }
    if !store.delays.is_empty() {
        fields.push(json_field(
            CategoryKind::Delays,
            serde_json::to_string(&store.delays.records())?,
        ));
    }
    if !store.overtime.is_empty() {
        fields.push(json_field(
            CategoryKind::Overtime,
            serde_json::to_string(&store.overtime.records())?,
        ));
    }
    if !store.subcontractors.is_empty() {
        fields.push(json_field(
            CategoryKind::Subcontractors,
            serde_json::to_string(&store.subcontractors.records())?,
        ));
    }
    if !store.other_costs.is_empty() {
        fields.push(json_field(
            CategoryKind::OtherCosts,
            serde_json::to_string(&store.other_costs.records())?,
        ));
    }

    if let Some(data_url) = signature_data_url {
        if !data_url.is_empty() {
            fields.push(HiddenField {
                name: SIGNATURE_FIELD.to_string(),
                value: data_url.to_string(),
            });
        }
    }

    Ok(fields)
}

fn json_field(category: CategoryKind, value: String) -> HiddenField {
    HiddenField {
        name: category.hidden_field_name().to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MaterialEntry, OvertimeEntry};

    fn material(name: &str, cost: f64) -> MaterialEntry {
        MaterialEntry {
            name: name.to_string(),
            quantity: 1.0,
            unit: "pcs".to_string(),
            cost,
            supplier: String::new(),
            delivery_time: String::new(),
        }
    }

    #[test]
    fn test_empty_store_produces_no_fields() {
        let store = EntryListStore::new();
        assert!(build_hidden_fields(&store, None).unwrap().is_empty());
    }

    #[test]
    fn test_only_nonempty_categories_serialize() {
        let mut store = EntryListStore::new();
        store.materials.add(material("Cement", 15000.0));
        store.overtime.add(OvertimeEntry {
            personnel: 2,
            role: "Laborer".to_string(),
            hours: 4,
            rate: 60.0,
        });

        let fields = build_hidden_fields(&store, None).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["materials_json", "overtime_json"]);
    }

    #[test]
    fn test_serialized_arrays_round_trip() {
        let mut store = EntryListStore::new();
        store.materials.add(material("Cement", 15000.0));
        store.materials.add(material("Rebar", 9000.0));

        let fields = build_hidden_fields(&store, None).unwrap();
        let materials_field = fields
            .iter()
            .find(|f| f.name == "materials_json")
            .unwrap();

        let parsed: Vec<MaterialEntry> = serde_json::from_str(&materials_field.value).unwrap();
        let in_memory: Vec<MaterialEntry> =
            store.materials.records().into_iter().cloned().collect();
        assert_eq!(parsed, in_memory);
    }

    #[test]
    fn test_signature_field_presence() {
        let store = EntryListStore::new();

        let fields =
            build_hidden_fields(&store, Some("data:image/png;base64,iVBORw0KGgo=")).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "signature_data");
        assert!(fields[0].value.starts_with("data:image/png"));

        // A blank signature pad contributes nothing
        assert!(build_hidden_fields(&store, Some("")).unwrap().is_empty());
        assert!(build_hidden_fields(&store, None).unwrap().is_empty());
    }
}
