//! Entry rows as plain data.
//!
//! Each stored record maps to an `EntryRow` the UI can display and attach
//! a delete action to. Keeping the mapping here, instead of in markup,
//! lets the row text be unit tested without a DOM.

use crate::budget::format_currency;
use shared::{
    CategoryKind, DelayEntry, EquipmentEntry, MaterialEntry, OtherCostEntry, OvertimeEntry,
    SubcontractorEntry,
};

/// One removable row in a category's entry list.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    /// Stable id the delete action passes back
    pub id: String,
    pub category: CategoryKind,
    /// Human-readable one-line summary of the record
    pub summary: String,
}

/// Print a quantity without a trailing ".0" for whole values.
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn material_row(id: &str, entry: &MaterialEntry, symbol: &str) -> EntryRow {
    let mut summary = format!(
        "{} - {} {} - {}",
        entry.name,
        format_quantity(entry.quantity),
        entry.unit,
        format_currency(symbol, entry.cost)
    );
    if !entry.supplier.is_empty() {
        summary.push_str(&format!(" ({})", entry.supplier));
    }

    EntryRow {
        id: id.to_string(),
        category: CategoryKind::Materials,
        summary,
    }
}

pub fn equipment_row(id: &str, entry: &EquipmentEntry, symbol: &str) -> EntryRow {
    let mut summary = format!(
        "{} - {} hrs - {}",
        entry.name,
        format_quantity(entry.hours),
        format_currency(symbol, entry.cost)
    );
    if !entry.operator.is_empty() {
        summary.push_str(&format!(" (Operator: {})", entry.operator));
    }

    EntryRow {
        id: id.to_string(),
        category: CategoryKind::Equipment,
        summary,
    }
}

pub fn other_cost_row(id: &str, entry: &OtherCostEntry, symbol: &str) -> EntryRow {
    EntryRow {
        id: id.to_string(),
        category: CategoryKind::OtherCosts,
        summary: format!("{} - {}", entry.name, format_currency(symbol, entry.cost)),
    }
}

pub fn overtime_row(id: &str, entry: &OvertimeEntry, symbol: &str) -> EntryRow {
    EntryRow {
        id: id.to_string(),
        category: CategoryKind::Overtime,
        summary: format!(
            "{} {} x {} hrs @ {} = {}",
            entry.personnel,
            entry.role,
            entry.hours,
            format_currency(symbol, entry.rate),
            format_currency(symbol, entry.cost())
        ),
    }
}

pub fn subcontractor_row(id: &str, entry: &SubcontractorEntry, symbol: &str) -> EntryRow {
    let mut summary = entry.name.clone();
    if !entry.company.is_empty() {
        summary.push_str(&format!(" ({})", entry.company));
    }
    summary.push_str(&format!(" - {}", entry.description));
    if entry.cost > 0.0 {
        summary.push_str(&format!(" - {}", format_currency(symbol, entry.cost)));
    }

    EntryRow {
        id: id.to_string(),
        category: CategoryKind::Subcontractors,
        summary,
    }
}

pub fn delay_row(id: &str, entry: &DelayEntry) -> EntryRow {
    let mut summary = format!(
        "{} ({}) - {}",
        entry.delay_type, entry.impact, entry.description
    );
    if !entry.start_time.is_empty() && !entry.end_time.is_empty() {
        summary.push_str(&format!(" - {} hrs", entry.duration));
    }

    EntryRow {
        id: id.to_string(),
        category: CategoryKind::Delays,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PESO: &str = "\u{20b1}";

    #[test]
    fn test_material_row_summary() {
        let entry = MaterialEntry {
            name: "Cement".to_string(),
            quantity: 50.0,
            unit: "bags".to_string(),
            cost: 15000.0,
            supplier: "ABC Corp".to_string(),
            delivery_time: String::new(),
        };

        let row = material_row("entry::material::x", &entry, PESO);
        assert_eq!(
            row.summary,
            "Cement - 50 bags - \u{20b1}15,000.00 (ABC Corp)"
        );
        assert_eq!(row.category, CategoryKind::Materials);
    }

    #[test]
    fn test_equipment_row_skips_empty_operator() {
        let entry = EquipmentEntry {
            name: "Excavator".to_string(),
            operator: String::new(),
            hours: 8.0,
            fuel: 0.0,
            cost: 8000.0,
        };

        let row = equipment_row("entry::equipment::x", &entry, PESO);
        assert_eq!(row.summary, "Excavator - 8 hrs - \u{20b1}8,000.00");
    }

    #[test]
    fn test_overtime_row_shows_implied_cost() {
        let entry = OvertimeEntry {
            personnel: 4,
            role: "Mason".to_string(),
            hours: 3,
            rate: 75.0,
        };

        let row = overtime_row("entry::overtime::x", &entry, PESO);
        assert_eq!(
            row.summary,
            "4 Mason x 3 hrs @ \u{20b1}75.00 = \u{20b1}900.00"
        );
    }

    #[test]
    fn test_subcontractor_row_omits_zero_cost() {
        let entry = SubcontractorEntry {
            name: "JRC Builders".to_string(),
            company: "JRC".to_string(),
            description: "Tile works".to_string(),
            cost: 0.0,
        };

        let row = subcontractor_row("entry::subcontractor::x", &entry, PESO);
        assert_eq!(row.summary, "JRC Builders (JRC) - Tile works");
    }

    #[test]
    fn test_delay_row_includes_duration_only_with_times() {
        let mut entry = DelayEntry {
            delay_type: "Weather".to_string(),
            impact: "Major".to_string(),
            description: "Heavy rain".to_string(),
            start_time: "13:00".to_string(),
            end_time: "16:30".to_string(),
            duration: 3.5,
            solution: String::new(),
        };

        let row = delay_row("entry::delay::x", &entry);
        assert_eq!(row.summary, "Weather (Major) - Heavy rain - 3.5 hrs");

        entry.end_time = String::new();
        entry.duration = 0.0;
        let row = delay_row("entry::delay::x", &entry);
        assert_eq!(row.summary, "Weather (Major) - Heavy rain");
    }

    #[test]
    fn test_fractional_quantity_keeps_decimals() {
        let entry = MaterialEntry {
            name: "Sand".to_string(),
            quantity: 2.5,
            unit: "cu.m".to_string(),
            cost: 3000.0,
            supplier: String::new(),
            delivery_time: String::new(),
        };

        let row = material_row("entry::material::x", &entry, PESO);
        assert_eq!(row.summary, "Sand - 2.5 cu.m - \u{20b1}3,000.00");
    }
}
