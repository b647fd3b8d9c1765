//! Budget aggregation over the current form state.

use crate::store::EntryListStore;
use shared::{BudgetSummary, LaborLine, ProjectInfo};

/// Total cost of the open diary day: labor lines, overtime blocks, and
/// the four cost columns. Delays are excluded.
pub fn daily_total(store: &EntryListStore, labor_lines: &[LaborLine]) -> f64 {
    let labor: f64 = labor_lines.iter().map(LaborLine::cost).sum();
    let overtime: f64 = store.overtime.iter().map(|e| e.record.cost()).sum();
    let subcontractors: f64 = store.subcontractors.iter().map(|e| e.record.cost).sum();
    let materials: f64 = store.materials.iter().map(|e| e.record.cost).sum();
    let equipment: f64 = store.equipment.iter().map(|e| e.record.cost).sum();
    let other: f64 = store.other_costs.iter().map(|e| e.record.cost).sum();

    labor + overtime + subcontractors + materials + equipment + other
}

/// Recompute the budget summary. Running and remaining figures are only
/// available when a project is selected; remaining is not clamped and may
/// go negative.
pub fn summarize(
    store: &EntryListStore,
    labor_lines: &[LaborLine],
    project: Option<&ProjectInfo>,
) -> BudgetSummary {
    let daily_total = daily_total(store, labor_lines);

    match project {
        Some(project) => {
            let running_cost = project.spent + daily_total;
            BudgetSummary {
                daily_total,
                running_cost: Some(running_cost),
                remaining: Some(project.budget - running_cost),
            }
        }
        None => BudgetSummary {
            daily_total,
            running_cost: None,
            remaining: None,
        },
    }
}

/// Resolve the project the `<select>` value points at.
pub fn find_project<'a>(projects: &'a [ProjectInfo], id: &str) -> Option<&'a ProjectInfo> {
    projects.iter().find(|project| project.id == id)
}

/// Currency display: symbol, comma thousands grouping, 2 fraction digits.
/// Negative amounts keep the sign ahead of the symbol.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if negative { "-" } else { "" };

    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
