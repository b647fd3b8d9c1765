use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One material purchase/delivery recorded for a diary day.
///
/// Field names match the wire contract the server parses out of
/// `materials_json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub name: String,
    /// Quantity delivered (positive)
    pub quantity: f64,
    /// Unit of measure, e.g. "bags", "cu.m"
    pub unit: String,
    /// Total cost for this line (non-negative)
    pub cost: f64,
    /// Supplier name, empty when not provided
    pub supplier: String,
    /// Free-text delivery time, empty when not provided
    pub delivery_time: String,
}

/// One piece of equipment used for a diary day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    /// Operator name, empty when not provided
    pub operator: String,
    /// Hours operated (positive)
    pub hours: f64,
    /// Fuel consumed in liters, 0 when not provided
    pub fuel: f64,
    /// Rental/operating cost for this line (non-negative)
    pub cost: f64,
}

/// A miscellaneous cost line (permits, hauling, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherCostEntry {
    pub name: String,
    pub cost: f64,
}

/// An overtime block for a group of workers.
///
/// The cost of an overtime block is implied: personnel x hours x rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// Number of workers (positive)
    pub personnel: u32,
    /// Role of the workers, e.g. "Mason"
    pub role: String,
    /// Overtime hours (positive)
    pub hours: u32,
    /// Hourly rate per worker (non-negative)
    pub rate: f64,
}

impl OvertimeEntry {
    /// Implied cost of this overtime block.
    pub fn cost(&self) -> f64 {
        self.personnel as f64 * self.hours as f64 * self.rate
    }
}

/// A subcontractor engagement for a diary day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcontractorEntry {
    /// Resolved name (picklist value or free text)
    pub name: String,
    /// Company or trade type
    pub company: String,
    /// Work performed; defaulted when only a cost was given
    pub description: String,
    /// Daily cost, 0 when not provided
    pub cost: f64,
}

/// A schedule-impact record. Delays carry no cost and are excluded from
/// the budget aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayEntry {
    /// Delay category, e.g. "Weather", "Material Shortage"
    #[serde(rename = "type")]
    pub delay_type: String,
    /// Schedule impact level, e.g. "Minor", "Critical"
    pub impact: String,
    pub description: String,
    /// Clock time "HH:MM", empty when not provided
    pub start_time: String,
    /// Clock time "HH:MM", empty when not provided
    pub end_time: String,
    /// Derived hours between start and end. Naive wall-clock subtraction:
    /// an end time earlier than the start time yields a negative value.
    pub duration: f64,
    /// How the delay was resolved, empty when not provided
    pub solution: String,
}

/// The six entry categories of the diary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Materials,
    Equipment,
    OtherCosts,
    Overtime,
    Subcontractors,
    Delays,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 6] = [
        CategoryKind::Materials,
        CategoryKind::Equipment,
        CategoryKind::OtherCosts,
        CategoryKind::Overtime,
        CategoryKind::Subcontractors,
        CategoryKind::Delays,
    ];

    /// Name of the hidden form field this category serializes into.
    pub fn hidden_field_name(&self) -> &'static str {
        match self {
            CategoryKind::Materials => "materials_json",
            CategoryKind::Equipment => "equipment_json",
            CategoryKind::OtherCosts => "other_costs_json",
            CategoryKind::Overtime => "overtime_json",
            CategoryKind::Subcontractors => "subcontractor_json",
            CategoryKind::Delays => "delays_json",
        }
    }

    /// Short slug used inside generated entry ids.
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryKind::Materials => "material",
            CategoryKind::Equipment => "equipment",
            CategoryKind::OtherCosts => "other-cost",
            CategoryKind::Overtime => "overtime",
            CategoryKind::Subcontractors => "subcontractor",
            CategoryKind::Delays => "delay",
        }
    }

    /// Section heading shown above the category's entry list.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Materials => "Materials",
            CategoryKind::Equipment => "Equipment",
            CategoryKind::OtherCosts => "Other Costs",
            CategoryKind::Overtime => "Overtime",
            CategoryKind::Subcontractors => "Subcontractors",
            CategoryKind::Delays => "Delays",
        }
    }

    /// Delays are schedule records, not cost records.
    pub fn is_cost_bearing(&self) -> bool {
        !matches!(self, CategoryKind::Delays)
    }

    fn from_slug(slug: &str) -> Option<CategoryKind> {
        CategoryKind::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

/// Generate a stable entry id in format: "entry::<category-slug>::<uuid>"
pub fn generate_entry_id(category: CategoryKind) -> String {
    format!("entry::{}::{}", category.slug(), Uuid::new_v4())
}

/// Parse an entry id back into its category and uuid.
pub fn parse_entry_id(id: &str) -> Result<(CategoryKind, Uuid), EntryIdError> {
    let parts: Vec<&str> = id.split("::").collect();
    if parts.len() != 3 || parts[0] != "entry" {
        return Err(EntryIdError::InvalidFormat);
    }

    let category = CategoryKind::from_slug(parts[1]).ok_or(EntryIdError::InvalidCategory)?;
    let uuid = parts[2].parse::<Uuid>().map_err(|_| EntryIdError::InvalidUuid)?;

    Ok((category, uuid))
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryIdError {
    InvalidFormat,
    InvalidCategory,
    InvalidUuid,
}

impl fmt::Display for EntryIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIdError::InvalidFormat => write!(f, "Invalid entry ID format"),
            EntryIdError::InvalidCategory => write!(f, "Invalid category in entry ID"),
            EntryIdError::InvalidUuid => write!(f, "Invalid UUID in entry ID"),
        }
    }
}

impl std::error::Error for EntryIdError {}

/// A project the diary entry can be charged against. The page holds a
/// list of these; the project `<select>` value keys into it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    /// Approved budget ceiling
    pub budget: f64,
    /// Spend recorded on previous diary days
    pub spent: f64,
}

/// Response containing the page project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectInfo>,
}

/// One count/rate labor input pair from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborLine {
    /// Worker headcount for this line
    pub count: f64,
    /// Daily rate per worker
    pub rate: f64,
}

impl LaborLine {
    pub fn cost(&self) -> f64 {
        self.count * self.rate
    }
}

/// Result of the budget recompute over the current form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Total cost of the currently open diary day
    pub daily_total: f64,
    /// project.spent + daily_total, when a project is selected
    pub running_cost: Option<f64>,
    /// project.budget - running_cost; not clamped, may be negative
    pub remaining: Option<f64>,
}

/// A hidden input injected into the form before the native submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// Validation errors for the per-category add operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryValidationError {
    /// The category's minimal-required set was not satisfied. Rendered as
    /// a silent no-op by the form.
    MissingRequiredFields(CategoryKind),
    /// Subcontractor gate: a resolved name plus either a work description
    /// or a positive cost is required. Surfaced to the user.
    SubcontractorDetailsRequired,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryValidationError::MissingRequiredFields(category) => {
                write!(f, "Missing required fields for {}", category.label())
            }
            EntryValidationError::SubcontractorDetailsRequired => write!(
                f,
                "Please provide either a work description or daily cost for the subcontractor."
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// A previously submitted diary report, as listed on the history panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: String,
    /// ISO 8601 date of the diary day
    pub report_date: String,
    pub project_name: String,
    pub status: String,
    pub total_cost: f64,
}

impl ReportSummary {
    /// Human-readable report date, e.g. "June 19, 2025". Falls back to the
    /// raw string when the server sent something unparseable.
    pub fn formatted_date(&self) -> String {
        match chrono::NaiveDate::parse_from_str(&self.report_date, "%Y-%m-%d") {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => self.report_date.clone(),
        }
    }
}

/// Response containing the diary history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportSummary>,
}

/// Response after deleting a diary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteReportResponse {
    pub deleted: bool,
    pub success_message: String,
}

/// Configuration for the diary entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryFormConfig {
    pub currency_symbol: String,
    pub notification_duration_ms: u64,
    /// Picklist value that switches subcontractor entry to free text
    pub custom_name_sentinel: String,
    /// Description used when a subcontractor line has only a cost
    pub default_work_description: String,
}

impl Default for DiaryFormConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "\u{20b1}".to_string(),
            notification_duration_ms: 3000,
            custom_name_sentinel: "custom".to_string(),
            default_work_description: "General construction work".to_string(),
        }
    }
}
