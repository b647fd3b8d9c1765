//! Form orchestration for the site-diary page.
//!
//! `DiaryFormService` owns the entry store, labor lines, and project
//! selection, and exposes the operations the UI wires to its buttons:
//! validated adds that clear the pending input, delete by row id, the
//! budget summary, and submit-time field building. The UI layer stays
//! presentational.

use crate::budget;
use crate::render::{self, EntryRow};
use crate::store::EntryListStore;
use crate::submit;
use crate::validation::{
    DelayFormInput, EntryValidator, EquipmentFormInput, MaterialFormInput, OtherCostFormInput,
    OvertimeFormInput, SubcontractorFormInput,
};
use shared::{
    BudgetSummary, CategoryKind, DiaryFormConfig, EntryValidationError, HiddenField, LaborLine,
    ProjectInfo,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiaryFormError {
    #[error(transparent)]
    Validation(#[from] EntryValidationError),
    #[error("failed to serialize entries for submit: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiaryFormService {
    validator: EntryValidator,
    store: EntryListStore,
    labor_lines: Vec<LaborLine>,
    projects: Vec<ProjectInfo>,
    selected_project_id: Option<String>,
}

impl DiaryFormService {
    pub fn new() -> Self {
        Self::with_config(DiaryFormConfig::default())
    }

    pub fn with_config(config: DiaryFormConfig) -> Self {
        Self {
            validator: EntryValidator::new(config),
            store: EntryListStore::new(),
            labor_lines: Vec::new(),
            projects: Vec::new(),
            selected_project_id: None,
        }
    }

    pub fn config(&self) -> &DiaryFormConfig {
        self.validator.config()
    }

    pub fn store(&self) -> &EntryListStore {
        &self.store
    }

    // --- project selection -------------------------------------------------

    pub fn set_projects(&mut self, projects: Vec<ProjectInfo>) {
        self.projects = projects;
    }

    pub fn projects(&self) -> &[ProjectInfo] {
        &self.projects
    }

    /// Track the project `<select>` value. An empty value clears the
    /// selection.
    pub fn select_project(&mut self, id: &str) {
        self.selected_project_id = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };
    }

    pub fn selected_project(&self) -> Option<&ProjectInfo> {
        let id = self.selected_project_id.as_deref()?;
        budget::find_project(&self.projects, id)
    }

    // --- labor lines -------------------------------------------------------

    pub fn set_labor_lines(&mut self, lines: Vec<LaborLine>) {
        self.labor_lines = lines;
    }

    pub fn labor_lines(&self) -> &[LaborLine] {
        &self.labor_lines
    }

    // --- add operations ----------------------------------------------------
    //
    // Each add validates, appends, clears the pending input on success,
    // and hands back the row for rendering. On failure the input is left
    // untouched so the user can correct it.

    pub fn add_material(
        &mut self,
        input: &mut MaterialFormInput,
    ) -> Result<EntryRow, EntryValidationError> {
        let record = self.validator.validate_material(input)?;
        let id = self.store.materials.add(record.clone());
        *input = MaterialFormInput::default();
        Ok(render::material_row(&id, &record, &self.symbol()))
    }

    pub fn add_equipment(
        &mut self,
        input: &mut EquipmentFormInput,
    ) -> Result<EntryRow, EntryValidationError> {
        let record = self.validator.validate_equipment(input)?;
        let id = self.store.equipment.add(record.clone());
        *input = EquipmentFormInput::default();
        Ok(render::equipment_row(&id, &record, &self.symbol()))
    }

    pub fn add_other_cost(
        &mut self,
        input: &mut OtherCostFormInput,
    ) -> Result<EntryRow, EntryValidationError> {
        let record = self.validator.validate_other_cost(input)?;
        let id = self.store.other_costs.add(record.clone());
        *input = OtherCostFormInput::default();
        Ok(render::other_cost_row(&id, &record, &self.symbol()))
    }

    pub fn add_overtime(
        &mut self,
        input: &mut OvertimeFormInput,
    ) -> Result<EntryRow, EntryValidationError> {
        let record = self.validator.validate_overtime(input)?;
        let id = self.store.overtime.add(record.clone());
        *input = OvertimeFormInput::default();
        Ok(render::overtime_row(&id, &record, &self.symbol()))
    }

    pub fn add_subcontractor(
        &mut self,
        input: &mut SubcontractorFormInput,
    ) -> Result<EntryRow, EntryValidationError> {
        let record = self.validator.validate_subcontractor(input)?;
        let id = self.store.subcontractors.add(record.clone());
        *input = SubcontractorFormInput::default();
        Ok(render::subcontractor_row(&id, &record, &self.symbol()))
    }

    pub fn add_delay(
        &mut self,
        input: &mut DelayFormInput,
    ) -> Result<EntryRow, EntryValidationError> {
        let record = self.validator.validate_delay(input)?;
        let id = self.store.delays.add(record.clone());
        *input = DelayFormInput::default();
        Ok(render::delay_row(&id, &record))
    }

    // --- delete ------------------------------------------------------------

    /// Remove the entry behind a rendered row. Returns whether anything
    /// was removed.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    // --- rendering ---------------------------------------------------------

    /// Rebuild the rows for one category, in insertion order.
    pub fn rows(&self, category: CategoryKind) -> Vec<EntryRow> {
        let symbol = self.symbol();
        match category {
            CategoryKind::Materials => self
                .store
                .materials
                .iter()
                .map(|e| render::material_row(&e.id, &e.record, &symbol))
                .collect(),
            CategoryKind::Equipment => self
                .store
                .equipment
                .iter()
                .map(|e| render::equipment_row(&e.id, &e.record, &symbol))
                .collect(),
            CategoryKind::OtherCosts => self
                .store
                .other_costs
                .iter()
                .map(|e| render::other_cost_row(&e.id, &e.record, &symbol))
                .collect(),
            CategoryKind::Overtime => self
                .store
                .overtime
                .iter()
                .map(|e| render::overtime_row(&e.id, &e.record, &symbol))
                .collect(),
            CategoryKind::Subcontractors => self
                .store
                .subcontractors
                .iter()
                .map(|e| render::subcontractor_row(&e.id, &e.record, &symbol))
                .collect(),
            CategoryKind::Delays => self
                .store
                .delays
                .iter()
                .map(|e| render::delay_row(&e.id, &e.record))
                .collect(),
        }
    }

    // --- budget ------------------------------------------------------------

    /// Recompute the budget summary from current state.
    pub fn budget_summary(&self) -> BudgetSummary {
        budget::summarize(&self.store, &self.labor_lines, self.selected_project())
    }

    pub fn format_currency(&self, amount: f64) -> String {
        budget::format_currency(&self.symbol(), amount)
    }

    // --- submit ------------------------------------------------------------

    /// Hidden fields to inject before the native form POST.
    pub fn submit_fields(
        &self,
        signature_data_url: Option<&str>,
    ) -> Result<Vec<HiddenField>, DiaryFormError> {
        Ok(submit::build_hidden_fields(&self.store, signature_data_url)?)
    }

    /// Message to surface for a failed add, or None when the category
    /// fails silently.
    pub fn user_message(&self, error: &EntryValidationError) -> Option<String> {
        self.validator.user_message(error)
    }

    fn symbol(&self) -> String {
        self.config().currency_symbol.clone()
    }
}

impl Default for DiaryFormService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cement_input() -> MaterialFormInput {
        MaterialFormInput {
            name: "Cement".to_string(),
            quantity: "50".to_string(),
            unit: "bags".to_string(),
            cost: "15000".to_string(),
            supplier: "ABC Corp".to_string(),
            delivery_time: String::new(),
        }
    }

    fn excavator_input() -> EquipmentFormInput {
        EquipmentFormInput {
            name: "Excavator".to_string(),
            operator: String::new(),
            hours: "8".to_string(),
            fuel: String::new(),
            cost: "8000".to_string(),
        }
    }

    #[test]
    fn test_add_clears_input_on_success_only() {
        let mut service = DiaryFormService::new();

        let mut input = cement_input();
        service.add_material(&mut input).unwrap();
        assert_eq!(input, MaterialFormInput::default());

        let mut bad = MaterialFormInput {
            name: String::new(),
            ..cement_input()
        };
        assert!(service.add_material(&mut bad).is_err());
        // Failed adds leave the typed values in place
        assert_eq!(bad.cost, "15000");
    }

    #[test]
    fn test_material_then_equipment_then_remove_material() {
        // Add cement: total 15,000. Add excavator: 23,000. Remove the
        // material again: back to 8,000 with an empty materials list.
        let mut service = DiaryFormService::new();

        let row = service.add_material(&mut cement_input()).unwrap();
        assert_eq!(service.store().materials.len(), 1);
        assert_eq!(service.budget_summary().daily_total, 15000.0);
        assert_eq!(
            service.format_currency(service.budget_summary().daily_total),
            "\u{20b1}15,000.00"
        );

        service.add_equipment(&mut excavator_input()).unwrap();
        assert_eq!(service.budget_summary().daily_total, 23000.0);

        assert!(service.remove_entry(&row.id));
        assert_eq!(service.store().materials.len(), 0);
        assert_eq!(service.budget_summary().daily_total, 8000.0);
    }

    #[test]
    fn test_sum_invariant_across_mixed_operations() {
        let mut service = DiaryFormService::new();
        service.set_labor_lines(vec![LaborLine { count: 10.0, rate: 550.0 }]);

        service.add_material(&mut cement_input()).unwrap();
        let equipment_row = service.add_equipment(&mut excavator_input()).unwrap();
        service
            .add_overtime(&mut OvertimeFormInput {
                personnel: "4".to_string(),
                role: "Mason".to_string(),
                hours: "3".to_string(),
                rate: "75".to_string(),
            })
            .unwrap();
        service
            .add_subcontractor(&mut SubcontractorFormInput {
                selected: "JRC Builders".to_string(),
                custom_name: String::new(),
                company: String::new(),
                description: String::new(),
                cost: "12000".to_string(),
            })
            .unwrap();
        service
            .add_other_cost(&mut OtherCostFormInput {
                name: "Hauling".to_string(),
                cost: "2500".to_string(),
            })
            .unwrap();

        // 5500 + 15000 + 8000 + 900 + 12000 + 2500
        assert_eq!(service.budget_summary().daily_total, 43900.0);

        assert!(service.remove_entry(&equipment_row.id));
        assert_eq!(service.budget_summary().daily_total, 35900.0);

        service.set_labor_lines(Vec::new());
        assert_eq!(service.budget_summary().daily_total, 30400.0);
    }

    #[test]
    fn test_delays_never_move_the_total() {
        let mut service = DiaryFormService::new();
        service.add_material(&mut cement_input()).unwrap();
        let before = service.budget_summary().daily_total;

        let row = service
            .add_delay(&mut DelayFormInput {
                delay_type: "Weather".to_string(),
                impact: "Major".to_string(),
                description: "Heavy rain stopped concreting".to_string(),
                start_time: "13:00".to_string(),
                end_time: "16:30".to_string(),
                solution: String::new(),
            })
            .unwrap();

        assert_eq!(service.budget_summary().daily_total, before);
        service.remove_entry(&row.id);
        assert_eq!(service.budget_summary().daily_total, before);
    }

    #[test]
    fn test_subcontractor_gate_surfaces_one_message() {
        let mut service = DiaryFormService::new();
        let mut input = SubcontractorFormInput {
            selected: "JRC Builders".to_string(),
            custom_name: String::new(),
            company: String::new(),
            description: String::new(),
            cost: String::new(),
        };

        let error = service.add_subcontractor(&mut input).unwrap_err();
        assert_eq!(service.store().subcontractors.len(), 0);

        let message = service.user_message(&error).unwrap();
        assert!(message.contains("work description or daily cost"));

        // The silent categories produce no message at all
        let error = service
            .add_material(&mut MaterialFormInput::default())
            .unwrap_err();
        assert_eq!(service.user_message(&error), None);
    }

    #[test]
    fn test_budget_against_selected_project() {
        let mut service = DiaryFormService::new();
        service.set_projects(vec![ProjectInfo {
            id: "p1".to_string(),
            name: "Riverside Mall".to_string(),
            budget: 20000.0,
            spent: 10000.0,
        }]);

        service.add_material(&mut cement_input()).unwrap();

        // Nothing selected yet
        assert_eq!(service.budget_summary().running_cost, None);

        service.select_project("p1");
        let summary = service.budget_summary();
        assert_eq!(summary.running_cost, Some(25000.0));
        assert_eq!(summary.remaining, Some(-5000.0));

        service.select_project("");
        assert_eq!(service.budget_summary().remaining, None);

        // A select value that matches no project behaves like no selection
        service.select_project("p404");
        assert_eq!(service.budget_summary().running_cost, None);
    }

    #[test]
    fn test_rows_follow_the_store() {
        let mut service = DiaryFormService::new();
        service.add_material(&mut cement_input()).unwrap();
        let second = service
            .add_material(&mut MaterialFormInput {
                name: "Rebar".to_string(),
                quantity: "100".to_string(),
                unit: "pcs".to_string(),
                cost: "9000".to_string(),
                supplier: String::new(),
                delivery_time: String::new(),
            })
            .unwrap();

        let rows = service.rows(CategoryKind::Materials);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].summary.starts_with("Cement"));
        assert_eq!(rows[1], second);

        service.remove_entry(&rows[0].id);
        let rows = service.rows(CategoryKind::Materials);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].summary.starts_with("Rebar"));
    }

    #[test]
    fn test_submit_fields_reflect_current_state() {
        let mut service = DiaryFormService::new();
        service.add_material(&mut cement_input()).unwrap();

        let fields = service.submit_fields(Some("data:image/png;base64,AAAA")).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["materials_json", "signature_data"]);
    }
}
