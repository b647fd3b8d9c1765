//! Per-category input validation and normalization.
//!
//! Raw form values arrive as strings; numeric fields are coerced with a
//! fallback of 0, so an unparseable amount fails the category's
//! required-fields check rather than erroring. Most categories fail
//! silently; the subcontractor gate produces a user-facing message.

use crate::timeutil;
use shared::{
    CategoryKind, DelayEntry, DiaryFormConfig, EntryValidationError, EquipmentEntry,
    MaterialEntry, OtherCostEntry, OvertimeEntry, SubcontractorEntry,
};

/// Pending material form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialFormInput {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub cost: String,
    pub supplier: String,
    pub delivery_time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentFormInput {
    pub name: String,
    pub operator: String,
    pub hours: String,
    pub fuel: String,
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherCostFormInput {
    pub name: String,
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OvertimeFormInput {
    pub personnel: String,
    pub role: String,
    pub hours: String,
    pub rate: String,
}

/// Subcontractor names come from a picklist; the `selected` value switches
/// to the free-text `custom_name` field on the config's sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubcontractorFormInput {
    pub selected: String,
    pub custom_name: String,
    pub company: String,
    pub description: String,
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayFormInput {
    pub delay_type: String,
    pub impact: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub solution: String,
}

/// Validates raw category inputs into wire records.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryValidator {
    config: DiaryFormConfig,
}

impl EntryValidator {
    pub fn new(config: DiaryFormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiaryFormConfig {
        &self.config
    }

    /// Coerce a currency/number field. Currency symbols, commas, and
    /// spaces are stripped; anything still unparseable becomes 0.
    pub fn parse_amount(&self, input: &str) -> f64 {
        input
            .trim()
            .replace(&self.config.currency_symbol, "")
            .replace(',', "")
            .replace(' ', "")
            .parse::<f64>()
            .unwrap_or(0.0)
    }

    /// Coerce an integer count field with the same 0 fallback.
    pub fn parse_count(&self, input: &str) -> u32 {
        input.trim().parse::<u32>().unwrap_or(0)
    }

    /// Materials require name, quantity, unit, and cost.
    pub fn validate_material(
        &self,
        input: &MaterialFormInput,
    ) -> Result<MaterialEntry, EntryValidationError> {
        let name = input.name.trim();
        let unit = input.unit.trim();
        let quantity = self.parse_amount(&input.quantity);
        let cost = self.parse_amount(&input.cost);

        if name.is_empty() || unit.is_empty() || quantity <= 0.0 || cost <= 0.0 {
            return Err(EntryValidationError::MissingRequiredFields(
                CategoryKind::Materials,
            ));
        }

        Ok(MaterialEntry {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            cost,
            supplier: input.supplier.trim().to_string(),
            delivery_time: input.delivery_time.trim().to_string(),
        })
    }

    /// Equipment requires name, hours, and cost.
    pub fn validate_equipment(
        &self,
        input: &EquipmentFormInput,
    ) -> Result<EquipmentEntry, EntryValidationError> {
        let name = input.name.trim();
        let hours = self.parse_amount(&input.hours);
        let cost = self.parse_amount(&input.cost);

        if name.is_empty() || hours <= 0.0 || cost <= 0.0 {
            return Err(EntryValidationError::MissingRequiredFields(
                CategoryKind::Equipment,
            ));
        }

        Ok(EquipmentEntry {
            name: name.to_string(),
            operator: input.operator.trim().to_string(),
            hours,
            fuel: self.parse_amount(&input.fuel),
            cost,
        })
    }

    /// Other costs require name and cost.
    pub fn validate_other_cost(
        &self,
        input: &OtherCostFormInput,
    ) -> Result<OtherCostEntry, EntryValidationError> {
        let name = input.name.trim();
        let cost = self.parse_amount(&input.cost);

        if name.is_empty() || cost <= 0.0 {
            return Err(EntryValidationError::MissingRequiredFields(
                CategoryKind::OtherCosts,
            ));
        }

        Ok(OtherCostEntry {
            name: name.to_string(),
            cost,
        })
    }

    /// Overtime requires personnel, role, hours, and rate.
    pub fn validate_overtime(
        &self,
        input: &OvertimeFormInput,
    ) -> Result<OvertimeEntry, EntryValidationError> {
        let personnel = self.parse_count(&input.personnel);
        let role = input.role.trim();
        let hours = self.parse_count(&input.hours);
        let rate = self.parse_amount(&input.rate);

        if personnel == 0 || role.is_empty() || hours == 0 || rate <= 0.0 {
            return Err(EntryValidationError::MissingRequiredFields(
                CategoryKind::Overtime,
            ));
        }

        Ok(OvertimeEntry {
            personnel,
            role: role.to_string(),
            hours,
            rate,
        })
    }

    /// Subcontractors need a resolved name plus either a work description
    /// or a positive cost. This is the one gate the user hears about.
    pub fn validate_subcontractor(
        &self,
        input: &SubcontractorFormInput,
    ) -> Result<SubcontractorEntry, EntryValidationError> {
        let selected = input.selected.trim();
        let name = if selected == self.config.custom_name_sentinel {
            input.custom_name.trim()
        } else {
            selected
        };

        let description = input.description.trim();
        let cost = self.parse_amount(&input.cost);

        if name.is_empty() || (description.is_empty() && cost <= 0.0) {
            return Err(EntryValidationError::SubcontractorDetailsRequired);
        }

        let description = if description.is_empty() {
            self.config.default_work_description.clone()
        } else {
            description.to_string()
        };

        Ok(SubcontractorEntry {
            name: name.to_string(),
            company: input.company.trim().to_string(),
            description,
            cost,
        })
    }

    /// Delays require type, impact, and description. Duration is derived
    /// whenever both clock times parse; otherwise it stays 0.
    pub fn validate_delay(&self, input: &DelayFormInput) -> Result<DelayEntry, EntryValidationError> {
        let delay_type = input.delay_type.trim();
        let impact = input.impact.trim();
        let description = input.description.trim();

        if delay_type.is_empty() || impact.is_empty() || description.is_empty() {
            return Err(EntryValidationError::MissingRequiredFields(
                CategoryKind::Delays,
            ));
        }

        let start_time = input.start_time.trim().to_string();
        let end_time = input.end_time.trim().to_string();
        let duration = timeutil::duration_hours(&start_time, &end_time).unwrap_or(0.0);

        Ok(DelayEntry {
            delay_type: delay_type.to_string(),
            impact: impact.to_string(),
            description: description.to_string(),
            start_time,
            end_time,
            duration,
            solution: input.solution.trim().to_string(),
        })
    }

    /// User-facing message for a validation failure, or None when the
    /// category fails silently.
    pub fn user_message(&self, error: &EntryValidationError) -> Option<String> {
        match error {
            EntryValidationError::MissingRequiredFields(_) => None,
            EntryValidationError::SubcontractorDetailsRequired => Some(error.to_string()),
        }
    }
}

impl Default for EntryValidator {
    fn default() -> Self {
        Self::new(DiaryFormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> EntryValidator {
        EntryValidator::default()
    }

    fn material_input() -> MaterialFormInput {
        MaterialFormInput {
            name: "Cement".to_string(),
            quantity: "50".to_string(),
            unit: "bags".to_string(),
            cost: "15000".to_string(),
            supplier: "ABC Corp".to_string(),
            delivery_time: "".to_string(),
        }
    }

    #[test]
    fn test_parse_amount_coerces_with_zero_fallback() {
        let v = validator();
        assert_eq!(v.parse_amount("15000"), 15000.0);
        assert_eq!(v.parse_amount(" 1,234.56 "), 1234.56);
        assert_eq!(v.parse_amount("\u{20b1}500"), 500.0);
        assert_eq!(v.parse_amount("abc"), 0.0);
        assert_eq!(v.parse_amount(""), 0.0);
    }

    #[test]
    fn test_validate_material_success() {
        let entry = validator().validate_material(&material_input()).unwrap();
        assert_eq!(entry.name, "Cement");
        assert_eq!(entry.quantity, 50.0);
        assert_eq!(entry.unit, "bags");
        assert_eq!(entry.cost, 15000.0);
        assert_eq!(entry.supplier, "ABC Corp");
        assert_eq!(entry.delivery_time, "");
    }

    #[test]
    fn test_validate_material_missing_fields() {
        let v = validator();

        let mut input = material_input();
        input.name = "  ".to_string();
        assert!(matches!(
            v.validate_material(&input),
            Err(EntryValidationError::MissingRequiredFields(CategoryKind::Materials))
        ));

        let mut input = material_input();
        input.cost = "not a number".to_string();
        assert!(v.validate_material(&input).is_err());

        let mut input = material_input();
        input.quantity = "0".to_string();
        assert!(v.validate_material(&input).is_err());
    }

    #[test]
    fn test_validate_equipment() {
        let v = validator();
        let input = EquipmentFormInput {
            name: "Excavator".to_string(),
            operator: "".to_string(),
            hours: "8".to_string(),
            fuel: "".to_string(),
            cost: "8000".to_string(),
        };

        let entry = v.validate_equipment(&input).unwrap();
        assert_eq!(entry.hours, 8.0);
        assert_eq!(entry.fuel, 0.0);
        assert_eq!(entry.cost, 8000.0);

        let missing_hours = EquipmentFormInput {
            hours: "".to_string(),
            ..input
        };
        assert!(v.validate_equipment(&missing_hours).is_err());
    }

    #[test]
    fn test_validate_overtime_requires_whole_numbers() {
        let v = validator();
        let input = OvertimeFormInput {
            personnel: "4".to_string(),
            role: "Mason".to_string(),
            hours: "3".to_string(),
            rate: "75".to_string(),
        };

        let entry = v.validate_overtime(&input).unwrap();
        assert_eq!(entry.personnel, 4);
        assert_eq!(entry.hours, 3);
        assert_eq!(entry.cost(), 900.0);

        let fractional = OvertimeFormInput {
            personnel: "4.5".to_string(),
            ..input
        };
        assert!(v.validate_overtime(&fractional).is_err());
    }

    #[test]
    fn test_subcontractor_gate() {
        let v = validator();

        // Description alone is enough
        let with_description = SubcontractorFormInput {
            selected: "JRC Builders".to_string(),
            custom_name: String::new(),
            company: "JRC".to_string(),
            description: "Tile works, 2nd floor".to_string(),
            cost: String::new(),
        };
        let entry = v.validate_subcontractor(&with_description).unwrap();
        assert_eq!(entry.cost, 0.0);

        // Cost alone is enough; description gets the default
        let with_cost = SubcontractorFormInput {
            description: String::new(),
            cost: "12000".to_string(),
            ..with_description.clone()
        };
        let entry = v.validate_subcontractor(&with_cost).unwrap();
        assert_eq!(entry.description, "General construction work");
        assert_eq!(entry.cost, 12000.0);

        // Neither: surfaced error
        let neither = SubcontractorFormInput {
            description: String::new(),
            cost: "0".to_string(),
            ..with_description.clone()
        };
        assert_eq!(
            v.validate_subcontractor(&neither),
            Err(EntryValidationError::SubcontractorDetailsRequired)
        );
    }

    #[test]
    fn test_subcontractor_custom_name_resolution() {
        let v = validator();
        let input = SubcontractorFormInput {
            selected: "custom".to_string(),
            custom_name: "Delta Rebar Crew".to_string(),
            company: String::new(),
            description: "Rebar installation".to_string(),
            cost: String::new(),
        };

        let entry = v.validate_subcontractor(&input).unwrap();
        assert_eq!(entry.name, "Delta Rebar Crew");

        let unresolved = SubcontractorFormInput {
            custom_name: "   ".to_string(),
            ..input
        };
        assert_eq!(
            v.validate_subcontractor(&unresolved),
            Err(EntryValidationError::SubcontractorDetailsRequired)
        );
    }

    #[test]
    fn test_validate_delay_derives_duration() {
        let v = validator();
        let input = DelayFormInput {
            delay_type: "Weather".to_string(),
            impact: "Major".to_string(),
            description: "Typhoon signal raised".to_string(),
            start_time: "13:00".to_string(),
            end_time: "16:30".to_string(),
            solution: String::new(),
        };

        let entry = v.validate_delay(&input).unwrap();
        assert_eq!(entry.duration, 3.5);

        // Overnight ranges keep the raw negative subtraction
        let overnight = DelayFormInput {
            start_time: "22:00".to_string(),
            end_time: "06:00".to_string(),
            ..input.clone()
        };
        assert_eq!(v.validate_delay(&overnight).unwrap().duration, -16.0);

        // Missing either time leaves duration at 0
        let open_ended = DelayFormInput {
            end_time: String::new(),
            ..input.clone()
        };
        let entry = v.validate_delay(&open_ended).unwrap();
        assert_eq!(entry.duration, 0.0);
        assert_eq!(entry.start_time, "13:00");
    }

    #[test]
    fn test_only_subcontractor_failures_reach_the_user() {
        let v = validator();
        assert_eq!(
            v.user_message(&EntryValidationError::MissingRequiredFields(
                CategoryKind::Materials
            )),
            None
        );
        let message = v
            .user_message(&EntryValidationError::SubcontractorDetailsRequired)
            .unwrap();
        assert!(message.contains("work description or daily cost"));
    }
}
