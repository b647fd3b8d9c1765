pub mod delay_form;
pub mod equipment_form;
pub mod material_form;
pub mod other_cost_form;
pub mod overtime_form;
pub mod subcontractor_form;
