pub mod use_diary_form;
pub mod use_reports;
