//! Client-side text filtering over the already-loaded diary history.

use shared::ReportSummary;

/// Case-insensitive substring match over a report's searchable fields.
/// A blank query matches everything.
pub fn report_matches(report: &ReportSummary, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    [
        report.project_name.as_str(),
        report.report_date.as_str(),
        report.status.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

/// Filter the loaded report list, keeping load order.
pub fn filter_reports<'a>(reports: &'a [ReportSummary], query: &str) -> Vec<&'a ReportSummary> {
    reports
        .iter()
        .filter(|report| report_matches(report, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(project: &str, date: &str, status: &str) -> ReportSummary {
        ReportSummary {
            id: format!("report::{}", project),
            report_date: date.to_string(),
            project_name: project.to_string(),
            status: status.to_string(),
            total_cost: 0.0,
        }
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let r = report("Riverside Mall", "2025-06-19", "approved");
        assert!(report_matches(&r, ""));
        assert!(report_matches(&r, "   "));
    }

    #[test]
    fn test_matches_are_case_insensitive() {
        let r = report("Riverside Mall", "2025-06-19", "approved");
        assert!(report_matches(&r, "riverside"));
        assert!(report_matches(&r, "MALL"));
        assert!(report_matches(&r, "2025-06"));
        assert!(!report_matches(&r, "warehouse"));
    }

    #[test]
    fn test_filter_keeps_load_order() {
        let reports = vec![
            report("Riverside Mall", "2025-06-19", "approved"),
            report("Hillside Warehouse", "2025-06-20", "pending"),
            report("Riverside Mall", "2025-06-21", "pending"),
        ];

        let hits = filter_reports(&reports, "riverside");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].report_date, "2025-06-19");
        assert_eq!(hits[1].report_date, "2025-06-21");

        assert_eq!(filter_reports(&reports, "pending").len(), 2);
    }
}
