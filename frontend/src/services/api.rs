use crate::services::csrf;
use gloo::net::http::Request;
use shared::{DeleteReportResponse, ProjectInfo, ProjectListResponse, ReportListResponse, ReportSummary};

/// API client for the Django diary endpoints. State-changing requests
/// carry the CSRF token; failures come back as plain messages the caller
/// can log or surface.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client against the serving origin.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with a custom base URL (dev server setups).
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Projects the diary entry can be charged against.
    pub async fn get_projects(&self) -> Result<Vec<ProjectInfo>, String> {
        let url = format!("{}/diary/api/projects/", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ProjectListResponse>().await {
                Ok(data) => Ok(data.projects),
                Err(e) => Err(format!("Failed to parse project list: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch project list: {}", e)),
        }
    }

    /// Previously submitted diary reports for the history panel.
    pub async fn get_reports(&self) -> Result<Vec<ReportSummary>, String> {
        let url = format!("{}/diary/api/reports/", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ReportListResponse>().await {
                Ok(data) => Ok(data.reports),
                Err(e) => Err(format!("Failed to parse report list: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch report list: {}", e)),
        }
    }

    /// Delete a diary report.
    pub async fn delete_report(&self, report_id: &str) -> Result<DeleteReportResponse, String> {
        let url = format!("{}/diary/api/reports/{}/delete/", self.base_url, report_id);
        let token = csrf::csrf_token().unwrap_or_default();

        match Request::post(&url)
            .header("X-CSRFToken", &token)
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<DeleteReportResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
