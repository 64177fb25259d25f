use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::serde_ext::lenient_opt_f64;
use crate::validation::{Checks, Validate, ValidationErrors};

/// Upper bound on product ids per bulk call.
pub const BULK_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BulkOperationKind {
    GenerateDescriptions,
    GenerateSeo,
    GenerateAltText,
    Translate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationRequest {
    pub operation: BulkOperationKind,
    pub product_ids: Vec<i64>,
    /// Target language; required for `translate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Replace content that already exists instead of skipping it.
    #[serde(default)]
    pub overwrite: bool,
}

impl Validate for BulkOperationRequest {
    fn validate(&self) -> ValidationErrors {
        let mut checks = Checks::new();
        if self.product_ids.is_empty() {
            checks.custom("product_ids", "Select at least one product");
        }
        if self.product_ids.len() > BULK_LIMIT {
            checks.custom(
                "product_ids",
                format!("At most {} products can be processed at once", BULK_LIMIT),
            );
        }
        if self.operation == BulkOperationKind::Translate {
            checks.required(
                "language",
                "Target language",
                self.language.as_deref().unwrap_or_default(),
            );
        }
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemResult {
    pub product_id: i64,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub cost: Option<f64>,
}

/// Per-item outcome of a bulk run. A batch never fails as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationReport {
    #[serde(default)]
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    #[serde(default)]
    pub results: Vec<BulkItemResult>,
    #[serde(default)]
    pub total_cost: f64,
}

impl BulkOperationReport {
    pub fn failures(&self) -> impl Iterator<Item = &BulkItemResult> {
        self.results.iter().filter(|r| !r.success)
    }

    pub fn is_partial_failure(&self) -> bool {
        self.failed > 0 && self.successful > 0
    }

    pub fn is_total_failure(&self) -> bool {
        self.failed > 0 && self.successful == 0
    }

    /// One-line summary for a notice: `8 succeeded, 2 failed`.
    pub fn summary(&self) -> String {
        format!("{} succeeded, {} failed", self.successful, self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_requires_language() {
        let mut request = BulkOperationRequest {
            operation: BulkOperationKind::Translate,
            product_ids: vec![1, 2],
            language: None,
            overwrite: false,
        };
        assert!(request.validate().has_field("language"));

        request.language = Some("fr".to_string());
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_empty_and_oversized_selection() {
        let mut request = BulkOperationRequest {
            operation: BulkOperationKind::GenerateSeo,
            product_ids: vec![],
            language: None,
            overwrite: true,
        };
        assert!(request.validate().has_field("product_ids"));

        request.product_ids = (0..=BULK_LIMIT as i64).collect();
        assert!(request.validate().has_field("product_ids"));
    }

    #[test]
    fn test_report_with_partial_failure() {
        let report: BulkOperationReport = serde_json::from_str(
            r#"{
                "total": 3,
                "successful": 2,
                "failed": 1,
                "totalCost": 0.012,
                "results": [
                    { "productId": 1, "success": true, "cost": 0.006 },
                    { "productId": 2, "success": false, "error": "Provider rate limit" },
                    { "productId": 3, "success": true, "cost": "0.006" }
                ]
            }"#,
        )
        .unwrap();
        assert!(report.is_partial_failure());
        assert!(!report.is_total_failure());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].error.as_deref(), Some("Provider rate limit"));
        assert_eq!(report.summary(), "2 succeeded, 1 failed");
    }
}
