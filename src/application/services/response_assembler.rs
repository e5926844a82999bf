use serde::{Deserialize, Serialize};

use crate::domain::AnalysisResult;

/// Wire shape returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallAnalysisResponse {
    pub separate_format: String,
    pub summary: String,
    pub performance: String,
}

impl From<AnalysisResult> for CallAnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            separate_format: result.structured_dialogue,
            summary: result.summary,
            performance: result.performance_report,
        }
    }
}
