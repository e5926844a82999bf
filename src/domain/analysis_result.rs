/// The three completions produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub structured_dialogue: String,
    pub summary: String,
    pub performance_report: String,
}
