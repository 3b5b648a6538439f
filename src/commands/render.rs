use crate::api::models::AnalysisResult;

/// Marker shown next to the priority level. The backend does not close the
/// set of levels, so anything unrecognized gets the `normal` marker.
pub fn level_marker(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "urgent" => "!!!",
        "high" => "!!",
        "low" => ".",
        "spam" => "x",
        _ => "-",
    }
}

pub fn analysis_lines(analysis: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(subject) = analysis.subject.as_deref() {
        lines.push(format!("subject: {subject}"));
    }
    if let Some(sender) = analysis.sender.as_deref() {
        lines.push(format!("from: {sender}"));
    }

    lines.push(format!(
        "[{}] {} | score {:.1}/100 ({:.0}ms)",
        level_marker(&analysis.priority_level),
        analysis.priority_level,
        analysis.priority_score,
        analysis.processing_time_ms,
    ));
    lines.push(format!(
        "intent: {} | sentiment: {}",
        analysis.intent, analysis.sentiment
    ));

    if !analysis.urgency_keywords.is_empty() {
        lines.push(format!("keywords: {}", analysis.urgency_keywords.join(", ")));
    }
    if let Some(error) = analysis.error.as_deref() {
        lines.push(format!("error: {error}"));
    }

    lines
}
