//! Prompt builders for the two gateway operations.

use serde::{Deserialize, Serialize};

/// The slice of a task the gateway cares about.
///
/// Deserialized leniently from client-supplied JSON: extra fields (ids,
/// timestamps) are ignored and missing fields fall back to defaults, so
/// a partial card still produces a prompt instead of a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Single-turn prompt asking for a project summary, a per-status action
/// list and the top three next priorities.
pub fn summarize_prompt(tasks: &[TaskCard]) -> String {
    let mut lines = vec![
        "Summarize these project tasks. Output:".to_string(),
        "1) Short project summary (1-2 lines).".to_string(),
        "2) Grouped action list by status (To Do, In Progress, Done).".to_string(),
        "3) Top 3 recommended next priorities.".to_string(),
        String::new(),
        "Tasks:".to_string(),
    ];
    lines.extend(tasks.iter().map(task_line));
    lines.join("\n")
}

/// Prompt embedding one card and a literal question about it.
pub fn answer_prompt(card: &TaskCard, question: &str) -> String {
    [
        "Task card:".to_string(),
        format!("Title: {}", card.title),
        format!("Description: {}", card.description.as_deref().unwrap_or("")),
        format!("Status: {}", status_label(card)),
        String::new(),
        format!("Question: {question}"),
        "Answer concisely. If not enough info, state that you cannot answer from the card."
            .to_string(),
    ]
    .join("\n")
}

/// `- {title}: {description} [status:{status}]`, omitting the description
/// segment when empty.
fn task_line(task: &TaskCard) -> String {
    let status = status_label(task);
    match task.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => format!("- {}: {} [status:{}]", task.title, description, status),
        None => format!("- {} [status:{}]", task.title, status),
    }
}

fn status_label(task: &TaskCard) -> &str {
    task.status
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("todo")
}
