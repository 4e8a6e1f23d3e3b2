//! Human-readable rendering of server responses.

use std::fmt::Write;

use serde_json::Value;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn u64_field(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Full run: header, every completed step, and the error line if it failed.
pub fn format_run(run: &Value) -> String {
    let mut out = String::new();
    let failed = str_field(run, "status") == "error";
    let color = if failed { RED } else { GREEN };

    let _ = writeln!(out, "{}{}{}", color, "=".repeat(60), RESET);
    let _ = writeln!(out, "Run:      {}", str_field(run, "id"));
    let _ = writeln!(out, "Workflow: {}", str_field(run, "workflowName"));
    let _ = writeln!(
        out,
        "Status:   {}{}{}",
        color,
        str_field(run, "status").to_uppercase(),
        RESET
    );
    let _ = writeln!(out, "Duration: {} ms", u64_field(run, "totalDurationMs"));
    let _ = writeln!(out, "Created:  {}", str_field(run, "createdAt"));

    for step in items(run, "stepOutputs") {
        let _ = writeln!(
            out,
            "\n[{}] {} ({} ms)",
            u64_field(step, "order"),
            str_field(step, "stepLabel"),
            u64_field(step, "durationMs")
        );
        let _ = writeln!(out, "{}", str_field(step, "output"));
    }

    if failed {
        let _ = writeln!(out, "\n{}Error:{} {}", RED, RESET, str_field(run, "error"));
    }
    let _ = write!(out, "{}{}{}", color, "=".repeat(60), RESET);
    out
}

/// One line per run, newest first.
pub fn format_history(history: &Value) -> String {
    let runs = items(history, "history");
    if runs.is_empty() {
        return "No runs yet.".to_string();
    }

    runs.iter()
        .map(|run| {
            format!(
                "{}  {:<7}  {:>2} steps  {:>6} ms  {}",
                str_field(run, "id"),
                str_field(run, "status"),
                items(run, "stepOutputs").len(),
                u64_field(run, "totalDurationMs"),
                str_field(run, "workflowName")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_steps(catalog: &Value) -> String {
    items(catalog, "steps")
        .iter()
        .map(|step| {
            format!(
                "{} {:<20} {:<18} {}",
                str_field(step, "icon"),
                str_field(step, "type"),
                str_field(step, "label"),
                str_field(step, "description")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn step_list(steps: impl Iterator<Item = String>) -> String {
    steps.collect::<Vec<_>>().join(" -> ")
}

pub fn format_templates(templates: &Value) -> String {
    items(templates, "templates")
        .iter()
        .map(|template| {
            format!(
                "{} {}: {}\n   {}",
                str_field(template, "icon"),
                str_field(template, "name"),
                str_field(template, "description"),
                step_list(
                    items(template, "steps")
                        .iter()
                        .filter_map(|s| s.as_str().map(str::to_string))
                )
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_workflow(workflow: &Value) -> String {
    let mut steps: Vec<&Value> = items(workflow, "steps").iter().collect();
    steps.sort_by_key(|step| u64_field(step, "order"));
    format!(
        "{}  {}  {}",
        str_field(workflow, "id"),
        str_field(workflow, "name"),
        step_list(steps.iter().map(|step| str_field(step, "type").to_string()))
    )
}

pub fn format_workflows(workflows: &Value) -> String {
    let all = items(workflows, "workflows");
    if all.is_empty() {
        return "No saved workflows.".to_string();
    }
    all.iter().map(format_workflow).collect::<Vec<_>>().join("\n")
}

pub fn format_health(health: &Value) -> String {
    let llm = health.get("llm").cloned().unwrap_or(Value::Null);
    format!(
        "Status:   {}\nLLM:      {}\nHistory:  {}/{}\nWorkflows: {}\nUptime:   {}s\nVersion:  {}",
        str_field(health, "status"),
        str_field(&llm, "message"),
        u64_field(health, "historySize"),
        u64_field(health, "historyCapacity"),
        u64_field(health, "workflowCount"),
        u64_field(health, "uptimeSeconds"),
        str_field(health, "version")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failed_run() -> Value {
        json!({
            "id": "run-1",
            "workflowName": "Custom Workflow",
            "status": "error",
            "error": "Step 2 (Summarize) failed: rate limited",
            "totalDurationMs": 1250,
            "createdAt": "2026-01-01T00:00:00Z",
            "stepOutputs": [{
                "order": 1,
                "stepLabel": "Clean Text",
                "durationMs": 800,
                "output": "cleaned text"
            }]
        })
    }

    #[test]
    fn test_format_failed_run() {
        let text = format_run(&failed_run());
        assert!(text.contains("Run:      run-1"));
        assert!(text.contains("[1] Clean Text (800 ms)\ncleaned text"));
        assert!(text.contains("Step 2 (Summarize) failed: rate limited"));
    }

    #[test]
    fn test_format_history() {
        assert_eq!(format_history(&json!({"history": []})), "No runs yet.");

        let text = format_history(&json!({"history": [failed_run()]}));
        assert!(text.starts_with("run-1  error"));
        assert!(text.contains(" 1 steps"));
        assert!(text.ends_with("Custom Workflow"));
    }

    #[test]
    fn test_format_workflow_orders_steps() {
        let workflow = json!({
            "id": "wf-1",
            "name": "Digest",
            "steps": [
                {"type": "SUMMARIZE", "order": 2},
                {"type": "CLEAN_TEXT", "order": 1}
            ]
        });
        assert_eq!(
            format_workflow(&workflow),
            "wf-1  Digest  CLEAN_TEXT -> SUMMARIZE"
        );
    }
}
