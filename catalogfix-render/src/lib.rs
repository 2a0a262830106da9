//! Rendering helpers for human-readable change logs.

use catalogfix_types::ChangeLog;

pub fn render_change_log_md(log: &ChangeLog) -> String {
    let mut out = String::new();
    out.push_str("# catalog fixes\n\n");
    out.push_str(&format!("- Changes: {}\n", log.total()));
    out.push_str(&format!("- Stages: {}\n\n", log.sections.len()));

    if log.sections.is_empty() {
        out.push_str("_No stages ran._\n");
        return out;
    }

    for section in &log.sections {
        out.push_str(&format!(
            "## {} ({})\n\n",
            section.title,
            section.records.len()
        ));
        if section.records.is_empty() {
            out.push_str("_No changes._\n\n");
            continue;
        }
        for r in &section.records {
            out.push_str(&format!("- {}\n", r));
        }
        out.push('\n');
    }

    out
}

/// One rendered record per line, in pipeline order.
pub fn render_change_log_text(log: &ChangeLog) -> String {
    let mut out = String::new();
    for line in log.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
