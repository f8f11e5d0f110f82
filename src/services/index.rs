use crate::domain::models::{Document, IndexRow};
use crate::services::header::status_and_description;
use crate::services::vcs::VersionControl;

const TABLE_HEADER: &str = "| No | Path | Status | Description | Created (ISO) | Updated (ISO) |";
const TABLE_RULE: &str = "| --- | --- | --- | --- | --- | --- |";

pub fn build_rows(docs: &[Document], vcs: &dyn VersionControl) -> Vec<IndexRow> {
    docs.iter()
        .enumerate()
        .map(|(i, doc)| {
            let (status, description) = status_and_description(&doc.text);
            IndexRow {
                no: i + 1,
                path: doc.rel_path.clone(),
                status,
                description,
                created_at: vcs.created_at(&doc.rel_path),
                updated_at: vcs.updated_at(&doc.rel_path),
            }
        })
        .collect()
}

fn cell(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

pub fn render_row(row: &IndexRow) -> String {
    format!(
        "| {} | `{}` | {} | {} | {} | {} |",
        row.no,
        row.path,
        cell(row.status.as_deref()),
        cell(row.description.as_deref()),
        cell(row.created_at.as_deref()),
        cell(row.updated_at.as_deref()),
    )
}

/// Full index document, newline-terminated.
pub fn render_index(title: &str, rows: &[IndexRow]) -> String {
    let mut lines = vec![
        format!("# {title}"),
        String::new(),
        "Document list (Status / Created / Updated). Dates come from git log.".to_string(),
        String::new(),
        TABLE_HEADER.to_string(),
        TABLE_RULE.to_string(),
    ];
    lines.extend(rows.iter().map(render_row));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
