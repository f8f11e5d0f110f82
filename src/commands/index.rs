use crate::*;
use anyhow::Context;
use std::process::ExitCode;

pub fn handle_index_command(
    cli: &Cli,
    ws: &Workspace,
    to_stdout: bool,
) -> anyhow::Result<ExitCode> {
    let docs = load_documents(ws)?;
    let vcs = detect_vcs(&ws.root);
    let rows = build_rows(&docs, vcs.as_ref());

    let output = ws.index_path();
    let title = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ws.settings.index_file.clone());
    let rendered = render_index(&title, &rows);

    if to_stdout {
        if cli.json {
            print_json(true, IndexReport { output: None, rows })?;
        } else {
            print!("{rendered}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    std::fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), rows = rows.len(), "docs index written");

    let report = IndexReport {
        output: Some(rel_display(&ws.root, &output)),
        rows,
    };
    print_out(cli.json, true, report, |r| {
        format!("Generated {}", r.output.as_deref().unwrap_or_default())
    })?;
    Ok(ExitCode::SUCCESS)
}
