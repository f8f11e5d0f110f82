use crate::*;
use std::process::ExitCode;

pub fn handle_check_command(cli: &Cli, ws: &Workspace) -> anyhow::Result<ExitCode> {
    let docs = load_documents(ws)?;
    let vcs = detect_vcs(&ws.root);
    let problems = run_checks(ws, &docs, vcs.as_ref());
    let ok = problems.is_empty();

    if cli.json {
        let total = problems.len();
        print_json(ok, CheckReport { problems, total })?;
    } else if ok {
        println!("OK: docs validation passed");
    } else {
        for p in &problems {
            println!("[FAIL] {}: {}", p.path, p.message);
        }
        eprintln!("\nTotal failures: {}", problems.len());
    }

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_VIOLATIONS)
    })
}
