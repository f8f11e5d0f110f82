use crate::domain::constants::{FIELD_REPLACED_BY, FIELD_STATUS, STATUS_SUPERSEDED};
use crate::domain::models::{Document, Problem, Workspace};
use crate::services::header::{extract_fields, has_status_summary};
use crate::services::links::{iter_links, LinkResolver};
use crate::services::scan::{find_named, rel_display};
use crate::services::vcs::VersionControl;

pub fn check_header(doc: &Document) -> Vec<Problem> {
    if has_status_summary(&doc.text) {
        return vec![];
    }
    vec![Problem::new(&doc.rel_path, "Missing Status/Summary header near top")]
}

pub fn check_links(resolver: &LinkResolver<'_>, doc: &Document) -> Vec<Problem> {
    iter_links(&doc.text)
        .filter(|target| !resolver.resolves(&doc.path, target))
        .map(|target| Problem::new(&doc.rel_path, format!("Broken link target: {target}")))
        .collect()
}

pub fn check_supersede(resolver: &LinkResolver<'_>, doc: &Document) -> Vec<Problem> {
    let fields = extract_fields(&doc.text);
    let mut problems = Vec::new();
    let replaced_by = fields.get(FIELD_REPLACED_BY);

    if fields.get(FIELD_STATUS).map(String::as_str) == Some(STATUS_SUPERSEDED)
        && replaced_by.is_none()
    {
        problems.push(Problem::new(
            &doc.rel_path,
            "Status: Superseded requires Replaced-by:",
        ));
    }

    if let Some(value) = replaced_by {
        if !resolver.replacement_path(&doc.path, value).exists() {
            problems.push(Problem::new(
                &doc.rel_path,
                format!("Replaced-by target does not exist: {value}"),
            ));
        }
    }

    problems
}

/// All per-document rules, in reporting order.
pub fn check_document(resolver: &LinkResolver<'_>, doc: &Document) -> Vec<Problem> {
    let mut problems = check_header(doc);
    problems.extend(check_links(resolver, doc));
    problems.extend(check_supersede(resolver, doc));
    problems
}

/// The generated index must be ignored by version control.
pub fn check_generated_index(ws: &Workspace, vcs: &dyn VersionControl) -> Vec<Problem> {
    let index = ws.index_path();
    if !index.exists() {
        return vec![];
    }
    let rel = rel_display(&ws.root, &index);
    match vcs.is_ignored(&rel) {
        Some(false) => vec![Problem::new(
            &rel,
            format!("{rel} should be ignored by git (.gitignore)"),
        )],
        Some(true) => vec![],
        None => {
            tracing::debug!(path = %rel, "ignore state unknown; skipping generated-index rule");
            vec![]
        }
    }
}

/// OS noise files must be ignored and untracked under every noise root.
pub fn check_noise_files(ws: &Workspace, vcs: &dyn VersionControl) -> Vec<Problem> {
    let noise = &ws.settings.noise_file;
    let mut problems = Vec::new();
    for root in &ws.settings.noise_roots {
        for path in find_named(&ws.root.join(root), noise) {
            let rel = rel_display(&ws.root, &path);
            let tracked = vcs.is_tracked(&rel) == Some(true);
            let not_ignored = vcs.is_ignored(&rel) == Some(false);
            if tracked || not_ignored {
                problems.push(Problem::new(
                    &rel,
                    format!("Remove {noise} from repo and ensure it is gitignored"),
                ));
            }
        }
    }
    problems
}

/// Runs every rule over `docs` and the repository; empty means pass.
pub fn run_checks(ws: &Workspace, docs: &[Document], vcs: &dyn VersionControl) -> Vec<Problem> {
    let resolver = LinkResolver::new(&ws.root, ws.settings.docs_prefix());
    let mut problems: Vec<Problem> = docs
        .iter()
        .flat_map(|doc| check_document(&resolver, doc))
        .collect();
    problems.extend(check_generated_index(ws, vcs));
    problems.extend(check_noise_files(ws, vcs));
    tracing::info!(
        documents = docs.len(),
        problems = problems.len(),
        vcs = vcs.name(),
        "docs check finished"
    );
    problems
}
