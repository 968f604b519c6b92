//! Brand Gate - keeps legacy branding out of public-facing copy.
//!
//! Scans shipped HTML and the JSON data files carrying visible marketing
//! copy. Video metadata and internal storage keys are deliberately out of
//! scope; the UI strips legacy prefixes from those at render time.

use std::path::Path;

use crate::error::GateResult;
use crate::policy::{BRAND_JSON_TARGETS, LEGACY_BRAND_TOKENS, SITE_DIR};
use crate::report::GateReport;
use crate::scan;

/// Scan site HTML and named JSON data files for legacy brand tokens.
pub fn run_brand_gate(root: &Path) -> GateResult<GateReport> {
    let mut report = GateReport::new("BRAND GATE");
    let mut violations: Vec<String> = Vec::new();

    // 1) HTML under site/
    let site = root.join(SITE_DIR);
    for path in scan::walk_files_with_ext(&site, &["html"])? {
        let text = scan::read_text_lossy(&path)?;
        record_hits(root, &path, &text, &mut violations);
    }

    // 2) Selected JSON (visible marketing copy / labels); missing files skip
    for rel in BRAND_JSON_TARGETS {
        let path = root.join(rel);
        if !path.is_file() {
            continue;
        }
        let text = scan::read_text_lossy(&path)?;
        record_hits(root, &path, &text, &mut violations);
    }

    if violations.is_empty() {
        report.add_ok("no legacy brand tokens in public-facing copy/data");
    } else {
        for v in violations {
            report.add_fail(v);
        }
    }
    Ok(report)
}

fn record_hits(root: &Path, path: &Path, text: &str, violations: &mut Vec<String>) {
    let hits: Vec<String> = LEGACY_BRAND_TOKENS
        .iter()
        .filter(|tok| text.contains(**tok))
        .map(|tok| format!("\"{}\"", tok))
        .collect();
    if !hits.is_empty() {
        violations.push(format!(
            "{} contains {}",
            scan::relative_display(root, path),
            hits.join(", ")
        ));
    }
}
