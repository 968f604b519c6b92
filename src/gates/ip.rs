//! IP Gate - pre-merge guardrail scan.
//!
//! Not a substitute for the human checklist in IP_GUARDRAILS.md; a fast,
//! deterministic scan that catches obvious drift. Three stages run in order
//! and the gate returns at the first failing stage: docs may mention
//! competitors, shipped files under site/ may not, and no audio may ship
//! without documented licensing.

use std::path::Path;

use crate::error::GateResult;
use crate::policy::{
    AUDIO_EXTENSIONS, COMPETITOR_BRANDS, GOVERNANCE_FILE, SITE_DIR, TEXT_EXTENSIONS,
};
use crate::report::GateReport;
use crate::scan;

/// Run the governance, competitor-brand, and audio-asset stages.
pub fn run_ip_gate(root: &Path) -> GateResult<GateReport> {
    let mut report = GateReport::new("IP GATE");

    // 1) Governance file must exist
    if !root.join(GOVERNANCE_FILE).is_file() {
        report.add_fail(format!("missing {} at repository root", GOVERNANCE_FILE));
        return Ok(report);
    }
    let site = root.join(SITE_DIR);
    if !site.is_dir() {
        report.add_fail(format!("missing {}/ directory", SITE_DIR));
        return Ok(report);
    }

    // 2) Competitor brand strings in shipped UI/runtime files
    let mut offenders: Vec<String> = Vec::new();
    for path in scan::walk_files_with_ext(&site, &TEXT_EXTENSIONS)? {
        let lower = scan::read_text_lossy(&path)?.to_lowercase();
        for brand in COMPETITOR_BRANDS {
            if lower.contains(brand) {
                offenders.push(format!(
                    "'{}' in {}",
                    brand,
                    scan::relative_display(root, &path)
                ));
            }
        }
    }
    if !offenders.is_empty() {
        report.add_fail("competitor-brand strings detected in shipped files under site/");
        report.add_fail_capped(&offenders, "competitor-brand hits");
        return Ok(report);
    }
    report.add_ok("no competitor-brand strings in shipped files");

    // 3) Audio assets under site/ (licensing risk)
    let mut audio: Vec<String> = Vec::new();
    for path in scan::walk_files(&site)? {
        if scan::has_extension(&path, &AUDIO_EXTENSIONS) {
            audio.push(format!(
                "audio asset shipped: {}",
                scan::relative_display(root, &path)
            ));
        }
    }
    if !audio.is_empty() {
        report.add_fail("audio assets detected under site/ (licensing risk)");
        report.add_fail_capped(&audio, "audio assets");
        return Ok(report);
    }
    report.add_ok("no audio assets shipped");

    Ok(report)
}
