//! QA Super - build-versioning and selector drift checks.
//!
//! Catches the most common "looks like the old build" failures: app pages
//! missing the bootstrap module, a service-worker cache that was not bumped
//! with the build id, booking-page selector drift, and legacy domain
//! fallbacks in serverless functions.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::build_info::BuildInfo;
use crate::error::GateResult;
use crate::policy::{
    APP_PAGES, APP_PAGE_MARKERS, BOOKING_MODULE, BOOKING_SELECTORS, BOOT_SCRIPT, BUILD_JSON,
    FUNCTIONS_DIR, LEGACY_DOMAIN, SERVICE_WORKER, SITE_DIR, TOKEN_PATH_FLAG, TOKEN_PATH_TOGGLE,
};
use crate::report::GateReport;
use crate::scan;

/// Run every QA check in order, accumulating failures.
///
/// A missing or unparseable build descriptor aborts the run; every later
/// check records its failure and continues.
pub fn run_qa_super(root: &Path) -> GateResult<GateReport> {
    let mut report = GateReport::new("QA SUPER");

    // Build descriptor sanity; nothing downstream makes sense without it
    let build_path = root.join(BUILD_JSON);
    if !build_path.is_file() {
        report.add_fail(format!("missing {}", BUILD_JSON));
        return Ok(report);
    }
    let build = match BuildInfo::parse(&scan::read_text_lossy(&build_path)?) {
        Ok(build) => {
            report.add_ok(format!(
                "build.json parsed: {} ({})",
                build.label, build.build_id
            ));
            build
        }
        Err(err) => {
            report.add_fail(format!("build.json invalid JSON: {}", err));
            return Ok(report);
        }
    };
    let build_id = build.build_id;

    check_cache_bust(root, &build_id, &mut report)?;
    check_service_worker(root, &build_id, &mut report)?;
    check_app_pages(root, &mut report)?;
    check_booking_module(root, &mut report)?;
    check_serverless_functions(root, &mut report)?;

    Ok(report)
}

/// HTML cache-bust params must match build_id, or stale assets keep serving.
fn check_cache_bust(root: &Path, build_id: &str, report: &mut GateReport) -> GateResult<()> {
    let v_re = Regex::new(r"\?v=(20\d\d-\d\d-\d\d_\d+)").expect("cache-bust pattern");
    let site = root.join(SITE_DIR);
    let mut mismatches = 0;
    for path in scan::walk_files_with_ext(&site, &["html"])? {
        let html = scan::read_text_lossy(&path)?;
        for cap in v_re.captures_iter(&html) {
            let v = &cap[1];
            if !build_id.is_empty() && v != build_id {
                report.add_fail(format!(
                    "{} references v={} (expected {})",
                    scan::relative_display(root, &path),
                    v,
                    build_id
                ));
                mismatches += 1;
            }
        }
    }
    if mismatches == 0 {
        report.add_ok("all HTML ?v= cache-bust params match build_id");
    }
    Ok(())
}

/// The service worker must reference the build id, and its cache name must
/// be versioned with it so old caches are actually evicted.
fn check_service_worker(root: &Path, build_id: &str, report: &mut GateReport) -> GateResult<()> {
    let sw_path = root.join(SERVICE_WORKER);
    if !sw_path.is_file() {
        report.add_fail(format!("missing {}", SERVICE_WORKER));
        return Ok(());
    }
    let sw = scan::read_text_lossy(&sw_path)?;

    if !build_id.is_empty() && !sw.contains(build_id) {
        report.add_fail(format!(
            "sw.js does not reference build_id {} (cache-bust risk)",
            build_id
        ));
    } else {
        report.add_ok("sw.js references current build_id");
    }

    let cache_re = Regex::new(r"const\s+CACHE_NAME\s*=\s*'([^']+)'").expect("cache-name pattern");
    match cache_re.captures(&sw) {
        None => report.add_fail("sw.js missing CACHE_NAME constant"),
        Some(cap) => {
            let cache_name = &cap[1];
            if !build_id.is_empty() && !cache_name.contains(build_id) {
                report.add_fail(format!(
                    "sw.js CACHE_NAME not versioned with build_id. cache={} build_id={}",
                    cache_name, build_id
                ));
            } else {
                report.add_ok("sw.js CACHE_NAME versioned with build_id");
            }
        }
    }
    Ok(())
}

/// App pages never run their JS (and render like the legacy build) when the
/// bootstrap include is missing.
fn check_app_pages(root: &Path, report: &mut GateReport) -> GateResult<()> {
    for rel in APP_PAGES {
        let path = root.join(rel);
        if !path.is_file() {
            report.add_fail(format!("missing app page: {}", rel));
            continue;
        }
        let html = scan::read_text_lossy(&path)?;
        if APP_PAGE_MARKERS.iter().any(|m| html.contains(m)) {
            if html.contains(BOOT_SCRIPT) {
                report.add_ok(format!("{} boot.mjs present", rel));
            } else {
                report.add_fail(format!("{} missing boot.mjs include", rel));
            }
        }
    }
    Ok(())
}

/// Booking fork selectors must match the markup and the e2e suite, and the
/// demo fork must gate the token path behind its visibility toggle.
fn check_booking_module(root: &Path, report: &mut GateReport) -> GateResult<()> {
    let path = root.join(BOOKING_MODULE);
    if !path.is_file() {
        report.add_fail("missing bookClass.mjs");
        return Ok(());
    }
    let js = scan::read_text_lossy(&path)?;

    for sel in BOOKING_SELECTORS {
        if !js.contains(sel) {
            report.add_fail(format!(
                "bookClass.mjs missing expected selector/reference: {}",
                sel
            ));
        }
    }

    if !js.contains(TOKEN_PATH_FLAG) || !js.contains(TOKEN_PATH_TOGGLE) {
        report.add_fail("bookClass.mjs demo fork does not set visibility for data-token-path");
    } else {
        report.add_ok("bookClass.mjs demo fork sets token-path visibility");
    }
    Ok(())
}

/// Hard-coded legacy domains in serverless functions redirect users back to
/// the old site; deploys must use the env URL instead.
fn check_serverless_functions(root: &Path, report: &mut GateReport) -> GateResult<()> {
    let fn_dir = root.join(FUNCTIONS_DIR);
    if !fn_dir.is_dir() {
        return Ok(());
    }
    let mut scripts: Vec<_> = fs::read_dir(&fn_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && scan::has_extension(p, &["js"]))
        .collect();
    scripts.sort();

    for path in scripts {
        if scan::read_text_lossy(&path)?.contains(LEGACY_DOMAIN) {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            report.add_fail(format!(
                "legacy domain {} found in {}. Use env URL/DEPLOY_PRIME_URL instead.",
                LEGACY_DOMAIN, name
            ));
        }
    }
    Ok(())
}
