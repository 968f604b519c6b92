//! Fixed scan policy for all three gates.
//!
//! Every token list, extension set, and checked path is a compile-time
//! constant: the gates are deliberately configuration-free so a CI run is a
//! pure function of the tree it scans.

/// Legacy brand tokens that must not reappear in public-facing copy.
pub const LEGACY_BRAND_TOKENS: [&str; 2] = ["HIIT56", "Hiit56"];

/// JSON data files with visible marketing copy, scanned by the brand gate.
/// Paths are relative to the repository root; missing files are skipped.
pub const BRAND_JSON_TARGETS: [&str; 4] = [
    "site/assets/data/pricing_v1.json",
    "site/assets/data/tenants_demo.json",
    "site/assets/data/categories_v1.json",
    "site/assets/data/categories_draft.json",
];

/// Competitor brand substrings disallowed in shipped UI/runtime files.
/// Kept short and obvious; matched case-insensitively.
pub const COMPETITOR_BRANDS: [&str; 4] = ["tiktok", "instagram", "facebook", "snapchat"];

/// Extensions of text-like files scanned for competitor brands.
pub const TEXT_EXTENSIONS: [&str; 7] = ["html", "js", "mjs", "css", "json", "svg", "txt"];

/// Extensions that mark a shipped audio asset (licensing risk).
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "m4a", "aac", "ogg", "flac"];

/// Governance document that must exist at the repository root.
pub const GOVERNANCE_FILE: &str = "IP_GUARDRAILS.md";

/// Shipped site tree, relative to the repository root.
pub const SITE_DIR: &str = "site";

/// Build descriptor consumed by the QA gate.
pub const BUILD_JSON: &str = "site/assets/build.json";

/// Service-worker script whose cache name must track the build id.
pub const SERVICE_WORKER: &str = "site/sw.js";

/// App pages that must load the bootstrap module.
pub const APP_PAGES: [&str; 4] = [
    "site/app/fyp/index.html",
    "site/app/following/index.html",
    "site/app/signals/index.html",
    "site/app/profile/index.html",
];

/// Markup markers identifying a page as an app page.
pub const APP_PAGE_MARKERS: [&str; 3] = [
    "data-page=\"ndyra-",
    "data-page=\"ndyra",
    "data-page=\"app",
];

/// Bootstrap script reference every app page must carry.
pub const BOOT_SCRIPT: &str = "assets/js/ndyra/boot.mjs";

/// Booking page module checked for selector drift.
pub const BOOKING_MODULE: &str = "site/assets/js/ndyra/pages/bookClass.mjs";

/// Selectors the booking module must reference (they are matched by markup
/// and by the e2e suite).
pub const BOOKING_SELECTORS: [&str; 4] = [
    "data-action=\"book-membership\"",
    "data-action=\"book-tokens\"",
    "data-action=\"update-payment\"",
    "data-token-path",
];

/// State flag gating the token path in the booking demo fork.
pub const TOKEN_PATH_FLAG: &str = "tokenPathAllowed";

/// Visibility-toggle invocation the demo fork must make for the token path.
pub const TOKEN_PATH_TOGGLE: &str = "setVisible('[data-token-path]'";

/// Legacy domain that must not be hard-coded in serverless functions.
pub const LEGACY_DOMAIN: &str = "hiit56online.com";

/// Serverless function directory, relative to the repository root.
pub const FUNCTIONS_DIR: &str = "netlify/functions";

/// Maximum offenders listed per violation block before summarizing.
pub const REPORT_CAP: usize = 50;
