// src/config/consts.rs

// Sources
pub const REPORT_URL: &str =
    "https://www.epa.vic.gov.au/for-community/summer-water-quality/water-quality-across-victoria";
pub const BEACHSAFE_API_BASE: &str = "https://beachsafe.org.au";
pub const BEACHSAFE_HOST: &str = "beachsafe.org.au";

// Net config
pub const USER_AGENT: &str = concat!("beach_report/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Page shape
pub const TABLE_CLASS: &str = "js-responsive-table";
pub const INDICATOR_CLASS: &str = "indicator";
pub const SUMMARY_SECTION_CLASS: &str = "cm-yb-table";
pub const UPDATED_MARKER: &str = "Updated";
pub const TODAY_COL: usize = 2; // 1-based, like nth-child
pub const TOMORROW_COL: usize = 3;
pub const LINKS_COL: usize = 4;

// Widget
pub const DEFAULT_BEACH: &str = "Hampton";
pub const UNAVAILABLE: &str = "unavailable";
pub const TIMEZONE_LABEL: &str = "AEST";
pub const HEADER_SYMBOL: &str = "beach.umbrella";

// Local files
pub const CONFIG_FILE: &str = "beach_report.cfg";
