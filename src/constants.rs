//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// CODEFORCES API
// =============================================================================

/// Default Codeforces API base URL
pub const DEFAULT_CODEFORCES_API_URL: &str = "https://codeforces.com/api";

/// Base URL used to build problem links
pub const CODEFORCES_WEB_URL: &str = "https://codeforces.com";

/// Number of submissions requested when checking a handle
pub const DEFAULT_SUBMISSION_COUNT: u32 = 100_000;

/// Status value the API uses for a successful call
pub const API_STATUS_OK: &str = "OK";

// =============================================================================
// SHEET STORAGE
// =============================================================================

/// Key the sheet is stored under
pub const DEFAULT_SHEET_STORAGE_KEY: &str = "codeforcesSheet";

/// Default path of the file-backed store
pub const DEFAULT_SHEET_FILE: &str = "data/sheet.json";

/// Store backend identifiers
pub mod store_backends {
    pub const REDIS: &str = "redis";
    pub const FILE: &str = "file";
    pub const MEMORY: &str = "memory";
}

// =============================================================================
// CATALOG NORMALIZATION
// =============================================================================

/// Problems rated above this are left out of the catalog
pub const MAX_CATALOG_RATING: i32 = 2400;

/// Problem indices kept in the catalog
pub const PROBLEM_INDICES: &[&str] = &["A", "B", "C", "D", "E", "F", "G"];

/// Problem type discriminators
pub mod problem_types {
    pub const PROGRAMMING: &str = "PROGRAMMING";
    pub const QUESTION: &str = "QUESTION";
}

/// Placeholder used when a contest has no known name
pub const CONTEST_NAME_PLACEHOLDER_PREFIX: &str = "Contest";

// =============================================================================
// FILTER DEFAULTS
// =============================================================================

/// Lower rating bound used when none (or garbage) is given
pub const DEFAULT_MIN_RATING: i32 = 800;

/// Upper rating bound used when none (or garbage) is given
pub const DEFAULT_MAX_RATING: i32 = 3500;

/// Sentinel values for "no constraint"
pub mod sentinels {
    pub const ANY_PROBLEM_TYPE: &str = "random";
    pub const ANY_CONTEST_TYPE: &str = "any";
}

/// Contest type identifiers
pub mod contest_types {
    pub const DIV2: &str = "div2";
    pub const DIV3: &str = "div3";
    pub const DIV4: &str = "div4";
    pub const EDUCATIONAL: &str = "educational";
    pub const GLOBAL: &str = "global";
    pub const DIV1_DIV2: &str = "div1+div2";
}

/// Tags offered for filtering
pub const AVAILABLE_TAGS: &[&str] = &[
    "2-sat",
    "binary search",
    "bitmasks",
    "brute force",
    "chinese remainder theorem",
    "combinatorics",
    "constructive algorithms",
    "data structures",
    "dfs and similar",
    "divide and conquer",
    "dp",
    "dsu",
    "expression parsing",
    "fft",
    "flows",
    "games",
    "geometry",
    "graph matchings",
    "graphs",
    "greedy",
    "hashing",
    "implementation",
    "interactive",
    "math",
    "matrices",
    "meet-in-the-middle",
    "number theory",
    "probabilities",
    "schedules",
    "shortest paths",
    "sortings",
    "string suffix structures",
    "strings",
    "ternary search",
    "trees",
    "two pointers",
];

// =============================================================================
// DIFFICULTY SCALE
// =============================================================================

/// Lowest rating on the difficulty scale
pub const DIFFICULTY_SCALE_MIN: i32 = 800;

/// Highest rating on the difficulty scale
pub const DIFFICULTY_SCALE_MAX: i32 = 3500;

// =============================================================================
// HANDLES
// =============================================================================

/// Handle minimum length
pub const MIN_HANDLE_LENGTH: u64 = 3;

/// Handle maximum length
pub const MAX_HANDLE_LENGTH: u64 = 24;

// =============================================================================
// MESSAGES
// =============================================================================

/// Shown when the filters leave nothing to draw from
pub const NO_PROBLEMS_MESSAGE: &str = "No problems found.";

/// Shown while a handle check is in flight
pub const CHECKING_HANDLE_MESSAGE: &str = "Checking handle...";

/// Export document title
pub const EXPORT_TITLE: &str = "Codeforces Practice Sheet";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
