// src/constants.rs
//
// Application-wide constants.

/// Canonical date form fed to the daily selector's hash.
///
/// Changing this changes which quote every date maps to.
///
/// Used in: `application/daily_selector.rs`
pub const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Firestore collection the quotes live in.
pub const DEFAULT_COLLECTION: &str = "anime_quotes";

/// Base URL of the Firestore REST API.
///
/// Used in: `infrastructure/firestore.rs`
pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Request timeout for store calls, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Documents requested per Firestore list page (the API caps this at 300).
pub const DEFAULT_PAGE_SIZE: u32 = 300;

/// Document field names as written by the sheet import.
pub const QUOTE_FIELD: &str = "Quote";
pub const CHARACTER_FIELD: &str = "Character";
pub const ANIME_FIELD: &str = "Anime";

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "wisdomvault";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Delay in milliseconds after launching the browser before the temp dir may go away.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
