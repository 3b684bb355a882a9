// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Minimum number of characters (not bytes) for a by-name catalog search.
///
/// Shorter name queries would fan out over most of the catalog, so they are
/// rejected client-side before any request is issued. Korean drug names are
/// multi-byte, hence the char count: `아스피린` passes at 4 chars.
///
/// Used in: `application/drug_search.rs`
pub const MIN_NAME_QUERY_CHARS: usize = 3;

/// Production catalog backend, used when no `--api-url` flag or config
/// entry overrides it.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_API_BASE_URL: &str = "https://pharmatc-backend-production.up.railway.app";

/// Request timeout for catalog calls. The CLI is fully blocking, so this
/// bounds how long an invocation can hang on a dead backend.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Directory name under the platform config/data dirs holding the config
/// file and the saved-drug store.
///
/// Used in: `infrastructure/config.rs`
pub const APP_DIR_NAME: &str = "pharmatc";

/// File name of the TOML configuration inside the config dir.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Fixed file name of the saved-drug list blob. The directory comes from
/// config or the platform data dir; the name itself is part of the storage
/// contract and never changes.
///
/// Used in: `infrastructure/config.rs`
pub const STORE_FILE_NAME: &str = "my_drugs.json";

/// Worksheet name of the exported spreadsheet.
///
/// Used in: `infrastructure/xlsx.rs`
pub const EXPORT_SHEET_NAME: &str = "MyDrugs";

/// Default output file name for `pharmatc export` ("my drug list" in
/// Korean, kept verbatim so exports line up with what pharmacists already
/// have on disk).
///
/// Used in: `cli/args.rs`
pub const DEFAULT_EXPORT_FILE_NAME: &str = "나의약품리스트.xlsx";
