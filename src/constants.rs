/// User agent string used in HTTP requests to identify this client to the Zencare API
pub const USER_AGENT: &str = "zencare-client/0.3.0";
/// Default base URL for the Zencare REST API, including the /api/v1 mount point
pub const DEFAULT_BASE_URL: &str = "https://zencare-backend-2.onrender.com/api/v1";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Storage key under which the access token is persisted after login
///
/// The same key is used for every read and write; there is exactly one
/// canonical name for the token in the store.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Default file name for the file-backed token store
pub const DEFAULT_TOKEN_FILE: &str = ".zencare_tokens.json";
