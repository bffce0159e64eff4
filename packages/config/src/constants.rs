// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Taskdeck

// Server Configuration
pub const TASKDECK_API_PORT: &str = "TASKDECK_API_PORT";
pub const PORT: &str = "PORT"; // Legacy
pub const TASKDECK_API_HOST: &str = "TASKDECK_API_HOST";

// CORS Configuration
pub const TASKDECK_CORS_ORIGIN: &str = "TASKDECK_CORS_ORIGIN";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN"; // Legacy

// Chat Provider Configuration
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";

// Outbound HTTP
pub const TASKDECK_HTTP_CONNECT_TIMEOUT_SECS: &str = "TASKDECK_HTTP_CONNECT_TIMEOUT_SECS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
