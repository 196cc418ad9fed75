//! Build-time configuration.
//!
//! The bundle runs in the browser and has no process environment, so the API
//! location is baked in when `trunk build` runs:
//!
//! ```text
//! CATALOG_API_URL=https://catalog.example.com trunk build --release
//! ```

/// Catalog API used when `CATALOG_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:4321";

pub fn api_base_url() -> &'static str {
    option_env!("CATALOG_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
}
