//! Application constants and configuration defaults

pub const APP_NAME: &str = "Travel Advisor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name,flags,cca2";

/// Environment overrides, read once at start-up
pub const ENV_COUNTRIES_URL: &str = "TRAVEL_ADVISOR_COUNTRIES_URL";
pub const ENV_BACKEND_URL: &str = "TRAVEL_ADVISOR_BACKEND_URL";

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 0;
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

// User-facing messages
pub const COUNTRY_LOAD_FAILED: &str = "Failed to load countries. Please try again later.";
pub const INCOMPLETE_FORM_NOTICE: &str = "Please select all field options before submitting.";
pub const SUBMIT_CONFIRMATION: &str = "Your preferences have been sent to the backend!";
pub const SUBMIT_FAILED: &str = "Failed to send preferences. Please try again.";
