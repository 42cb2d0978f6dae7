//! Country reference list: source trait, REST Countries client, ordering and lookup

use crate::error::LoadError;
use crate::types::{Country, CountryRecord};
use async_trait::async_trait;
use std::cmp::Ordering;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Supplier of the country reference list
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Country>, LoadError>;
}

/// REST Countries v3.1 client
pub struct RestCountries {
    client: reqwest::Client,
    url: String,
}

impl RestCountries {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CountrySource for RestCountries {
    async fn fetch(&self) -> Result<Vec<Country>, LoadError> {
        debug!(url = %self.url, "Fetching country list");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        debug!(status = %status, "Country list response received");
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }
        let body = response.bytes().await?;
        parse_countries(&body)
    }
}

/// Decode an API response body into countries sorted by common name.
pub fn parse_countries(body: &[u8]) -> Result<Vec<Country>, LoadError> {
    let records: Vec<CountryRecord> = serde_json::from_slice(body)?;
    let mut countries: Vec<Country> = records.into_iter().map(Country::from).collect();
    sort_by_common_name(&mut countries);
    Ok(countries)
}

pub fn sort_by_common_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| compare_names(&a.common_name, &b.common_name));
}

/// Locale-aware name ordering: accents fold onto the base letter and case is
/// ignored at the primary level. Falls back to the raw strings on ties so the
/// order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks dropped, lowercased. Letters
/// that do not decompose expand to their base spelling.
fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'ß' => key.push_str("ss"),
            'Æ' | 'æ' => key.push_str("ae"),
            'Œ' | 'œ' => key.push_str("oe"),
            'Ø' | 'ø' => key.push('o'),
            _ => key.extend(c.to_lowercase()),
        }
    }
    key
}

/// Loaded country list; read-only once built
#[derive(Debug, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Linear search by alpha-2 code
    pub fn lookup(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.alpha2_code == code)
    }
}
