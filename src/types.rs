//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference country, identified by its alpha-2 code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub common_name: String,
    pub alpha2_code: String,
    pub flag_image_url: String,
}

/// Country entry as returned by the REST Countries API (`fields=name,flags,cca2`)
#[derive(Deserialize)]
pub struct CountryRecord {
    pub name: CountryRecordName,
    pub cca2: String,
    pub flags: CountryRecordFlags,
}

#[derive(Deserialize)]
pub struct CountryRecordName {
    pub common: String,
}

#[derive(Deserialize)]
pub struct CountryRecordFlags {
    pub png: String,
}

impl From<CountryRecord> for Country {
    fn from(record: CountryRecord) -> Self {
        Self {
            common_name: record.name.common,
            alpha2_code: record.cca2,
            flag_image_url: record.flags.png,
        }
    }
}

/// Domestic vs. international trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripType {
    Domestic,
    International,
}

impl TripType {
    pub const ALL: [TripType; 2] = [TripType::Domestic, TripType::International];

    pub fn as_str(self) -> &'static str {
        match self {
            TripType::Domestic => "domestic",
            TripType::International => "international",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripType::Domestic => "Domestic",
            TripType::International => "International",
        }
    }
}

/// Trip length bucket offered by the duration drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    ThreeToFive,
    SixToTen,
    ElevenToFourteen,
    FifteenPlus,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::ThreeToFive,
        DurationBucket::SixToTen,
        DurationBucket::ElevenToFourteen,
        DurationBucket::FifteenPlus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DurationBucket::ThreeToFive => "3-5",
            DurationBucket::SixToTen => "6-10",
            DurationBucket::ElevenToFourteen => "11-14",
            DurationBucket::FifteenPlus => "15+",
        }
    }

    pub fn label(self) -> String {
        format!("{} Days", self.as_str())
    }
}

/// Categorical tag describing the character of the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelStyle {
    Solo,
    Group,
    Family,
    Luxury,
    Budget,
    Romantic,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 6] = [
        TravelStyle::Solo,
        TravelStyle::Group,
        TravelStyle::Family,
        TravelStyle::Luxury,
        TravelStyle::Budget,
        TravelStyle::Romantic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TravelStyle::Solo => "solo",
            TravelStyle::Group => "group",
            TravelStyle::Family => "family",
            TravelStyle::Luxury => "luxury",
            TravelStyle::Budget => "budget",
            TravelStyle::Romantic => "romantic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelStyle::Solo => "Solo Travel",
            TravelStyle::Group => "Group Travel",
            TravelStyle::Family => "Family Holidays",
            TravelStyle::Luxury => "Luxury Holidays",
            TravelStyle::Budget => "Budget Travel",
            TravelStyle::Romantic => "Romantic Getaways",
        }
    }
}

/// Month of travel, submitted as a zero-padded two digit code ("01".."12")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelMonth(chrono::Month);

impl TravelMonth {
    pub fn from_number(n: u8) -> Option<Self> {
        chrono::Month::try_from(n).ok().map(Self)
    }

    pub fn all() -> impl Iterator<Item = TravelMonth> {
        (1..=12).filter_map(Self::from_number)
    }

    pub fn code(self) -> String {
        format!("{:02}", self.0.number_from_month())
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }
}

/// The six user-settable fields of the preference form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TripType,
    Duration,
    ResidenceCountry,
    PassportCountry,
    Month,
    TravelStyle,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::TripType => "trip type",
            FormField::Duration => "duration",
            FormField::ResidenceCountry => "country of residence",
            FormField::PassportCountry => "passport country",
            FormField::Month => "travel month",
            FormField::TravelStyle => "travel style",
        };
        f.write_str(name)
    }
}

/// Flat record handed to the planning backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub trip_type: String,
    pub duration: String,
    pub country_name: String,
    pub passport_country_name: String,
    pub selected_month: String,
    pub selected_travel_type: String,
}

/// Built-in destination advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceEntry {
    pub id: u32,
    pub destination: &'static str,
    pub advice: &'static str,
}

/// Top-level view selected in the header tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Plan,
    Search,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_record_maps_wire_fields() {
        let json = r#"{"name":{"common":"Canada","official":"Canada"},"cca2":"CA","flags":{"png":"https://flagcdn.com/w320/ca.png","svg":"x"}}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        let country = Country::from(record);
        assert_eq!(country.common_name, "Canada");
        assert_eq!(country.alpha2_code, "CA");
        assert_eq!(country.flag_image_url, "https://flagcdn.com/w320/ca.png");
    }

    #[test]
    fn months_are_zero_padded() {
        let codes: Vec<String> = TravelMonth::all().map(|m| m.code()).collect();
        assert_eq!(codes.len(), 12);
        assert_eq!(codes[0], "01");
        assert_eq!(codes[6], "07");
        assert_eq!(codes[11], "12");
        assert_eq!(TravelMonth::from_number(7).map(|m| m.name()), Some("July"));
        assert!(TravelMonth::from_number(0).is_none());
        assert!(TravelMonth::from_number(13).is_none());
    }

    #[test]
    fn submission_record_uses_camel_case_keys() {
        let record = SubmissionRecord {
            trip_type: "domestic".into(),
            duration: "3-5".into(),
            country_name: "Canada".into(),
            passport_country_name: "Canada".into(),
            selected_month: "07".into(),
            selected_travel_type: "family".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "tripType": "domestic",
                "duration": "3-5",
                "countryName": "Canada",
                "passportCountryName": "Canada",
                "selectedMonth": "07",
                "selectedTravelType": "family",
            })
        );
    }

    #[test]
    fn duration_labels() {
        assert_eq!(DurationBucket::FifteenPlus.label(), "15+ Days");
        assert_eq!(DurationBucket::ThreeToFive.as_str(), "3-5");
    }
}
