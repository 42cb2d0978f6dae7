//! Preference form state, derived country lookups and validation

use crate::countries::CountryCatalog;
use crate::error::ValidationError;
use crate::types::*;

/// One overwrite of a single form field; `None` clears it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    TripType(Option<TripType>),
    Duration(Option<DurationBucket>),
    ResidenceCountry(Option<String>),
    PassportCountry(Option<String>),
    Month(Option<TravelMonth>),
    TravelStyle(Option<TravelStyle>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSelection {
    pub trip_type: Option<TripType>,
    pub duration: Option<DurationBucket>,
    pub residence_code: Option<String>,
    pub passport_code: Option<String>,
    pub month: Option<TravelMonth>,
    pub travel_style: Option<TravelStyle>,
}

impl FormSelection {
    /// Unconditional overwrite, no cross-field checks
    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::TripType(v) => self.trip_type = v,
            FieldUpdate::Duration(v) => self.duration = v,
            FieldUpdate::ResidenceCountry(v) => self.residence_code = non_empty(v),
            FieldUpdate::PassportCountry(v) => self.passport_code = non_empty(v),
            FieldUpdate::Month(v) => self.month = v,
            FieldUpdate::TravelStyle(v) => self.travel_style = v,
        }
    }

    pub fn residence_country<'a>(&self, catalog: &'a CountryCatalog) -> Option<&'a Country> {
        self.residence_code.as_deref().and_then(|code| catalog.lookup(code))
    }

    pub fn passport_country<'a>(&self, catalog: &'a CountryCatalog) -> Option<&'a Country> {
        self.passport_code.as_deref().and_then(|code| catalog.lookup(code))
    }

    /// Fields that are still unset, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.trip_type.is_none() {
            missing.push(FormField::TripType);
        }
        if self.duration.is_none() {
            missing.push(FormField::Duration);
        }
        if self.residence_code.is_none() {
            missing.push(FormField::ResidenceCountry);
        }
        if self.passport_code.is_none() {
            missing.push(FormField::PassportCountry);
        }
        if self.month.is_none() {
            missing.push(FormField::Month);
        }
        if self.travel_style.is_none() {
            missing.push(FormField::TravelStyle);
        }
        missing
    }

    /// Compose the flat submission record, resolving both country codes to
    /// their common names. All or nothing.
    pub fn build_submission(
        &self,
        catalog: &CountryCatalog,
    ) -> Result<SubmissionRecord, ValidationError> {
        let (
            Some(trip_type),
            Some(duration),
            Some(residence_code),
            Some(passport_code),
            Some(month),
            Some(travel_style),
        ) = (
            self.trip_type,
            self.duration,
            self.residence_code.as_deref(),
            self.passport_code.as_deref(),
            self.month,
            self.travel_style,
        )
        else {
            return Err(ValidationError::Incomplete {
                missing: self.missing_fields(),
            });
        };

        let residence = resolve(catalog, FormField::ResidenceCountry, residence_code)?;
        let passport = resolve(catalog, FormField::PassportCountry, passport_code)?;

        Ok(SubmissionRecord {
            trip_type: trip_type.as_str().to_string(),
            duration: duration.as_str().to_string(),
            country_name: residence.common_name.clone(),
            passport_country_name: passport.common_name.clone(),
            selected_month: month.code(),
            selected_travel_type: travel_style.as_str().to_string(),
        })
    }
}

fn non_empty(code: Option<String>) -> Option<String> {
    code.filter(|c| !c.trim().is_empty())
}

fn resolve<'a>(
    catalog: &'a CountryCatalog,
    field: FormField,
    code: &str,
) -> Result<&'a Country, ValidationError> {
    catalog
        .lookup(code)
        .ok_or_else(|| ValidationError::UnknownCountry {
            field,
            code: code.to_string(),
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::countries::tests::country;

    pub(crate) fn catalog() -> CountryCatalog {
        CountryCatalog::new(vec![
            country("Canada", "CA"),
            country("France", "FR"),
            country("Japan", "JP"),
        ])
    }

    pub(crate) fn complete_selection() -> FormSelection {
        let mut form = FormSelection::default();
        form.set_field(FieldUpdate::TripType(Some(TripType::Domestic)));
        form.set_field(FieldUpdate::Duration(Some(DurationBucket::ThreeToFive)));
        form.set_field(FieldUpdate::ResidenceCountry(Some("CA".into())));
        form.set_field(FieldUpdate::PassportCountry(Some("CA".into())));
        form.set_field(FieldUpdate::Month(TravelMonth::from_number(7)));
        form.set_field(FieldUpdate::TravelStyle(Some(TravelStyle::Family)));
        form
    }

    #[test]
    fn complete_form_builds_record() {
        let record = complete_selection().build_submission(&catalog()).unwrap();
        assert_eq!(
            record,
            SubmissionRecord {
                trip_type: "domestic".into(),
                duration: "3-5".into(),
                country_name: "Canada".into(),
                passport_country_name: "Canada".into(),
                selected_month: "07".into(),
                selected_travel_type: "family".into(),
            }
        );
    }

    #[test]
    fn any_single_unset_field_fails() {
        let clears = [
            (FieldUpdate::TripType(None), FormField::TripType),
            (FieldUpdate::Duration(None), FormField::Duration),
            (FieldUpdate::ResidenceCountry(None), FormField::ResidenceCountry),
            (FieldUpdate::PassportCountry(None), FormField::PassportCountry),
            (FieldUpdate::Month(None), FormField::Month),
            (FieldUpdate::TravelStyle(None), FormField::TravelStyle),
        ];
        for (clear, field) in clears {
            let mut form = complete_selection();
            form.set_field(clear);
            assert_eq!(
                form.build_submission(&catalog()),
                Err(ValidationError::Incomplete { missing: vec![field] })
            );
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let err = FormSelection::default().build_submission(&catalog()).unwrap_err();
        let ValidationError::Incomplete { missing } = err else {
            panic!("expected incomplete");
        };
        assert_eq!(missing.len(), 6);
    }

    #[test]
    fn blank_country_code_counts_as_unset() {
        let mut form = complete_selection();
        form.set_field(FieldUpdate::PassportCountry(Some(String::new())));
        assert_eq!(form.passport_code, None);
        assert!(form.build_submission(&catalog()).is_err());
    }

    #[test]
    fn unresolvable_code_fails_without_loaded_list() {
        let form = complete_selection();
        assert_eq!(
            form.build_submission(&CountryCatalog::default()),
            Err(ValidationError::UnknownCountry {
                field: FormField::ResidenceCountry,
                code: "CA".into(),
            })
        );
    }

    #[test]
    fn fields_overwrite_in_any_order() {
        let mut form = complete_selection();
        form.set_field(FieldUpdate::TravelStyle(Some(TravelStyle::Budget)));
        form.set_field(FieldUpdate::TripType(Some(TripType::International)));
        form.set_field(FieldUpdate::ResidenceCountry(Some("FR".into())));
        let record = form.build_submission(&catalog()).unwrap();
        assert_eq!(record.trip_type, "international");
        assert_eq!(record.country_name, "France");
        assert_eq!(record.passport_country_name, "Canada");
        assert_eq!(record.selected_travel_type, "budget");
    }

    #[test]
    fn derived_lookups_follow_selection() {
        let form = complete_selection();
        let catalog = catalog();
        assert_eq!(
            form.residence_country(&catalog).map(|c| c.alpha2_code.as_str()),
            Some("CA")
        );
        assert_eq!(form.residence_country(&catalog), form.passport_country(&catalog));
        assert!(FormSelection::default().residence_country(&catalog).is_none());
    }
}
