use crate::error::{Field, ValidationError, ValidationErrors};
use crate::models::Attributes;
use crate::reference::{country_rules, COUNTRY_CODE_LENGTH};
use crate::rules::{FieldRule, Format, LengthRule, Presence};

pub const FIRST_NAME_LENGTH: LengthRule = LengthRule::Range(2, 140);
pub const CUSTOMER_ID_LENGTH: LengthRule = LengthRule::Range(5, 15);
pub const ALTERNATIVE_NAMES_MAX: usize = 3;
pub const ALTERNATIVE_NAME_LENGTH: LengthRule = LengthRule::Range(3, 140);

const COUNTRY: FieldRule =
    FieldRule::new(Presence::Required).length(LengthRule::Exact(COUNTRY_CODE_LENGTH));
const FIRST_NAME: FieldRule = FieldRule::new(Presence::Optional)
    .length(FIRST_NAME_LENGTH)
    .format(Format::Alphabetic);
const CUSTOMER_ID: FieldRule = FieldRule::new(Presence::Optional).length(CUSTOMER_ID_LENGTH);
const ALTERNATIVE_NAME: FieldRule =
    FieldRule::new(Presence::Optional).length(ALTERNATIVE_NAME_LENGTH);

impl Attributes {
    /// Runs every attribute check and reports all violations at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_attributes(self)
    }
}

pub fn validate_attributes(attributes: &Attributes) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    let country_shape = COUNTRY.check(Field::Country, &attributes.country, attributes);
    let country_shape_ok = country_shape.is_none();
    errors.extend(country_shape);

    validate_alternative_names(&attributes.alternative_bank_account_names, &mut errors);
    errors.extend(FIRST_NAME.check(Field::FirstName, &attributes.first_name, attributes));
    errors.extend(CUSTOMER_ID.check(Field::CustomerId, &attributes.customer_id, attributes));

    // Country-dependent fields are only meaningful once the code is known.
    if country_shape_ok {
        match country_rules(&attributes.country) {
            Some(rules) => errors.extend(rules.check(attributes)),
            None => errors.push(ValidationError::InvalidCountry {
                country: attributes.country.clone(),
            }),
        }
    }

    log::debug!(
        "validated attributes for country '{}': {} error(s)",
        attributes.country,
        errors.len()
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

fn validate_alternative_names(names: &[String], errors: &mut Vec<ValidationError>) {
    if names.len() > ALTERNATIVE_NAMES_MAX {
        errors.push(ValidationError::TooManyAlternativeNames {
            max: ALTERNATIVE_NAMES_MAX,
            count: names.len(),
        });
    }
    for (index, name) in names.iter().enumerate() {
        let field = Field::AlternativeBankAccountName(index);
        let err = if name.is_empty() {
            // An entry in the list is never optional.
            Some(ValidationError::Length {
                field,
                expected: ALTERNATIVE_NAME_LENGTH,
                length: 0,
            })
        } else {
            ALTERNATIVE_NAME.check(field, name, &Attributes::default())
        };
        errors.extend(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn united_kingdom() -> Attributes {
        Attributes {
            country: "GB".to_string(),
            bank_id: "400300".to_string(),
            bank_id_code: "GBDSC".to_string(),
            bic: "NWBKGB22".to_string(),
            account_number: "41426819".to_string(),
            base_currency: "GBP".to_string(),
            ..Attributes::default()
        }
    }

    #[test]
    fn minimal_united_kingdom_passes() {
        assert_eq!(united_kingdom().validate(), Ok(()));
    }

    #[test]
    fn blank_country_stops_dispatch() {
        let attributes = Attributes {
            country: String::new(),
            ..united_kingdom()
        };
        let errors = attributes.validate().unwrap_err().into_inner();
        assert_eq!(
            errors,
            vec![ValidationError::Blank {
                field: Field::Country
            }]
        );
    }

    #[test]
    fn three_letter_country_reports_length() {
        let attributes = Attributes {
            country: "GBR".to_string(),
            ..united_kingdom()
        };
        let errors = attributes.validate().unwrap_err().into_inner();
        assert_eq!(
            errors,
            vec![ValidationError::Length {
                field: Field::Country,
                expected: LengthRule::Exact(2),
                length: 3
            }]
        );
    }

    #[test]
    fn every_field_is_reported() {
        let attributes = Attributes {
            bank_id: "12".to_string(),
            bic: "nope".to_string(),
            bank_id_code: "XXXXX".to_string(),
            account_number: "1234".to_string(),
            base_currency: "EUR".to_string(),
            ..united_kingdom()
        };
        let errors = attributes.validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            vec![
                Field::BankId,
                Field::Bic,
                Field::BankIdCode,
                Field::AccountNumber,
                Field::BaseCurrency
            ]
        );
    }

    #[test]
    fn country_independent_errors_accumulate_with_country_errors() {
        let attributes = Attributes {
            first_name: "J".to_string(),
            customer_id: "abc".to_string(),
            bank_id: String::new(),
            ..united_kingdom()
        };
        let errors = attributes.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Length {
            field: Field::FirstName,
            expected: FIRST_NAME_LENGTH,
            length: 1
        }));
        assert!(errors.contains(&ValidationError::Length {
            field: Field::CustomerId,
            expected: CUSTOMER_ID_LENGTH,
            length: 3
        }));
        assert!(errors.contains(&ValidationError::Blank {
            field: Field::BankId
        }));
    }

    #[test]
    fn first_name_must_be_alphabetic() {
        let attributes = Attributes {
            first_name: "J4cob".to_string(),
            ..united_kingdom()
        };
        let errors = attributes.validate().unwrap_err().into_inner();
        assert_eq!(
            errors,
            vec![ValidationError::NotAlphabetic {
                field: Field::FirstName,
                value: "J4cob".to_string()
            }]
        );
    }

    #[test]
    fn alternative_names_bounds() {
        let mut attributes = united_kingdom();
        attributes.alternative_bank_account_names =
            vec!["Sam Holder".to_string(), "Samantha Holder".to_string()];
        assert_eq!(attributes.validate(), Ok(()));

        attributes.alternative_bank_account_names = vec![
            "Ann".to_string(),
            "Bo".to_string(),
            "Cid".to_string(),
            "Dee".to_string(),
        ];
        let errors = attributes.validate().unwrap_err().into_inner();
        assert_eq!(
            errors,
            vec![
                ValidationError::TooManyAlternativeNames { max: 3, count: 4 },
                ValidationError::Length {
                    field: Field::AlternativeBankAccountName(1),
                    expected: ALTERNATIVE_NAME_LENGTH,
                    length: 2
                },
            ]
        );
    }

    #[test]
    fn empty_alternative_name_entry_is_rejected() {
        let mut attributes = united_kingdom();
        attributes.alternative_bank_account_names = vec![String::new()];
        let errors = attributes.validate().unwrap_err();
        assert_eq!(
            errors.for_field(Field::AlternativeBankAccountName(0)).count(),
            1
        );
    }
}
