//! A field is checked in a fixed order: presence, length, format, then the
//! optional extra predicate. The first violated step is reported and the
//! remaining steps for that field are skipped.

use crate::error::{Field, ValidationError};
use crate::models::Attributes;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const BIC_PATTERN: &str = "^([A-Z]{6}[A-Z0-9]{2}|[A-Z]{6}[A-Z0-9]{5})$";

static BIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(BIC_PATTERN).expect("BIC pattern is a valid regex")
});

pub fn is_valid_bic(bic: &str) -> bool {
    BIC_REGEX.is_match(bic)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Field is not supported for the country and must stay blank.
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Any,
    Exact(usize),
    Range(usize, usize),
    Either(usize, usize),
    /// Length depends on whether the account number is populated.
    ByAccountNumber { blank: usize, present: usize },
}

impl LengthRule {
    pub fn resolve(self, attributes: &Attributes) -> LengthRule {
        match self {
            LengthRule::ByAccountNumber { blank, present } => {
                if attributes.account_number.is_empty() {
                    LengthRule::Exact(blank)
                } else {
                    LengthRule::Exact(present)
                }
            }
            other => other,
        }
    }

    pub fn accepts(self, length: usize) -> bool {
        match self {
            LengthRule::Any => true,
            LengthRule::Exact(n) => length == n,
            LengthRule::Range(min, max) => (min..=max).contains(&length),
            LengthRule::Either(a, b) => length == a || length == b,
            LengthRule::ByAccountNumber { blank, present } => length == blank || length == present,
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRule::Any => f.write_str("may be any length"),
            LengthRule::Exact(n) => write!(f, "must be {n} characters long"),
            LengthRule::Range(min, max) => {
                write!(f, "must be between {min} and {max} characters long")
            }
            LengthRule::Either(a, b) => write!(f, "must be either {a} or {b} characters long"),
            LengthRule::ByAccountNumber { blank, present } => write!(
                f,
                "must be {blank} characters long without an account number or {present} with one"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Any,
    Digits,
    Alphabetic,
    Fixed(&'static str),
    Bic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    LeadingZeroForbidden,
    LeadingZeroRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub presence: Presence,
    pub length: LengthRule,
    pub format: Format,
    pub predicate: Option<Predicate>,
}

impl FieldRule {
    pub const fn new(presence: Presence) -> Self {
        Self {
            presence,
            length: LengthRule::Any,
            format: Format::Any,
            predicate: None,
        }
    }

    pub const fn length(self, length: LengthRule) -> Self {
        Self { length, ..self }
    }

    pub const fn format(self, format: Format) -> Self {
        Self { format, ..self }
    }

    pub const fn predicate(self, predicate: Predicate) -> Self {
        Self {
            predicate: Some(predicate),
            ..self
        }
    }

    /// Returns the first rule `value` violates, if any.
    pub fn check(&self, field: Field, value: &str, attributes: &Attributes) -> Option<ValidationError> {
        if value.is_empty() {
            return match self.presence {
                Presence::Required => Some(ValidationError::Blank { field }),
                Presence::Optional | Presence::Forbidden => None,
            };
        }
        if self.presence == Presence::Forbidden {
            return Some(ValidationError::NotBlank {
                field,
                value: value.to_string(),
            });
        }

        let expected = self.length.resolve(attributes);
        let length = value.chars().count();
        if !expected.accepts(length) {
            return Some(ValidationError::Length {
                field,
                expected,
                length,
            });
        }

        if let Some(err) = check_format(self.format, field, value) {
            return Some(err);
        }

        self.predicate
            .and_then(|predicate| check_predicate(predicate, field, value))
    }
}

fn check_format(format: Format, field: Field, value: &str) -> Option<ValidationError> {
    match format {
        Format::Any => None,
        Format::Digits => {
            if value.chars().all(|ch| ch.is_ascii_digit()) {
                None
            } else {
                Some(ValidationError::NotNumeric {
                    field,
                    value: value.to_string(),
                })
            }
        }
        Format::Alphabetic => {
            if value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                None
            } else {
                Some(ValidationError::NotAlphabetic {
                    field,
                    value: value.to_string(),
                })
            }
        }
        Format::Fixed(expected) => {
            if value == expected {
                None
            } else {
                Some(ValidationError::Mismatch {
                    field,
                    expected,
                    value: value.to_string(),
                })
            }
        }
        Format::Bic => {
            if is_valid_bic(value) {
                None
            } else {
                Some(ValidationError::InvalidBic {
                    field,
                    value: value.to_string(),
                })
            }
        }
    }
}

fn check_predicate(predicate: Predicate, field: Field, value: &str) -> Option<ValidationError> {
    let leading_zero = value.starts_with('0');
    match predicate {
        Predicate::LeadingZeroForbidden if leading_zero => Some(ValidationError::FirstCharZero {
            field,
            value: value.to_string(),
        }),
        Predicate::LeadingZeroRequired if !leading_zero => {
            Some(ValidationError::FirstCharNotZero {
                field,
                value: value.to_string(),
            })
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRules {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub bank_id: FieldRule,
    pub bank_id_code: FieldRule,
    pub bic: FieldRule,
    pub account_number: FieldRule,
    pub base_currency: FieldRule,
}

impl CountryRules {
    /// Checks every country-dependent field; one error at most per field.
    pub fn check(&self, attributes: &Attributes) -> Vec<ValidationError> {
        [
            (Field::BankId, &self.bank_id, attributes.bank_id.as_str()),
            (Field::Bic, &self.bic, attributes.bic.as_str()),
            (
                Field::BankIdCode,
                &self.bank_id_code,
                attributes.bank_id_code.as_str(),
            ),
            (
                Field::AccountNumber,
                &self.account_number,
                attributes.account_number.as_str(),
            ),
            (
                Field::BaseCurrency,
                &self.base_currency,
                attributes.base_currency.as_str(),
            ),
        ]
        .into_iter()
        .filter_map(|(field, rule, value)| rule.check(field, value, attributes))
        .collect()
    }
}
