use crate::rules::LengthRule;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Account attribute a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Country,
    BaseCurrency,
    BankId,
    BankIdCode,
    AccountNumber,
    Bic,
    CustomerId,
    FirstName,
    AlternativeBankAccountNames,
    AlternativeBankAccountName(usize),
}

impl Field {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::BaseCurrency => "base_currency",
            Field::BankId => "bank_id",
            Field::BankIdCode => "bank_id_code",
            Field::AccountNumber => "account_number",
            Field::Bic => "bic",
            Field::CustomerId => "customer_id",
            Field::FirstName => "first_name",
            Field::AlternativeBankAccountNames | Field::AlternativeBankAccountName(_) => {
                "alternative_bank_account_names"
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::AlternativeBankAccountName(index) => {
                write!(f, "{}[{}]", self.wire_name(), index)
            }
            _ => f.write_str(self.wire_name()),
        }
    }
}

/// One violated attribute rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: cannot be blank")]
    Blank { field: Field },

    #[error("{field}: must be blank but it's '{value}'")]
    NotBlank { field: Field, value: String },

    #[error("{field}: {expected} but its length is {length}")]
    Length {
        field: Field,
        expected: LengthRule,
        length: usize,
    },

    #[error("{field}: must be a number but '{value}' is not")]
    NotNumeric { field: Field, value: String },

    #[error("{field}: must contain only letters but '{value}' does not")]
    NotAlphabetic { field: Field, value: String },

    #[error("{field}: must be '{expected}' but it's '{value}'")]
    Mismatch {
        field: Field,
        expected: &'static str,
        value: String,
    },

    #[error("{field}: '{value}' is not a valid SWIFT BIC")]
    InvalidBic { field: Field, value: String },

    #[error("{field}: first character cannot be '0'")]
    FirstCharZero { field: Field, value: String },

    #[error("{field}: first character must be '0'")]
    FirstCharNotZero { field: Field, value: String },

    #[error("country: invalid country '{country}'")]
    InvalidCountry { country: String },

    #[error("alternative_bank_account_names: must have at most {max} entries but it has {count}")]
    TooManyAlternativeNames { max: usize, count: usize },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Blank { field }
            | ValidationError::NotBlank { field, .. }
            | ValidationError::Length { field, .. }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::NotAlphabetic { field, .. }
            | ValidationError::Mismatch { field, .. }
            | ValidationError::InvalidBic { field, .. }
            | ValidationError::FirstCharZero { field, .. }
            | ValidationError::FirstCharNotZero { field, .. } => *field,
            ValidationError::InvalidCountry { .. } => Field::Country,
            ValidationError::TooManyAlternativeNames { .. } => Field::AlternativeBankAccountNames,
        }
    }
}

/// Every violation found by a single validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |err| err.field() == field)
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Identifying wrapper failures: resource type and the two ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("type: cannot be blank")]
    BlankType,

    #[error("type: must be '{expected}' but it's '{actual}'")]
    InvalidAccountType {
        expected: &'static str,
        actual: String,
    },

    #[error("{field}: cannot be blank")]
    BlankId { field: &'static str },

    #[error("{field}: must be a valid UUID but it's '{value}'")]
    InvalidUuid { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid account envelope: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("invalid account attributes: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid account id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("resource '{resource}' does not exist")]
    ResourceNotExists { resource: String },

    #[error("duplicate account '{id}'")]
    DuplicateAccount { id: String },

    #[error("record '{id}' does not exist")]
    RecordNotExists { id: String },

    #[error("invalid version '{version}'")]
    InvalidVersion { version: u64 },

    #[error("unexpected status {status} from '{resource}'")]
    UnexpectedStatus { status: u16, resource: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
