//! Client-side assembly of an account resource from identifying fields and
//! attribute assignments.

use crate::error::{EnvelopeError, Result};
use crate::models::{Account, AccountData, Attributes};
use uuid::Uuid;

pub const ACCOUNT_TYPE: &str = "accounts";

/// A single attribute assignment. Applied in order; a later assignment to
/// the same field replaces an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Country(String),
    BaseCurrency(String),
    BankId(String),
    BankIdCode(String),
    AccountNumber(String),
    Bic(String),
    CustomerId(String),
    FirstName(String),
    AlternativeBankAccountNames(Vec<String>),
    JointAccount(bool),
    AccountMatchingOptOut(bool),
}

impl Attribute {
    pub fn apply(self, attributes: &mut Attributes) {
        match self {
            Attribute::Country(value) => attributes.country = value,
            Attribute::BaseCurrency(value) => attributes.base_currency = value,
            Attribute::BankId(value) => attributes.bank_id = value,
            Attribute::BankIdCode(value) => attributes.bank_id_code = value,
            Attribute::AccountNumber(value) => attributes.account_number = value,
            Attribute::Bic(value) => attributes.bic = value,
            Attribute::CustomerId(value) => attributes.customer_id = value,
            Attribute::FirstName(value) => attributes.first_name = value,
            Attribute::AlternativeBankAccountNames(names) => {
                attributes.alternative_bank_account_names = names
            }
            Attribute::JointAccount(flag) => attributes.joint_account = flag,
            Attribute::AccountMatchingOptOut(flag) => attributes.account_matching_opt_out = flag,
        }
    }
}

/// Everything needed to build an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountOptions {
    pub account_type: String,
    pub id: String,
    pub organisation_id: String,
    pub attributes: Vec<Attribute>,
}

impl AccountOptions {
    pub fn new(id: impl Into<String>, organisation_id: impl Into<String>) -> Self {
        Self {
            account_type: ACCOUNT_TYPE.to_string(),
            id: id.into(),
            organisation_id: organisation_id.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn country(self, code: impl Into<String>) -> Self {
        self.attribute(Attribute::Country(code.into()))
    }

    pub fn base_currency(self, code: impl Into<String>) -> Self {
        self.attribute(Attribute::BaseCurrency(code.into()))
    }

    pub fn bank_id(self, id: impl Into<String>) -> Self {
        self.attribute(Attribute::BankId(id.into()))
    }

    pub fn bank_id_code(self, code: impl Into<String>) -> Self {
        self.attribute(Attribute::BankIdCode(code.into()))
    }

    pub fn account_number(self, number: impl Into<String>) -> Self {
        self.attribute(Attribute::AccountNumber(number.into()))
    }

    pub fn bic(self, bic: impl Into<String>) -> Self {
        self.attribute(Attribute::Bic(bic.into()))
    }

    pub fn customer_id(self, id: impl Into<String>) -> Self {
        self.attribute(Attribute::CustomerId(id.into()))
    }

    pub fn first_name(self, name: impl Into<String>) -> Self {
        self.attribute(Attribute::FirstName(name.into()))
    }

    pub fn alternative_bank_account_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute(Attribute::AlternativeBankAccountNames(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn joint_account(self, flag: bool) -> Self {
        self.attribute(Attribute::JointAccount(flag))
    }

    pub fn account_matching_opt_out(self, flag: bool) -> Self {
        self.attribute(Attribute::AccountMatchingOptOut(flag))
    }

    /// Seeds the assignment list from a complete attribute set.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend([
            Attribute::Country(attributes.country),
            Attribute::BaseCurrency(attributes.base_currency),
            Attribute::BankId(attributes.bank_id),
            Attribute::BankIdCode(attributes.bank_id_code),
            Attribute::AccountNumber(attributes.account_number),
            Attribute::Bic(attributes.bic),
            Attribute::CustomerId(attributes.customer_id),
            Attribute::FirstName(attributes.first_name),
            Attribute::AlternativeBankAccountNames(attributes.alternative_bank_account_names),
            Attribute::JointAccount(attributes.joint_account),
            Attribute::AccountMatchingOptOut(attributes.account_matching_opt_out),
        ]);
        self
    }
}

struct Envelope {
    account_type: String,
    id: Uuid,
    organisation_id: Uuid,
}

fn validate_envelope(options: &AccountOptions) -> std::result::Result<Envelope, EnvelopeError> {
    if options.account_type.is_empty() {
        return Err(EnvelopeError::BlankType);
    }
    if options.account_type != ACCOUNT_TYPE {
        return Err(EnvelopeError::InvalidAccountType {
            expected: ACCOUNT_TYPE,
            actual: options.account_type.clone(),
        });
    }
    let id = parse_uuid("id", &options.id)?;
    let organisation_id = parse_uuid("organisation_id", &options.organisation_id)?;
    Ok(Envelope {
        account_type: options.account_type.clone(),
        id,
        organisation_id,
    })
}

fn parse_uuid(field: &'static str, value: &str) -> std::result::Result<Uuid, EnvelopeError> {
    if value.is_empty() {
        return Err(EnvelopeError::BlankId { field });
    }
    Uuid::parse_str(value).map_err(|_| EnvelopeError::InvalidUuid {
        field,
        value: value.to_string(),
    })
}

impl Account {
    /// Builds a local account. Envelope errors win over attribute errors;
    /// attribute errors carry every violation found.
    pub fn new(options: AccountOptions) -> Result<Account> {
        let envelope = validate_envelope(&options)?;

        let mut attributes = Attributes::default();
        for attribute in options.attributes {
            attribute.apply(&mut attributes);
        }
        attributes.validate()?;

        Ok(Account::from_data(AccountData::new(
            envelope.account_type,
            envelope.id,
            envelope.organisation_id,
            attributes,
        )))
    }
}
