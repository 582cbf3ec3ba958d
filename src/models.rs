use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blank strings mean "not provided" and are left off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_currency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,
    /// Assigned by the service when left blank.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bic: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub customer_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_bank_account_names: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub joint_account: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub account_matching_opt_out: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    #[serde(rename = "type")]
    account_type: String,
    id: Uuid,
    organisation_id: Uuid,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modified_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
}

impl AccountData {
    pub(crate) fn new(
        account_type: String,
        id: Uuid,
        organisation_id: Uuid,
        attributes: Attributes,
    ) -> Self {
        Self {
            account_type,
            id,
            organisation_id,
            attributes,
            created_on: None,
            modified_on: None,
            version: None,
        }
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn organisation_id(&self) -> Uuid {
        self.organisation_id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    pub fn modified_on(&self) -> Option<DateTime<Utc>> {
        self.modified_on
    }

    /// Optimistic concurrency token required by delete.
    pub fn version(&self) -> Option<u64> {
        self.version
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Built locally through `Account::new`, or returned by the service with
/// its metadata filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    data: AccountData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    links: Option<Links>,
}

impl Account {
    pub(crate) fn from_data(data: AccountData) -> Self {
        Self { data, links: None }
    }

    pub fn data(&self) -> &AccountData {
        &self.data
    }

    pub fn id(&self) -> Uuid {
        self.data.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.data.attributes
    }

    pub fn version(&self) -> Option<u64> {
        self.data.version
    }

    pub fn links(&self) -> Option<&Links> {
        self.links.as_ref()
    }

    /// True once a round trip to the service populated the metadata.
    pub fn is_complete(&self) -> bool {
        self.data.created_on.is_some() && self.data.version.is_some()
    }

    pub fn into_data(self) -> AccountData {
        self.data
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountPage {
    pub data: Vec<AccountData>,
    pub links: Links,
}
