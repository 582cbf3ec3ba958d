//! Client for the organisation accounts REST API (create, fetch, list,
//! delete) with per-country validation of account attributes.
//!
//! Attributes are checked locally against a static country table before any
//! request is made:
//!
//! ```no_run
//! use accountapi::{Account, AccountOptions, Client, ClientConfig};
//!
//! let options = AccountOptions::new(
//!     "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
//!     "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
//! )
//! .country("GB")
//! .bank_id("400300")
//! .bank_id_code("GBDSC")
//! .bic("NWBKGB22");
//!
//! let account = Account::new(options)?;
//! let client = Client::new(ClientConfig::from_env(None))?;
//! let stored = client.create(&account)?;
//! # Ok::<(), accountapi::Error>(())
//! ```

pub mod account;
pub mod client;
pub mod error;
pub mod generator;
pub mod models;
pub mod reference;
pub mod rules;
pub mod util;
pub mod validation;

pub use account::{AccountOptions, Attribute, ACCOUNT_TYPE};
pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{EnvelopeError, Error, Field, Result, ValidationError, ValidationErrors};
pub use models::{Account, AccountData, AccountPage, Attributes, Links};
pub use rules::{CountryRules, LengthRule};
pub use validation::validate_attributes;
