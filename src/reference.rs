//! Country reference data: one entry per supported domicile.
//!
//! Bank identifier codes and lengths follow the account API's per-country
//! table. Adding a country means adding one entry to `COUNTRY_RULES`.

use crate::rules::{CountryRules, FieldRule, Format, LengthRule, Predicate, Presence};
use crate::rules::Presence::{Forbidden, Optional, Required};

pub const COUNTRY_CODE_LENGTH: usize = 2;
pub const CURRENCY_CODE_LENGTH: usize = 3;
pub const BIC_LENGTHS: LengthRule = LengthRule::Either(8, 11);

const fn bank_id(presence: Presence, length: LengthRule) -> FieldRule {
    FieldRule::new(presence)
        .length(length)
        .format(Format::Digits)
}

const fn bank_id_code(presence: Presence, code: &'static str) -> FieldRule {
    FieldRule::new(presence).format(Format::Fixed(code))
}

const fn bic(presence: Presence) -> FieldRule {
    FieldRule::new(presence)
        .length(BIC_LENGTHS)
        .format(Format::Bic)
}

const fn account_number(length: LengthRule) -> FieldRule {
    FieldRule::new(Optional)
        .length(length)
        .format(Format::Digits)
}

const fn base_currency(code: &'static str) -> FieldRule {
    FieldRule::new(Optional)
        .length(LengthRule::Exact(CURRENCY_CODE_LENGTH))
        .format(Format::Fixed(code))
}

pub static COUNTRY_RULES: &[CountryRules] = &[
    CountryRules {
        code: "GB",
        name: "United Kingdom",
        currency: "GBP",
        bank_id: bank_id(Required, LengthRule::Exact(6)),
        bank_id_code: bank_id_code(Required, "GBDSC"),
        bic: bic(Required),
        account_number: account_number(LengthRule::Exact(8)),
        base_currency: base_currency("GBP"),
    },
    CountryRules {
        code: "AU",
        name: "Australia",
        currency: "AUD",
        bank_id: bank_id(Optional, LengthRule::Exact(6)),
        bank_id_code: bank_id_code(Required, "AUBSB"),
        bic: bic(Required),
        account_number: account_number(LengthRule::Range(6, 10))
            .predicate(Predicate::LeadingZeroForbidden),
        base_currency: base_currency("AUD"),
    },
    CountryRules {
        code: "BE",
        name: "Belgium",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(3)),
        bank_id_code: bank_id_code(Required, "BE"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(7)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "CA",
        name: "Canada",
        currency: "CAD",
        bank_id: bank_id(Optional, LengthRule::Exact(9)).predicate(Predicate::LeadingZeroRequired),
        bank_id_code: bank_id_code(Optional, "CACPA"),
        bic: bic(Required),
        account_number: account_number(LengthRule::Range(7, 12)),
        base_currency: base_currency("CAD"),
    },
    CountryRules {
        code: "FR",
        name: "France",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(10)),
        bank_id_code: bank_id_code(Required, "FR"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(10)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "DE",
        name: "Germany",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(8)),
        bank_id_code: bank_id_code(Required, "DEBLZ"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(7)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "GR",
        name: "Greece",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(7)),
        bank_id_code: bank_id_code(Required, "GRBIC"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(16)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "HK",
        name: "Hong Kong",
        currency: "HKD",
        bank_id: bank_id(Optional, LengthRule::Exact(3)),
        bank_id_code: bank_id_code(Optional, "HKNCC"),
        bic: bic(Required),
        account_number: account_number(LengthRule::Range(9, 12)),
        base_currency: base_currency("HKD"),
    },
    CountryRules {
        code: "IT",
        name: "Italy",
        currency: "EUR",
        bank_id: bank_id(
            Required,
            LengthRule::ByAccountNumber {
                blank: 10,
                present: 11,
            },
        ),
        bank_id_code: bank_id_code(Required, "ITNCC"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(12)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "LU",
        name: "Luxembourg",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(3)),
        bank_id_code: bank_id_code(Required, "LULUX"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(13)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "NL",
        name: "Netherlands",
        currency: "EUR",
        bank_id: FieldRule::new(Forbidden),
        bank_id_code: FieldRule::new(Forbidden),
        bic: bic(Required),
        account_number: account_number(LengthRule::Exact(10)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "PL",
        name: "Poland",
        currency: "PLN",
        bank_id: bank_id(Required, LengthRule::Exact(8)),
        bank_id_code: bank_id_code(Required, "PLKNR"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(16)),
        base_currency: base_currency("PLN"),
    },
    CountryRules {
        code: "PT",
        name: "Portugal",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(8)),
        bank_id_code: bank_id_code(Required, "PTNCC"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(11)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "ES",
        name: "Spain",
        currency: "EUR",
        bank_id: bank_id(Required, LengthRule::Exact(8)),
        bank_id_code: bank_id_code(Required, "ESNCC"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(10)),
        base_currency: base_currency("EUR"),
    },
    CountryRules {
        code: "CH",
        name: "Switzerland",
        currency: "CHF",
        bank_id: bank_id(Required, LengthRule::Exact(5)),
        bank_id_code: bank_id_code(Required, "CHBCC"),
        bic: bic(Optional),
        account_number: account_number(LengthRule::Exact(12)),
        base_currency: base_currency("CHF"),
    },
    CountryRules {
        code: "US",
        name: "United States",
        currency: "USD",
        bank_id: bank_id(Required, LengthRule::Exact(9)),
        bank_id_code: bank_id_code(Required, "USABA"),
        bic: bic(Required),
        account_number: account_number(LengthRule::Range(6, 17)),
        base_currency: base_currency("USD"),
    },
];

pub fn country_rules(code: &str) -> Option<&'static CountryRules> {
    COUNTRY_RULES.iter().find(|rules| rules.code == code)
}

pub fn is_supported_country(code: &str) -> bool {
    country_rules(code).is_some()
}

pub fn supported_country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRY_RULES.iter().map(|rules| rules.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sixteen_unique_countries() {
        let codes: HashSet<&str> = supported_country_codes().collect();
        assert_eq!(COUNTRY_RULES.len(), 16);
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn codes_and_currencies_have_iso_shape() {
        for rules in COUNTRY_RULES {
            assert_eq!(rules.code.len(), COUNTRY_CODE_LENGTH, "{}", rules.code);
            assert!(rules.code.chars().all(|ch| ch.is_ascii_uppercase()));
            assert_eq!(rules.currency.len(), CURRENCY_CODE_LENGTH, "{}", rules.code);
            assert_eq!(
                rules.base_currency.format,
                Format::Fixed(rules.currency),
                "{}",
                rules.code
            );
        }
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(country_rules("GB").map(|rules| rules.name), Some("United Kingdom"));
        assert!(country_rules("gb").is_none());
        assert!(country_rules("ZZ").is_none());
        assert!(!is_supported_country(""));
    }

    #[test]
    fn netherlands_forbids_bank_identifiers() {
        let nl = country_rules("NL").map(|rules| (rules.bank_id, rules.bank_id_code));
        assert_eq!(
            nl,
            Some((FieldRule::new(Forbidden), FieldRule::new(Forbidden)))
        );
    }
}
