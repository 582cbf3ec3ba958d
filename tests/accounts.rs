use accountapi::generator::sample_for_country;
use accountapi::reference::supported_country_codes;
use accountapi::{Account, AccountOptions, EnvelopeError, Error, Field, ValidationError};

const ID: &str = "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc";
const ORG: &str = "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c";

#[test]
fn samples_build_into_accounts_for_every_country() {
    for code in supported_country_codes() {
        let attributes = sample_for_country(code, 2024, true).unwrap();
        let account = Account::new(AccountOptions::new(ID, ORG).with_attributes(attributes.clone()))
            .unwrap_or_else(|err| panic!("{code}: {err}"));
        assert_eq!(account.attributes(), &attributes);
        assert_eq!(account.attributes().validate(), Ok(()));
        assert!(!account.is_complete());
    }
}

#[test]
fn built_account_serializes_as_a_json_api_document() {
    let account = Account::new(
        AccountOptions::new(ID, ORG)
            .country("NL")
            .bic("ABNANL2A")
            .joint_account(true),
    )
    .unwrap();

    let document = serde_json::to_value(&account).unwrap();
    assert_eq!(
        document,
        serde_json::json!({
            "data": {
                "type": "accounts",
                "id": ID,
                "organisation_id": ORG,
                "attributes": {
                    "country": "NL",
                    "bic": "ABNANL2A",
                    "joint_account": true
                }
            }
        })
    );
}

#[test]
fn every_attribute_violation_is_returned_together() {
    let err = Account::new(
        AccountOptions::new(ID, ORG)
            .country("GB")
            .bank_id("12")
            .bic("bad")
            .first_name("1")
            .alternative_bank_account_names(["Al", "Bo", "Cy", "Di"]),
    )
    .unwrap_err();

    let errors = match err {
        Error::Validation(errors) => errors,
        other => panic!("unexpected error: {other}"),
    };
    assert!(errors.contains(&ValidationError::TooManyAlternativeNames { max: 3, count: 4 }));
    assert_eq!(errors.for_field(Field::BankId).count(), 1);
    assert_eq!(errors.for_field(Field::Bic).count(), 1);
    assert_eq!(errors.for_field(Field::BankIdCode).count(), 1);
    assert_eq!(errors.for_field(Field::FirstName).count(), 1);
    for index in 0..4 {
        assert_eq!(
            errors
                .for_field(Field::AlternativeBankAccountName(index))
                .count(),
            1
        );
    }
    let message = errors.to_string();
    assert!(message.contains("bank_id"), "{message}");
    assert!(message.contains("; "), "{message}");
}

#[test]
fn envelope_is_checked_in_order() {
    let mut options = AccountOptions::new("", "also-bad");
    options.account_type = String::new();
    assert!(matches!(
        Account::new(options.clone()),
        Err(Error::Envelope(EnvelopeError::BlankType))
    ));

    options.account_type = "accounts".to_string();
    assert!(matches!(
        Account::new(options.clone()),
        Err(Error::Envelope(EnvelopeError::BlankId { field: "id" }))
    ));

    options.id = ID.to_string();
    assert!(matches!(
        Account::new(options),
        Err(Error::Envelope(EnvelopeError::InvalidUuid {
            field: "organisation_id",
            ..
        }))
    ));
}
