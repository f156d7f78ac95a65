use featgen::error::Error;
use featgen::name::{derive_casing, is_identifier, validate_name, ValidatedName};

const ADVERSARIAL_NAMES: &[&str] = &[
    "../etc",
    "..",
    ".",
    "a/b",
    "a\\b",
    "a..b",
    "/absolute",
    "C:\\Windows",
    "c:foo",
    "%2e%2e%2f",
    "..%2f",
    "user profile",
    "user.profile",
    "1feature",
    "-feature",
    "_feature",
    "feature\n",
    "feature\0",
    "férature",
    "ｆｅａｔｕｒｅ",
    " feature",
];

#[test]
fn test_missing_and_empty_names() {
    assert!(matches!(validate_name(None), Err(Error::MissingArgument)));
    assert!(matches!(validate_name(Some("")), Err(Error::MissingArgument)));
}

#[test]
fn test_adversarial_names_are_rejected() {
    for raw in ADVERSARIAL_NAMES {
        assert!(
            matches!(validate_name(Some(raw)), Err(Error::InvalidName { .. })),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_valid_names() {
    for raw in ["auth", "user-profile", "user_profile", "Orders", "v2", "a1-b2_c3"] {
        let name = validate_name(Some(raw)).unwrap();
        assert_eq!(name.as_str(), raw);
    }
}

#[test]
fn test_casing_invariants() {
    let names = [
        "auth",
        "user-profile",
        "user_profile",
        "UserProfile",
        "MyAPI_client",
        "report-2024",
        "a-b-c-d",
        "x",
        "Z9",
    ];
    for raw in names {
        let casing = derive_casing(&ValidatedName::parse(raw).unwrap()).unwrap();
        assert!(is_identifier(&casing.camel_case), "{raw}");
        assert!(is_identifier(&casing.pascal_case), "{raw}");

        let mut chars = casing.camel_case.chars();
        let first = chars.next().unwrap();
        let expected = format!("{}{}", first.to_ascii_uppercase(), chars.as_str());
        assert_eq!(casing.pascal_case, expected, "{raw}");
    }
}

#[test]
fn test_user_profile_casing() {
    let casing = derive_casing(&ValidatedName::parse("user-profile").unwrap()).unwrap();
    assert_eq!(casing.camel_case, "userProfile");
    assert_eq!(casing.pascal_case, "UserProfile");
}

#[test]
fn test_degenerate_casing_is_distinct_error() {
    for raw in ["orders-", "a--b", "a_-b", "x-y-"] {
        let name = ValidatedName::parse(raw).unwrap();
        assert!(
            matches!(derive_casing(&name), Err(Error::InvalidIdentifierDerived { .. })),
            "{raw}"
        );
    }
}
