//! Behavioral tests for address parsing and normalization.
//!
//! Fixed cases cover each grammar rule; proptest covers idempotence and
//! case normalization over generated inputs.

#![allow(clippy::unwrap_used)]

use mailcanon::{Error, MAX_ADDRESS_LENGTH, MAX_LOCAL_PART_LENGTH, normalize, parse};
use proptest::prelude::*;

fn normalized(input: &str) -> String {
    parse(input).unwrap_or_else(|| panic!("{input:?} should be valid"))
}

fn assert_invalid(input: &str) {
    assert_eq!(parse(input), None, "{input:?} should be invalid");
}

#[test]
fn test_plain_address() {
    assert_eq!(normalized("john@example.com"), "john@example.com");
    assert_eq!(normalized("  john@example.com \t"), "john@example.com");
}

#[test]
fn test_domain_lowercased_local_preserved() {
    assert_eq!(normalized("John.Smith@Example.COM"), "John.Smith@example.com");
}

#[test]
fn test_dot_rules() {
    assert_invalid(".a@b.com");
    assert_invalid("a.@b.com");
    assert_invalid("a..b@c.com");
    assert_eq!(normalized("a.b@c.com"), "a.b@c.com");
}

#[test]
fn test_local_part_length_boundary() {
    let max = "a".repeat(MAX_LOCAL_PART_LENGTH);
    assert_eq!(normalized(&format!("{max}@x.co")), format!("{max}@x.co"));
    assert_eq!(
        normalize(&format!("{max}a@x.co")).unwrap_err(),
        Error::LocalPartTooLong
    );
}

#[test]
fn test_address_length_boundary() {
    let local = "a".repeat(MAX_LOCAL_PART_LENGTH);
    let domain = format!("{}.{}.{}", "a".repeat(63), "b".repeat(63), "c".repeat(61));
    let address = format!("{local}@{domain}");
    assert_eq!(address.len(), MAX_ADDRESS_LENGTH);
    assert_eq!(normalized(&address), address);

    assert_eq!(normalize(&format!("{address}c")).unwrap_err(), Error::TooLong);
    assert_eq!(normalized(&format!("<{address}(x)>")), address);
}

#[test]
fn test_lowercase_expansion_too_long() {
    // `İ` lower-cases to two chars, so 254 characters of input become 255.
    let local = "a".repeat(MAX_LOCAL_PART_LENGTH);
    let domain = format!("{}.{}.{}İ", "a".repeat(63), "b".repeat(63), "c".repeat(60));
    let address = format!("{local}@{domain}");
    assert_eq!(address.chars().count(), MAX_ADDRESS_LENGTH);
    assert_eq!(normalize(&address).unwrap_err(), Error::TooLong);
}

#[test]
fn test_oversized_ip_literal_too_long() {
    let digits = "1".repeat(10 * MAX_ADDRESS_LENGTH);
    assert_eq!(normalize(&format!("a@[{digits}]")).unwrap_err(), Error::TooLong);
    assert_eq!(normalize(&format!("a@{digits}")).unwrap_err(), Error::TooLong);
}

#[test]
fn test_quoted_local_part() {
    assert_eq!(normalized("\"a b\"@example.com"), "\"a b\"@example.com");
    assert_eq!(normalized("\"A.B\"@EXAMPLE.com"), "\"A.B\"@example.com");
    assert_eq!(
        normalize("\"a b@example.com").unwrap_err(),
        Error::UnterminatedQuote
    );
}

#[test]
fn test_display_name_and_comment() {
    assert_eq!(normalized("John Doe <john@example.com>"), "john@example.com");
    assert_eq!(normalized("\"Doe, John\" <john@example.com>"), "john@example.com");
    assert_eq!(normalized("john@example.com (comment)"), "john@example.com");
    assert_eq!(normalized("jo(x)hn@exa(y)mple.com"), "john@example.com");
    assert_eq!(
        normalize("john@example.com>").unwrap_err(),
        Error::UnmatchedAngleBracket
    );
    assert_eq!(
        normalize("john@example.com (a (b))").unwrap_err(),
        Error::MalformedComment
    );
}

#[test]
fn test_ipv4_literal() {
    assert_eq!(normalized("user@[192.168.0.1]"), "user@[192.168.0.1]");
    assert_eq!(normalized("user@192.168.0.1"), "user@[192.168.0.1]");
    assert_invalid("user@[192.168.0.999]");
    assert_invalid("user@[192.168.0.1");
}

#[test]
fn test_ipv6_literal() {
    assert_eq!(normalized("user@[IPv6:::1]"), "user@[IPv6:::1]");
    assert_eq!(
        normalized("user@[IPv6:2001:0DB8:0000::0001]"),
        "user@[IPv6:2001:db8::1]"
    );
    assert_invalid("user@[IPv6:192.168.0.1]");
    assert_invalid("user@[IPv6:not-an-address]");
}

#[test]
fn test_mailto_prefix() {
    assert_eq!(normalized("MAILTO:john@example.com"), normalized("john@example.com"));
    assert_eq!(normalized("mailto:john@example.com"), "john@example.com");
    assert_eq!(normalized("Jane <mailto:jane@example.com>"), "jane@example.com");
}

#[test]
fn test_top_level_label() {
    assert_eq!(normalize("user@example.123").unwrap_err(), Error::InvalidDomain);
    assert_eq!(normalized("user@example.com"), "user@example.com");
    assert_eq!(normalized("user@localhost"), "user@localhost");
}

#[test]
fn test_empty_and_missing_parts() {
    assert_eq!(normalize("").unwrap_err(), Error::Empty);
    assert_eq!(normalize("   ").unwrap_err(), Error::Empty);
    assert_eq!(normalize("<>").unwrap_err(), Error::EmptyLocalPart);
    assert_eq!(normalize("@example.com").unwrap_err(), Error::EmptyLocalPart);
    assert_eq!(normalize("user").unwrap_err(), Error::MissingAt);
    assert_invalid("user@");
    assert_invalid("a@@b.com");
}

#[test]
fn test_non_ascii() {
    assert_eq!(normalized("Jürgen@Bücher.DE"), "Jürgen@bücher.de");
    assert_eq!(normalized("用户@例子.广告"), "用户@例子.广告");
}

#[test]
fn test_parallel_callers() {
    let inputs = ["A@B.com", "x <y@Z.org>", "bad..dot@x.com", "u@[::1]"];
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| inputs.iter().map(|i| parse(i)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                vec![
                    Some("A@b.com".to_string()),
                    Some("y@z.org".to_string()),
                    None,
                    Some("u@[IPv6:::1]".to_string()),
                ]
            );
        }
    });
}

/// Dot-atom local parts built from atext.
fn local_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]{1,8}", 1..=4)
        .prop_map(|atoms| atoms.join("."))
}

/// Host names with an alphabetic top-level label, in mixed case.
fn domain_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[A-Za-z0-9]([A-Za-z0-9-]{0,6}[A-Za-z0-9])?", 1..=3),
        "[A-Za-z]{2,6}",
    )
        .prop_map(|(labels, tld)| format!("{}.{tld}", labels.join(".")))
}

/// Strings dense in grammar-significant characters.
fn noisy_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9.@()<>\\[\\]\":\\\\ _-]{0,40}",
        "(mailto:)?[a-z(). ]{0,10}@[a-zA-Z0-9.:\\[\\]-]{0,30}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn prop_normalization_is_idempotent(input in noisy_strategy()) {
        if let Some(first) = parse(&input) {
            prop_assert_eq!(parse(&first), Some(first.clone()));
        }
    }

    #[test]
    fn prop_generated_addresses_are_idempotent(
        local in local_strategy(),
        domain in domain_strategy(),
    ) {
        let first = normalized(&format!("{local}@{domain}"));
        prop_assert_eq!(parse(&first), Some(first.clone()));
    }

    #[test]
    fn prop_domain_lowercased_local_unchanged(
        local in local_strategy(),
        domain in domain_strategy(),
    ) {
        let result = normalized(&format!("{local}@{domain}"));
        prop_assert_eq!(result, format!("{local}@{}", domain.to_lowercase()));
    }

    #[test]
    fn prop_display_name_is_stripped(
        name in "[A-Za-z ]{0,20}",
        local in local_strategy(),
        domain in domain_strategy(),
    ) {
        let bare = normalized(&format!("{local}@{domain}"));
        prop_assert_eq!(normalized(&format!("{name} <{local}@{domain}>")), bare);
    }

    #[test]
    fn prop_double_dot_rejected(
        left in "[a-z]{1,10}",
        right in "[a-z]{1,10}",
        domain in domain_strategy(),
    ) {
        prop_assert_eq!(
            normalize(&format!("{left}..{right}@{domain}")),
            Err(Error::MisplacedDot)
        );
    }

    #[test]
    fn prop_parse_matches_normalize(input in noisy_strategy()) {
        prop_assert_eq!(parse(&input), normalize(&input).ok());
    }
}
