#![allow(dead_code)]

use looks_like::{Properties, assert_like, assert_that, like};

mod util;

#[derive(Debug, PartialEq, Properties)]
struct NoProperties {
    i: i32,
}

#[derive(Debug, PartialEq, Properties)]
struct PublicProperties {
    i: i32,
    pub number: i32,
    pub text: String,
    pub foo: Option<NoProperties>,
}

#[test]
fn single_mismatch() {
    let message = util::capture_panic_message(|| {
        let expected = PublicProperties {
            i: 1,
            number: 1,
            text: "guru".to_string(),
            foo: None,
        };
        let actual = PublicProperties {
            i: 2,
            number: 1,
            text: "guru".to_string(),
            foo: Some(NoProperties { i: 1 }),
        };

        assert_like!(actual, expected);
    });

    insta::assert_snapshot!(message, @r"
    assert_like! failed:

    foo : expected: , but was NoProperties { i: 1 }
    ");
}

#[test]
fn mismatches_follow_declaration_order() {
    let message = util::capture_panic_message(|| {
        let expected = PublicProperties {
            i: 1,
            number: 1,
            text: "guru".to_string(),
            foo: Some(NoProperties { i: 1 }),
        };
        let actual = PublicProperties {
            i: 2,
            number: 2,
            text: "guru2".to_string(),
            foo: Some(NoProperties { i: 1 }),
        };

        assert_that!(actual, like(expected));
    });

    insta::assert_snapshot!(message, @r"
    assert_that! failed:

    number : expected: 1, but was 2
    text : expected: guru, but was guru2
    ");
}

#[test]
fn excluded_properties_are_not_reported() {
    let message = util::capture_panic_message(|| {
        let expected = PublicProperties {
            i: 1,
            number: 1,
            text: "guru".to_string(),
            foo: None,
        };
        let actual = PublicProperties {
            i: 2,
            number: 3,
            text: "guru".to_string(),
            foo: Some(NoProperties { i: 5 }),
        };

        assert_that!(actual, like(expected).exclude_property("foo"));
    });

    insta::assert_snapshot!(message, @r"
    assert_that! failed:

    number : expected: 1, but was 3
    ");
}

#[test]
fn passing_assertions_do_not_panic() {
    let expected = PublicProperties {
        i: 1,
        number: 1,
        text: "guru".to_string(),
        foo: None,
    };
    let actual = PublicProperties {
        i: 2,
        number: 1,
        text: "guru".to_string(),
        foo: None,
    };

    assert_like!(actual, expected);
}
