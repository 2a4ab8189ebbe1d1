use looks_like::{Constraint, Properties, assert_that, like};
use std::fmt::{self, Write};

mod util;

#[derive(Debug, PartialEq, Properties)]
struct Point {
    pub x: i32,
    pub y: i32,
}

#[test]
fn like_matcher_is_a_constraint() {
    let mut constraint = like(Point { x: 1, y: 2 });

    assert!(!Constraint::matches(&mut constraint, &Point { x: 1, y: 3 }));

    let mut message = String::new();
    constraint.write_message_to(&mut message).unwrap();
    assert_eq!(message, "y : expected: 2, but was 3");

    let mut description = String::new();
    constraint.write_description_to(&mut description).unwrap();
    assert_eq!(description, "looks like Point { x: 1, y: 2 }");
}

#[test]
fn message_is_empty_after_a_match() {
    let mut constraint = like(Point { x: 1, y: 2 });
    assert!(Constraint::matches(&mut constraint, &Point { x: 1, y: 2 }));

    let mut message = String::new();
    constraint.write_message_to(&mut message).unwrap();
    assert_eq!(message, "");
}

/// Accepts values that expose a property with the given name.
struct HasProperty(&'static str);

impl Constraint for HasProperty {
    fn matches(&mut self, actual: &dyn Properties) -> bool {
        actual
            .properties()
            .iter()
            .any(|property| property.name() == self.0)
    }

    fn write_message_to(&self, writer: &mut dyn Write) -> fmt::Result {
        write!(writer, "no property named `{}`", self.0)
    }
}

#[test]
fn assert_that_accepts_any_constraint() {
    assert_that!(Point { x: 0, y: 0 }, HasProperty("x"));

    let message = util::capture_panic_message(|| {
        assert_that!(Point { x: 0, y: 0 }, HasProperty("z"));
    });
    assert_eq!(message, "assert_that! failed:\n\nno property named `z`");
}
