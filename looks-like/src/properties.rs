use crate::value::{Kind, Value};
use std::fmt;

/// A type whose public, readable properties can be enumerated by name.
///
/// This is the view a [`LikeMatcher`](crate::LikeMatcher) compares. It is
/// normally derived:
///
/// ```
/// use looks_like::Properties;
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
///     label: String, // private, not a property
/// }
///
/// let point = Point { x: 1, y: 2, label: "origin".to_string() };
/// let names: Vec<_> = point.properties().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["x", "y"]);
/// ```
///
/// Primitives and strings implement it with no properties at all, so any of
/// them may be passed as an actual value.
pub trait Properties: Value {
    /// Returns the properties in declaration order.
    fn properties(&self) -> Vec<Property<'_>>;

    /// Upcasts to the value view used for whole-value equality.
    fn as_value(&self) -> &dyn Value;

    /// Returns the name of the property the field `field` is exposed as, or
    /// `None` if `field` is not a property field of `Self`.
    ///
    /// Accessor-based exclusions resolve through this so that a renamed
    /// field is excluded under its property name.
    fn property_name(_field: &str) -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }
}

/// A named, readable property of some value.
#[derive(Clone, Copy)]
pub struct Property<'a> {
    name: &'static str,
    kind: Kind,
    value: &'a dyn Value,
}

impl<'a> Property<'a> {
    /// Creates a property reading `value`.
    ///
    /// The kind is taken from `V`, the declared type, so an `Option` that
    /// holds `None` still reports the kind of what it would hold.
    pub fn new<V: Value>(name: &'static str, value: &'a V) -> Property<'a> {
        Property {
            name,
            kind: V::kind(),
            value,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn value(&self) -> &'a dyn Value {
        self.value
    }
}

impl fmt::Debug for Property<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .finish()
    }
}

macro_rules! no_properties {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Properties for $ty {
                fn properties(&self) -> Vec<Property<'_>> {
                    Vec::new()
                }

                fn as_value(&self) -> &dyn Value {
                    self
                }
            }
        )*
    };
}

no_properties!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str,
);

impl<T: Properties> Properties for Option<T> {
    fn properties(&self) -> Vec<Property<'_>> {
        match self {
            Some(value) => value.properties(),
            None => Vec::new(),
        }
    }

    fn as_value(&self) -> &dyn Value {
        self
    }

    fn property_name(field: &str) -> Option<&'static str> {
        T::property_name(field)
    }
}

impl<T: Properties> Properties for Box<T> {
    fn properties(&self) -> Vec<Property<'_>> {
        (**self).properties()
    }

    fn as_value(&self) -> &dyn Value {
        self
    }

    fn property_name(field: &str) -> Option<&'static str> {
        T::property_name(field)
    }
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, crate::Properties)]
    struct Sample {
        pub number: i32,
        pub text: Option<String>,
        hidden: u8,
    }

    #[derive(Debug, PartialEq, crate::Properties)]
    struct Renamed {
        #[looks_like(rename = "Number")]
        pub number: i32,
        pub r#type: u8,
        #[looks_like(skip)]
        pub skipped: u8,
        private: u8,
    }

    #[test]
    fn derived_properties_follow_declaration_order() {
        let sample = Sample {
            number: 1,
            text: None,
            hidden: 0,
        };

        let properties = sample.properties();
        let names: Vec<_> = properties.iter().map(Property::name).collect();
        assert_eq!(names, ["number", "text"]);
        assert_eq!(properties[0].kind(), Kind::Value);
        assert_eq!(properties[1].kind(), Kind::Reference);
        assert!(properties[1].value().is_none());
        assert_eq!(sample.hidden, 0);
    }

    #[test]
    fn option_and_box_delegate() {
        let sample = Sample {
            number: 7,
            text: Some("x".to_string()),
            hidden: 0,
        };

        let boxed = Box::new(sample);
        assert_eq!(boxed.properties().len(), 2);

        let wrapped = Some(*boxed);
        assert_eq!(wrapped.properties().len(), 2);
        assert!(None::<Sample>.properties().is_empty());
    }

    #[test]
    fn field_names_resolve_to_property_names() {
        assert_eq!(Renamed::property_name("number"), Some("Number"));
        assert_eq!(Renamed::property_name("type"), Some("type"));
        assert_eq!(Renamed::property_name("skipped"), None);
        assert_eq!(Renamed::property_name("private"), None);
        assert_eq!(Option::<Renamed>::property_name("number"), Some("Number"));
        assert_eq!(Box::<Renamed>::property_name("number"), Some("Number"));
        assert_eq!(u8::property_name("number"), None);

        let renamed = Renamed {
            number: 1,
            r#type: 2,
            skipped: 3,
            private: 4,
        };
        let names: Vec<_> = renamed.properties().iter().map(Property::name).collect();
        assert_eq!(names, ["Number", "type"]);
        assert_eq!(renamed.skipped + renamed.private, 7);
    }

    #[test]
    fn primitives_have_no_properties() {
        assert!(5u8.properties().is_empty());
        assert!("text".properties().is_empty());
        assert!(String::new().properties().is_empty());
    }
}
