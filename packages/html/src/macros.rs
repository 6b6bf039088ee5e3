//! The schema macros that expand tag and attribute tables into builder code.
//!
//! `elements!` emits one constructor, wrapper type and impl block per tag. `attributes!`
//! emits the setter family for each attribute, inside either a trait (default methods)
//! or an inherent impl. `choices!` emits the closed value sets.

/// Build an `Element` for a tag, optionally self-closing.
macro_rules! new_element {
    ($tag:literal) => {
        zhtml_core::Element::new($tag)
    };
    ($tag:literal, void) => {
        zhtml_core::Element::new_void($tag)
    };
}

/// Expand a table of attributes into setter methods.
///
/// `attributes!(pub [ ... ])` emits public inherent methods, `attributes!([ ... ])` emits
/// trait default methods. Each row is `method: Kind = "attr-name";` where `Kind` is one of
/// `Str`, `Int`, `Float`, `Bool`, `Choice(Type)` or `List("delimiter")`.
macro_rules! attributes {
    (
        $vis:vis [
            $(
                $(#[$meta:meta])*
                $name:ident: $kind:ident $(($($arg:tt)*))? = $attr:literal;
            )*
        ]
    ) => {
        $(
            attribute! {
                [$(#[$meta])*] $vis $name: $kind $(($($arg)*))? = $attr
            }
        )*
    };
}

macro_rules! attribute {
    ([$(#[$meta:meta])*] $vis:vis $name:ident: Str = $attr:literal) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            $vis fn $name(mut self, value: impl Into<String>) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).set_string($attr, value);
                self
            }

            /// Like the plain setter, but only applied when `condition` is true.
            #[inline]
            $vis fn [<if_ $name>](self, condition: bool, value: impl Into<String>) -> Self {
                if condition { self.$name(value) } else { self }
            }

            /// Set the value from `format_args!` output.
            #[inline]
            $vis fn [<$name _fmt>](self, args: std::fmt::Arguments<'_>) -> Self {
                self.$name(std::fmt::format(args))
            }

            #[inline]
            $vis fn [<if_ $name _fmt>](self, condition: bool, args: std::fmt::Arguments<'_>) -> Self {
                if condition { self.[<$name _fmt>](args) } else { self }
            }

            /// Remove the attribute.
            #[inline]
            $vis fn [<$name _remove>](mut self) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).remove_string($attr);
                self
            }
        }
    };

    ([$(#[$meta:meta])*] $vis:vis $name:ident: Int = $attr:literal) => {
        attribute!(@scalar [$(#[$meta])*] $vis $name: i64, set_int, remove_int = $attr);
    };

    ([$(#[$meta:meta])*] $vis:vis $name:ident: Float = $attr:literal) => {
        attribute!(@scalar [$(#[$meta])*] $vis $name: f64, set_float, remove_float = $attr);
    };

    ([$(#[$meta:meta])*] $vis:vis $name:ident: Bool = $attr:literal) => {
        attribute!(@scalar [$(#[$meta])*] $vis $name: bool, set_bool, remove_bool = $attr);
    };

    ([$(#[$meta:meta])*] $vis:vis $name:ident: Choice($choice:ty) = $attr:literal) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            $vis fn $name(mut self, value: $choice) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).set_string($attr, value.as_str());
                self
            }

            /// Like the plain setter, but only applied when `condition` is true.
            #[inline]
            $vis fn [<if_ $name>](self, condition: bool, value: $choice) -> Self {
                if condition { self.$name(value) } else { self }
            }

            /// Remove the attribute.
            #[inline]
            $vis fn [<$name _remove>](mut self) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).remove_string($attr);
                self
            }
        }
    };

    ([$(#[$meta:meta])*] $vis:vis $name:ident: List($delimiter:literal) = $attr:literal) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            $vis fn $name<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<String>,
            {
                zhtml_core::ElementBuilder::element_mut(&mut self).add_delimited($attr, $delimiter, values);
                self
            }

            /// Like the plain setter, but only applied when `condition` is true.
            #[inline]
            $vis fn [<if_ $name>]<I>(self, condition: bool, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<String>,
            {
                if condition { self.$name(values) } else { self }
            }

            /// Remove the whole list.
            #[inline]
            $vis fn [<$name _remove>](mut self) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).remove_delimited($attr);
                self
            }
        }
    };

    (@scalar [$(#[$meta:meta])*] $vis:vis $name:ident: $ty:ty, $set:ident, $remove:ident = $attr:literal) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            $vis fn $name(mut self, value: $ty) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).$set($attr, value);
                self
            }

            /// Like the plain setter, but only applied when `condition` is true.
            #[inline]
            $vis fn [<if_ $name>](self, condition: bool, value: $ty) -> Self {
                if condition { self.$name(value) } else { self }
            }

            /// Remove the attribute.
            #[inline]
            $vis fn [<$name _remove>](mut self) -> Self {
                zhtml_core::ElementBuilder::element_mut(&mut self).$remove($attr);
                self
            }
        }
    };
}

/// Expand a table of tags into constructors and wrapper types.
///
/// Every tag in one invocation implements the family trait named first. A tag can list
/// extra attribute-group traits in brackets and is marked `void` when it never has
/// children.
macro_rules! elements {
    (
        $family:path;
        $(
            $(#[$meta:meta])*
            $name:ident($strukt:ident, $tag:literal $(, $void:ident)?) $([$($group:path),* $(,)?])? {
                $($attrs:tt)*
            };
        )*
    ) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name() -> $strukt {
                $strukt(new_element!($tag $(, $void)?))
            }

            #[doc = concat!("Builder for the `<", $tag, ">` element, created by [`", stringify!($name), "()`].")]
            #[derive(Clone, Debug, PartialEq)]
            pub struct $strukt(zhtml_core::Element);

            impl zhtml_core::ElementBuilder for $strukt {
                #[inline]
                fn element(&self) -> &zhtml_core::Element {
                    &self.0
                }

                #[inline]
                fn element_mut(&mut self) -> &mut zhtml_core::Element {
                    &mut self.0
                }

                #[inline]
                fn into_element(self) -> zhtml_core::Element {
                    self.0
                }
            }

            impl From<$strukt> for zhtml_core::Node {
                fn from(builder: $strukt) -> Self {
                    builder.0.into()
                }
            }

            impl $family for $strukt {}
            $($(impl $group for $strukt {})*)?

            impl $strukt {
                attributes!(pub [ $($attrs)* ]);
            }
        )*
    };
}

/// Expand closed value sets into string-backed enums.
macro_rules! choices {
    (
        $(
            $(#[$meta:meta])*
            $name:ident($attr:literal) {
                $(
                    $(#[$variant_meta:meta])*
                    $variant:ident = $value:literal,
                )*
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
            pub enum $name {
                $(
                    $(#[$variant_meta])*
                    #[cfg_attr(feature = "serialize", serde(rename = $value))]
                    $variant,
                )*
            }

            impl $name {
                /// Every allowed value, in declaration order.
                pub const ALL: &'static [$name] = &[$($name::$variant),*];

                /// The literal attribute value.
                pub const fn as_str(self) -> &'static str {
                    match self {
                        $($name::$variant => $value,)*
                    }
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }

            impl std::str::FromStr for $name {
                type Err = zhtml_core::Error;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    match value {
                        $($value => Ok($name::$variant),)*
                        _ => Err(zhtml_core::Error::InvalidChoice {
                            attribute: $attr,
                            value: value.to_string(),
                        }),
                    }
                }
            }

            impl From<$name> for String {
                fn from(value: $name) -> Self {
                    value.as_str().to_string()
                }
            }
        )*
    };
}
