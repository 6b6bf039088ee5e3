/// Errors raised while building an element tree.
///
/// Most builder methods are total. These only show up from the flat-list helpers and when
/// parsing choice values from strings.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `attrs` takes alternating names and values.
    #[error("attrs must be a multiple of 2, got {0} values")]
    OddAttributeCount(usize),

    /// `style_pairs` takes alternating keys and values.
    #[error("Must have an even number of pairs, got {0} values")]
    OddStylePairs(usize),

    /// The string is not one of the values allowed for the attribute.
    #[error("`{value}` is not a valid value for the `{attribute}` attribute")]
    InvalidChoice {
        attribute: &'static str,
        value: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
