use crate::tag::TypeTag;

/// Describes how to decode a composite buffer.
///
/// Encoded composites carry framing but no element tags, so the decoder
/// recovers each element's tag from the shape the caller expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A primitive (or context-free composite) decoded with one tag.
    Scalar(TypeTag),
    /// Fixed-arity sequence, one shape per position.
    Tuple(Vec<Shape>),
    /// Any number of elements sharing one shape.
    List(Box<Shape>),
    /// Fixed-arity sequence decoded into an object with these keys.
    Record(Vec<(String, Shape)>),
    /// Element kept as undecoded bytes.
    Raw,
}

impl Shape {
    pub fn list(element: impl Into<Shape>) -> Self {
        Shape::List(Box::new(element.into()))
    }

    pub fn tuple<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Shape>,
    {
        Shape::Tuple(elements.into_iter().map(Into::into).collect())
    }

    pub fn record<K, I, S>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, S)>,
        S: Into<Shape>,
    {
        Shape::Record(
            fields
                .into_iter()
                .map(|(key, shape)| (key.into(), shape.into()))
                .collect(),
        )
    }
}

impl From<TypeTag> for Shape {
    fn from(tag: TypeTag) -> Self {
        Shape::Scalar(tag)
    }
}
