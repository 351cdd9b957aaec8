use crate::color::CanonicalColor;
use crate::value::ColorValue;

/// Anything a caller can hand in to identify a color
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A string such as `#dc2626/50`, `blue-500`, `rgb(0, 0, 0)` or `white`
    Literal(String),
    /// An already-parsed color, passed through unchanged
    Resolved(CanonicalColor),
    /// A wrapped color; its canonical color is copied out
    Value(ColorValue),
}

impl Token {
    /// Whether this is an empty literal, i.e. no token at all
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Literal(s) if s.is_empty())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<&String> for Token {
    fn from(s: &String) -> Self {
        Self::Literal(s.clone())
    }
}

impl From<CanonicalColor> for Token {
    fn from(color: CanonicalColor) -> Self {
        Self::Resolved(color)
    }
}

impl From<ColorValue> for Token {
    fn from(value: ColorValue) -> Self {
        Self::Value(value)
    }
}

impl From<&ColorValue> for Token {
    fn from(value: &ColorValue) -> Self {
        Self::Value(value.clone())
    }
}

impl From<&Token> for Token {
    fn from(token: &Token) -> Self {
        token.clone()
    }
}

/// A missing token becomes an empty literal, which never resolves.
impl<T: Into<Token>> From<Option<T>> for Token {
    fn from(token: Option<T>) -> Self {
        token.map_or_else(|| Self::Literal(String::new()), Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(Token::from("").is_empty());
        assert!(Token::from(None::<String>).is_empty());
        assert!(!Token::from("white").is_empty());
        assert!(!Token::from(CanonicalColor::BLACK).is_empty());
    }
}
