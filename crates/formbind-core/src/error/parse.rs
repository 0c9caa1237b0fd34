use super::Error;

/// Error when an input string cannot be parsed, e.g. a date in an
/// unsupported format.
#[derive(Debug)]
pub(super) struct ParseError {
    input: Box<str>,
    what: &'static str,
}

impl std::error::Error for ParseError {}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to parse `{}` as {}", self.input, self.what)
    }
}

impl Error {
    /// Creates a parse error. `what` names the expected shape, e.g.
    /// `"timestamp"`.
    pub fn parse(input: impl Into<String>, what: &'static str) -> Error {
        Error::from(super::ErrorKind::Parse(ParseError {
            input: input.into().into(),
            what,
        }))
    }

    /// Returns `true` if this error is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Parse(_))
    }
}
