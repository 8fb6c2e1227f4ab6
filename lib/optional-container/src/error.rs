use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// A required argument, or the result of a caller-supplied function, was absent.
    #[error("invalid argument: `{0}` must not be absent")]
    InvalidArgument(&'static str),
    /// A value was requested from an empty container.
    #[error("no value present")]
    NoSuchElement,
}

impl OptionalError {
    #[track_caller]
    pub(crate) fn invalid_argument(name: &'static str) -> Self {
        let location = std::panic::Location::caller();
        tracing::debug!(argument = name, %location, "invalid argument");
        OptionalError::InvalidArgument(name)
    }

    #[track_caller]
    pub(crate) fn no_such_element() -> Self {
        let location = std::panic::Location::caller();
        tracing::debug!(%location, "no value present");
        OptionalError::NoSuchElement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            OptionalError::InvalidArgument("mapper").to_string(),
            "invalid argument: `mapper` must not be absent"
        );
        assert_eq!(OptionalError::NoSuchElement.to_string(), "no value present");
    }
}
