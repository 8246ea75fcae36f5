use anyhow::anyhow;
use std::{error::Error, fmt::Display};

use crate::AnyResult;

/// Attaches a human readable description to failures, turning them into [`anyhow::Error`]s.
pub trait AnyhowResultExt<T> {
    fn otherwise(self, s: impl Display) -> AnyResult<T>;

    /// Lazy variant of [`AnyhowResultExt::otherwise`], the message is only built on failure.
    fn otherwise_with<D: Display>(self, f: impl FnOnce() -> D) -> AnyResult<T>;
}

impl<T, E: Error + Send + Sync + 'static> AnyhowResultExt<T> for Result<T, E> {
    fn otherwise(self, s: impl Display) -> AnyResult<T> {
        self.otherwise_with(|| s)
    }

    fn otherwise_with<D: Display>(self, f: impl FnOnce() -> D) -> AnyResult<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(anyhow::Error::from(e).context(f().to_string())),
        }
    }
}

impl<T> AnyhowResultExt<T> for Option<T> {
    fn otherwise(self, s: impl Display) -> AnyResult<T> {
        self.otherwise_with(|| s)
    }

    fn otherwise_with<D: Display>(self, f: impl FnOnce() -> D) -> AnyResult<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(anyhow!("{}", f())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnyhowResultExt;
    use std::io;

    #[test]
    fn context_is_attached() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result.otherwise("couldn't open models/").unwrap_err();

        assert_eq!(err.to_string(), "couldn't open models/");
        assert_eq!(err.root_cause().to_string(), "gone");
    }

    #[test]
    fn none_becomes_error() {
        let err = None::<u32>.otherwise_with(|| "nothing here").unwrap_err();
        assert_eq!(err.to_string(), "nothing here");
        assert_eq!(Some(5).otherwise("unused").unwrap(), 5);
    }
}
