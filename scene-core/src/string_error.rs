/// Carries fallible std operations into the app's `Result<_, String>` error
/// convention, prefixing some context for the log.
pub trait ErrorStringExt<T> {
    fn err_to_string(self, context: &str) -> Result<T, String>;
}

impl<T, E> ErrorStringExt<T> for Result<T, E>
where
    E: std::fmt::Debug,
{
    fn err_to_string(self, context: &str) -> Result<T, String> {
        self.map_err(|err| format!("{}: {:?}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_prefixed() {
        let res: Result<(), std::num::ParseIntError> = "x".parse::<i32>().map(|_| ());
        let msg = res.err_to_string("could not parse number").unwrap_err();
        assert!(msg.starts_with("could not parse number: "));
    }
}
