use thiserror::Error;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("host page has no element with id `{0}`")]
    MissingContainer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_container_names_the_id() {
        let err = MountError::MissingContainer("test".into());
        assert_eq!(err.to_string(), "host page has no element with id `test`");
    }
}
