/// a failed sdl call. `operation` names the call that failed and `message` is
/// the library's error string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} Error: {message}")]
pub struct StartupError {
    pub operation: &'static str,
    pub message: String,
}

/// loading helpers report through the same type so `?` composes at startup
pub type AssetError = StartupError;

impl StartupError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// attach the failing operation's name to an sdl error and log it
pub trait Context<T> {
    fn context(self, operation: &'static str) -> Result<T, StartupError>;
}

impl<T, E: ToString> Context<T> for Result<T, E> {
    fn context(self, operation: &'static str) -> Result<T, StartupError> {
        self.map_err(|e| {
            let err = StartupError::new(operation, e.to_string());
            log::error!("{err}");
            err
        })
    }
}
