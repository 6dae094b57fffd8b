use thiserror::Error;

/// Failures of the control layer while resolving the caller's identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// The request carries no user id in its session.
    ///
    /// Rendered as an invalid request so the client can authenticate again.
    #[error("The user is not authenticated.")]
    NotAuthenticated,

    /// A handler asked for the session but no session layer ran for the request.
    ///
    /// This is a wiring bug and results in a 500 Internal Server Error.
    #[error("Trying to access session but the session is not started.")]
    SessionNotStarted,
}
