use thiserror::Error;

/// Failures raised by an identity provider's sign-in call
#[derive(Error, Debug)]
pub enum SignInError {
    /// Credentials did not match a known user. The Display string is the
    /// marker historically carried by provider error messages; callers match
    /// on the variant, not the text.
    #[error("CredentialsSignin")]
    InvalidCredentials,

    /// Anything else (connectivity, provider bugs); surfaced to the caller
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
