//! Credentials sign-in action

use anyhow::Result;
use tracing::info;

use crate::common::FormData;
use crate::domains::auth::{SessionToken, SignInError};
use crate::kernel::BaseIdentityProvider;

/// Sentinel returned to the form when credentials are rejected
pub const CREDENTIAL_SIGNIN: &str = "CredentialSignin";

/// Result of a sign-in attempt that the provider itself handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session established; token for subsequent requests
    SignedIn(SessionToken),
    /// Bad credentials; carries the sentinel the login form expects
    Rejected(&'static str),
}

/// Sign in with the submitted credential fields.
///
/// Bad credentials map to [`AuthOutcome::Rejected`] exactly once; any other
/// provider failure is propagated unchanged for the framework to handle. The
/// previous form state is part of the submission contract but carries nothing
/// this action needs.
pub async fn authenticate(
    _prev: Option<String>,
    form: &FormData,
    provider: &dyn BaseIdentityProvider,
) -> Result<AuthOutcome> {
    match provider.sign_in("credentials", form).await {
        Ok(token) => {
            info!("User signed in");
            Ok(AuthOutcome::SignedIn(token))
        }
        Err(SignInError::InvalidCredentials) => Ok(AuthOutcome::Rejected(CREDENTIAL_SIGNIN)),
        Err(SignInError::Other(e)) => Err(e),
    }
}
