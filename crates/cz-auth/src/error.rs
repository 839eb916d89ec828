use cz_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in. Run `cz auth login` first")]
    NotAuthenticated,

    #[error("this action requires the {required} role")]
    Forbidden { required: String },

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
