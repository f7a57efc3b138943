use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum-like column holds a value the domain enum doesn't know.
    ///
    /// Enum-like fields (pet species/status, application status) are stored as
    /// strings and converted at the data boundary. An unknown stored value means
    /// the database was written by code this build doesn't understand. Results
    /// in a 500 Internal Server Error with a generic message returned to client.
    #[error("Unknown stored value '{value}' for {column}")]
    UnknownEnumValue {
        /// The column the value came from
        column: &'static str,
        /// The stored value that failed to convert
        value: String,
    },

    /// Password hashing or verification failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hash operation failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// JWT signing failed when issuing a token.
    ///
    /// Token *decoding* failures are authentication errors, not internal ones;
    /// this variant only covers failures to sign a new token.
    #[error("Failed to sign auth token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}
