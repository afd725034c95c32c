use crate::infrastructure::http::HttpError;

#[derive(Debug, thiserror::Error)]
pub enum TraktError {
    #[error("Unable to post payload")]
    PostPayload(#[source] HttpError),
}

impl TraktError {
    /// Transport failure underneath this error
    pub fn http_error(&self) -> &HttpError {
        match self {
            TraktError::PostPayload(source) => source,
        }
    }
}
