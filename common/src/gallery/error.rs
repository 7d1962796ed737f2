use thiserror::Error;

// failures the gallery workflows can run into
//
// none of these are fatal; every workflow returns to an interactive state and keeps the
// message around for display
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GalleryError {
    // a local precondition failed, so no request was sent
    #[error("{0}")]
    Validation(String),

    // the request was sent and the server (or the network) refused it
    #[error("{0}")]
    Transport(String),

    // the target was already gone, usually because another session removed it
    #[error("{0}")]
    NotFound(String),
}

impl GalleryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        GalleryError::Validation(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        GalleryError::Transport(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            GalleryError::Validation(msg)
            | GalleryError::Transport(msg)
            | GalleryError::NotFound(msg) => msg,
        }
    }

    // NotFound is reported to the user exactly like any other transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, GalleryError::Transport(_) | GalleryError::NotFound(_))
    }
}

impl From<anyhow::Error> for GalleryError {
    fn from(err: anyhow::Error) -> Self {
        GalleryError::Transport(err.to_string())
    }
}
