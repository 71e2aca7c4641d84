use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

type GenericError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("creating request: {0}")]
    RequestConstruction(GenericError),
    #[error("sending request: {0}")]
    Transport(reqwest::Error),
    #[error("sending request: context canceled")]
    Cancelled,
    #[error("sending request: context deadline exceeded")]
    DeadlineExceeded,
    #[error("{service} service returned {}: {body}", status_line(.status))]
    UpstreamStatus {
        service: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("decoding response: {0}")]
    Decode(GenericError),
}

fn status_line(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

impl Error {
    pub(crate) fn request_construction<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::RequestConstruction(Box::new(e))
    }

    pub(crate) fn decode<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Decode(Box::new(e))
    }

    /// Network failure, timeout or cancellation - request may not have reached the service
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Cancelled | Error::DeadlineExceeded
        )
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::DeadlineExceeded | Error::Cancelled => true,
            Error::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            Error::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
