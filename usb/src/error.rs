#[derive(thiserror::Error, Debug)]
pub enum SensorError {
    #[error("Unable to open device: {0}")]
    OpenFailure(#[source] rusb::Error),

    #[error("Unable to write request: {0}")]
    WriteFailure(#[source] rusb::Error),

    #[error("Request only partially written, sent {written} of {expected} bytes")]
    IncompleteWrite { written: usize, expected: usize },

    #[error("Unable to read response: {0}")]
    ReadFailure(#[source] rusb::Error),

    #[error("Malformed response, expected at least {required} bytes, received {received}")]
    MalformedResponse { received: usize, required: usize },

    #[error("Unable to close device: {0}")]
    CloseFailure(#[source] rusb::Error),
}
