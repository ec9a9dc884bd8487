// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("The server responded with HTTP {status}. {message}")]
    Server { status: u16, message: String },

    #[error("The server could not be reached. {0}")]
    Network(#[from] reqwest::Error),

    #[error("The response could not be read. {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL. {0}")]
    Url(#[from] url::ParseError),
}

impl RequestError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401, .. })
    }
}
