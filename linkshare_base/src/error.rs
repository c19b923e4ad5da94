// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use int_enum::IntEnum;
use std::error::Error;
use std::fmt::{Debug, Display, Error as FmtError, Formatter};
use url::ParseError;

/// HTTP status codes + client errors (negative).
#[repr(i16)]
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone, IntEnum)]
pub enum ErrorCode {
    InvalidArgument = -5,
    UrlParseError = -4,
    ConnectionError = -3,
    Timeout = -2,
    Unknown = -1,

    OK = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    URITooLong = 414,
    UnsupportedMediaType = 415,
    UnprocessableEntity = 422,
    TooManyRequests = 429,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
}

/// An error of the link sharing client.
///
/// Negative status codes are raised on the client side, the rest are HTTP
/// statuses reported by the provider.
#[derive(PartialEq, Debug, Clone)]
pub struct LinkShareError {
    /// The HTTP status code or a client error code.
    pub status: ErrorCode,

    /// The human readable message.
    pub message: String,
}

impl Display for LinkShareError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "[{:?}] {}", self.status, self.message)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "{}", self.int_value())
    }
}

impl From<ParseError> for LinkShareError {
    fn from(err: ParseError) -> Self {
        LinkShareError {
            status: ErrorCode::UrlParseError,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LinkShareError {
    fn from(err: serde_json::Error) -> Self {
        // The provider sent something we can't read
        crate::unknown!("Malformed response: {}", err)
    }
}

impl From<http::StatusCode> for ErrorCode {
    fn from(status: http::StatusCode) -> Self {
        ErrorCode::from_int(status.as_u16() as i16).unwrap_or(ErrorCode::Unknown)
    }
}

impl Error for LinkShareError {
    fn description(&self) -> &str {
        &self.message
    }
}

impl LinkShareError {
    pub fn new(status: ErrorCode, message: &str) -> Self {
        LinkShareError {
            status,
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> ErrorCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True if the error was raised locally because of a bad argument,
    /// i.e. the request never left the client.
    pub fn is_invalid_argument(&self) -> bool {
        self.status == ErrorCode::InvalidArgument
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: &str) -> LinkShareError {
        LinkShareError {
            status: ErrorCode::InvalidArgument,
            message: msg.to_string(),
        }
    }

    /// Create a not found error.
    pub fn not_found(msg: &str) -> LinkShareError {
        LinkShareError {
            status: ErrorCode::NotFound,
            message: msg.to_string(),
        }
    }

    /// Create an unknown error.
    pub fn unknown(msg: &str) -> LinkShareError {
        LinkShareError {
            status: ErrorCode::Unknown,
            message: msg.to_string(),
        }
    }
}

#[macro_export]
macro_rules! invalid_argument {
    ($msg:expr, $($arg:tt)*) => {
        $crate::error::LinkShareError::invalid_argument(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        $crate::error::LinkShareError::invalid_argument($msg)
    };
}

#[macro_export]
macro_rules! unknown {
    ($msg:expr, $($arg:tt)*) => {
        $crate::error::LinkShareError::unknown(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        $crate::error::LinkShareError::unknown($msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(http::StatusCode::NOT_FOUND, ErrorCode::NotFound)]
    #[case(http::StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized)]
    #[case(http::StatusCode::TOO_MANY_REQUESTS, ErrorCode::TooManyRequests)]
    #[case(http::StatusCode::IM_A_TEAPOT, ErrorCode::Unknown)]
    fn test_from_status_code(#[case] status: http::StatusCode, #[case] expected: ErrorCode) {
        assert_eq!(ErrorCode::from(status), expected);
    }

    #[rstest]
    fn test_display() {
        let err = invalid_argument!("Link id '{}' is blank", " ");
        assert_eq!(err.to_string(), "[InvalidArgument] Link id ' ' is blank");
        assert!(err.is_invalid_argument());
        assert_eq!(ErrorCode::InvalidArgument.to_string(), "-5");
    }

    #[rstest]
    fn test_unknown() {
        let err = unknown!("Failed to build HTTP client: {}", "no TLS backend");
        assert_eq!(err.status(), ErrorCode::Unknown);
        assert_eq!(
            err.to_string(),
            "[Unknown] Failed to build HTTP client: no TLS backend"
        );
        assert_eq!(unknown!("oops"), LinkShareError::unknown("oops"));
    }

    #[rstest]
    fn test_from_serde_error() {
        let err: LinkShareError = serde_json::from_str::<u64>("nope").unwrap_err().into();
        assert_eq!(err.status(), ErrorCode::Unknown);
        assert!(err.message().starts_with("Malformed response: "));
        assert!(!err.is_invalid_argument());
    }

    #[rstest]
    fn test_from_url_error() {
        let err: LinkShareError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.status(), ErrorCode::UrlParseError);
    }
}
