//! Error types for the stream wrappers.

use std::borrow::Cow;

use miette::Diagnostic;
use thiserror::Error;

/// Convenience return type.
pub type Result<T> = std::result::Result<T, Error>;

/// Combined return error type for the stream wrappers.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
	/// I/O error.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// RSA signing error.
	#[error("signing error: {0}")]
	Signing(#[from] rsa::Error),

	/// Stream wrapper error that's just a message.
	#[error("{kind}: {message}")]
	Simple {
		/// Error kind.
		kind: ErrorKind,
		/// Error message.
		message: Cow<'static, str>,
	},
}

impl Error {
	/// New error from a kind with its default message.
	pub fn new(kind: ErrorKind) -> Self {
		Self::Simple {
			message: kind.default_message(),
			kind,
		}
	}

	/// New error from a kind with a custom message.
	pub fn with_message(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
		Self::Simple {
			kind,
			message: message.into(),
		}
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Self {
		Self::new(kind)
	}
}

/// Stream wrapper error kind.
///
/// Mirrors the error taxonomy shared across the whole resave engine (see
/// `seresave::error::ErrorKind`, which wraps this one for the domain layer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
	/// A fixed header field didn't match what was expected.
	#[error("malformed header")]
	MalformedHeader,

	/// Attempted to read past a block in a way that left negative remaining bytes.
	#[error("truncated stream")]
	Truncated,

	/// Seek, length, or direction-mismatched operation on a stream that
	/// doesn't support it (e.g. writing to a read-only wrapper).
	#[error("operation not supported on this stream")]
	NotSupportedOperation,
}

impl ErrorKind {
	/// Get the default error message for this error kind.
	pub fn default_message(self) -> Cow<'static, str> {
		match self {
			ErrorKind::MalformedHeader => Cow::Borrowed("header fields did not match expectations"),
			ErrorKind::Truncated => Cow::Borrowed("block claims more bytes than remain"),
			ErrorKind::NotSupportedOperation => {
				Cow::Borrowed("this stream wrapper does not support that operation")
			}
		}
	}
}
