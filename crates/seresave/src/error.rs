//! Error types for the resave engine.

use std::borrow::Cow;

use miette::Diagnostic;
use thiserror::Error;

/// Convenience return type.
pub type Result<T> = std::result::Result<T, Error>;

/// Combined return error type for the resave engine.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
	/// I/O error.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Error from the underlying stream codecs.
	#[error(transparent)]
	Stream(#[from] sesstream::Error),

	/// Resave engine error that's just a message.
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

/// Resave engine error kind (spec §7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
	/// A fixed header field didn't match what was expected.
	#[error("malformed header")]
	MalformedHeader,

	/// The binary meta endianness cookie was neither the little- nor
	/// big-endian value.
	#[error("unexpected endianness cookie")]
	UnexpectedEndiannessCookie,

	/// A data-type `Kind` value read from the file wasn't one we recognize.
	#[error("unexpected data type kind")]
	UnexpectedDataTypeKind,

	/// A `DataType`'s `Pointer` field was queried but never resolved.
	#[error("unexpected obtain type")]
	UnexpectedObtainType,

	/// Attempted to read past a block in a way that left negative remaining bytes.
	#[error("truncated stream")]
	Truncated,

	/// Operation not supported on this stream (seek/length on a
	/// non-seekable wrapper, writing to a read stream and vice versa).
	#[error("operation not supported on this stream")]
	NotSupportedOperation,

	/// Wrapped I/O failure, for call sites that want the resave-engine
	/// taxonomy rather than a bare `std::io::Error`.
	#[error("I/O failure")]
	IoFailure,

	/// The batch was cancelled cooperatively.
	#[error("cancelled")]
	Cancelled,
}

impl ErrorKind {
	/// Get the default error message for this error kind.
	pub fn default_message(self) -> Cow<'static, str> {
		match self {
			ErrorKind::MalformedHeader => Cow::Borrowed("header fields did not match expectations"),
			ErrorKind::UnexpectedEndiannessCookie => {
				Cow::Borrowed("endianness cookie was neither 0x1234ABCD nor 0xCDAB3412")
			}
			ErrorKind::UnexpectedDataTypeKind => Cow::Borrowed("data type kind tag was not recognized"),
			ErrorKind::UnexpectedObtainType => Cow::Borrowed("data type pointer was never resolved"),
			ErrorKind::Truncated => Cow::Borrowed("block claims more bytes than remain"),
			ErrorKind::NotSupportedOperation => {
				Cow::Borrowed("this stream wrapper does not support that operation")
			}
			ErrorKind::IoFailure => Cow::Borrowed("I/O failure"),
			ErrorKind::Cancelled => Cow::Borrowed("batch was cancelled"),
		}
	}
}
