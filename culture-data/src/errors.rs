use culture_core::Lcid;
use std::fmt;
use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// What a failed lookup was searching for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CultureKey {
	Name(String),
	Id(Lcid),
}

impl fmt::Display for CultureKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CultureKey::Name(n) => write!(f, "name {n:?}"),
			CultureKey::Id(id) => write!(f, "id {id}"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNameReason {
	#[error("longer than {max} characters ({len})")]
	TooLong { len: usize, max: usize },
	#[error("contains {0:?}")]
	InvalidCharacter(char),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("culture name {name:?} is invalid: {reason}")]
	InvalidName { name: String, reason: InvalidNameReason },
	#[error("culture not found: {0}")]
	CultureNotFound(CultureKey),
	#[error("region name {0:?} is not supported")]
	InvalidRegionName(String),
	#[error("custom culture file for {name:?} is corrupted ({}): {reason}", .path.display())]
	CorruptedCustomCultureFile { name: String, path: PathBuf, reason: String },
	#[error("out of memory materializing culture {lcid} ({words} words)")]
	OutOfMemory { lcid: Lcid, words: usize },
	#[error("serialization invalid state: {0}")]
	SerializationInvalidState(String),
	#[error("corrupt culture table: {0}")]
	CorruptTable(String),
	#[error("pool: {0}")]
	Pool(#[from] culture_pool::Error),
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	#[error("serde: {0}")]
	Serde(#[from] serde_json::Error),
}

impl Error {
	pub fn not_found_name(name: impl Into<String>) -> Self { Self::CultureNotFound(CultureKey::Name(name.into())) }
	pub fn not_found_id(id: Lcid) -> Self { Self::CultureNotFound(CultureKey::Id(id)) }
	pub fn corrupt_table(msg: impl Into<String>) -> Self { Self::CorruptTable(msg.into()) }
	pub fn invalid_state(msg: impl Into<String>) -> Self { Self::SerializationInvalidState(msg.into()) }
}
