use metafield::meta::MetaError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Field spec, conversion or value error from the core.
	#[error(transparent)]
	Meta(#[from] MetaError),
	/// Reading a spec file failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON rendering failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// No field specs were given.
	#[error("no field specs given")]
	NoSpecs,
}
