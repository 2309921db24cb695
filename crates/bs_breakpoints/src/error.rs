use std::error::Error;
use std::fmt;
use std::io;

/// Failures raised while building or querying a breakpoint registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No tier with this name exists.
    UnknownTier(String),
    /// The ordinal index is past the widest tier.
    IndexOutOfRange { index: usize, len: usize },
    /// A registry needs at least one tier.
    Empty,
    /// The same tier name appears twice.
    DuplicateTier(String),
    /// Minimum widths must strictly increase with the index.
    NotIncreasing {
        name: String,
        min_width: u32,
        previous: u32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTier(name) => write!(f, "Unknown breakpoint tier: {name}"),
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "Breakpoint index {index} out of range (registry has {len} tiers)"
            ),
            Self::Empty => write!(f, "Breakpoint registry has no tiers"),
            Self::DuplicateTier(name) => write!(f, "Duplicate breakpoint tier: {name}"),
            Self::NotIncreasing {
                name,
                min_width,
                previous,
            } => write!(
                f,
                "Breakpoint tier {name} starts at {min_width}px, not above the previous tier's {previous}px"
            ),
        }
    }
}

impl Error for RegistryError {}

/// Failures raised while loading a registry from configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    Io(io::Error),
    /// The configuration is not valid JSON for a registry.
    Parse(serde_json::Error),
    /// The configured tiers do not form a valid registry.
    Invalid(RegistryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read breakpoint config: {err}"),
            Self::Parse(err) => write!(f, "Failed to parse breakpoint config: {err}"),
            Self::Invalid(err) => write!(f, "Invalid breakpoint config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<RegistryError> for ConfigError {
    fn from(err: RegistryError) -> Self {
        Self::Invalid(err)
    }
}
