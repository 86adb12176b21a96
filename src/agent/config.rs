//! Construction-time configuration of an [`Agent`].
//!
//! [`Agent`]: ../struct.Agent.html

use crate::bots::SearchMethod;
use crate::tools::eval::Heuristic;

use serde::Deserialize;
use thiserror::Error;

/// Depth used by fixed-depth searches unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u16 = 3;

/// Safety margin, in milliseconds, below which a search gives up.
pub const DEFAULT_TIMEOUT_MS: f64 = 10.0;

/// Reasons an [`AgentConfig`] is rejected.
///
/// [`AgentConfig`]: struct.AgentConfig.html
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown search method: {name:?} (expected \"minimax\" or \"alphabeta\")")]
    UnknownMethod { name: String },
    #[error("unknown heuristic: {name:?}")]
    UnknownHeuristic { name: String },
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("timeout threshold must be a positive number of milliseconds, got {0}")]
    InvalidTimeout(f64),
    #[error("depth limit must be at least 1")]
    ZeroDepthLimit,
    #[error("malformed agent configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings fixed for the lifetime of an agent.
///
/// Every field has a default, so a TOML table only needs the keys it changes:
///
/// ```
/// use isolation_agent::agent::AgentConfig;
/// use isolation_agent::bots::SearchMethod;
///
/// let config = AgentConfig::from_toml_str("method = \"alphabeta\"\ntimeout_ms = 15.0").unwrap();
/// assert_eq!(config.method, SearchMethod::AlphaBeta);
/// assert!(config.iterative);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Depth of the single search run when `iterative` is off.
    pub search_depth: u16,
    pub heuristic: Heuristic,
    /// Deepen one ply at a time until the clock runs out.
    pub iterative: bool,
    pub method: SearchMethod,
    /// Milliseconds left on the clock at which a search is abandoned.
    pub timeout_ms: f64,
    /// Consult the opening book before searching.
    pub opening_book: bool,
    /// Deepest iteration iterative deepening will start. `None` is unbounded.
    pub depth_limit: Option<u16>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            search_depth: DEFAULT_SEARCH_DEPTH,
            heuristic: Heuristic::default(),
            iterative: true,
            method: SearchMethod::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            opening_book: false,
            depth_limit: None,
        }
    }
}

impl AgentConfig {
    pub fn search_depth(mut self, depth: u16) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    pub fn method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: f64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn opening_book(mut self, enabled: bool) -> Self {
        self.opening_book = enabled;
        self
    }

    pub fn depth_limit(mut self, limit: Option<u16>) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Selects the search method by its name, `"minimax"` or `"alphabeta"`.
    pub fn with_method_name(self, name: &str) -> Result<Self, ConfigError> {
        let method = name
            .parse::<SearchMethod>()
            .map_err(|name| ConfigError::UnknownMethod { name })?;
        Ok(self.method(method))
    }

    /// Selects the heuristic by its name, e.g. `"moves_and_center"`.
    pub fn with_heuristic_name(self, name: &str) -> Result<Self, ConfigError> {
        let heuristic = name
            .parse::<Heuristic>()
            .map_err(|name| ConfigError::UnknownHeuristic { name })?;
        Ok(self.heuristic(heuristic))
    }

    /// Checks the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !self.timeout_ms.is_finite() || self.timeout_ms <= 0.0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_ms));
        }
        if self.depth_limit == Some(0) {
            return Err(ConfigError::ZeroDepthLimit);
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
