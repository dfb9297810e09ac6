//! Shell state.
//!
//! The session owns the resolver and a small tokio runtime, and exposes a
//! blocking `resolve` for the line-oriented shell and CLI. Changing the
//! offline switch rebuilds the resolver from the updated configuration.

use lectern_engine::{EngineConfig, Resolver};
use lectern_foundation::{Error, Result};
use tokio::runtime::Runtime;

use crate::format::{OutputFormat, Resolved};
use crate::reference::{Reference, ReferenceParser};

/// State of one shell or CLI invocation.
pub struct Session {
    /// The engine configuration the resolver was built from.
    config: EngineConfig,

    /// The resolver.
    resolver: Resolver,

    /// Parser for typed references.
    parser: ReferenceParser,

    /// Version requested for every lookup, if any.
    version: Option<String>,

    /// How results are printed.
    format: OutputFormat,

    /// Runtime the async resolver is driven on.
    runtime: Runtime,
}

impl Session {
    /// Creates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver or the runtime cannot be built.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::internal(format!("failed to start runtime: {e}")))?;
        Ok(Self {
            resolver: Resolver::new(config.clone())?,
            config,
            parser: ReferenceParser::new()?,
            version: None,
            format: OutputFormat::default(),
            runtime,
        })
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Returns the requested version code.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sets the version code used for lookups.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the code is not registered. Lookups fall
    /// back silently, but the shell reports typos.
    pub fn set_version(&mut self, code: &str) -> Result<()> {
        let Some(version) = self.resolver.versions().get(code) else {
            return Err(Error::invalid_request("version", format!("unknown version {code:?}; try :versions")));
        };
        self.version = Some(version.code().to_string());
        Ok(())
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Sets the output format.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Returns true if external providers are disabled.
    #[must_use]
    pub const fn offline(&self) -> bool {
        !self.config.external_providers_enabled
    }

    /// Enables or disables external providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver cannot be rebuilt.
    pub fn set_offline(&mut self, offline: bool) -> Result<()> {
        let config = self.config.clone().with_external_providers(!offline);
        tracing::debug!(offline, "rebuilding resolver");
        self.resolver = Resolver::new(config.clone())?;
        self.config = config;
        Ok(())
    }

    /// Parses a typed reference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for malformed input.
    pub fn parse(&self, input: &str) -> Result<Reference> {
        self.parser.parse(input)
    }

    /// Resolves a reference, blocking until done.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error.
    pub fn resolve(&self, reference: Reference) -> Result<Resolved> {
        let reference = reference.with_version(self.version.as_deref());
        self.runtime.block_on(async {
            match reference {
                Reference::Chapter(query) => self.resolver.resolve_chapter(&query).await.map(Resolved::Chapter),
                Reference::Passage(query) => self.resolver.resolve_passage(&query).await.map(Resolved::Passage),
            }
        })
    }

    /// Parses, resolves and renders one reference.
    ///
    /// # Errors
    ///
    /// Returns parse, resolution or rendering errors.
    pub fn lookup(&self, input: &str) -> Result<String> {
        let reference = self.parse(input)?;
        self.resolve(reference)?.render(self.format)
    }
}
