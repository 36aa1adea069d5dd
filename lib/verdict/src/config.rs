//! Reader configuration types.

use verdict_core::ContentType;

/// Configuration for a [`ResponseReader`](crate::ResponseReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Content type assumed when the response has no `Content-Type` header.
    pub default_content_type: ContentType,
    /// Decode unsupported content types with the default consumer instead of failing.
    pub fallback_to_default_consumer: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            default_content_type: ContentType::Json,
            fallback_to_default_consumer: false,
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for [`ReaderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ReaderConfigBuilder {
    default_content_type: Option<ContentType>,
    fallback_to_default_consumer: Option<bool>,
}

impl ReaderConfigBuilder {
    /// Set the content type assumed when the header is missing.
    #[must_use]
    pub const fn default_content_type(mut self, content_type: ContentType) -> Self {
        self.default_content_type = Some(content_type);
        self
    }

    /// Set whether unsupported content types use the default consumer.
    #[must_use]
    pub const fn fallback_to_default_consumer(mut self, fallback: bool) -> Self {
        self.fallback_to_default_consumer = Some(fallback);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ReaderConfig {
        let defaults = ReaderConfig::default();
        ReaderConfig {
            default_content_type: self
                .default_content_type
                .unwrap_or(defaults.default_content_type),
            fallback_to_default_consumer: self
                .fallback_to_default_consumer
                .unwrap_or(defaults.fallback_to_default_consumer),
        }
    }
}
