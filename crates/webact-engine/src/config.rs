use serde::Deserialize;
use url::Url;

/// Per-session configuration for the actor surface.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorConfig {
    /// Base origin that relative paths in steps and URL assertions are
    /// resolved against.
    pub base_url: Url,
}

impl ActorConfig {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    /// Resolve a step argument to an absolute URL: bare paths join the base
    /// origin, absolute URLs pass through verbatim.
    pub fn absolute(&self, path_or_url: &str) -> Result<Url, url::ParseError> {
        match Url::parse(path_or_url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self.base_url.join(path_or_url),
            Err(e) => Err(e),
        }
    }
}
