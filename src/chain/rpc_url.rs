//! Full-node endpoint wrapper that keeps API keys out of logs.
//!
//! Public Sui full nodes need no credential, but provider-hosted endpoints
//! put an API key in the URL. `RpcUrl` stores the key separately from the
//! URL template, so `Display` and `Debug` always show `****` in its place;
//! the real URL is only available explicitly via `as_url()`.

use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum RpcUrlError {
    #[error("URL template must contain exactly one {{}} placeholder, found {0}")]
    InvalidPlaceholderCount(usize),

    #[error("Invalid URL after formatting: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A full-node endpoint: either a plain URL or a template with an API key.
#[derive(Clone)]
pub struct RpcUrl {
    /// URL template; contains a single `{}` placeholder when keyed.
    url_template: String,
    /// The API key, kept out of every rendered form except `as_url()`.
    api_key: Option<String>,
}

impl RpcUrl {
    /// Creates a keyed endpoint from a template with one `{}` placeholder.
    ///
    /// # Examples
    /// ```
    /// # use suifund::chain::rpc_url::RpcUrl;
    /// let url = RpcUrl::new("https://sui-testnet.example.com/v1/{}", "secret123")?;
    /// assert_eq!(format!("{}", url), "https://sui-testnet.example.com/v1/****");
    /// # Ok::<(), suifund::chain::rpc_url::RpcUrlError>(())
    /// ```
    pub fn new(url_template: &str, api_key: &str) -> Result<Self, RpcUrlError> {
        let placeholder_count = url_template.matches("{}").count();
        if placeholder_count != 1 {
            return Err(RpcUrlError::InvalidPlaceholderCount(placeholder_count));
        }

        let formatted = url_template.replace("{}", api_key);
        formatted.parse::<Url>()?;

        Ok(Self {
            url_template: url_template.to_string(),
            api_key: Some(api_key.to_string()),
        })
    }

    /// Creates a keyless endpoint, e.g. a public full node.
    ///
    /// # Examples
    /// ```
    /// # use suifund::chain::rpc_url::RpcUrl;
    /// let url = RpcUrl::plain("https://fullnode.testnet.sui.io:443")?;
    /// assert_eq!(url.redacted(), "https://fullnode.testnet.sui.io:443");
    /// # Ok::<(), suifund::chain::rpc_url::RpcUrlError>(())
    /// ```
    pub fn plain(url: &str) -> Result<Self, RpcUrlError> {
        let placeholder_count = url.matches("{}").count();
        if placeholder_count != 0 {
            return Err(RpcUrlError::InvalidPlaceholderCount(placeholder_count));
        }

        url.parse::<Url>()?;

        Ok(Self {
            url_template: url.to_string(),
            api_key: None,
        })
    }

    /// The real URL, key included. Only this accessor exposes the key.
    pub fn as_url(&self) -> Result<Url, RpcUrlError> {
        let formatted = match &self.api_key {
            Some(key) => self.url_template.replace("{}", key),
            None => self.url_template.clone(),
        };
        Ok(formatted.parse()?)
    }

    /// The URL with the API key replaced by `****`, safe for logs.
    pub fn redacted(&self) -> String {
        self.url_template.replace("{}", "****")
    }
}

impl std::fmt::Display for RpcUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl std::fmt::Debug for RpcUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcUrl")
            .field("url_template", &self.url_template)
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .finish()
    }
}
