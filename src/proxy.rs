// meta-yt - YouTube metadata client
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Proxy configuration and rotation
//!
//! A fetch may route each attempt through a caller-supplied proxy list,
//! cycled round-robin by attempt index. [`ProxyConfig`] is a plain value
//! type with no interior mutability: selection hands out owned copies, so
//! whatever one attempt does with its config cannot alter what a later
//! attempt sees in the list.

use crate::error::{MetaYtError, Result};

/// Transport scheme of a proxy server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyScheme {
    Http,
    Https,
    Socks5,
}

/// One proxy server in the rotation list
///
/// Credentials may be attached with [`ProxyConfig::with_basic_auth`];
/// they are sent as proxy basic auth, not embedded in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    url: String,
    scheme: ProxyScheme,
    username: Option<String>,
    password: Option<String>,
}

impl ProxyConfig {
    /// Parse a proxy URL of the form `http://`, `https://` or `socks5://`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let scheme = if url.starts_with("http://") {
            ProxyScheme::Http
        } else if url.starts_with("https://") {
            ProxyScheme::Https
        } else if url.starts_with("socks5://") {
            ProxyScheme::Socks5
        } else {
            return Err(MetaYtError::Proxy(format!(
                "unsupported proxy URL `{url}`; expected http://, https:// or socks5://"
            )));
        };

        Ok(Self {
            url,
            scheme,
            username: None,
            password: None,
        })
    }

    /// Attach basic-auth credentials for the proxy server
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// The proxy URL as given to [`ProxyConfig::new`]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn scheme(&self) -> ProxyScheme {
        self.scheme
    }

    /// Materialize a transport proxy for one attempt
    ///
    /// The proxy carries all traffic of its attempt, whatever the target
    /// scheme.
    pub(crate) fn to_proxy(&self) -> Result<reqwest::Proxy> {
        let proxy = reqwest::Proxy::all(&self.url)
            .map_err(|e| MetaYtError::Proxy(format!("{}: {e}", self.url)))?;

        Ok(match (&self.username, &self.password) {
            (Some(username), Some(password)) => proxy.basic_auth(username, password),
            _ => proxy,
        })
    }
}

/// Round-robin pick for a 0-indexed attempt: `proxies[attempt % len]`
///
/// Returns an owned copy, never a reference into the list. `None` when the
/// list is empty (direct connection).
pub(crate) fn select(proxies: &[ProxyConfig], attempt: usize) -> Option<ProxyConfig> {
    if proxies.is_empty() {
        None
    } else {
        Some(proxies[attempt % proxies.len()].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<ProxyConfig> {
        vec![
            ProxyConfig::new("http://proxy1.example.com:8888").unwrap(),
            ProxyConfig::new("https://proxy2.example.com:8888").unwrap(),
            ProxyConfig::new("socks5://proxy3.example.com:1080").unwrap(),
        ]
    }

    #[test]
    fn scheme_is_parsed_from_url_prefix() {
        assert_eq!(
            ProxyConfig::new("http://p:1").unwrap().scheme(),
            ProxyScheme::Http
        );
        assert_eq!(
            ProxyConfig::new("https://p:1").unwrap().scheme(),
            ProxyScheme::Https
        );
        assert_eq!(
            ProxyConfig::new("socks5://p:1").unwrap().scheme(),
            ProxyScheme::Socks5
        );
        assert!(ProxyConfig::new("ftp://p:1").is_err());
    }

    #[test]
    fn selection_is_round_robin_by_attempt_index() {
        let pool = pool();
        for attempt in 0..9 {
            let selected = select(&pool, attempt).unwrap();
            assert_eq!(selected, pool[attempt % pool.len()]);
        }
    }

    #[test]
    fn selection_returns_none_for_empty_pool() {
        assert_eq!(select(&[], 0), None);
        assert_eq!(select(&[], 7), None);
    }

    #[test]
    fn selected_copy_is_isolated_from_the_pool() {
        let pool = pool();
        let mutated = select(&pool, 1)
            .unwrap()
            .with_basic_auth("user", "secret");

        // The same attempt index must still see the pristine config.
        let again = select(&pool, 1).unwrap();
        assert_ne!(mutated, again);
        assert_eq!(again, pool[1]);
    }

    #[test]
    fn to_proxy_accepts_every_scheme() {
        for config in pool() {
            assert!(config.to_proxy().is_ok());
        }
    }

    #[test]
    fn to_proxy_with_credentials() {
        let config = ProxyConfig::new("http://proxy.example.com:8888")
            .unwrap()
            .with_basic_auth("user", "secret");
        assert!(config.to_proxy().is_ok());
    }
}
