use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;

use crate::errors::Error;

pub const DEFAULT_METADATA_URL: &str = "http://169.254.169.254/latest/meta-data";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 2000;

const METADATA_URL: &str = "METADATA_URL";
const LISTEN_ADDR: &str = "LISTEN_ADDR";
const FETCH_TIMEOUT_MS: &str = "FETCH_TIMEOUT_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL the attribute paths are appended to
    pub metadata_url: String,
    pub listen: SocketAddr,
    /// Upper bound for a single attribute read
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let metadata_url =
            parse_metadata_url(&lookup(METADATA_URL).unwrap_or_else(|| DEFAULT_METADATA_URL.into()))?;

        let listen_raw = lookup(LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen = listen_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid(LISTEN_ADDR, e.to_string()))?;

        let fetch_timeout = match lookup(FETCH_TIMEOUT_MS) {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        };

        Ok(Config {
            metadata_url,
            listen,
            fetch_timeout,
        })
    }
}

fn invalid(var: &str, reason: String) -> Error {
    Error::InvalidConfig(var.to_string(), reason)
}

fn parse_metadata_url(raw: &str) -> Result<String, Error> {
    let url = Url::parse(raw).map_err(|e| invalid(METADATA_URL, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                METADATA_URL,
                format!("unsupported scheme {scheme}"),
            ))
        }
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            METADATA_URL,
            String::from("must not carry a query or fragment"),
        ));
    }
    Ok(raw.to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration, Error> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid(FETCH_TIMEOUT_MS, String::from("must be positive"))),
        Ok(millis) => Ok(Duration::from_millis(millis)),
        Err(e) => Err(invalid(FETCH_TIMEOUT_MS, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_link_local_service() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.metadata_url, DEFAULT_METADATA_URL);
        assert_eq!(config.listen, "0.0.0.0:80".parse().unwrap());
        assert_eq!(config.fetch_timeout, Duration::from_millis(2000));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (METADATA_URL, "http://127.0.0.1:8080/latest/meta-data/"),
            (LISTEN_ADDR, "127.0.0.1:3000"),
            (FETCH_TIMEOUT_MS, "250"),
        ]))
        .unwrap();
        assert_eq!(config.metadata_url, "http://127.0.0.1:8080/latest/meta-data/");
        assert_eq!(config.listen, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.fetch_timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_values_naming_the_variable() {
        let cases = [
            (METADATA_URL, "not a url"),
            (METADATA_URL, "ftp://169.254.169.254/latest/meta-data"),
            (METADATA_URL, "http://169.254.169.254/latest/meta-data?x=1"),
            (METADATA_URL, "http://169.254.169.254/latest/meta-data#top"),
            (LISTEN_ADDR, "localhost"),
            (FETCH_TIMEOUT_MS, "0"),
            (FETCH_TIMEOUT_MS, "soon"),
        ];
        for (var, value) in cases {
            match Config::from_lookup(lookup_from(&[(var, value)])) {
                Err(Error::InvalidConfig(name, _)) => assert_eq!(name, var),
                other => panic!("{var}={value} should be rejected, got {other:?}"),
            }
        }
    }
}
