use std::collections::HashMap;

use async_trait::async_trait;

use super::MetadataSource;
use crate::errors::Error;

/// Answers from a fixed map, every other path fails like an unreachable service
pub struct StubSource(pub HashMap<&'static str, &'static str>);

#[async_trait]
impl MetadataSource for StubSource {
    async fn fetch(&self, path: &str) -> Result<String, Error> {
        self.0
            .get(path)
            .map(|value| value.to_string())
            .ok_or_else(|| Error::AttributeUnavailable(path.to_string(), String::from("no stub")))
    }
}
