mod attribute;
pub mod client;
#[cfg(test)]
pub(crate) mod stub;

pub use attribute::Attribute;
pub use client::{HttpMetadataClient, MetadataSource};

use futures::future::join_all;
use tracing::{instrument, warn};

/// One attribute together with what the metadata service answered for it.
/// `value` is `None` if the read failed, an empty body is still `Some`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub attribute: Attribute,
    pub value: Option<String>,
}

impl Reading {
    pub fn label(&self) -> &'static str {
        self.attribute.label()
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }

    /// Raw value, or an empty string if the read failed
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Read every attribute concurrently. Always returns one reading per attribute, in
/// `Attribute::ALL` order.
#[instrument(skip(source))]
pub async fn collect_readings(source: &dyn MetadataSource) -> Vec<Reading> {
    join_all(Attribute::ALL.iter().map(|&attribute| async move {
        let value = match source.fetch(attribute.path()).await {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(attribute = attribute.path(), %error, "metadata read failed");
                None
            }
        };
        Reading { attribute, value }
    }))
    .await
}
