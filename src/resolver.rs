use tracing::trace;

use crate::{
    error::Result,
    provider::{RecipientLists, RecipientProvider},
    recipient::Recipient,
};

/// Name based lookup over a [`RecipientProvider`].
///
/// Nothing is cached: every call asks the provider for a fresh mapping.
#[derive(Debug, Clone)]
pub struct RecipientResolver<P> {
    provider: P,
}

impl<P: RecipientProvider> RecipientResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn all(&self) -> Result<RecipientLists> {
        self.provider.provide()
    }

    /// Looks up `list`, falling back to the null recipient when it is not
    /// configured.
    pub fn resolve(&self, list: &str) -> Result<Recipient> {
        Ok(self.find(list)?.unwrap_or_else(Recipient::null))
    }

    /// Like [`resolve`](Self::resolve) but reports unknown lists as `None`.
    pub fn find(&self, list: &str) -> Result<Option<Recipient>> {
        let recipient = self.provider.provide()?.remove(list);
        match &recipient {
            Some(r) => trace!("Resolved {list:?} to {} addresses", r.len()),
            None => trace!("No recipient list named {list:?}"),
        }

        Ok(recipient)
    }
}
