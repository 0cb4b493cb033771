use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::debug;

use crate::{
    config::{read_lists, ConfigFormat, ListConfig},
    email::is_likely_email,
    error::Result,
    recipient::Recipient,
};

pub type RecipientLists = HashMap<String, Recipient>;

/// Source of the list name to recipient mapping.
pub trait RecipientProvider {
    fn provide(&self) -> Result<RecipientLists>;
}

impl<P: RecipientProvider + ?Sized> RecipientProvider for &P {
    fn provide(&self) -> Result<RecipientLists> {
        (**self).provide()
    }
}

impl<P: RecipientProvider + ?Sized> RecipientProvider for Box<P> {
    fn provide(&self) -> Result<RecipientLists> {
        (**self).provide()
    }
}

impl<P: RecipientProvider + ?Sized> RecipientProvider for Arc<P> {
    fn provide(&self) -> Result<RecipientLists> {
        (**self).provide()
    }
}

/// Reads recipient lists from a configuration file.
///
/// The file is read again on every [`provide`](RecipientProvider::provide)
/// call, so edits show up without rebuilding the provider.
#[derive(Debug, Clone)]
pub struct FileRecipientProvider {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileRecipientProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ConfigFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: ConfigFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }
}

impl RecipientProvider for FileRecipientProvider {
    fn provide(&self) -> Result<RecipientLists> {
        let lists: RecipientLists = read_lists(&self.path, self.format)?
            .into_iter()
            .map(|(name, list)| (name, filter_list(list)))
            .collect();
        debug!("Loaded {} recipient lists from {:?}", lists.len(), self.path);

        Ok(lists)
    }
}

fn filter_list(list: ListConfig) -> Recipient {
    Recipient::new(
        valid_addresses(list.receiver),
        valid_addresses(list.cc),
        valid_addresses(list.bcc),
    )
}

fn valid_addresses(addresses: Option<Vec<String>>) -> Vec<String> {
    addresses
        .unwrap_or_default()
        .into_iter()
        .filter(|address| is_likely_email(address))
        .collect()
}
