use serde::{Deserialize, Serialize};

/// Returned by the resolver for list names that are not configured.
pub static NULL_RECIPIENT: Recipient = Recipient::null();

/// Addresses a single list delivers to, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(rename = "recipient")]
    to: Vec<String>,
    #[serde(rename = "carbonCopy")]
    cc: Vec<String>,
    #[serde(rename = "blindCarbonCopy")]
    bcc: Vec<String>,
}

impl Recipient {
    pub fn new(to: Vec<String>, cc: Vec<String>, bcc: Vec<String>) -> Self {
        Self { to, cc, bcc }
    }

    pub const fn null() -> Self {
        Self {
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
        }
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn cc(&self) -> &[String] {
        &self.cc
    }

    pub fn bcc(&self) -> &[String] {
        &self.bcc
    }

    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty()
    }

    /// Total number of addresses over all three fields.
    pub fn len(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}
