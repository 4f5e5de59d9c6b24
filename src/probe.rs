//! Image availability check.

use std::collections::HashSet;

/// Answers whether an image locator can be loaded and decoded.
///
/// Failure of any kind is `false`, never an error. Implementations are not
/// required to time out, so the returned future may stay pending forever.
#[allow(async_fn_in_trait)]
pub trait ImageProbe {
    async fn is_available(&self, url: &str) -> bool;
}

/// Probe with a fixed set of loadable locators.
#[derive(Debug, Default, Clone)]
pub struct KnownImages {
    loadable: HashSet<String>,
}

impl KnownImages {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loadable: urls.into_iter().map(Into::into).collect(),
        }
    }
}

impl ImageProbe for KnownImages {
    async fn is_available(&self, url: &str) -> bool {
        self.loadable.contains(url)
    }
}
