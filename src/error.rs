use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("could not fetch item {id}")]
  Item {
    id: u64,
    #[source]
    source: reqwest::Error,
  },
  #[error("item at position {position} was dropped before it resolved")]
  ItemDropped { position: usize },
  #[error("could not fetch {provider} listing from {url}")]
  Listing {
    provider: String,
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("could not render preview of {url}")]
  PreviewRender {
    url: String,
    #[source]
    source: html2text::Error,
  },
  #[error("could not fetch preview of {url}")]
  PreviewRequest {
    url: String,
    #[source]
    source: reqwest::Error,
  },
}

pub(crate) type FetchResult = Result<Story, Error>;
