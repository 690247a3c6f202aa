#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchPreview { request_id: u64, url: String },
  OpenUrl { url: String },
}
