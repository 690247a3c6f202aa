pub(crate) struct PendingPreview {
  pub(crate) request_id: u64,
  pub(crate) title: String,
}
