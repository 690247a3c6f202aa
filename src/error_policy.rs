#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ErrorPolicy {
  /// Stop at the first story that failed.
  Abort,
  /// Log failed stories and keep going.
  Skip,
}
