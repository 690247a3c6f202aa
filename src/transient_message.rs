use super::*;

/// Status line text that reverts to `original` after a few seconds.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  original: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(current: String, original: String) -> Self {
    Self::with_lifetime(current, original, Self::LIFETIME)
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }

  fn with_lifetime(
    current: String,
    original: String,
    lifetime: Duration,
  ) -> Self {
    Self {
      current,
      expires_at: Instant::now() + lifetime,
      original,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_message_is_not_expired() {
    let message = TransientMessage::new("opened".into(), "status".into());

    assert!(!message.is_expired());
    assert_eq!(message.current(), "opened");
    assert_eq!(message.original(), "status");
  }

  #[test]
  fn zero_lifetime_expires_immediately() {
    let message = TransientMessage::with_lifetime(
      "opened".into(),
      "status".into(),
      Duration::ZERO,
    );

    assert!(message.is_expired());
  }
}
