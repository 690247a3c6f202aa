use super::*;

/// A single story that may still be in flight.
///
/// Awaiting it blocks only on this item; siblings resolve independently.
#[derive(Debug)]
pub(crate) struct PendingStory {
  position: usize,
  receiver: oneshot::Receiver<FetchResult>,
}

impl Future for PendingStory {
  type Output = FetchResult;

  fn poll(
    mut self: Pin<&mut Self>,
    cx: &mut task::Context<'_>,
  ) -> Poll<FetchResult> {
    let position = self.position;

    Pin::new(&mut self.receiver)
      .poll(cx)
      .map(|result| {
        result.unwrap_or_else(|_| Err(Error::ItemDropped { position }))
      })
  }
}

impl PendingStory {
  pub(crate) fn new(
    position: usize,
  ) -> (Self, oneshot::Sender<FetchResult>) {
    let (sender, receiver) = oneshot::channel();
    (Self { position, receiver }, sender)
  }

  pub(crate) fn position(&self) -> usize {
    self.position
  }

  pub(crate) fn ready(position: usize, result: FetchResult) -> Self {
    let (pending, sender) = Self::new(position);
    let _ = sender.send(result);
    pending
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_story() -> Story {
    Story {
      comments_count: 3,
      comments_url: "https://lobste.rs/s/abc".to_string(),
      title: "Ready".to_string(),
      url: "https://example.com".to_string(),
    }
  }

  #[tokio::test]
  async fn ready_resolves_immediately() {
    let pending = PendingStory::ready(4, Ok(sample_story()));
    assert_eq!(pending.position(), 4);
    assert_eq!(pending.await.unwrap(), sample_story());
  }

  #[tokio::test]
  async fn resolves_once_sender_completes() {
    let (pending, sender) = PendingStory::new(0);

    tokio::spawn(async move {
      tokio::time::sleep(Duration::from_millis(20)).await;
      let _ = sender.send(Ok(sample_story()));
    });

    assert_eq!(pending.await.unwrap().title, "Ready");
  }

  #[tokio::test]
  async fn dropped_sender_resolves_to_error() {
    let (pending, sender) = PendingStory::new(7);
    drop(sender);

    assert!(matches!(
      pending.await,
      Err(Error::ItemDropped { position: 7 })
    ));
  }
}
