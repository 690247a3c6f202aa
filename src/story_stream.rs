use super::*;

/// Ordered stream of [`PendingStory`] handles.
///
/// Handles are yielded in request order even when later items finish first.
/// The consumer decides when to block by choosing when to await each handle.
#[derive(Debug)]
pub(crate) struct StoryStream {
  receiver: mpsc::Receiver<PendingStory>,
}

impl Stream for StoryStream {
  type Item = PendingStory;

  fn poll_next(
    mut self: Pin<&mut Self>,
    cx: &mut task::Context<'_>,
  ) -> Poll<Option<PendingStory>> {
    self.receiver.poll_recv(cx)
  }
}

impl StoryStream {
  /// Spawns one worker per target and a producer task that emits their
  /// handles in target order.
  ///
  /// With `concurrency` set, at most that many workers run `fetch` at once.
  pub(crate) fn fan_out<T, F, Fut>(
    targets: Vec<T>,
    concurrency: Option<usize>,
    fetch: F,
  ) -> Self
  where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult> + Send + 'static,
  {
    let (sender, receiver) = mpsc::channel(targets.len().max(1));

    let fetch = Arc::new(fetch);

    let semaphore = concurrency
      .filter(|&permits| permits > 0)
      .map(|permits| Arc::new(Semaphore::new(permits)));

    tokio::spawn(async move {
      for (position, target) in targets.into_iter().enumerate() {
        let (pending, result_sender) = PendingStory::new(position);

        let (fetch, semaphore) = (fetch.clone(), semaphore.clone());

        tokio::spawn(async move {
          let _permit = match semaphore {
            Some(semaphore) => semaphore.acquire_owned().await.ok(),
            None => None,
          };

          let _ = result_sender.send((*fetch)(target).await);
        });

        if sender.send(pending).await.is_err() {
          break;
        }
      }
    });

    Self { receiver }
  }

  /// Wraps an already fetched batch without spawning any task.
  pub(crate) fn ready(stories: Vec<Story>) -> Self {
    let (sender, receiver) = mpsc::channel(stories.len().max(1));

    for (position, story) in stories.into_iter().enumerate() {
      if sender
        .try_send(PendingStory::ready(position, Ok(story)))
        .is_err()
      {
        break;
      }
    }

    Self { receiver }
  }
}
