use super::*;

#[derive(Debug, Default)]
pub(crate) struct Collected {
  pub(crate) failures: Vec<Error>,
  pub(crate) stories: Vec<Story>,
}

/// Drains `stream` into a list in request order.
pub(crate) async fn collect(
  mut stream: StoryStream,
  policy: ErrorPolicy,
) -> Result<Collected, Error> {
  let mut collected = Collected::default();

  while let Some(pending) = stream.next().await {
    let position = pending.position();

    match pending.await {
      Ok(story) => collected.stories.push(story),
      Err(error) => match policy {
        ErrorPolicy::Abort => return Err(error),
        ErrorPolicy::Skip => {
          tracing::warn!(position, %error, "skipping story");
          collected.failures.push(error);
        }
      },
    }
  }

  Ok(collected)
}

/// Awaits each pending story in request order and hands it to `visit`.
pub(crate) async fn drain<F>(mut stream: StoryStream, mut visit: F)
where
  F: FnMut(usize, FetchResult),
{
  while let Some(pending) = stream.next().await {
    let position = pending.position();
    visit(position, pending.await);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn titled(title: &str) -> Story {
    Story {
      comments_count: 1,
      comments_url: String::new(),
      title: title.to_string(),
      url: String::new(),
    }
  }

  fn mixed_stream() -> StoryStream {
    StoryStream::fan_out(vec![0, 1, 2, 3], None, |position: usize| async move {
      tokio::time::sleep(Duration::from_millis(
        u64::try_from(40 - position * 10).unwrap(),
      ))
      .await;

      if position == 1 {
        Err(Error::ItemDropped { position })
      } else {
        Ok(titled(&format!("story {position}")))
      }
    })
  }

  #[tokio::test]
  async fn skip_keeps_order_and_records_failures() {
    let collected = collect(mixed_stream(), ErrorPolicy::Skip).await.unwrap();

    assert_eq!(
      collected
        .stories
        .iter()
        .map(|story| story.title.as_str())
        .collect::<Vec<_>>(),
      vec!["story 0", "story 2", "story 3"]
    );

    assert_eq!(collected.failures.len(), 1);
  }

  #[tokio::test]
  async fn abort_returns_first_failure() {
    let result = collect(mixed_stream(), ErrorPolicy::Abort).await;

    assert!(matches!(result, Err(Error::ItemDropped { position: 1 })));
  }

  #[tokio::test]
  async fn drain_visits_every_position_in_order() {
    let mut seen = Vec::new();

    drain(mixed_stream(), |position, result| {
      seen.push((position, result.is_ok()));
    })
    .await;

    assert_eq!(seen, vec![(0, true), (1, false), (2, true), (3, true)]);
  }

  #[tokio::test]
  async fn empty_stream_collects_nothing() {
    let collected = collect(StoryStream::ready(Vec::new()), ErrorPolicy::Abort)
      .await
      .unwrap();

    assert!(collected.stories.is_empty());
    assert!(collected.failures.is_empty());
  }
}
