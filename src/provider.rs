use super::*;

/// A news source that lists stories and resolves them one by one.
#[async_trait]
pub(crate) trait Provider: Send + Sync {
  /// Fetches the listing for `story_type` and returns a stream of at most
  /// `limit` pending stories in listing order.
  ///
  /// Fails only when the listing itself cannot be fetched; per-story
  /// failures are delivered through the stream.
  async fn get_stories(
    &self,
    story_type: StoryType,
    limit: usize,
  ) -> Result<StoryStream, Error>;

  fn name(&self) -> String;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ProviderKind {
  #[default]
  HackerNews,
  Lobsters,
  Reddit,
}

impl ProviderKind {
  pub(crate) fn build(
    self,
    client: Client,
    arguments: &Arguments,
  ) -> Box<dyn Provider> {
    let base_url = arguments.base_url.clone();

    match self {
      Self::HackerNews => {
        let provider = HackerNews::new(client)
          .with_concurrency(arguments.concurrency());

        Box::new(match base_url {
          Some(base_url) => provider.with_base_url(base_url),
          None => provider,
        })
      }
      Self::Lobsters => {
        let provider = Lobsters::new(client);

        Box::new(match base_url {
          Some(base_url) => provider.with_base_url(base_url),
          None => provider,
        })
      }
      Self::Reddit => {
        let provider = match arguments.subreddit.as_deref() {
          Some(subreddit) => Reddit::with_subreddit(client, subreddit),
          None => Reddit::new(client),
        };

        Box::new(match base_url {
          Some(base_url) => provider.with_base_url(base_url),
          None => provider,
        })
      }
    }
  }
}
