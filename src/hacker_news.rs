use super::*;

#[derive(Debug, Deserialize)]
struct Item {
  descendants: Option<u64>,
  title: Option<String>,
  url: Option<String>,
}

impl Item {
  fn into_story(self, id: u64) -> Story {
    Story {
      comments_count: self.descendants.unwrap_or_default(),
      comments_url: HackerNews::comments_url(id),
      title: self.title.unwrap_or_default(),
      url: self.url.unwrap_or_default(),
    }
  }
}

/// Hacker News firebase API: one listing of ids, then one request per id.
pub(crate) struct HackerNews {
  base_url: String,
  client: Client,
  concurrency: Option<usize>,
}

#[async_trait]
impl Provider for HackerNews {
  async fn get_stories(
    &self,
    story_type: StoryType,
    limit: usize,
  ) -> Result<StoryStream, Error> {
    let url = self.listing_url(story_type);

    tracing::debug!(%url, limit, "fetching hacker news listing");

    let ids = self
      .client
      .get_json::<Vec<u64>>(&url)
      .await
      .map_err(|source| Error::Listing {
        provider: self.name(),
        url: url.clone(),
        source,
      })?;

    let ids = ids.into_iter().take(limit).collect::<Vec<_>>();

    tracing::debug!(count = ids.len(), "fanning out hacker news items");

    let (client, base_url) = (self.client.clone(), self.base_url.clone());

    Ok(StoryStream::fan_out(ids, self.concurrency, move |id| {
      let client = client.clone();

      let url = Self::item_url(&base_url, id);

      async move {
        client
          .get_json::<Item>(&url)
          .await
          .map(|item| item.into_story(id))
          .map_err(|source| Error::Item { id, source })
      }
    }))
  }

  fn name(&self) -> String {
    "HackerNews".to_string()
  }
}

impl HackerNews {
  const BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  const COMMENTS_URL: &str = "https://news.ycombinator.com/item?id=";

  fn comments_url(id: u64) -> String {
    format!("{}{id}", Self::COMMENTS_URL)
  }

  fn item_url(base_url: &str, id: u64) -> String {
    format!("{base_url}/item/{id}.json")
  }

  fn listing_url(&self, story_type: StoryType) -> String {
    let endpoint = match story_type {
      StoryType::New => "newstories",
      StoryType::Top => "topstories",
    };

    format!("{}/{endpoint}.json", self.base_url)
  }

  pub(crate) fn new(client: Client) -> Self {
    Self {
      base_url: Self::BASE_URL.to_string(),
      client,
      concurrency: None,
    }
  }

  pub(crate) fn with_base_url(self, base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      ..self
    }
  }

  pub(crate) fn with_concurrency(self, concurrency: Option<usize>) -> Self {
    Self {
      concurrency,
      ..self
    }
  }
}
