use super::*;

#[derive(Debug, Deserialize)]
struct Post {
  comment_count: Option<u64>,
  comments_url: Option<String>,
  short_id: String,
  title: String,
  url: Option<String>,
}

/// Lobsters returns full stories in one batch, so nothing is left in flight.
pub(crate) struct Lobsters {
  base_url: String,
  client: Client,
}

#[async_trait]
impl Provider for Lobsters {
  async fn get_stories(
    &self,
    story_type: StoryType,
    limit: usize,
  ) -> Result<StoryStream, Error> {
    let url = self.listing_url(story_type);

    tracing::debug!(%url, limit, "fetching lobsters listing");

    let items = self
      .client
      .get_json::<Vec<Post>>(&url)
      .await
      .map_err(|source| Error::Listing {
        provider: self.name(),
        url: url.clone(),
        source,
      })?;

    Ok(StoryStream::ready(
      items
        .into_iter()
        .take(limit)
        .map(|item| self.story(item))
        .collect(),
    ))
  }

  fn name(&self) -> String {
    "Lobsters".to_string()
  }
}

impl Lobsters {
  const BASE_URL: &str = "https://lobste.rs";

  fn listing_url(&self, story_type: StoryType) -> String {
    let endpoint = match story_type {
      StoryType::New => "newest",
      StoryType::Top => "hottest",
    };

    format!("{}/{endpoint}.json", self.base_url)
  }

  pub(crate) fn new(client: Client) -> Self {
    Self {
      base_url: Self::BASE_URL.to_string(),
      client,
    }
  }

  fn story(&self, item: Post) -> Story {
    let comments_url = item
      .comments_url
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| format!("{}/s/{}", self.base_url, item.short_id));

    Story {
      comments_count: item.comment_count.unwrap_or_default(),
      comments_url,
      title: item.title,
      url: item.url.unwrap_or_default(),
    }
  }

  pub(crate) fn with_base_url(self, base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      ..self
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    serde_json::json,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path},
    },
  };

  async fn serve(endpoint: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path(format!("/{endpoint}.json")))
      .respond_with(response)
      .mount(&server)
      .await;

    server
  }

  fn batch() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!([
      {
        "short_id": "abc123",
        "title": "First",
        "url": "https://example.com/1",
        "comment_count": 4,
        "comments_url": "https://lobste.rs/s/abc123/first"
      },
      {
        "short_id": "def456",
        "title": "Second",
        "url": "",
        "comment_count": 0
      },
      {
        "short_id": "ghi789",
        "title": "Third",
        "url": "https://example.com/3",
        "comment_count": 9,
        "comments_url": "https://lobste.rs/s/ghi789/third"
      }
    ]))
  }

  async fn stories(
    server: &MockServer,
    story_type: StoryType,
    limit: usize,
  ) -> Vec<Story> {
    Lobsters::new(Client::default())
      .with_base_url(server.uri())
      .get_stories(story_type, limit)
      .await
      .unwrap()
      .then(|pending| pending)
      .map(Result::unwrap)
      .collect()
      .await
  }

  #[tokio::test]
  async fn maps_batch_in_order() {
    let server = serve("hottest", batch()).await;

    let stories = stories(&server, StoryType::Top, 10).await;

    assert_eq!(
      stories.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
      vec!["First", "Second", "Third"]
    );

    assert_eq!(stories[0].comments_count, 4);
    assert_eq!(stories[0].comments_url, "https://lobste.rs/s/abc123/first");
  }

  #[tokio::test]
  async fn synthesizes_missing_comments_url() {
    let server = serve("hottest", batch()).await;

    let stories = stories(&server, StoryType::Top, 10).await;

    assert_eq!(
      stories[1].comments_url,
      format!("{}/s/def456", server.uri())
    );
  }

  #[tokio::test]
  async fn respects_limit() {
    let server = serve("hottest", batch()).await;
    assert_eq!(stories(&server, StoryType::Top, 2).await.len(), 2);
  }

  #[tokio::test]
  async fn new_stories_use_newest_listing() {
    let server = serve("newest", batch()).await;
    assert_eq!(stories(&server, StoryType::New, 1).await[0].title, "First");
  }

  #[tokio::test]
  async fn invalid_batch_fails_whole_call() {
    let server = serve(
      "hottest",
      ResponseTemplate::new(200).set_body_string(r#"[{"title": 1}]"#),
    )
    .await;

    let result = Lobsters::new(Client::default())
      .with_base_url(server.uri())
      .get_stories(StoryType::Top, 5)
      .await;

    assert!(matches!(result, Err(Error::Listing { .. })));
  }

  #[test]
  fn name_is_stable() {
    assert_eq!(Lobsters::new(Client::default()).name(), "Lobsters");
  }
}
