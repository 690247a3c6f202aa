use super::*;

#[derive(Debug, Deserialize)]
struct Listing {
  data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
  children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
  data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
  id: Option<String>,
  num_comments: Option<u64>,
  permalink: Option<String>,
  title: String,
  url: Option<String>,
}

impl From<Post> for Story {
  fn from(post: Post) -> Self {
    let comments_url = match (post.permalink, post.id) {
      (Some(permalink), _) => format!("{}{permalink}", Reddit::COMMENTS_URL),
      (None, Some(id)) => format!("{}/comments/{id}", Reddit::COMMENTS_URL),
      (None, None) => String::new(),
    };

    Self {
      comments_count: post.num_comments.unwrap_or_default(),
      comments_url,
      title: html_escape::decode_html_entities(&post.title).into_owned(),
      url: post.url.unwrap_or_default(),
    }
  }
}

/// Reddit front page or a single subreddit, fetched as one batch.
pub(crate) struct Reddit {
  base_url: String,
  client: Client,
  subreddit: Option<String>,
}

#[async_trait]
impl Provider for Reddit {
  async fn get_stories(
    &self,
    story_type: StoryType,
    limit: usize,
  ) -> Result<StoryStream, Error> {
    let url = self.listing_url(story_type, limit);

    tracing::debug!(%url, "fetching reddit listing");

    let listing = self
      .client
      .get_json::<Listing>(&url)
      .await
      .map_err(|source| Error::Listing {
        provider: self.name(),
        url: url.clone(),
        source,
      })?;

    Ok(StoryStream::ready(
      listing
        .data
        .children
        .into_iter()
        .take(limit)
        .map(|child| Story::from(child.data))
        .collect(),
    ))
  }

  fn name(&self) -> String {
    match &self.subreddit {
      Some(subreddit) => format!("reddit-{subreddit}"),
      None => "reddit".to_string(),
    }
  }
}

impl Reddit {
  const BASE_URL: &str = "https://www.reddit.com";

  const COMMENTS_URL: &str = "https://old.reddit.com";

  fn listing_url(&self, story_type: StoryType, limit: usize) -> String {
    let mut url = self.base_url.clone();

    if let Some(subreddit) = &self.subreddit {
      url.push_str("/r/");
      url.push_str(subreddit);
    }

    let endpoint = match story_type {
      StoryType::New => "new",
      StoryType::Top => "top",
    };

    format!("{url}/{endpoint}.json?limit={limit}")
  }

  pub(crate) fn new(client: Client) -> Self {
    Self {
      base_url: Self::BASE_URL.to_string(),
      client,
      subreddit: None,
    }
  }

  pub(crate) fn with_base_url(self, base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      ..self
    }
  }

  pub(crate) fn with_subreddit(client: Client, subreddit: &str) -> Self {
    Self {
      subreddit: Some(subreddit.to_string()).filter(|name| !name.is_empty()),
      ..Self::new(client)
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path, query_param},
    },
  };

  const TWO_POSTS: &str = r#"
    {"data": {"children": [
      {"data": {
        "id": "a1",
        "title": "test",
        "url": "http://test.com",
        "num_comments": 7,
        "permalink": "/r/golang/comments/a1/test/"
      }},
      {"data": {
        "id": "b2",
        "title": "Q &amp; A",
        "url": "http://test2.com"
      }}
    ]}}"#;

  async fn serve(route: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path(route))
      .respond_with(ResponseTemplate::new(200).set_body_string(body))
      .mount(&server)
      .await;

    server
  }

  async fn stories(provider: Reddit, limit: usize) -> Vec<Story> {
    provider
      .get_stories(StoryType::Top, limit)
      .await
      .unwrap()
      .then(|pending| pending)
      .map(Result::unwrap)
      .collect()
      .await
  }

  #[test]
  fn name_reflects_subreddit() {
    assert_eq!(Reddit::new(Client::default()).name(), "reddit");

    assert_eq!(
      Reddit::with_subreddit(Client::default(), "golang").name(),
      "reddit-golang"
    );

    assert_eq!(
      Reddit::with_subreddit(Client::default(), "").name(),
      "reddit"
    );
  }

  #[test]
  fn listing_url_variants() {
    let cases = [
      (StoryType::Top, 5, None, "/top.json?limit=5"),
      (StoryType::New, 3, None, "/new.json?limit=3"),
      (StoryType::Top, 10, Some("golang"), "/r/golang/top.json?limit=10"),
    ];

    for (story_type, limit, subreddit, expected) in cases {
      let provider = match subreddit {
        Some(subreddit) => Reddit::with_subreddit(Client::default(), subreddit),
        None => Reddit::new(Client::default()),
      };

      assert_eq!(
        provider.listing_url(story_type, limit),
        format!("{}{expected}", Reddit::BASE_URL)
      );
    }
  }

  #[tokio::test]
  async fn maps_posts_in_order() {
    let server = serve("/top.json", TWO_POSTS).await;

    let stories =
      stories(Reddit::new(Client::default()).with_base_url(server.uri()), 2)
        .await;

    assert_eq!(
      stories,
      vec![
        Story {
          comments_count: 7,
          comments_url: "https://old.reddit.com/r/golang/comments/a1/test/"
            .to_string(),
          title: "test".to_string(),
          url: "http://test.com".to_string(),
        },
        Story {
          comments_count: 0,
          comments_url: "https://old.reddit.com/comments/b2".to_string(),
          title: "Q & A".to_string(),
          url: "http://test2.com".to_string(),
        },
      ]
    );
  }

  #[tokio::test]
  async fn subreddit_and_limit_reach_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/r/golang/top.json"))
      .and(query_param("limit", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_string(TWO_POSTS))
      .expect(1)
      .mount(&server)
      .await;

    let provider = Reddit::with_subreddit(Client::default(), "golang")
      .with_base_url(server.uri());

    assert_eq!(stories(provider, 1).await.len(), 1);
  }

  #[tokio::test]
  async fn error_status_is_listing_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(429))
      .mount(&server)
      .await;

    let result = Reddit::new(Client::default())
      .with_base_url(server.uri())
      .get_stories(StoryType::New, 5)
      .await;

    assert!(matches!(result, Err(Error::Listing { .. })));
  }

  #[tokio::test]
  async fn invalid_json_is_listing_error() {
    let server = serve("/top.json", "{\"data\": []}").await;

    let result = Reddit::new(Client::default())
      .with_base_url(server.uri())
      .get_stories(StoryType::Top, 5)
      .await;

    assert!(matches!(result, Err(Error::Listing { .. })));
  }
}
