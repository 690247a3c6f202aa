use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Story {
  pub(crate) comments_count: u64,
  pub(crate) comments_url: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl Story {
  /// Shown in place of a domain when the story URL cannot be parsed.
  pub(crate) const DOMAIN_ERROR: &str = "error";

  /// Host of the story link for compact display.
  ///
  /// The host is dropped when it is already implied by the provider, so
  /// `reddit.com` links are not repeated under the `reddit-golang` provider.
  pub(crate) fn domain(&self, provider_name: &str) -> String {
    if self.url.is_empty() {
      return String::new();
    }

    let Ok(url) = Url::parse(&self.url) else {
      return Self::DOMAIN_ERROR.to_string();
    };

    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    let provider = provider_name.split('-').next().unwrap_or(provider_name);

    if host.starts_with(provider) {
      String::new()
    } else {
      host.to_string()
    }
  }

  pub(crate) fn link(&self) -> &str {
    if self.url.is_empty() {
      &self.comments_url
    } else {
      &self.url
    }
  }

  pub(crate) fn title(title: &str, comments: u64) -> String {
    format!("{title} [{comments}]")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn story(url: &str) -> Story {
    Story {
      comments_count: 0,
      comments_url: "https://news.ycombinator.com/item?id=1".to_string(),
      title: "A story".to_string(),
      url: url.to_string(),
    }
  }

  #[test]
  fn domain_is_suppressed_when_implied_by_provider() {
    assert_eq!(
      story("https://www.reddit.com/r/golang/comments/abc/title/")
        .domain("reddit-golang"),
      ""
    );
  }

  #[test]
  fn domain_returns_host_for_foreign_links() {
    assert_eq!(
      story("https://example.com/x").domain("reddit-golang"),
      "example.com"
    );
  }

  #[test]
  fn domain_strips_leading_www() {
    assert_eq!(
      story("https://www.rust-lang.org/learn").domain("HackerNews"),
      "rust-lang.org"
    );
  }

  #[test]
  fn domain_returns_sentinel_for_malformed_urls() {
    assert_eq!(
      story("::not a url::").domain("HackerNews"),
      Story::DOMAIN_ERROR
    );
  }

  #[test]
  fn domain_is_empty_for_stories_without_links() {
    assert_eq!(story("").domain("HackerNews"), "");
  }

  #[test]
  fn link_falls_back_to_comments() {
    assert_eq!(story("").link(), "https://news.ycombinator.com/item?id=1");
    assert_eq!(story("https://example.com").link(), "https://example.com");
  }

  #[test]
  fn title_includes_comment_count() {
    assert_eq!(Story::title("Rust 2024", 42), "Rust 2024 [42]");
  }
}
