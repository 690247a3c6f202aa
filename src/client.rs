use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::builder()
        .timeout(Self::TIMEOUT)
        .user_agent(Self::USER_AGENT)
        .build()
        .unwrap_or_default(),
    }
  }
}

impl Client {
  const PREVIEW_WIDTH: usize = 100;

  const TIMEOUT: Duration = Duration::from_secs(10);

  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub(crate) async fn get_json<T>(&self, url: &str) -> reqwest::Result<T>
  where
    T: DeserializeOwned,
  {
    self
      .client
      .get(url)
      .send()
      .await?
      .error_for_status()?
      .json::<T>()
      .await
  }

  /// Fetches `url` and renders it as plain text.
  pub(crate) async fn preview(
    &self,
    url: &str,
  ) -> Result<String, Error> {
    let request_error = |source| Error::PreviewRequest {
      url: url.to_string(),
      source,
    };

    let body = self
      .client
      .get(url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(request_error)?
      .bytes()
      .await
      .map_err(request_error)?;

    let text = html2text::from_read(body.as_ref(), Self::PREVIEW_WIDTH)
      .map_err(|source| Error::PreviewRender {
        url: url.to_string(),
        source,
      })?;

    Ok(text.trim().to_string())
  }
}
