use super::*;

pub(crate) enum Event {
  Loaded,
  Preview {
    request_id: u64,
    result: Result<String, Error>,
  },
  Story {
    position: usize,
    result: FetchResult,
  },
}
