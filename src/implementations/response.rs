use crate::structures::Response;

impl Response {
  pub fn new(parts: download_async::http::response::Parts, body: Vec<u8>) -> Self {
    Self {
      parts,
      body
    }
  }

  pub fn headers(&self) -> &download_async::http::HeaderMap {
    &self.parts.headers
  }

  pub fn into_body(self) -> Vec<u8> {
    self.body
  }
}
