//! Boundary payload types for the request-replay use case.
//!
//! These records travel through the stream core as opaque values; nothing in
//! here is inspected by `Observable`, `Subscriber` or `Subscription`. The
//! module also carries the mock data and the reference handler functions
//! that the integration tests replay against.

use std::collections::HashMap;
use std::fmt;
use std::time::SystemTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
  Get,
  Post,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpStatus {
  Ok = 200,
  InternalServerError = 500,
}

impl HttpStatus {
  #[inline]
  pub fn code(self) -> u16 { self as u16 }
}

/// A mock account record carried as the body of a `Post` request.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
  pub name: String,
  pub age: u8,
  pub roles: Vec<String>,
  pub created_at: SystemTime,
  pub is_deleted: bool,
}

/// The value payload replayed to a handler set.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
  pub method: HttpMethod,
  pub host: String,
  pub path: String,
  pub body: Option<User>,
  pub params: Option<HashMap<String, String>>,
}

/// The result a request handler answers with; the stream core discards it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: HttpStatus,
}

/// The terminal error payload delivered to `on_error` handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpError {
  pub message: String,
}

impl HttpError {
  pub fn new(message: impl Into<String>) -> Self {
    HttpError { message: message.into() }
  }
}

impl fmt::Display for HttpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl std::error::Error for HttpError {}

/// Answers any request with `200 OK`.
pub fn handle_request(_request: HttpRequest) -> HttpResponse {
  HttpResponse { status: HttpStatus::Ok }
}

/// Answers any terminal error with `500 Internal Server Error`.
pub fn handle_error(_error: HttpError) -> HttpResponse {
  HttpResponse { status: HttpStatus::InternalServerError }
}

pub fn user_mock() -> User {
  User {
    name: "User Name".to_owned(),
    age: 26,
    roles: vec!["user".to_owned(), "admin".to_owned()],
    created_at: SystemTime::now(),
    is_deleted: false,
  }
}

/// The finite request collection the replay examples subscribe to.
pub fn request_mocks() -> Vec<HttpRequest> {
  vec![
    HttpRequest {
      method: HttpMethod::Post,
      host: "service.example".to_owned(),
      path: "user".to_owned(),
      body: Some(user_mock()),
      params: None,
    },
    HttpRequest {
      method: HttpMethod::Get,
      host: "service.example".to_owned(),
      path: "user".to_owned(),
      body: None,
      params: Some(HashMap::from([("id".to_owned(), "3f5h67s4s".to_owned())])),
    },
  ]
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn status_codes() {
    assert_eq!(HttpStatus::Ok.code(), 200);
    assert_eq!(HttpStatus::InternalServerError.code(), 500);
  }

  #[test]
  fn mock_collection_shape() {
    let mocks = request_mocks();
    assert_eq!(mocks.len(), 2);
    assert_eq!(mocks[0].method, HttpMethod::Post);
    assert!(mocks[0].body.is_some());
    assert_eq!(mocks[1].method, HttpMethod::Get);
    assert_eq!(
      mocks[1].params.as_ref().and_then(|p| p.get("id")).map(String::as_str),
      Some("3f5h67s4s")
    );
  }

  #[test]
  fn handlers_answer_with_fixed_statuses() {
    let request = request_mocks().into_iter().next().unwrap();
    assert_eq!(handle_request(request).status, HttpStatus::Ok);
    assert_eq!(
      handle_error(HttpError::new("boom")).status,
      HttpStatus::InternalServerError
    );
  }
}
