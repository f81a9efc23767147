//! Stateless HTTP request builder and response parser for the remote service.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each lookup is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the HTTP round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Employee, TodoItem};

/// Public endpoint queried when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Synchronous, stateless client for the users/todos API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_employee(&self, employee_id: u64) -> HttpRequest {
        get(format!("{}/users/{employee_id}", self.base_url))
    }

    pub fn build_list_todos(&self, employee_id: u64) -> HttpRequest {
        get(format!("{}/todos?userId={employee_id}", self.base_url))
    }

    pub fn parse_employee(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<Employee, ApiError> {
        parse_json(request, response)
    }

    pub fn parse_todos(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<Vec<TodoItem>, ApiError> {
        parse_json(request, response)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

fn parse_json<T: DeserializeOwned>(
    request: &HttpRequest,
    response: HttpResponse,
) -> Result<T, ApiError> {
    check_status(request, &response)?;
    serde_json::from_str(&response.body).map_err(|e| match response.header("content-type") {
        Some(content_type) => ApiError::Deserialization(format!("{e} (content-type: {content_type})")),
        None => ApiError::Deserialization(e.to_string()),
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(request: &HttpRequest, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound {
            url: request.url.clone(),
        });
    }
    Err(ApiError::HttpError {
        status: response.status,
        url: request.url.clone(),
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_employee_produces_correct_request() {
        let req = client().build_get_employee(1);
        assert_eq!(req.url, "http://localhost:3000/users/1");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_list_todos_filters_by_user_id() {
        let req = client().build_list_todos(7);
        assert_eq!(req.url, "http://localhost:3000/todos?userId=7");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_get_employee(2);
        assert_eq!(req.url, "http://localhost:3000/users/2");
    }

    #[test]
    fn default_client_targets_public_endpoint() {
        assert_eq!(TodoClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn parse_employee_success() {
        let req = client().build_get_employee(1);
        let employee = client()
            .parse_employee(&req, response(200, r#"{"id":1,"name":"Leanne Graham"}"#))
            .unwrap();
        assert_eq!(employee.name, "Leanne Graham");
    }

    #[test]
    fn parse_employee_not_found() {
        let req = client().build_get_employee(99);
        let err = client().parse_employee(&req, response(404, "{}")).unwrap_err();
        match err {
            ApiError::NotFound { url } => assert_eq!(url, "http://localhost:3000/users/99"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_todos_server_error() {
        let req = client().build_list_todos(1);
        let err = client()
            .parse_todos(&req, response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_todos_preserves_order() {
        let req = client().build_list_todos(1);
        let todos = client()
            .parse_todos(
                &req,
                response(
                    200,
                    r#"[{"title":"B","completed":false,"userId":1},{"title":"A","completed":true,"userId":1}]"#,
                ),
            )
            .unwrap();
        let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn parse_todos_bad_json() {
        let req = client().build_list_todos(1);
        let err = client().parse_todos(&req, response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn deserialization_error_names_content_type() {
        let req = client().build_list_todos(1);
        let response = HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "text/html; charset=utf-8".to_string())],
            body: "<html></html>".to_string(),
        };
        match client().parse_todos(&req, response).unwrap_err() {
            ApiError::Deserialization(msg) => {
                assert!(msg.ends_with("(content-type: text/html; charset=utf-8)"), "{msg}")
            }
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }

    #[test]
    fn parse_todos_rejects_object_body() {
        let req = client().build_list_todos(1);
        let err = client().parse_todos(&req, response(200, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
