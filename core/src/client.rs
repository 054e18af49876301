//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is a `build_*`
//! method producing an `HttpRequest` and a `parse_*` method consuming the
//! `HttpResponse`; the caller performs the I/O in between.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::get(self.collection_url())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::get(self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(id), body))
    }

    /// Flip the completion flag of `todo`. Parse the reply with
    /// [`parse_update_todo`](Self::parse_update_todo).
    pub fn build_toggle_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.build_update_todo(todo.id, &UpdateTodo::completed(!todo.completed))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::delete(self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        from_json(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// The server's `detail` message, or the raw body if there is none.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound(error_detail(&response.body))),
        status => Err(ApiError::Http {
            status,
            detail: error_detail(&response.body),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8001")
    }

    fn sample() -> Todo {
        Todo {
            id: 1,
            title: "Test".to_string(),
            description: None,
            completed: false,
            urgency: 1,
        }
    }

    fn body_of(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8001/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8001/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_sends_defaults() {
        let req = client().build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8001/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(
            body_of(&req),
            serde_json::json!({"title": "Buy milk", "completed": false, "urgency": 3})
        );
    }

    #[test]
    fn build_update_todo_omits_unset_fields() {
        let input = UpdateTodo {
            title: Some("Updated".to_string()),
            ..UpdateTodo::default()
        };
        let req = client().build_update_todo(5, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8001/todos/5");
        assert_eq!(body_of(&req), serde_json::json!({"title": "Updated"}));
    }

    #[test]
    fn build_update_todo_sends_explicit_false_and_null() {
        let input = UpdateTodo {
            description: Some(None),
            completed: Some(false),
            ..UpdateTodo::default()
        };
        let req = client().build_update_todo(5, &input).unwrap();
        assert_eq!(
            body_of(&req),
            serde_json::json!({"description": null, "completed": false})
        );
    }

    #[test]
    fn build_toggle_todo_inverts_completed() {
        let req = client().build_toggle_todo(&sample()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8001/todos/1");
        assert_eq!(body_of(&req), serde_json::json!({"completed": true}));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8001/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"title":"Test","description":null,"completed":false,"urgency":1}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos, vec![sample()]);
    }

    #[test]
    fn parse_get_todo_not_found_keeps_detail() {
        let response = HttpResponse::new(404, r#"{"detail":"Задача не найдена"}"#);
        let err = client().parse_get_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == "Задача не найдена"));
    }

    #[test]
    fn parse_create_todo_success() {
        let response = HttpResponse::new(
            201,
            r#"{"id":1,"title":"Test","description":null,"completed":false,"urgency":1}"#,
        );
        assert_eq!(client().parse_create_todo(response).unwrap(), sample());
    }

    #[test]
    fn parse_create_todo_wrong_status_uses_raw_body() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Http { status: 500, ref detail } if detail == "internal error"
        ));
    }

    #[test]
    fn parse_update_todo_success() {
        let response = HttpResponse::new(
            200,
            r#"{"id":1,"title":"Test","description":null,"completed":true,"urgency":1}"#,
        );
        let todo = client().parse_update_todo(response).unwrap();
        assert!(todo.completed);
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(HttpResponse::new(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let response = HttpResponse::new(404, r#"{"detail":"Задача c id 9 не найдена"}"#);
        let err = client().parse_delete_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == "Задача c id 9 не найдена"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8001/");
        assert_eq!(client.build_list_todos().path, "http://localhost:8001/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
