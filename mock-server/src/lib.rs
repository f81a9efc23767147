use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct TodoFilter {
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
}

/// Read-only users and todos served by the mock.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub todos: Vec<Todo>,
}

impl Dataset {
    /// Three users: Leanne Graham (id 1) with a mix of finished and open
    /// todos, Ervin Howell (id 2) with one non-ASCII title, and Clementine
    /// Bauch (id 3) with no todos at all.
    pub fn fixture() -> Self {
        let user = |id, name: &str, username: &str, email: &str| User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        };
        let todo = |user_id, id, title: &str, completed| Todo {
            user_id,
            id,
            title: title.to_string(),
            completed,
        };
        Self {
            users: vec![
                user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
                user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
                user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
            ],
            todos: vec![
                todo(1, 1, "delectus aut autem", false),
                todo(1, 2, "quis ut nam facilis et officia qui", false),
                todo(1, 3, "fugiat veniam minus", false),
                todo(1, 4, "et porro tempora", true),
                todo(
                    1,
                    5,
                    "laboriosam mollitia et enim quasi adipisci quia provident illum",
                    false,
                ),
                todo(1, 8, "quo adipisci enim quam ut ab", true),
                todo(2, 21, "suscipit repellat esse quibusdam voluptatem incidunt", false),
                todo(2, 22, "distinctio vitae autem nihil ut molestias quo", true),
                todo(2, 23, "r\u{e9}sum\u{e9} et caf\u{e9}", true),
            ],
        }
    }
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    app_with(Dataset::fixture())
}

pub fn app_with(dataset: Dataset) -> Router {
    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/todos", get(list_todos))
        .with_state(Arc::new(dataset))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    db.users
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_todos(State(db): State<Db>, Query(filter): Query<TodoFilter>) -> Json<Vec<Todo>> {
    let todos = db
        .todos
        .iter()
        .filter(|todo| filter.user_id.map_or(true, |id| todo.user_id == id))
        .cloned()
        .collect();
    Json(todos)
}
