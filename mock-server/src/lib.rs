use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub age: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEnvelope {
    pub profile: Profile,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub age: String,
    pub email: String,
    pub password: String,
}

/// A stored user. Passwords are accepted on create and discarded.
#[derive(Clone, Debug)]
pub struct StoredUser {
    pub username: String,
    pub age: String,
    pub email: String,
}

impl StoredUser {
    fn profile(&self) -> Profile {
        Profile {
            age: self.age.clone(),
            name: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Users keyed by username, which doubles as the id in `/users/{id}`.
pub type Db = Arc<RwLock<HashMap<String, StoredUser>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/user/", post(create_user))
        .route("/user/{id}", delete(delete_user))
        .route("/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_user(State(db): State<Db>, Json(input): Json<CreateUser>) -> StatusCode {
    let mut users = db.write().await;
    if users.contains_key(&input.username) {
        info!(username = %input.username, "create rejected: username taken");
        return StatusCode::CONFLICT;
    }
    info!(username = %input.username, "user created");
    users.insert(
        input.username.clone(),
        StoredUser {
            username: input.username,
            age: input.age,
            email: input.email,
        },
    );
    StatusCode::CREATED
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<UserEnvelope>, StatusCode> {
    let users = db.read().await;
    users
        .get(&id)
        .map(|user| Json(UserEnvelope { profile: user.profile() }))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_user(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut users = db.write().await;
    match users.remove(&id) {
        Some(_) => {
            info!(username = %id, "user deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
