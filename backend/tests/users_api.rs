//! End-to-end tests for the users API over a real JSON data file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_http::Request;
use actix_web::http::StatusCode;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    test::{self, TestRequest},
    web,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;
use user_registry::Trace;
use user_registry::domain::UserRegistry;
use user_registry::domain::ports::NoOpPersistenceMetrics;
use user_registry::inbound::http::api_scope;
use user_registry::inbound::http::state::HttpState;
use user_registry::outbound::persistence::JsonFileUserRepository;
use user_registry::test_support::cap_fs::{read_file_to_string, write_file};

struct DataDir {
    _temp: TempDir,
    data_file: PathBuf,
}

#[fixture]
fn data_dir() -> DataDir {
    let temp = TempDir::new().expect("temp dir");
    let data_file = temp.path().join("users.json");
    DataDir {
        _temp: temp,
        data_file,
    }
}

async fn load_registry(data_file: &Path) -> Arc<UserRegistry> {
    let repository = JsonFileUserRepository::new(data_file).expect("file path");
    Arc::new(UserRegistry::load(Arc::new(repository), Arc::new(NoOpPersistenceMetrics)).await)
}

async fn init_app(
    registry: Arc<UserRegistry>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::from_registry(registry)))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await
}

async fn call<S>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

fn create(name: &str, age: Value) -> TestRequest {
    TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"name": name, "age": age}))
}

#[rstest]
#[actix_web::test]
async fn create_conflict_delete_then_not_found(data_dir: DataDir) {
    let app = init_app(load_registry(&data_dir.data_file).await).await;

    let (status, body) = call(&app, create("Alice", json!("30"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": {"id": 1, "name": "Alice", "age": "30"}})
    );

    let (status, body) = call(&app, create("Alice", json!("25"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);

    let (status, body) = call(&app, TestRequest::delete().uri("/api/users/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["id"], 1);

    let (status, body) = call(&app, TestRequest::get().uri("/api/users/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "user not found"}));
}

#[rstest]
#[actix_web::test]
async fn data_file_mirrors_every_mutation(data_dir: DataDir) {
    let app = init_app(load_registry(&data_dir.data_file).await).await;

    call(&app, create("Alice", json!("30"))).await;
    call(&app, create("Bob", json!(41))).await;
    let written: Value =
        serde_json::from_str(&read_file_to_string(&data_dir.data_file).expect("data file"))
            .expect("data file is JSON");
    assert_eq!(
        written,
        json!([
            {"id": 1, "name": "Alice", "age": "30"},
            {"id": 2, "name": "Bob", "age": 41}
        ])
    );

    call(&app, TestRequest::delete().uri("/api/users/1")).await;
    let written: Value =
        serde_json::from_str(&read_file_to_string(&data_dir.data_file).expect("data file"))
            .expect("data file is JSON");
    assert_eq!(written, json!([{"id": 2, "name": "Bob", "age": 41}]));
}

#[rstest]
#[actix_web::test]
async fn restart_reloads_the_saved_collection(data_dir: DataDir) {
    {
        let app = init_app(load_registry(&data_dir.data_file).await).await;
        call(&app, create("Alice", json!("30"))).await;
        call(&app, create("Carol", json!("22"))).await;
    }

    let app = init_app(load_registry(&data_dir.data_file).await).await;
    let (status, body) = call(&app, TestRequest::get().uri("/api/users/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["name"], "Carol");

    let (_, body) = call(&app, create("Dave", json!("50"))).await;
    assert_eq!(body["message"]["id"], 3);
}

#[rstest]
#[actix_web::test]
async fn ids_follow_the_maximum_not_the_count(data_dir: DataDir) {
    write_file(
        &data_dir.data_file,
        br#"[{"id": 7, "name": "Gina", "age": "70"}, {"id": 2, "name": "Ben", "age": "20"}]"#,
    )
    .expect("seed data file");
    let app = init_app(load_registry(&data_dir.data_file).await).await;

    let (_, body) = call(&app, create("Hank", json!("80"))).await;

    assert_eq!(body["message"]["id"], 8);
}

#[rstest]
#[actix_web::test]
async fn malformed_data_file_starts_empty(data_dir: DataDir) {
    write_file(&data_dir.data_file, b"{ this is not json").expect("seed data file");
    let app = init_app(load_registry(&data_dir.data_file).await).await;

    let (status, _) = call(&app, TestRequest::get().uri("/api/users/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, create("Alice", json!("30"))).await;
    assert_eq!(body["message"]["id"], 1);
}

#[rstest]
#[actix_web::test]
async fn rejected_requests_leave_the_file_untouched(data_dir: DataDir) {
    let app = init_app(load_registry(&data_dir.data_file).await).await;
    call(&app, create("Alice", json!("30"))).await;
    let before = read_file_to_string(&data_dir.data_file).expect("data file");

    let (status, _) = call(&app, create("Al1ce", json!("30"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = call(&app, create("Alice", json!("31"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = call(&app, TestRequest::delete().uri("/api/users/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(read_file_to_string(&data_dir.data_file).expect("data file"), before);
}
