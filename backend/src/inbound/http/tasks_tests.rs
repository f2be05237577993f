//! Tests for task HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{TASK_NOT_FOUND_MESSAGE, TaskServiceImpl};
use crate::domain::ports::{MockTaskService, TaskService};
use crate::outbound::in_memory::InMemoryTaskRepository;

fn test_app(
    service: Arc<dyn TaskService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(service)))
        .service(create_task)
        .service(list_tasks)
        .service(get_task)
        .service(update_task)
        .service(delete_task)
}

fn in_memory_service() -> Arc<dyn TaskService> {
    Arc::new(TaskServiceImpl::new(Arc::new(InMemoryTaskRepository::new())))
}

async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
    let bytes = actix_test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn create_defaults_done_and_assigns_an_id() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let request = actix_test::TestRequest::post()
        .uri("/tasks")
        .set_json(json!({ "name": "Buy milk" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: TaskBody = actix_test::read_body_json(response).await;
    assert_eq!(body.name, "Buy milk");
    assert!(!body.done);
    assert!(body.id > 0);
}

#[rstest]
#[case::missing(json!({ "done": true }))]
#[case::empty(json!({ "name": "" }))]
#[case::blank(json!({ "name": "   " }))]
#[actix_rt::test]
async fn create_rejects_missing_names_without_persisting(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let request = actix_test::TestRequest::post()
        .uri("/tasks")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "name is required");

    let list = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/tasks").to_request(),
    )
    .await;
    let tasks: Vec<TaskBody> = actix_test::read_body_json(list).await;
    assert!(tasks.is_empty());
}

#[actix_web::test]
async fn create_rejects_malformed_json() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let request = actix_test::TestRequest::post()
        .uri("/tasks")
        .insert_header(header::ContentType::json())
        .set_payload("{\"name\": ")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert!(body_text(response).await.starts_with("invalid JSON body:"));
}

#[actix_web::test]
async fn created_task_round_trips_through_get() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let created: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/tasks")
            .set_json(json!({ "name": "Write report", "done": true }))
            .to_request(),
    )
    .await;

    let fetched: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/tasks/{}", created.id))
            .to_request(),
    )
    .await;

    assert_eq!(fetched, created);
    assert!(fetched.done);
}

#[actix_web::test]
async fn get_unknown_task_returns_not_found() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/tasks/42").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Task not found");
}

#[rstest]
#[case("get", "/tasks/0")]
#[case("get", "/tasks/-1")]
#[case("get", "/tasks/abc")]
#[case("delete", "/tasks/0")]
#[case("delete", "/tasks/-1")]
#[case("delete", "/tasks/abc")]
#[case("put", "/tasks/0")]
#[case("put", "/tasks/-1")]
#[case("put", "/tasks/abc")]
#[actix_rt::test]
async fn invalid_path_ids_are_rejected(#[case] method: &str, #[case] uri: &str) {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let request = match method {
        "get" => actix_test::TestRequest::get(),
        "delete" => actix_test::TestRequest::delete(),
        _ => actix_test::TestRequest::put().set_json(json!({ "name": "x" })),
    }
    .uri(uri)
    .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, INVALID_ID_MESSAGE);
}

#[actix_web::test]
async fn update_is_visible_to_subsequent_reads() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let created: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/tasks")
            .set_json(json!({ "name": "Buy milk" }))
            .to_request(),
    )
    .await;

    let updated: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/tasks/{}", created.id))
            .set_json(json!({ "name": "Buy milk", "done": true }))
            .to_request(),
    )
    .await;
    assert!(updated.done);

    let fetched: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/tasks/{}", created.id))
            .to_request(),
    )
    .await;
    assert!(fetched.done);
    assert_eq!(fetched.id, created.id);
}

#[actix_web::test]
async fn update_of_unknown_task_returns_not_found() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/tasks/5")
            .set_json(json!({ "name": "ghost" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Task not found");
}

#[actix_web::test]
async fn update_validates_the_body() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/tasks/1")
            .set_json(json!({ "done": true }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "name is required");
}

#[actix_web::test]
async fn delete_then_get_returns_not_found_and_repeat_delete_succeeds() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let created: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/tasks")
            .set_json(json!({ "name": "Temporary" }))
            .to_request(),
    )
    .await;
    let uri = format!("/tasks/{}", created.id);

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert!(actix_test::read_body(first).await.is_empty());

    let fetched = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn list_of_empty_store_is_an_empty_array() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/tasks").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "[]");
}

#[actix_web::test]
async fn list_returns_tasks_in_creation_order() {
    let app = actix_test::init_service(test_app(in_memory_service())).await;
    for name in ["first", "second"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/tasks")
                .set_json(json!({ "name": name }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let tasks: Vec<TaskBody> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/tasks").to_request(),
    )
    .await;

    let names: Vec<&str> = tasks.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
}

#[actix_web::test]
async fn storage_failures_surface_as_internal_errors() {
    let mut service = MockTaskService::new();
    service
        .expect_list_tasks()
        .times(1)
        .return_once(|| Err(Error::internal("task repository connection failed: refused")));
    let app = actix_test::init_service(test_app(Arc::new(service))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/tasks").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await,
        "task repository connection failed: refused"
    );
}

#[rstest]
#[case::create("post", "/tasks")]
#[case::get("get", "/tasks/7")]
#[case::update("put", "/tasks/7")]
#[case::delete("delete", "/tasks/7")]
#[actix_rt::test]
async fn service_failures_echo_the_message_as_internal_errors(
    #[case] method: &str,
    #[case] uri: &str,
) {
    const MESSAGE: &str = "task repository query failed: deadlock detected";
    let mut service = MockTaskService::new();
    match method {
        "post" => {
            service
                .expect_create_task()
                .times(1)
                .return_once(|_| Err(Error::internal(MESSAGE)));
        }
        "get" => {
            service
                .expect_get_task()
                .times(1)
                .return_once(|_| Err(Error::internal(MESSAGE)));
        }
        "put" => {
            service
                .expect_update_task()
                .times(1)
                .return_once(|_| Err(Error::internal(MESSAGE)));
        }
        _ => {
            service
                .expect_delete_task()
                .times(1)
                .return_once(|_| Err(Error::internal(MESSAGE)));
        }
    }
    let app = actix_test::init_service(test_app(Arc::new(service))).await;

    let request = match method {
        "post" => actix_test::TestRequest::post().set_json(json!({ "name": "x" })),
        "get" => actix_test::TestRequest::get(),
        "put" => actix_test::TestRequest::put().set_json(json!({ "name": "x" })),
        _ => actix_test::TestRequest::delete(),
    }
    .uri(uri)
    .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, MESSAGE);
}

#[actix_web::test]
async fn delete_reports_not_found_from_the_service() {
    let mut service = MockTaskService::new();
    service
        .expect_delete_task()
        .withf(|id| id.get() == 9)
        .times(1)
        .return_once(|_| Err(Error::not_found(TASK_NOT_FOUND_MESSAGE)));
    let app = actix_test::init_service(test_app(Arc::new(service))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/tasks/9").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Task not found");
}

#[actix_web::test]
async fn invalid_ids_never_reach_the_service() {
    let mut service = MockTaskService::new();
    service.expect_get_task().times(0);
    service.expect_delete_task().times(0);
    let app = actix_test::init_service(test_app(Arc::new(service))).await;

    for request in [
        actix_test::TestRequest::get().uri("/tasks/0").to_request(),
        actix_test::TestRequest::delete().uri("/tasks/abc").to_request(),
    ] {
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn create_forwards_the_decoded_draft() {
    let mut service = MockTaskService::new();
    service
        .expect_create_task()
        .withf(|draft| draft.name().as_str() == "Buy milk" && draft.done())
        .times(1)
        .return_once(|draft| Ok(draft.into_task(TaskId::new(3).expect("valid id"))));
    let app = actix_test::init_service(test_app(Arc::new(service))).await;

    let body: TaskBody = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/tasks")
            .set_json(json!({ "name": "Buy milk", "done": true }))
            .to_request(),
    )
    .await;

    assert_eq!(
        body,
        TaskBody {
            id: 3,
            name: "Buy milk".to_owned(),
            done: true,
        }
    );
}
