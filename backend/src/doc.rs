//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the task and health endpoints from the inbound layer.
//! Request and response DTOs carry the schema derives so domain types stay
//! free of `utoipa`. The document backs Swagger UI in debug builds and is
//! printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::tasks::{TaskBody, TaskRequestBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task service API",
        description = "Create, list, fetch, update, and delete tasks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(TaskBody, TaskRequestBody)),
    tags(
        (name = "tasks", description = "Task lifecycle operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Document structure checks.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("TaskBody", &["id", "name", "done"])]
    #[case("TaskRequestBody", &["name", "done"])]
    fn schemas_expose_task_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/tasks")]
    #[case("/tasks/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
