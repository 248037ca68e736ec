//! Project CRUD operations against the Portfolio backend.
//!
//! Each function reads the current token, issues exactly one request, and
//! maps any non-success response to [`ApiError::Status`] with the numeric
//! code and body text. Identifiers are percent-encoded before landing in a
//! URL path segment.

use serde_json::Value;

use super::client::ApiClient;
use super::types::Project;
use crate::error::ApiError;

/// Fetch all projects.
///
/// GET /api/projects
pub async fn get_all_projects(client: &ApiClient) -> Result<Vec<Project>, ApiError> {
    let resp = client.authenticated_get("/api/projects").await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    Ok(resp.json().await?)
}

/// Fetch a single project by id.
///
/// GET /api/projects/{id}
pub async fn get_project_by_id(client: &ApiClient, id: &str) -> Result<Project, ApiError> {
    let path = format!("/api/projects/{}", urlencoding::encode(id));
    let resp = client.authenticated_get(&path).await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    Ok(resp.json().await?)
}

/// Create a project from a prebuilt multipart form.
///
/// POST /api/projects. The caller owns the form contents -- typically the
/// text fields plus the S3 image URL obtained from the upload step.
pub async fn create_project(
    client: &ApiClient,
    form: reqwest::multipart::Form,
) -> Result<Project, ApiError> {
    let resp = client
        .authenticated_multipart_post("/api/projects", form)
        .await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    Ok(resp.json().await?)
}

/// Update a project from a prebuilt multipart form.
///
/// PUT /api/projects/{id}
pub async fn update_project(
    client: &ApiClient,
    id: &str,
    form: reqwest::multipart::Form,
) -> Result<Project, ApiError> {
    let path = format!("/api/projects/{}", urlencoding::encode(id));
    let resp = client.authenticated_multipart_put(&path, form).await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    Ok(resp.json().await?)
}

/// Delete a project by id.
///
/// DELETE /api/projects/{id}. Returns the backend's result body.
pub async fn delete_project(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    let path = format!("/api/projects/{}", urlencoding::encode(id));
    let resp = client.authenticated_delete(&path).await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{SessionTier, TokenStore};
    use serde_json::json;
    use std::net::TcpListener;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> ApiClient {
        let store = Arc::new(TokenStore::new(Box::new(SessionTier::new())));
        ApiClient::new(&server.uri(), store)
    }

    #[tokio::test]
    async fn test_get_all_projects_parses_list() -> Result<(), ApiError> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}])))
            .mount(&server)
            .await;

        let projects = get_all_projects(&client_for(&server)).await?;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "1");
        assert_eq!(projects[0].title, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_projects_surfaces_status_and_body() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = get_all_projects(&client_for(&server)).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"), "missing status in: {}", message);
        assert!(message.contains("boom"), "missing body in: {}", message);
    }

    #[tokio::test]
    async fn test_bearer_header_sent_when_token_present() -> Result<(), ApiError> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/projects/p1"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.store().set("tok-1");

        let project = get_project_by_id(&client, "p1").await?;
        assert_eq!(project.id, "p1");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_authorization_header_sent_without_token() -> Result<(), ApiError> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        // The header must be present with an empty value, not omitted.
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(header("authorization", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let projects = get_all_projects(&client_for(&server)).await?;
        assert!(projects.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_project_percent_encodes_id() -> Result<(), ApiError> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        // "a/b" must become one encoded segment, not a nested path.
        Mock::given(method("DELETE"))
            .and(path("/api/projects/a%2Fb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
            .mount(&server)
            .await;

        let result = delete_project(&client_for(&server), "a/b").await?;
        assert_eq!(result, json!({"deleted": true}));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_project_posts_multipart() -> Result<(), ApiError> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/projects"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": "new", "title": "Demo"})),
            )
            .mount(&server)
            .await;

        let form = reqwest::multipart::Form::new()
            .text("title", "Demo")
            .text("imageUrl", "https://cdn.example/img.png");
        let project = create_project(&client_for(&server), form).await?;
        assert_eq!(project.id, "new");
        assert_eq!(project.title.as_deref(), Some("Demo"));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_project_puts_multipart_to_encoded_path() -> Result<(), ApiError> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/projects/p%201"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p 1"})))
            .mount(&server)
            .await;

        let form = reqwest::multipart::Form::new().text("title", "Renamed");
        let project = update_project(&client_for(&server), "p 1", form).await?;
        assert_eq!(project.id, "p 1");
        Ok(())
    }
}
