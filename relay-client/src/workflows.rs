//! Workflow-related API endpoints

use relay_core::domain::workflow::Workflow;

use crate::CircleClient;
use crate::error::Result;

impl CircleClient {
    /// List every workflow of a pipeline, following pagination
    pub async fn list_pipeline_workflows(&self, pipeline_id: &str) -> Result<Vec<Workflow>> {
        self.list_all(&format!("/pipeline/{}/workflow", pipeline_id))
            .await
    }

    /// Get a workflow by ID
    pub async fn get_workflow(&self, workflow_id: &str) -> Result<Workflow> {
        let response = self
            .get(&format!("/workflow/{}", workflow_id))
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use relay_core::domain::pipeline::ProjectSlug;
    use relay_core::domain::workflow::WorkflowStatus;

    fn client(url: String) -> CircleClient {
        CircleClient::new(url, ProjectSlug::new("gh", "acme", "widgets"), "test-token")
    }

    #[tokio::test]
    async fn test_list_workflows_follows_pages() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("GET", "/api/v2/pipeline/p-1/workflow")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(
                r#"{"items":[{"id":"wf-1","name":"build","status":"running"}],"next_page_token":"abc"}"#,
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/v2/pipeline/p-1/workflow")
            .match_query(Matcher::UrlEncoded("page-token".into(), "abc".into()))
            .with_status(200)
            .with_body(
                r#"{"items":[{"id":"wf-2","name":"deploy","status":"success"}],"next_page_token":null}"#,
            )
            .create_async()
            .await;

        let workflows = client(server.url())
            .list_pipeline_workflows("p-1")
            .await
            .unwrap();

        assert_eq!(workflows.len(), 2);
        assert_eq!(workflows[0].id, "wf-1");
        assert_eq!(workflows[0].status, WorkflowStatus::Running);
        assert_eq!(workflows[1].id, "wf-2");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_workflows_empty() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/pipeline/p-1/workflow")
            .with_status(200)
            .with_body(r#"{"items":[],"next_page_token":null}"#)
            .create_async()
            .await;

        let workflows = client(server.url())
            .list_pipeline_workflows("p-1")
            .await
            .unwrap();
        assert!(workflows.is_empty());
    }

    #[tokio::test]
    async fn test_get_workflow() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/workflow/wf-1")
            .match_header("circle-token", "test-token")
            .with_status(200)
            .with_body(r#"{"id":"wf-1","name":"build","status":"failed","pipeline_number":3}"#)
            .create_async()
            .await;

        let workflow = client(server.url()).get_workflow("wf-1").await.unwrap();
        assert_eq!(workflow.status, WorkflowStatus::Failed);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/workflow/wf-1")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client(server.url()).get_workflow("wf-1").await.unwrap_err();
        assert!(matches!(err, crate::ClientError::ParseError(_)));
    }
}
