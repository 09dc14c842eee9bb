//! Project operations

use super::models::{CreateProjectRequest, Project, UpdateProjectRequest};
use super::transport::{Method, TokenSource, Transport};
use super::{AdminClient, check_id, check_name};
use crate::error::ClientError;

impl<T: Transport, K: TokenSource> AdminClient<T, K> {
    /// All projects visible to the caller, across every page
    pub fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.list_all("/admin/projects")
    }

    pub fn describe_project(&self, project_id: &str) -> Result<Project, ClientError> {
        check_id("project id", project_id)?;
        self.get_json(&format!("/admin/projects/{}", project_id))
    }

    pub fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, ClientError> {
        check_name("project", &request.name)?;
        self.send_json(Method::Post, "/admin/projects", request)
    }

    /// Apply the fields set in `request`; at least one must be set
    pub fn update_project(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, ClientError> {
        check_id("project id", project_id)?;
        if request.is_empty() {
            return Err(ClientError::InvalidArgument(
                "project update changes no fields".into(),
            ));
        }
        if let Some(name) = &request.name {
            check_name("project", name)?;
        }
        self.send_json(
            Method::Patch,
            &format!("/admin/projects/{}", project_id),
            request,
        )
    }

    pub fn delete_project(&self, project_id: &str) -> Result<(), ClientError> {
        check_id("project id", project_id)?;
        self.delete(&format!("/admin/projects/{}", project_id))
    }
}
