//! API key operations

use super::models::{ApiKey, ApiKeyWithSecret, CreateApiKeyRequest, UpdateApiKeyRequest};
use super::transport::{Method, TokenSource, Transport};
use super::{AdminClient, check_id, check_name};
use crate::error::ClientError;

impl<T: Transport, K: TokenSource> AdminClient<T, K> {
    /// All keys of one project, across every page
    pub fn list_api_keys(&self, project_id: &str) -> Result<Vec<ApiKey>, ClientError> {
        check_id("project id", project_id)?;
        self.list_all(&format!("/admin/projects/{}/api-keys", project_id))
    }

    pub fn describe_api_key(&self, api_key_id: &str) -> Result<ApiKey, ClientError> {
        check_id("api key id", api_key_id)?;
        self.get_json(&format!("/admin/api-keys/{}", api_key_id))
    }

    /// Create a key; the secret in the result cannot be retrieved again
    pub fn create_api_key(
        &self,
        project_id: &str,
        request: &CreateApiKeyRequest,
    ) -> Result<ApiKeyWithSecret, ClientError> {
        check_id("project id", project_id)?;
        check_name("api key", &request.name)?;
        self.send_json(
            Method::Post,
            &format!("/admin/projects/{}/api-keys", project_id),
            request,
        )
    }

    pub fn update_api_key(
        &self,
        api_key_id: &str,
        request: &UpdateApiKeyRequest,
    ) -> Result<ApiKey, ClientError> {
        check_id("api key id", api_key_id)?;
        if request.is_empty() {
            return Err(ClientError::InvalidArgument(
                "api key update changes no fields".into(),
            ));
        }
        if let Some(name) = &request.name {
            check_name("api key", name)?;
        }
        self.send_json(
            Method::Patch,
            &format!("/admin/api-keys/{}", api_key_id),
            request,
        )
    }

    pub fn delete_api_key(&self, api_key_id: &str) -> Result<(), ClientError> {
        check_id("api key id", api_key_id)?;
        self.delete(&format!("/admin/api-keys/{}", api_key_id))
    }
}
