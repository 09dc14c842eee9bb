//! Organization operations

use super::models::{Organization, UpdateOrganizationRequest};
use super::transport::{Method, TokenSource, Transport};
use super::{AdminClient, check_id, check_name};
use crate::error::ClientError;

impl<T: Transport, K: TokenSource> AdminClient<T, K> {
    pub fn list_organizations(&self) -> Result<Vec<Organization>, ClientError> {
        self.list_all("/admin/organizations")
    }

    pub fn describe_organization(
        &self,
        organization_id: &str,
    ) -> Result<Organization, ClientError> {
        check_id("organization id", organization_id)?;
        self.get_json(&format!("/admin/organizations/{}", organization_id))
    }

    pub fn update_organization(
        &self,
        organization_id: &str,
        request: &UpdateOrganizationRequest,
    ) -> Result<Organization, ClientError> {
        check_id("organization id", organization_id)?;
        match &request.name {
            Some(name) => check_name("organization", name)?,
            None => {
                return Err(ClientError::InvalidArgument(
                    "organization update changes no fields".into(),
                ));
            }
        }
        self.send_json(
            Method::Patch,
            &format!("/admin/organizations/{}", organization_id),
            request,
        )
    }

    pub fn delete_organization(&self, organization_id: &str) -> Result<(), ClientError> {
        check_id("organization id", organization_id)?;
        self.delete(&format!("/admin/organizations/{}", organization_id))
    }
}
