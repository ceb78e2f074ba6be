use crate::{
    query::{MembersListOptions, Query},
    types::{
        BulkEnvelope, BulkResult, Envelope, ListEnvelope, MemberPermissionsRequest,
        MembersAddRequest, ProjectID, ProjectMember,
    },
    Client, Error, Response,
};

/// `/api/v2/projects/{projectId}/members`.
pub struct MembersService<'a> {
    client: &'a Client,
}

impl<'a> MembersService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists project members, optionally filtered by role or language.
    pub async fn list(
        &self,
        project_id: ProjectID,
        options: Option<&MembersListOptions>,
    ) -> Result<(Vec<ProjectMember>, Response), Error> {
        self.client
            .get::<ListEnvelope<ProjectMember>>(
                &format!("/api/v2/projects/{}/members", project_id),
                options.map(|o| o as &dyn Query),
            )
            .await
    }

    /// Fetches a single member by ID.
    pub async fn get(
        &self,
        project_id: ProjectID,
        member_id: u64,
    ) -> Result<(ProjectMember, Response), Error> {
        self.client
            .get::<Envelope<ProjectMember>>(
                &format!("/api/v2/projects/{}/members/{}", project_id, member_id),
                None,
            )
            .await
    }

    /// Adds members. Users that already belong to the project come back as skipped.
    pub async fn add(
        &self,
        project_id: ProjectID,
        request: &MembersAddRequest,
    ) -> Result<(BulkResult<ProjectMember>, Response), Error> {
        request.validate()?;
        self.client
            .post::<BulkEnvelope<ProjectMember>, _>(
                &format!("/api/v2/projects/{}/members", project_id),
                request,
            )
            .await
    }

    /// Replaces a member's access and per-language permissions.
    pub async fn replace_permissions(
        &self,
        project_id: ProjectID,
        member_id: u64,
        request: &MemberPermissionsRequest,
    ) -> Result<(ProjectMember, Response), Error> {
        self.client
            .put::<Envelope<ProjectMember>, _>(
                &format!("/api/v2/projects/{}/members/{}", project_id, member_id),
                request,
            )
            .await
    }

    /// Removes a member from the project.
    pub async fn delete(&self, project_id: ProjectID, member_id: u64) -> Result<Response, Error> {
        self.client
            .delete(&format!("/api/v2/projects/{}/members/{}", project_id, member_id))
            .await
    }
}
