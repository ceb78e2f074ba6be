use crate::{
    query::{ProjectsListOptions, Query},
    types::{Envelope, ListEnvelope, Project, ProjectID, ProjectsAddRequest},
    Client, Error, PatchOperation, Response,
};

/// `/api/v2/projects`.
pub struct ProjectsService<'a> {
    client: &'a Client,
}

impl<'a> ProjectsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists projects visible to the token owner.
    pub async fn list(
        &self,
        options: Option<&ProjectsListOptions>,
    ) -> Result<(Vec<Project>, Response), Error> {
        self.client
            .get::<ListEnvelope<Project>>("/api/v2/projects", options.map(|o| o as &dyn Query))
            .await
    }

    /// Fetches a single project by its numeric ID.
    pub async fn get(&self, project_id: ProjectID) -> Result<(Project, Response), Error> {
        self.client
            .get::<Envelope<Project>>(&format!("/api/v2/projects/{}", project_id), None)
            .await
    }

    /// Creates a project.
    pub async fn add(&self, request: &ProjectsAddRequest) -> Result<(Project, Response), Error> {
        request.validate()?;
        self.client
            .post::<Envelope<Project>, _>("/api/v2/projects", request)
            .await
    }

    /// Applies `operations` to a project, in order.
    pub async fn edit(
        &self,
        project_id: ProjectID,
        operations: &[PatchOperation],
    ) -> Result<(Project, Response), Error> {
        self.client
            .patch::<Envelope<Project>>(&format!("/api/v2/projects/{}", project_id), operations)
            .await
    }

    /// Deletes a project.
    pub async fn delete(&self, project_id: ProjectID) -> Result<Response, Error> {
        self.client
            .delete(&format!("/api/v2/projects/{}", project_id))
            .await
    }
}
