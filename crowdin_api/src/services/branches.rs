use crate::{
    query::{BranchesListOptions, Query},
    types::{
        AnyValue, Branch, BranchID, BranchMerge, BranchMergeRequest, BranchesAddRequest, Envelope,
        ListEnvelope, ProjectID, RawEnvelope,
    },
    Client, Error, PatchOperation, Response,
};

/// `/api/v2/projects/{projectId}/branches`.
pub struct BranchesService<'a> {
    client: &'a Client,
}

impl<'a> BranchesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the project's branches.
    pub async fn list(
        &self,
        project_id: ProjectID,
        options: Option<&BranchesListOptions>,
    ) -> Result<(Vec<Branch>, Response), Error> {
        self.client
            .get::<ListEnvelope<Branch>>(
                &format!("/api/v2/projects/{}/branches", project_id),
                options.map(|o| o as &dyn Query),
            )
            .await
    }

    /// Fetches a single branch by its numeric ID.
    pub async fn get(
        &self,
        project_id: ProjectID,
        branch_id: BranchID,
    ) -> Result<(Branch, Response), Error> {
        self.client
            .get::<Envelope<Branch>>(&branch_path(project_id, branch_id), None)
            .await
    }

    /// Creates a branch.
    pub async fn add(
        &self,
        project_id: ProjectID,
        request: &BranchesAddRequest,
    ) -> Result<(Branch, Response), Error> {
        request.validate()?;
        self.client
            .post::<Envelope<Branch>, _>(
                &format!("/api/v2/projects/{}/branches", project_id),
                request,
            )
            .await
    }

    /// Applies `operations` to a branch, in order.
    pub async fn edit(
        &self,
        project_id: ProjectID,
        branch_id: BranchID,
        operations: &[PatchOperation],
    ) -> Result<(Branch, Response), Error> {
        self.client
            .patch::<Envelope<Branch>>(&branch_path(project_id, branch_id), operations)
            .await
    }

    /// Deletes a branch and its content.
    pub async fn delete(&self, project_id: ProjectID, branch_id: BranchID) -> Result<Response, Error> {
        self.client.delete(&branch_path(project_id, branch_id)).await
    }

    /// Starts merging `request.source_branch_id` into `branch_id`.
    pub async fn merge(
        &self,
        project_id: ProjectID,
        branch_id: BranchID,
        request: &BranchMergeRequest,
    ) -> Result<(BranchMerge, Response), Error> {
        request.validate()?;
        self.client
            .post::<Envelope<BranchMerge>, _>(
                &format!("{}/merges", branch_path(project_id, branch_id)),
                request,
            )
            .await
    }

    /// Polls an asynchronous merge started by [`BranchesService::merge`].
    pub async fn check_merge_status(
        &self,
        project_id: ProjectID,
        branch_id: BranchID,
        merge_id: &str,
    ) -> Result<(BranchMerge, Response), Error> {
        self.client
            .get::<Envelope<BranchMerge>>(&merge_path(project_id, branch_id, merge_id)?, None)
            .await
    }

    /// Merge summary; its `details` shape varies with the merge outcome.
    pub async fn merge_summary(
        &self,
        project_id: ProjectID,
        branch_id: BranchID,
        merge_id: &str,
    ) -> Result<(AnyValue, Response), Error> {
        self.client
            .get::<RawEnvelope>(
                &format!("{}/summary", merge_path(project_id, branch_id, merge_id)?),
                None,
            )
            .await
    }
}

fn branch_path(project_id: ProjectID, branch_id: BranchID) -> String {
    format!("/api/v2/projects/{}/branches/{}", project_id, branch_id)
}

fn merge_path(project_id: ProjectID, branch_id: BranchID, merge_id: &str) -> Result<String, Error> {
    if merge_id.is_empty() || merge_id.contains('/') {
        return Err(Error::InvalidRequest(format!(
            "invalid merge id {:?}",
            merge_id
        )));
    }
    Ok(format!(
        "{}/merges/{}",
        branch_path(project_id, branch_id),
        merge_id
    ))
}
