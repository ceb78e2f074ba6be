use crate::{
    query::{LabelsListOptions, Query, StringIdsOptions},
    types::{
        AssignLabelRequest, Envelope, Label, LabelAddRequest, LabelID, ListEnvelope, ProjectID,
        SourceString,
    },
    Client, Error, PatchOperation, Response,
};

/// `/api/v2/projects/{projectId}/labels`.
pub struct LabelsService<'a> {
    client: &'a Client,
}

impl<'a> LabelsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the project's labels.
    pub async fn list(
        &self,
        project_id: ProjectID,
        options: Option<&LabelsListOptions>,
    ) -> Result<(Vec<Label>, Response), Error> {
        self.client
            .get::<ListEnvelope<Label>>(
                &format!("/api/v2/projects/{}/labels", project_id),
                options.map(|o| o as &dyn Query),
            )
            .await
    }

    /// Fetches a single label by its numeric ID.
    pub async fn get(&self, project_id: ProjectID, label_id: LabelID) -> Result<(Label, Response), Error> {
        self.client
            .get::<Envelope<Label>>(&label_path(project_id, label_id), None)
            .await
    }

    /// Creates a label.
    pub async fn add(
        &self,
        project_id: ProjectID,
        request: &LabelAddRequest,
    ) -> Result<(Label, Response), Error> {
        request.validate()?;
        self.client
            .post::<Envelope<Label>, _>(&format!("/api/v2/projects/{}/labels", project_id), request)
            .await
    }

    /// Applies `operations` to a label, in order.
    pub async fn edit(
        &self,
        project_id: ProjectID,
        label_id: LabelID,
        operations: &[PatchOperation],
    ) -> Result<(Label, Response), Error> {
        self.client
            .patch::<Envelope<Label>>(&label_path(project_id, label_id), operations)
            .await
    }

    /// Deletes a label.
    pub async fn delete(&self, project_id: ProjectID, label_id: LabelID) -> Result<Response, Error> {
        self.client.delete(&label_path(project_id, label_id)).await
    }

    /// Attaches the label to strings and returns them.
    pub async fn assign_to_strings(
        &self,
        project_id: ProjectID,
        label_id: LabelID,
        string_ids: &[u64],
    ) -> Result<(Vec<SourceString>, Response), Error> {
        if string_ids.is_empty() {
            return Err(Error::InvalidRequest("stringIds cannot be empty".to_string()));
        }
        let request = AssignLabelRequest {
            string_ids: string_ids.to_vec(),
        };
        self.client
            .post::<ListEnvelope<SourceString>, _>(
                &format!("{}/strings", label_path(project_id, label_id)),
                &request,
            )
            .await
    }

    /// Detaches the label from strings and returns them.
    pub async fn unassign_from_strings(
        &self,
        project_id: ProjectID,
        label_id: LabelID,
        string_ids: &[u64],
    ) -> Result<(Vec<SourceString>, Response), Error> {
        if string_ids.is_empty() {
            return Err(Error::InvalidRequest("stringIds cannot be empty".to_string()));
        }
        let options = StringIdsOptions {
            string_ids: string_ids.to_vec(),
        };
        let (strings, response) = self
            .client
            .delete_with_options::<ListEnvelope<SourceString>>(
                &format!("{}/strings", label_path(project_id, label_id)),
                Some(&options as &dyn Query),
            )
            .await?;
        Ok((strings.unwrap_or_default(), response))
    }
}

fn label_path(project_id: ProjectID, label_id: LabelID) -> String {
    format!("/api/v2/projects/{}/labels/{}", project_id, label_id)
}
