use crate::{
    query::{ListOptions, Query},
    types::{
        BuildFileRequest, BuildID, BuildProjectRequest, DownloadLink, Envelope, ListEnvelope,
        ProjectID, TranslationBuild,
    },
    Client, Error, Response,
};

/// `/api/v2/projects/{projectId}/translations`.
pub struct TranslationsService<'a> {
    client: &'a Client,
}

impl<'a> TranslationsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the project's translation builds.
    pub async fn list_builds(
        &self,
        project_id: ProjectID,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<TranslationBuild>, Response), Error> {
        self.client
            .get::<ListEnvelope<TranslationBuild>>(
                &builds_path(project_id),
                options.map(|o| o as &dyn Query),
            )
            .await
    }

    /// Starts building the project translations.
    pub async fn build_project(
        &self,
        project_id: ProjectID,
        request: &BuildProjectRequest,
    ) -> Result<(TranslationBuild, Response), Error> {
        request.validate()?;
        self.client
            .post::<Envelope<TranslationBuild>, _>(&builds_path(project_id), request)
            .await
    }

    /// Fetches the status and progress of a build.
    pub async fn check_build_status(
        &self,
        project_id: ProjectID,
        build_id: BuildID,
    ) -> Result<(TranslationBuild, Response), Error> {
        self.client
            .get::<Envelope<TranslationBuild>>(
                &format!("{}/{}", builds_path(project_id), build_id),
                None,
            )
            .await
    }

    /// Gets a short-lived download link for a finished build.
    pub async fn download_build(
        &self,
        project_id: ProjectID,
        build_id: BuildID,
    ) -> Result<(DownloadLink, Response), Error> {
        self.client
            .get::<Envelope<DownloadLink>>(
                &format!("{}/{}/download", builds_path(project_id), build_id),
                None,
            )
            .await
    }

    /// Cancels a build that is still in progress.
    pub async fn cancel_build(&self, project_id: ProjectID, build_id: BuildID) -> Result<Response, Error> {
        self.client
            .delete(&format!("{}/{}", builds_path(project_id), build_id))
            .await
    }

    /// Builds one file's translation.
    ///
    /// Pass the `ETag` of a previous build to get `None` back (304) when
    /// nothing changed; the fresh ETag is in [`Response::etag`].
    pub async fn build_file(
        &self,
        project_id: ProjectID,
        file_id: u64,
        request: &BuildFileRequest,
        etag: Option<&str>,
    ) -> Result<(Option<DownloadLink>, Response), Error> {
        request.validate()?;
        self.client
            .post_conditional::<Envelope<DownloadLink>, _>(
                &format!("{}/files/{}", builds_path(project_id), file_id),
                request,
                etag,
            )
            .await
    }
}

fn builds_path(project_id: ProjectID) -> String {
    format!("/api/v2/projects/{}/translations/builds", project_id)
}
