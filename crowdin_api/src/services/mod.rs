//! Per-resource facades. Each builds paths and payloads and delegates to [`Client`].

use crate::Client;

mod branches;
pub use self::branches::BranchesService;

mod labels;
pub use self::labels::LabelsService;

mod members;
pub use self::members::MembersService;

mod projects;
pub use self::projects::ProjectsService;

mod storages;
pub use self::storages::StoragesService;

mod translations;
pub use self::translations::TranslationsService;

impl Client {
    pub fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(self)
    }

    pub fn branches(&self) -> BranchesService<'_> {
        BranchesService::new(self)
    }

    pub fn labels(&self) -> LabelsService<'_> {
        LabelsService::new(self)
    }

    pub fn storages(&self) -> StoragesService<'_> {
        StoragesService::new(self)
    }

    pub fn members(&self) -> MembersService<'_> {
        MembersService::new(self)
    }

    pub fn translations(&self) -> TranslationsService<'_> {
        TranslationsService::new(self)
    }
}
