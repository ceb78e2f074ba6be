mod meta;
pub use self::meta::{BulkEnvelope, BulkResult, Envelope, ListEnvelope, Pagination, RawEnvelope};

mod value;
pub use self::value::{AnyValue, Scalar};

mod project;
pub use self::project::{
    Project, ProjectID, ProjectsAddRequest, PROJECT_TYPE_FILES, PROJECT_TYPE_STRINGS,
};

mod branch;
pub use self::branch::{Branch, BranchID, BranchMerge, BranchMergeRequest, BranchesAddRequest};

mod label;
pub use self::label::{AssignLabelRequest, Label, LabelAddRequest, LabelID, SourceString};

mod storage;
pub use self::storage::{Storage, StorageID};

mod member;
pub use self::member::{MemberPermissionsRequest, MembersAddRequest, ProjectMember};

mod translation;
pub use self::translation::{
    BuildFileRequest, BuildID, BuildProjectRequest, DownloadLink, TranslationBuild,
};
