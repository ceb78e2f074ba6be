//! Client library for the Crowdin REST API v2.
//!
//! Every endpoint goes through [`Client`]: it encodes list options into a
//! query string, sends JSON, patch or streamed bodies, unwraps the `{"data"}`
//! envelope and maps failures to [`Error`].

mod client;
mod config;
mod envelope;
mod errors;
mod patch;
mod query;
mod services;
pub mod types;
mod upload;

pub use self::client::{Client, Response};
pub use self::config::ClientConfig;
pub use self::envelope::{decode, IntoData};
pub use self::errors::{Error, ErrorResponse, FieldError, Result, ValidationErrorResponse};
pub use self::patch::{build_patch_body, PatchOp, PatchOperation};
pub use self::query::{
    BranchSortBy, BranchesListOptions, LabelSortBy, LabelsListOptions, ListOptions, MemberSortBy,
    MembersListOptions, Paginate, ProjectSortBy, ProjectsListOptions, Query, QueryValues,
    SortDirection, StringIdsOptions,
};
pub use self::services::{
    BranchesService, LabelsService, MembersService, ProjectsService, StoragesService,
    TranslationsService,
};
pub use self::upload::{content_type_for, FILE_NAME_HEADER};
