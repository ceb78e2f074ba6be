mod common;
pub use self::common::{ListOptions, Paginate, Query, QueryValues, SortDirection};

mod project;
pub use self::project::{ProjectSortBy, ProjectsListOptions};

mod branch;
pub use self::branch::{BranchSortBy, BranchesListOptions};

mod label;
pub use self::label::{LabelSortBy, LabelsListOptions, StringIdsOptions};

mod member;
pub use self::member::{MemberSortBy, MembersListOptions};
