use std::str::FromStr;

use crate::types::{PROJECT_TYPE_FILES, PROJECT_TYPE_STRINGS};

use super::common::{ListOptions, Paginate, Query, QueryValues, SortDirection};

/// Options of `GET /api/v2/projects`.
#[derive(Clone, Debug, Default)]
pub struct ProjectsListOptions {
    pub list: ListOptions,
    pub order_by: Vec<(ProjectSortBy, SortDirection)>,
    /// Only projects owned by this user. Zero means any user.
    pub user_id: u64,
    /// Only projects of this group. `Some(0)` selects the root group.
    pub group_id: Option<u64>,
    pub has_manager_access: Option<bool>,
    /// [`PROJECT_TYPE_FILES`] or [`PROJECT_TYPE_STRINGS`]; other values are ignored.
    pub project_type: Option<i64>,
}

impl Query for ProjectsListOptions {
    fn values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        self.list.append_to(&mut values);
        values
            .order_by(&self.order_by)
            .number("userId", self.user_id)
            .opt_number("groupId", self.group_id)
            .flag("hasManagerAccess", self.has_manager_access)
            .number_in(
                "type",
                self.project_type,
                &[PROJECT_TYPE_FILES, PROJECT_TYPE_STRINGS],
            );
        values
    }
}

impl Paginate for ProjectsListOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl ProjectsListOptions {
    pub fn with_order_by(mut self, sort_by: ProjectSortBy, direction: SortDirection) -> Self {
        self.order_by.push((sort_by, direction));
        self
    }

    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_group_id(mut self, group_id: u64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn with_manager_access(mut self, has_manager_access: bool) -> Self {
        self.has_manager_access = Some(has_manager_access);
        self
    }

    pub fn with_type(mut self, project_type: i64) -> Self {
        self.project_type = Some(project_type);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectSortBy {
    Id,
    Name,
    Identifier,
    Description,
    CreatedAt,
    UpdatedAt,
    LastActivity,
}

impl std::fmt::Display for ProjectSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProjectSortBy::Id => "id",
                ProjectSortBy::Name => "name",
                ProjectSortBy::Identifier => "identifier",
                ProjectSortBy::Description => "description",
                ProjectSortBy::CreatedAt => "createdAt",
                ProjectSortBy::UpdatedAt => "updatedAt",
                ProjectSortBy::LastActivity => "lastActivity",
            }
        )
    }
}

impl FromStr for ProjectSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ProjectSortBy::Id),
            "name" => Ok(ProjectSortBy::Name),
            "identifier" => Ok(ProjectSortBy::Identifier),
            "description" => Ok(ProjectSortBy::Description),
            "createdAt" => Ok(ProjectSortBy::CreatedAt),
            "updatedAt" => Ok(ProjectSortBy::UpdatedAt),
            "lastActivity" => Ok(ProjectSortBy::LastActivity),
            _ => Err(()),
        }
    }
}
