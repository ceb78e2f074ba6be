use super::common::{ListOptions, Paginate, Query, QueryValues, SortDirection};

/// Options of `GET /api/v2/projects/{projectId}/branches`.
#[derive(Clone, Debug, Default)]
pub struct BranchesListOptions {
    pub list: ListOptions,
    pub order_by: Vec<(BranchSortBy, SortDirection)>,
    /// Only the branch with this exact name.
    pub name: Option<String>,
}

impl Query for BranchesListOptions {
    fn values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        self.list.append_to(&mut values);
        values
            .order_by(&self.order_by)
            .string("name", self.name.as_deref());
        values
    }
}

impl Paginate for BranchesListOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl BranchesListOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_order_by(mut self, sort_by: BranchSortBy, direction: SortDirection) -> Self {
        self.order_by.push((sort_by, direction));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchSortBy {
    Id,
    Name,
    Title,
    CreatedAt,
    UpdatedAt,
    ExportPattern,
    Priority,
}

impl std::fmt::Display for BranchSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BranchSortBy::Id => "id",
                BranchSortBy::Name => "name",
                BranchSortBy::Title => "title",
                BranchSortBy::CreatedAt => "createdAt",
                BranchSortBy::UpdatedAt => "updatedAt",
                BranchSortBy::ExportPattern => "exportPattern",
                BranchSortBy::Priority => "priority",
            }
        )
    }
}
