use super::common::{ListOptions, Paginate, Query, QueryValues, SortDirection};

/// Options of `GET /api/v2/projects/{projectId}/members`.
#[derive(Clone, Debug, Default)]
pub struct MembersListOptions {
    pub list: ListOptions,
    pub order_by: Vec<(MemberSortBy, SortDirection)>,
    pub search: Option<String>,
    pub role: Option<String>,
    pub language_id: Option<String>,
    /// Zero means any workflow step.
    pub workflow_step_id: u64,
}

impl Query for MembersListOptions {
    fn values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        self.list.append_to(&mut values);
        values
            .order_by(&self.order_by)
            .string("search", self.search.as_deref())
            .string("role", self.role.as_deref())
            .string("languageId", self.language_id.as_deref())
            .number("workflowStepId", self.workflow_step_id);
        values
    }
}

impl Paginate for MembersListOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl MembersListOptions {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_language_id(mut self, language_id: &str) -> Self {
        self.language_id = Some(language_id.to_string());
        self
    }

    pub fn with_order_by(mut self, sort_by: MemberSortBy, direction: SortDirection) -> Self {
        self.order_by.push((sort_by, direction));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberSortBy {
    Id,
    Username,
    FullName,
}

impl std::fmt::Display for MemberSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MemberSortBy::Id => "id",
                MemberSortBy::Username => "username",
                MemberSortBy::FullName => "fullName",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{MemberSortBy, MembersListOptions, Query, SortDirection};

    #[test]
    fn test_members_list_options() {
        insta::assert_snapshot!(MembersListOptions::default()
            .with_search("john doe")
            .with_role("manager")
            .with_language_id("uk")
            .with_order_by(MemberSortBy::Username, SortDirection::Desc)
            .encode(), @"languageId=uk&orderBy=username+desc&role=manager&search=john+doe");
    }
}
