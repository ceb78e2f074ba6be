use super::common::{ListOptions, Paginate, Query, QueryValues, SortDirection};

/// Options of `GET /api/v2/projects/{projectId}/labels`.
#[derive(Clone, Debug, Default)]
pub struct LabelsListOptions {
    pub list: ListOptions,
    pub order_by: Vec<(LabelSortBy, SortDirection)>,
    pub is_system: Option<bool>,
}

impl Query for LabelsListOptions {
    fn values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        self.list.append_to(&mut values);
        values
            .order_by(&self.order_by)
            .flag("isSystem", self.is_system);
        values
    }
}

impl Paginate for LabelsListOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl LabelsListOptions {
    pub fn with_system(mut self, is_system: bool) -> Self {
        self.is_system = Some(is_system);
        self
    }

    pub fn with_order_by(mut self, sort_by: LabelSortBy, direction: SortDirection) -> Self {
        self.order_by.push((sort_by, direction));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSortBy {
    Id,
    Title,
}

impl std::fmt::Display for LabelSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LabelSortBy::Id => "id",
                LabelSortBy::Title => "title",
            }
        )
    }
}

/// Filter of `DELETE /api/v2/projects/{projectId}/labels/{labelId}/strings`.
#[derive(Clone, Debug, Default)]
pub struct StringIdsOptions {
    pub string_ids: Vec<u64>,
}

impl Query for StringIdsOptions {
    fn values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values.list("stringIds", &self.string_ids);
        values
    }
}
