use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /api/workshops`; `date` is an ISO-8601 calendar date
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorkshop {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[schema(value_type = String, format = Date, example = "2025-03-14")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewWorkshop {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl From<CreateWorkshop> for NewWorkshop {
    fn from(input: CreateWorkshop) -> Self {
        Self {
            name: input.name,
            description: input.description,
            date: input.date,
        }
    }
}
