use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /api/documents`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    /// Owner of the document
    #[validate(range(min = 1))]
    pub user_id: i32,

    /// May be the owner
    #[validate(range(min = 1))]
    pub reviewer_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub description: Option<String>,
    pub user_id: i32,
    pub reviewer_id: i32,
}

impl From<CreateDocument> for NewDocument {
    fn from(input: CreateDocument) -> Self {
        Self {
            name: input.name,
            description: input.description,
            user_id: input.user_id,
            reviewer_id: input.reviewer_id,
        }
    }
}

/// Actions recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Create,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::Create => "create",
        }
    }
}

impl std::fmt::Display for LogAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewLog {
    pub action: LogAction,
    pub document_id: i32,
    pub user_id: i32,
    pub description: String,
}

impl NewLog {
    /// Entry for a freshly created document, attributed to `actor_id`
    pub fn document_created(document_id: i32, actor_id: i32, name: &str) -> Self {
        Self {
            action: LogAction::Create,
            document_id,
            user_id: actor_id,
            description: format!("created document {}", name),
        }
    }
}
