use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ActivityDoc {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Activity name -> activity
#[derive(ToSchema)]
pub struct ActivitiesDoc(pub BTreeMap<String, ActivityDoc>);

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(OpenApi)]
#[openapi(
    info(title = "Mergington High School API", description = "View and sign up for extracurricular activities"),
    paths(
        crate::routes::health,
        crate::routes::activities::list_activities,
        crate::routes::activities::get_activity,
        crate::routes::activities::signup,
        crate::routes::activities::unregister,
    ),
    components(
        schemas(
            HealthResponse,
            ActivityDoc,
            ActivitiesDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "activities")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_activity_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/activities",
            "/activities/{activity_name}",
            "/activities/{activity_name}/signup",
            "/activities/{activity_name}/unregister",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
