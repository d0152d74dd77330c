use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    shared::api::ApiResponse,
    skills::{
        adapter::incoming::web::routes::TechnicalSkillResponse,
        application::domain::TechnicalSkillSearchCriteria,
    },
    AppState,
};

/// Search technical skills.
///
/// `name` is a case-insensitive substring match and takes priority over
/// `category`, which accepts either the internal name (`CODE_QUALITY`) or the
/// display label (`Code Quality`). With neither parameter every skill is
/// returned. Technical skills are not localized, so `Accept-Language` is
/// ignored.
#[utoipa::path(
    get,
    path = "/api/v1/skills/technical",
    tag = "skills",
    params(
        ("name" = Option<String>, Query, description = "Substring of the skill name"),
        ("category" = Option<String>, Query, description = "Category name or label")
    ),
    responses(
        (status = 200, description = "Matching technical skills", body = inline(SuccessResponse<Vec<TechnicalSkillResponse>>)),
        (status = 404, description = "No technical skill matched", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "TECHNICAL_SKILLS_NOT_FOUND",
                    "message": "No technical skills match the given criteria"
                }
            })
        ),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/skills/technical")]
pub async fn search_technical_skills_handler(
    query: web::Query<TechnicalSkillSearchCriteria>,
    data: web::Data<AppState>,
) -> impl Responder {
    let criteria = query.into_inner();

    match data.search_technical_skills.execute(criteria.clone()).await {
        Ok(skills) if skills.is_empty() => {
            tracing::debug!(?criteria, "Technical skill search matched nothing");
            ApiResponse::not_found(
                "TECHNICAL_SKILLS_NOT_FOUND",
                "No technical skills match the given criteria",
            )
        }
        Ok(skills) => ApiResponse::success(
            skills
                .into_iter()
                .map(TechnicalSkillResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_error(err),
    }
}
