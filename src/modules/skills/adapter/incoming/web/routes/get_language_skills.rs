use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    shared::api::{ApiResponse, RequestLanguage},
    skills::adapter::incoming::web::routes::LanguageSkillResponse,
    AppState,
};

/// List language skills
#[utoipa::path(
    get,
    path = "/api/v1/skills/languages",
    tag = "skills",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "List language skills", body = inline(SuccessResponse<Vec<LanguageSkillResponse>>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/skills/languages")]
pub async fn get_language_skills_handler(language: RequestLanguage, data: web::Data<AppState>) -> impl Responder {
    match data.list_language_skills.execute(language.0).await {
        Ok(items) => ApiResponse::success(items.into_iter().map(LanguageSkillResponse::from).collect::<Vec<_>>()),
        Err(err) => map_list_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::{
        shared::api::DefaultLanguage,
        shared::domain::Language,
        tests::support::{
            app_state_builder::TestAppStateBuilder, fixtures::language_skills,
            stubs::StubListUseCase,
        },
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn list_language_skills_serializes_every_dimension() {
        // Arrange
        let stub = StubListUseCase::success(language_skills());
        let state = TestAppStateBuilder::default()
            .with_list_language_skills(stub.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(DefaultLanguage::default()))
                .service(get_language_skills_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/skills/languages")
            .insert_header(("Accept-Language", "en_EN"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["id"], 2354);
        assert_eq!(json["data"][0]["spoken_interaction"], "C2");
        assert_eq!(stub.last_language(), Some(Language::EnEn));
    }

    #[actix_web::test]
    async fn list_language_skills_rejects_unsupported_language() {
        let state = TestAppStateBuilder::default()
            .with_list_language_skills(StubListUseCase::success(language_skills()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_language_skills_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/skills/languages")
            .insert_header(("Accept-Language", "de_DE"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "INVALID_LANGUAGE");
    }
}
