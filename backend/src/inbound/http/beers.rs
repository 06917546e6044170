//! Beer listing handler.
//!
//! ```text
//! GET /good-beers
//! [{"id":1,"name":"Good Morning"},{"id":2,"name":"Kentucky Brunch Brand Stout"}]
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Beer;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// JSON shape of a beer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BeerResponse {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Beer name.
    #[schema(example = "Good Morning")]
    pub name: String,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id().get(),
            name: beer.name().to_string(),
        }
    }
}

/// List beers whose name is not excluded.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use beers_backend::inbound::http::beers::good_beers;
///
/// let app = App::new().service(good_beers);
/// ```
#[utoipa::path(
    get,
    path = "/good-beers",
    responses(
        (status = 200, description = "Good beers in store order", body = [BeerResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Beer store unavailable", body = ErrorSchema)
    ),
    tags = ["beers"],
    operation_id = "listGoodBeers"
)]
#[get("/good-beers")]
pub async fn good_beers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BeerResponse>>> {
    let beers = state.good_beers.good_beers().await?;
    Ok(web::Json(beers.into_iter().map(BeerResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::MockGoodBeersQuery;
    use crate::domain::{BeerId, BeerName, Error};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn beer(id: i64, name: &str) -> Beer {
        Beer::new(BeerId::new(id), BeerName::new(name).expect("valid name"))
    }

    async fn get_good_beers(query: MockGoodBeersQuery) -> actix_web::dev::ServiceResponse {
        let state = web::Data::new(HttpState::new(Arc::new(query)));
        let app =
            actix_test::init_service(App::new().app_data(state).service(good_beers)).await;
        actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/good-beers").to_request(),
        )
        .await
    }

    #[actix_web::test]
    async fn serialises_beers_as_id_and_name_objects() {
        let mut query = MockGoodBeersQuery::new();
        query
            .expect_good_beers()
            .times(1)
            .return_once(|| Ok(vec![beer(1, "Good Morning"), beer(5, "Very Hazy")]));

        let response = get_good_beers(query).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Good Morning" },
                { "id": 5, "name": "Very Hazy" },
            ])
        );
    }

    #[actix_web::test]
    async fn empty_result_is_an_empty_array() {
        let mut query = MockGoodBeersQuery::new();
        query.expect_good_beers().return_once(|| Ok(Vec::new()));

        let response = get_good_beers(query).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }

    #[rstest]
    #[case(Error::service_unavailable("pool exhausted"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("relation missing"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn store_failures_become_server_errors(
        #[case] error: Error,
        #[case] expected: StatusCode,
    ) {
        let mut query = MockGoodBeersQuery::new();
        query.expect_good_beers().return_once(move || Err(error));

        let response = get_good_beers(query).await;

        assert_eq!(response.status(), expected);
    }
}
