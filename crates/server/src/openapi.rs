use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct HousingLocationDoc {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub photo: String,
    pub available_units: u32,
    pub wifi: bool,
    pub laundry: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::locations::list_locations,
        crate::routes::locations::get_location,
    ),
    components(
        schemas(
            HealthResponse,
            HousingLocationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "locations"),
    )
)]
pub struct ApiDoc;
