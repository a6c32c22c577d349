use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    access::{Capabilities, PageAccess, Role},
    dto::{
        artists::{CreateArtistRequest, UpdateArtistRequest},
        auth::{LoginRequest, LoginResponse, RegisterRequest, SessionUser},
        customers::{CreateCustomerRequest, UpdateCustomerRequest},
        sales::RecordSaleRequest,
        submissions::{ApprovalOutcome, CreateSubmissionRequest, RejectSubmissionRequest},
    },
    models::{
        Artist, Artwork, Bill, BillDetail, Customer, Event, Exhibition, GalleryStats, Sale,
        Submission,
    },
    response::{ApiMessage, Created, ErrorBody},
    routes::{
        self, ApiIndex, ApiNotFound, access, artists, auth, catalog, customers, health, sales,
        submissions,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        routes::api_index,
        access::page_access,
        auth::login,
        auth::register,
        artists::list_artists,
        artists::create_artist,
        artists::update_artist,
        artists::delete_artist,
        catalog::list_artworks,
        catalog::list_available_artworks,
        catalog::list_exhibitions,
        catalog::list_events,
        catalog::gallery_stats,
        customers::list_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        sales::list_sales,
        sales::record_sale,
        sales::list_bills,
        sales::get_bill,
        submissions::list_submissions,
        submissions::create_submission,
        submissions::approve_submission,
        submissions::reject_submission
    ),
    components(
        schemas(
            Role,
            Capabilities,
            PageAccess,
            SessionUser,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            Artist,
            Artwork,
            Customer,
            Sale,
            Bill,
            BillDetail,
            Exhibition,
            Event,
            Submission,
            GalleryStats,
            CreateArtistRequest,
            UpdateArtistRequest,
            CreateCustomerRequest,
            UpdateCustomerRequest,
            RecordSaleRequest,
            CreateSubmissionRequest,
            RejectSubmissionRequest,
            ApprovalOutcome,
            ApiMessage,
            Created,
            ErrorBody,
            ApiIndex,
            ApiNotFound,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health and discovery endpoints"),
        (name = "Auth", description = "Login and registration"),
        (name = "Artists", description = "Artist endpoints"),
        (name = "Artworks", description = "Artwork catalogue"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Sales", description = "Sales endpoints"),
        (name = "Billing", description = "Billing endpoints"),
        (name = "Submissions", description = "Artwork submission review"),
        (name = "Gallery", description = "Exhibitions, events and dashboard stats"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
