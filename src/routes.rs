use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, X_CONTENT_TYPE_OPTIONS};
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::{select_suite, Gallery};
use crate::chat::{Assistant, ChatRequest, ChatResponse};
use crate::forms::careers::{ApplicationForm, CareersAction, SUBMISSION_FAILED};
use crate::forms::contact::ContactForm;
use crate::models::SiteContent;
use crate::pages::{
    AboutTemplate, BlogTemplate, CareersTemplate, ContactTemplate, HomeTemplate, Layout,
    NotFoundTemplate, ProductTemplate, UseCasesTemplate, LINKEDIN_URL,
};
use crate::submit::{Gateway, Submission};

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub gateway: Arc<Gateway>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(content: SiteContent, gateway: Gateway, assistant: Assistant) -> Self {
        Self {
            content: Arc::new(content),
            gateway: Arc::new(gateway),
            assistant: Arc::new(assistant),
        }
    }

    fn layout(&self, path: &str) -> Layout {
        Layout::new(&self.content, path)
    }
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ))
        .service(ServeDir::new(static_dir));

    Router::new()
        .route("/", get(home))
        .route("/about-us", get(about))
        .route("/careers", get(careers).post(careers_submit))
        .route("/carrers", get(|| async { Redirect::permanent("/careers") }))
        .route("/blog", get(blog))
        .route("/use-cases", get(use_cases))
        .route("/product", get(product))
        .route("/contact-us", get(contact).post(contact_submit))
        .route("/api/chat", post(chat))
        .nest_service("/static", assets)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate {
        layout: state.layout("/"),
        features: state.content.features.clone(),
        pillars: state.content.pillars.clone(),
        products: state.content.products.clone(),
    }
}

async fn about(State(state): State<AppState>) -> AboutTemplate {
    AboutTemplate {
        layout: state.layout("/about-us"),
        team: state.content.team.clone(),
        values: state.content.values.clone(),
    }
}

async fn careers(State(state): State<AppState>) -> CareersTemplate {
    CareersTemplate::new(state.layout("/careers"), Default::default())
}

async fn careers_submit(
    State(state): State<AppState>,
    Form(form): Form<ApplicationForm>,
) -> CareersTemplate {
    let (mut application, action) = form.into_parts();
    let layout = state.layout("/careers");

    if action != CareersAction::Submit {
        application.apply(&action);
        return CareersTemplate::new(layout, application);
    }

    if let Err(rejection) = application.validate() {
        let fields: Vec<_> = rejection.errors.fields().collect();
        tracing::debug!(?fields, "application rejected");
        let mut page = CareersTemplate::new(layout, application);
        page.banner = Some(rejection.message);
        page.errors = rejection.errors;
        return page;
    }

    let submission = Submission::Application(application.clone());
    let mut page = CareersTemplate::new(layout, application);
    match state.gateway.deliver(&submission).await {
        Ok(receipt) => page.submitted = Some(receipt),
        Err(e) => {
            tracing::error!(error = %e, "application submission failed");
            page.banner = Some(SUBMISSION_FAILED);
        }
    }
    page
}

async fn blog(State(state): State<AppState>) -> BlogTemplate {
    BlogTemplate {
        layout: state.layout("/blog"),
        posts: state.content.posts.clone(),
        linkedin_url: LINKEDIN_URL,
    }
}

#[derive(Debug, Deserialize)]
struct GalleryQuery {
    category: Option<String>,
}

async fn use_cases(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> UseCasesTemplate {
    UseCasesTemplate {
        layout: state.layout("/use-cases"),
        gallery: Gallery::build(&state.content.use_cases, query.category.as_deref()),
    }
}

#[derive(Debug, Deserialize)]
struct SuiteQuery {
    suite: Option<String>,
}

async fn product(
    State(state): State<AppState>,
    Query(query): Query<SuiteQuery>,
) -> ProductTemplate {
    let selected = select_suite(&state.content.products, query.suite.as_deref()).clone();
    ProductTemplate {
        layout: state.layout("/product"),
        suites: state.content.products.clone(),
        selected,
    }
}

async fn contact(State(state): State<AppState>) -> ContactTemplate {
    ContactTemplate::new(
        state.layout("/contact-us"),
        state.content.contact_methods.clone(),
        ContactForm::default(),
    )
}

async fn contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> ContactTemplate {
    let layout = state.layout("/contact-us");
    let methods = state.content.contact_methods.clone();

    let errors = form.validate();
    if !errors.is_empty() {
        let fields: Vec<_> = errors.fields().collect();
        tracing::debug!(?fields, "contact message rejected");
        let mut page = ContactTemplate::new(layout, methods, form);
        page.errors = errors;
        return page;
    }

    match state.gateway.deliver(&Submission::Contact(form.clone())).await {
        Ok(receipt) => {
            let mut page = ContactTemplate::new(layout, methods, ContactForm::default());
            page.submitted = Some(receipt);
            page
        }
        Err(e) => {
            tracing::error!(error = %e, "contact submission failed");
            let mut page = ContactTemplate::new(layout, methods, form);
            page.banner = Some(SUBMISSION_FAILED);
            page
        }
    }
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let messages = state
        .assistant
        .exchange(request.history, &request.input)
        .await;
    Json(ChatResponse { messages })
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: state.layout(uri.path()),
        },
    )
}
