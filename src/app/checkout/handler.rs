//! 结账处理器

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use super::model::{field_errors, CheckoutForm, FieldErrors};
use super::service::CheckoutError;
use super::view;
use crate::render::{page, PageMeta};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CheckoutQuery {
    #[serde(rename = "box")]
    pub box_id: Option<String>,
}

fn render_form_page(state: &AppState, form: &CheckoutForm, errors: &FieldErrors) -> String {
    let summary = state.checkout_service.summary(form.box_session());
    let body = view::render_form(
        form,
        errors,
        summary.as_ref(),
        &state.site.banner.delivery_areas,
        &state.assets,
    );
    let meta = PageMeta::new("/checkout").title("Checkout | Cmaa-foods");
    page(&state.site, &state.assets, &meta, &body)
}

pub async fn show(State(state): State<AppState>, Query(query): Query<CheckoutQuery>) -> Html<String> {
    let form = CheckoutForm {
        box_id: query.box_id,
        ..Default::default()
    };
    Html(render_form_page(&state, &form, &FieldErrors::new()))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> (StatusCode, Html<String>) {
    match state.checkout_service.submit(form.clone()).await {
        Ok(order) => {
            let body = view::render_success(&order, &state.assets);
            let meta = PageMeta::new("/checkout").title("Order Placed | Cmaa-foods");
            (
                StatusCode::OK,
                Html(page(&state.site, &state.assets, &meta, &body)),
            )
        }
        Err(CheckoutError::Invalid(errors)) => {
            let errors = field_errors(&errors);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_form_page(&state, &form, &errors)),
            )
        }
    }
}
