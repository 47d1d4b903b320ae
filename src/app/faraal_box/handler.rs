//! 盒子处理器
//!
//! JSON 接口供前端脚本使用，表单接口在脚本不可用时兜底。
//! 按钮与拖拽两种方式最终都调用 [`BoxService::add`](super::service::BoxService::add)。

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{Html, Json, Redirect},
    Form,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{BoxError, BoxView, MutationOutcome};
use super::service::BoxMutation;
use super::view;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub item_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GestureRequest {
    pub item_id: String,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    pub unique_id: String,
}

#[derive(Debug, Serialize)]
pub struct BoxSession {
    pub id: Uuid,
    #[serde(rename = "box")]
    pub view: BoxView,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, CoreError>;

pub async fn create_box(State(state): State<AppState>) -> Json<ApiResponse<BoxSession>> {
    let (id, view) = state.box_service.create();
    Json(ApiResponse::success(BoxSession { id, view }).with_message("盒子会话已创建"))
}

pub async fn get_box(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<BoxSession> {
    let view = state.box_service.snapshot(id)?;
    Ok(Json(ApiResponse::success(BoxSession { id, view })))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<BoxMutation> {
    let Json(req) = payload?;
    let mutation = state.box_service.add(id, &req.item_id)?;
    Ok(Json(ApiResponse::success(mutation)))
}

pub async fn apply_gesture(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<GestureRequest>, JsonRejection>,
) -> ApiResult<BoxMutation> {
    let Json(req) = payload?;
    let mutation = state
        .box_service
        .apply_gesture(id, &req.item_id, req.dx, req.dy)?;
    Ok(Json(ApiResponse::success(mutation)))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, unique_id)): Path<(Uuid, String)>,
) -> ApiResult<BoxMutation> {
    let mutation = state.box_service.remove(id, &unique_id)?;
    Ok(Json(ApiResponse::success(mutation)))
}

pub async fn clear_box(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<BoxMutation> {
    let mutation = state.box_service.clear(id)?;
    Ok(Json(ApiResponse::success(mutation)))
}

/// 盒子面板 HTML 片段，脚本在每次修改后用它替换面板
pub async fn panel_fragment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, CoreError> {
    let view = state.box_service.snapshot(id)?;
    Ok(Html(view::render_panel(id, &view, false, &state.assets)))
}

fn back_to_box(state: &AppState, id: Uuid, pulse: bool) -> Redirect {
    let query = if pulse {
        format!("/?box={}&pulse=1", id)
    } else {
        format!("/?box={}", id)
    };
    Redirect::to(&format!("{}#faraal-box", state.assets.link(&query)))
}

/// 会话已过期时回到首页重新开始
fn restart(state: &AppState) -> Redirect {
    Redirect::to(&format!("{}#faraal-box", state.assets.link("/")))
}

pub async fn add_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(req): Form<AddItemRequest>,
) -> Result<Redirect, CoreError> {
    match state.box_service.add(id, &req.item_id) {
        Ok(mutation) => Ok(back_to_box(
            &state,
            id,
            mutation.outcome == MutationOutcome::Added,
        )),
        Err(BoxError::SessionNotFound(_)) => Ok(restart(&state)),
        Err(e) => Err(e.into()),
    }
}

pub async fn remove_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(req): Form<RemoveItemRequest>,
) -> Result<Redirect, CoreError> {
    match state.box_service.remove(id, &req.unique_id) {
        Ok(_) => Ok(back_to_box(&state, id, false)),
        Err(BoxError::SessionNotFound(_)) => Ok(restart(&state)),
        Err(e) => Err(e.into()),
    }
}
