use server_api::ViewerContext;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) viewer: ViewerContext,
    pub(crate) max_body_bytes: usize,
}
