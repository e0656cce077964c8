use crate::config::Config;
use crate::db::{QuestionStore, ResultStore};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionStore,
    pub results: ResultStore,
    pub config: Config,
}

impl FromRef<AppState> for QuestionStore {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for ResultStore {
    fn from_ref(state: &AppState) -> Self {
        state.results.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
