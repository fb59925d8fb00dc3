use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_logs::core::state::Pause;
use crate::modules::time_logs::use_cases::list_time_logs::projection::TimeLogView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPause {
    pub from: String,
    pub to: Option<String>,
}

impl From<Pause> for GqlPause {
    fn from(p: Pause) -> Self {
        Self {
            from: p.from.to_rfc3339(),
            to: p.to.map(|to| to.to_rfc3339()),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeLog {
    pub id: String,
    pub label: String,
    pub start_at: String,
    pub end_at: Option<String>,
    pub pauses: Vec<GqlPause>,
    pub status: String,
    pub elapsed_seconds: i64,
    pub elapsed_display: String,
}

impl From<TimeLogView> for GqlTimeLog {
    fn from(v: TimeLogView) -> Self {
        Self {
            id: v.id,
            label: v.label,
            start_at: v.start_at.to_rfc3339(),
            end_at: v.end_at.map(|end_at| end_at.to_rfc3339()),
            pauses: v.pauses.into_iter().map(Into::into).collect(),
            status: v.status.to_string(),
            elapsed_seconds: v.elapsed_seconds,
            elapsed_display: v.elapsed_display,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn time_logs(&self, context: &Context<'_>, refresh: Option<bool>) -> GqlResult<Vec<GqlTimeLog>> {
        let state = context.data_unchecked::<AppState>();
        if refresh.unwrap_or(false) {
            state
                .tracker
                .refresh()
                .await
                .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        }
        Ok(state.tracker.views().await.into_iter().map(Into::into).collect())
    }
}
