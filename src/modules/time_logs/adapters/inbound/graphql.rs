// GraphQL mutations for the time log commands.
//
// Each mutation answers with the outcome text ("applied", "ignored: not paused", ...). Store
// failures become GraphQL errors.

use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_logs::application::errors::ApplicationError;
use crate::modules::time_logs::core::outcome::CommandOutcome;
use crate::shell::state::AppState;

fn to_gql(result: Result<CommandOutcome, ApplicationError>) -> GqlResult<String> {
    result
        .map(|outcome| outcome.to_string())
        .map_err(|e| async_graphql::Error::new(e.to_string()))
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_time_log(&self, context: &Context<'_>, label: String) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.tracker.start(&label).await)
    }

    async fn pause_time_log(&self, context: &Context<'_>, id: ID) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.tracker.pause(&id).await)
    }

    async fn resume_time_log(&self, context: &Context<'_>, id: ID) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.tracker.resume(&id).await)
    }

    async fn finish_time_log(&self, context: &Context<'_>, id: ID) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.tracker.finish(&id).await)
    }

    async fn remove_time_log(
        &self,
        context: &Context<'_>,
        id: ID,
        confirm: bool,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.tracker.remove(&id, &move |_: &str| confirm).await)
    }
}
