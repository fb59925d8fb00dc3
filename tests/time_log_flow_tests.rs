// End to end in-memory tests for the time log command flow.
//
// A TimeTracker over the in-memory record store, driven by a manual clock. Covers the
// start -> pause -> resume -> finish -> remove lifecycle and the no-op paths around it.

use chrono::{DateTime, Duration, Utc};
use rstest::{fixture, rstest};
use std::sync::Arc;

use time_logs::modules::time_logs::adapters::outbound::time_log_repository::{
    DEFAULT_TABLE, TimeLogRepository,
};
use time_logs::modules::time_logs::application::time_tracker::TimeTracker;
use time_logs::modules::time_logs::core::elapsed::ElapsedBaseline;
use time_logs::modules::time_logs::core::outcome::{CommandOutcome, IgnoreReason, RejectReason};
use time_logs::modules::time_logs::core::state::{LogStatus, Pause, TimeLog};
use time_logs::shared::core::clock::{Clock, ManualClock};
use time_logs::shared::infrastructure::record_store::RecordStore;
use time_logs::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;

struct Flow {
    store: Arc<InMemoryRecordStore>,
    clock: Arc<ManualClock>,
    tracker: TimeTracker<InMemoryRecordStore>,
}

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn at(seconds: i64) -> DateTime<Utc> {
    t0() + Duration::seconds(seconds)
}

fn flow_with(baseline: ElapsedBaseline) -> Flow {
    let store = Arc::new(InMemoryRecordStore::new());
    let clock = Arc::new(ManualClock::new(t0()));
    let tracker = TimeTracker::new(
        TimeLogRepository::new(DEFAULT_TABLE, store.clone()),
        clock.clone(),
        baseline,
    );
    Flow {
        store,
        clock,
        tracker,
    }
}

#[fixture]
fn flow() -> Flow {
    flow_with(ElapsedBaseline::ZeroWhenFinished)
}

impl Flow {
    async fn only_log(&self) -> TimeLog {
        let logs = self.tracker.snapshot().await;
        assert_eq!(logs.len(), 1, "expected exactly one log, got {logs:?}");
        logs.into_iter().next().unwrap()
    }

    /// Runs the full lifecycle: start at 0, pause at 30, resume at 90, finish at 120.
    async fn run_lifecycle(&self) -> String {
        self.tracker.start("write report").await.unwrap();
        let id = self.only_log().await.id;
        self.clock.set(at(30));
        self.tracker.pause(&id).await.unwrap();
        self.clock.set(at(90));
        self.tracker.resume(&id).await.unwrap();
        self.clock.set(at(120));
        self.tracker.finish(&id).await.unwrap();
        id
    }
}

#[rstest]
#[tokio::test]
async fn it_should_start_a_running_log(flow: Flow) {
    let outcome = flow.tracker.start("write report").await.unwrap();
    assert_eq!(outcome, CommandOutcome::Applied);

    let log = flow.only_log().await;
    assert_eq!(log.label, "write report");
    assert_eq!(log.start_at, t0());
    assert_eq!(log.status(), LogStatus::Running);
    assert!(log.pauses.is_empty());
    assert_eq!(flow.tracker.elapsed(&log, at(30)), 30);
}

#[rstest]
#[tokio::test]
async fn it_should_freeze_elapsed_time_while_paused(flow: Flow) {
    flow.tracker.start("write report").await.unwrap();
    let id = flow.only_log().await.id;

    flow.clock.set(at(30));
    assert_eq!(flow.tracker.pause(&id).await.unwrap(), CommandOutcome::Applied);

    let log = flow.only_log().await;
    assert_eq!(log.status(), LogStatus::Paused);
    assert_eq!(log.pauses, vec![Pause::open(at(30))]);
    assert_eq!(flow.tracker.elapsed(&log, at(90)), 30);
}

#[rstest]
#[tokio::test]
async fn it_should_close_the_pause_on_resume(flow: Flow) {
    flow.tracker.start("write report").await.unwrap();
    let id = flow.only_log().await.id;
    flow.clock.set(at(30));
    flow.tracker.pause(&id).await.unwrap();

    flow.clock.set(at(90));
    assert_eq!(flow.tracker.resume(&id).await.unwrap(), CommandOutcome::Applied);

    let log = flow.only_log().await;
    assert_eq!(log.status(), LogStatus::Running);
    assert_eq!(log.pauses, vec![Pause::closed(at(30), at(90))]);
    assert_eq!(flow.tracker.elapsed(&log, at(120)), 60);
}

#[rstest]
#[case::zero_when_finished(ElapsedBaseline::ZeroWhenFinished, -60, "-1m 0s")]
#[case::end_at(ElapsedBaseline::EndAt, 60, "1m 0s")]
#[tokio::test]
async fn it_should_finish_and_report_elapsed_per_baseline(
    #[case] baseline: ElapsedBaseline,
    #[case] expected: i64,
    #[case] display: &str,
) {
    let flow = flow_with(baseline);
    flow.run_lifecycle().await;

    let log = flow.only_log().await;
    assert_eq!(log.status(), LogStatus::Finished);
    assert_eq!(log.end_at, Some(at(120)));
    assert_eq!(flow.tracker.elapsed(&log, at(120)), expected);

    flow.clock.set(at(10_000));
    let views = flow.tracker.views().await;
    assert_eq!(views[0].elapsed_seconds, expected);
    assert_eq!(views[0].elapsed_display, display);
}

#[rstest]
#[tokio::test]
async fn it_should_close_an_open_pause_when_finishing(flow: Flow) {
    flow.tracker.start("write report").await.unwrap();
    let id = flow.only_log().await.id;
    flow.clock.set(at(30));
    flow.tracker.pause(&id).await.unwrap();

    flow.clock.set(at(45));
    flow.tracker.finish(&id).await.unwrap();

    let log = flow.only_log().await;
    assert_eq!(log.pauses, vec![Pause::closed(at(30), at(45))]);
    assert_eq!(log.end_at, Some(at(45)));
}

#[rstest]
#[tokio::test]
async fn it_should_leave_a_finished_log_untouched(flow: Flow) {
    let id = flow.run_lifecycle().await;
    let finished = flow.only_log().await;
    let operations = flow.store.operation_count();

    flow.clock.set(at(200));
    for outcome in [
        flow.tracker.pause(&id).await.unwrap(),
        flow.tracker.resume(&id).await.unwrap(),
        flow.tracker.finish(&id).await.unwrap(),
    ] {
        assert_eq!(outcome, CommandOutcome::Ignored(IgnoreReason::AlreadyFinished));
    }

    let log = flow.only_log().await;
    assert_eq!(log.pauses, finished.pauses);
    assert_eq!(log.end_at, finished.end_at);
    assert_eq!(flow.store.operation_count(), operations);
}

#[rstest]
#[tokio::test]
async fn it_should_make_repeated_pause_and_resume_no_ops(flow: Flow) {
    flow.tracker.start("write report").await.unwrap();
    let id = flow.only_log().await.id;

    assert_eq!(
        flow.tracker.resume(&id).await.unwrap(),
        CommandOutcome::Ignored(IgnoreReason::NotPaused)
    );
    flow.clock.set(at(30));
    flow.tracker.pause(&id).await.unwrap();
    flow.clock.set(at(40));
    assert_eq!(
        flow.tracker.pause(&id).await.unwrap(),
        CommandOutcome::Ignored(IgnoreReason::NotRunning)
    );

    let log = flow.only_log().await;
    assert_eq!(log.pauses, vec![Pause::open(at(30))]);
    assert!(log.has_well_formed_pauses());
}

#[rstest]
#[tokio::test]
async fn it_should_remove_and_then_ignore_the_stale_id(flow: Flow) {
    flow.tracker.start("write report").await.unwrap();
    let stale = flow.only_log().await;

    let outcome = flow.tracker.remove(&stale.id, &|_: &str| true).await.unwrap();
    assert_eq!(outcome, CommandOutcome::Applied);
    assert!(flow.tracker.snapshot().await.is_empty());
    assert!(flow.store.query(DEFAULT_TABLE, None, None).await.unwrap().is_empty());

    for outcome in [
        flow.tracker.pause(&stale.id).await.unwrap(),
        flow.tracker.resume(&stale.id).await.unwrap(),
        flow.tracker.finish(&stale.id).await.unwrap(),
    ] {
        assert_eq!(outcome, CommandOutcome::Ignored(IgnoreReason::StaleReference));
    }
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_log_when_removal_is_declined(flow: Flow) {
    flow.tracker.start("write report").await.unwrap();
    let id = flow.only_log().await.id;
    let operations = flow.store.operation_count();

    let outcome = flow.tracker.remove(&id, &|_: &str| false).await.unwrap();
    assert_eq!(outcome, CommandOutcome::Ignored(IgnoreReason::NotConfirmed));
    assert_eq!(flow.tracker.snapshot().await.len(), 1);
    assert_eq!(flow.store.operation_count(), operations);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
#[tokio::test]
async fn it_should_reject_blank_labels_without_writing(#[case] label: &str) {
    let flow = flow_with(ElapsedBaseline::default());
    let outcome = flow.tracker.start(label).await.unwrap();
    assert_eq!(outcome, CommandOutcome::Rejected(RejectReason::EmptyLabel));
    assert_eq!(flow.store.operation_count(), 0);
}

#[rstest]
#[tokio::test]
async fn it_should_list_newest_first_and_pick_up_foreign_writes(flow: Flow) {
    flow.tracker.mount().await.unwrap();
    flow.tracker.start("first").await.unwrap();
    flow.clock.advance(Duration::seconds(60));
    flow.tracker.start("second").await.unwrap();

    let labels: Vec<String> = flow
        .tracker
        .snapshot()
        .await
        .into_iter()
        .map(|log| log.label)
        .collect();
    assert_eq!(labels, vec!["second", "first"]);

    let id = flow.tracker.snapshot().await[1].id.clone();
    flow.store.delete(DEFAULT_TABLE, &id).await.unwrap();
    let mut remaining = 0;
    for _ in 0..50 {
        remaining = flow.tracker.snapshot().await.len();
        if remaining == 1 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(remaining, 1);
    flow.tracker.unmount();
}

#[rstest]
#[tokio::test]
async fn it_should_keep_exactly_one_state_through_the_lifecycle(flow: Flow) {
    let id = flow.run_lifecycle().await;
    assert!(!id.is_empty());
    let log = flow.only_log().await;
    let states = [log.is_running(), log.is_paused(), log.is_finished()];
    assert_eq!(states.iter().filter(|state| **state).count(), 1);
    assert!(log.has_well_formed_pauses());
    assert_eq!(flow.clock.now(), at(120));
}

#[rstest]
#[case::pause("pause")]
#[case::resume("resume")]
#[case::finish("finish")]
#[tokio::test]
async fn it_should_ignore_a_log_deleted_by_another_client(#[case] command: &str) {
    let flow = flow_with(ElapsedBaseline::default());
    flow.tracker.start("write report").await.unwrap();
    let id = flow.only_log().await.id;
    if command == "resume" {
        flow.clock.set(at(30));
        flow.tracker.pause(&id).await.unwrap();
    }

    // Unmounted: the snapshot still holds the row after it is gone from the store.
    flow.store.delete(DEFAULT_TABLE, &id).await.unwrap();
    assert_eq!(flow.tracker.snapshot().await.len(), 1);

    flow.clock.set(at(60));
    let outcome = match command {
        "pause" => flow.tracker.pause(&id).await,
        "resume" => flow.tracker.resume(&id).await,
        _ => flow.tracker.finish(&id).await,
    };

    assert_eq!(
        outcome.unwrap(),
        CommandOutcome::Ignored(IgnoreReason::StaleReference)
    );
    assert!(flow.tracker.snapshot().await.is_empty());
    assert!(flow.store.query(DEFAULT_TABLE, None, None).await.unwrap().is_empty());
}
