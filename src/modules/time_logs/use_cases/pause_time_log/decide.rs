// Pure decision function for pausing a timed task.
//
// Responsibilities
// - Only a running log can be paused. This keeps at most one open pause per log.
// - Append an open pause and hand back the full sequence for a wholesale replace.

use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::decision::Decision;
use crate::modules::time_logs::core::outcome::IgnoreReason;
use crate::modules::time_logs::core::state::{LogStatus, Pause, TimeLog};
use crate::modules::time_logs::use_cases::pause_time_log::command::PauseTimeLog;

pub fn decide_pause(log: Option<&TimeLog>, command: PauseTimeLog) -> Decision {
    let Some(log) = log else {
        return Decision::Ignored {
            reason: IgnoreReason::StaleReference,
        };
    };
    match log.status() {
        LogStatus::Running => {
            let mut pauses = log.pauses.clone();
            pauses.push(Pause::open(command.at));
            Decision::Accepted {
                change: LogChange::ReplacePauses {
                    id: log.id.clone(),
                    pauses,
                },
            }
        }
        LogStatus::Paused => Decision::Ignored {
            reason: IgnoreReason::NotRunning,
        },
        LogStatus::Finished => Decision::Ignored {
            reason: IgnoreReason::AlreadyFinished,
        },
    }
}
