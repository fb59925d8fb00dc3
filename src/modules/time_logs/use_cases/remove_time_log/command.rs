// Command data type for deleting a log.
//
// `confirmed` records the answer of the interactive confirmation step taken before dispatch.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveTimeLog {
    pub id: String,
    pub confirmed: bool,
}

/// Asks the operator whether a log may be deleted. Deletion is permanent.
pub trait ConfirmRemoval: Send + Sync {
    fn confirm(&self, id: &str) -> bool;
}

impl<F> ConfirmRemoval for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, id: &str) -> bool {
        self(id)
    }
}
