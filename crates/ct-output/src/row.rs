//! Plain data row types written by output backends.

use ct_terminal::TimedNotification;

/// One notification, flattened into columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub time:      u64,
    /// Snake-case transition name, e.g. `"berthed"`.
    pub kind:      &'static str,
    pub vessel:    u32,
    /// Container sequence number; `None` for vessel-level transitions.
    pub container: Option<u32>,
    /// Berth or crane label; `None` where the transition names neither.
    pub label:     Option<u32>,
    /// The status line without its time prefix.
    pub message:   String,
}

impl From<&TimedNotification> for NotificationRow {
    fn from(line: &TimedNotification) -> Self {
        let n = &line.notification;
        Self {
            time:      line.at.0,
            kind:      n.kind(),
            vessel:    n.vessel().0,
            container: n.container(),
            label:     n.label(),
            message:   n.to_string(),
        }
    }
}
