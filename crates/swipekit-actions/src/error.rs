use swipekit_core::RowId;

/// Misuse of a row handle by the host.
///
/// Gesture input never produces errors; only operations that address an
/// action or row explicitly can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeError {
    ActionIndexOutOfRange { index: usize, len: usize },
    RowUnmounted { row: RowId },
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::ActionIndexOutOfRange { index, len } => {
                write!(f, "action index {index} out of range for {len} actions")
            }
            SwipeError::RowUnmounted { row } => write!(f, "{row} is no longer mounted"),
        }
    }
}

impl std::error::Error for SwipeError {}
