//! Layout measurement feedback.
//!
//! Rows never compute their own sizes. The rendering layer measures the row
//! content and each action after every layout pass and reports the result
//! upward through a [`MeasurementSink`].

use swipekit_ui_graphics::Size;

pub trait MeasurementSink {
    /// Size of the row content itself.
    fn report_content_size(&self, size: Size);

    /// Size of the action at `index` in the order the actions were supplied.
    /// Later reports for the same index replace earlier ones.
    fn report_action_size(&self, index: usize, size: Size);
}
