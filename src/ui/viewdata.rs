use crate::pipeline::FrameOutput;

/// Snapshot handed from the worker to the UI thread each tick.
#[derive(Clone, Debug, Default)]
pub struct UiFrame {
    pub scene: FrameOutput,
    pub frame_index: u64,
}

impl UiFrame {
    pub fn empty() -> Self {
        Self::default()
    }
}
