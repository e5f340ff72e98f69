pub mod timestamps;
pub mod playback;

pub use timestamps::{
    create_timestamps,
    create_timestamps_with_floor,
    DEFAULT_WORDS_PER_MINUTE,
    MIN_LINE_SEC,
};
pub use playback::{AudioHandle, PlaybackTracker, NO_ACTIVE_LINE};
