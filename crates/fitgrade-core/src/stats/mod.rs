//! Statistics module for fitgrade
//!
//! Pure aggregation over already-fetched session data: gap-filled weekly
//! series, push-up tempo windows, running split chunks, and calendar presence.

mod chunk;
mod presence;
mod weekly;
mod window;

pub use weekly::{WeeklySummary, WeeklySummaryBuilder, WEEK_LEN};

pub use window::{count_by_window, pushup_tempo, PUSHUP_TEMPO_BOUNDARIES};

pub use chunk::{
    average_pace, format_clock, format_pace, per_kilometer_splits, sum_chunks,
    RUNNING_SPLIT_COUNT, SPLITS_PER_KILOMETER,
};

pub use presence::{PresenceFlag, PresenceIndex};
