pub mod estimate;
pub mod history;
pub mod scale;
pub mod ticket;
pub mod timetable;
pub mod window;

pub use estimate::{cast_estimate, cast_or_zero};
pub use history::{DaySample, HistoryReconstructor};
pub use scale::{round_half_up, scale_series, ScaledSeries};
pub use ticket::{ChangeRecord, TicketId, TicketSnapshot, STATUS_FIELD};
pub use timetable::Timetable;
pub use window::DateWindow;
