mod method;
mod period_unit;
mod schedule;
mod schedule_input;

pub use method::DepreciationMethod;
pub use period_unit::PeriodUnit;
pub use schedule::{Schedule, ScheduleRow};
pub use schedule_input::ScheduleInput;
