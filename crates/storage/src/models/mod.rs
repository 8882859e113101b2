pub mod event;
pub mod event_participant;
pub mod participant;
pub mod schedule;
pub mod schedule_change;
pub mod venue;

pub use event::Event;
pub use event_participant::EventParticipant;
pub(crate) use event_participant::EventParticipantRow;
pub use participant::{Gender, Participant};
pub use schedule::{Schedule, ScheduleSnapshot};
pub use schedule_change::{NewScheduleChange, ScheduleChange};
pub use venue::Venue;
