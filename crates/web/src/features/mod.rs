pub mod events;
pub mod participants;
pub mod schedules;
pub mod venues;
