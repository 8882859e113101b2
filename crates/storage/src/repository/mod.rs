pub mod event;
pub mod event_participant;
pub mod participant;
pub mod schedule;
pub mod schedule_change;
pub mod venue;
