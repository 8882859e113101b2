pub mod event;
pub mod participant;
pub mod result;
pub mod schedule;
pub mod venue;
