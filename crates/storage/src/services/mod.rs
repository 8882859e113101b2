pub mod audit;
pub mod catalog;
pub mod eligibility;
pub mod results;
pub mod schedule;
