//! Classifies NLA library mentions in structured survey records and folds
//! them into a reverse index of library → applications by relationship tier
//! (used, interested, mentioned).

pub mod classifier;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod index;
pub mod report;
