pub mod cli;
pub mod cloud;
pub mod error;
pub mod input;
pub mod job;
pub mod net;
pub mod report;
pub mod runtime;
