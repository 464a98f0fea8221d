pub mod add;
pub mod backup;
pub mod clock;
pub mod import;
pub mod schedule;
pub mod stats;
