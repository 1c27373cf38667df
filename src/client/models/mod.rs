pub mod messages;
pub mod pad;
pub mod prediction;
