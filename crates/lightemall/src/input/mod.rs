pub mod intent;
pub mod layout;
pub mod queue;
