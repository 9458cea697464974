pub mod aim;
pub mod run_state;
pub mod speed;
pub mod time;
