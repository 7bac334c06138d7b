pub mod reducer;
pub mod state;
