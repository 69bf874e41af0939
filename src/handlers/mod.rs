pub mod estimate;
pub mod health;
pub mod rates;

pub use estimate::AppState;
