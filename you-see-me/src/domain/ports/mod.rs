pub mod lookup;
pub mod presenter;
