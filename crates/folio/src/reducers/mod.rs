pub mod about_reducer;
pub mod app_reducer;
pub mod certificates_reducer;
pub mod contact_reducer;
pub mod portfolio_reducer;
pub mod splash_reducer;
