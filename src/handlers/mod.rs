pub mod admin_handlers;
pub mod contact_handlers;
pub mod health_handlers;
pub mod portfolio_handlers;
pub mod track_handlers;
