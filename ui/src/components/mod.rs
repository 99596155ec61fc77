pub mod api_client;
pub mod app;
pub mod dashboard_view;
pub mod landing;
pub mod login_view;
pub mod menu_view;
pub mod orders_poll;
pub mod session_store;
