pub mod api_utils;
pub mod components;
pub mod crud_service;
pub mod date_utils;
pub mod icons;
pub mod load_state;
pub mod menu;
pub mod modal;
pub mod notice;
pub mod page_frame;
