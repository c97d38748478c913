pub mod api_utils;
pub mod config;
pub mod confirm_dialog;
pub mod crud;
pub mod crud_page;
pub mod edit_form;
pub mod i18n;
pub mod icons;
pub mod notify;
pub mod storage;
pub mod store;
pub mod theme;
