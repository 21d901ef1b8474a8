pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod fetch;
pub mod filters;
pub mod icons;
pub mod notifications;
pub mod number_format;

#[cfg(test)]
pub mod testing;
