pub mod api_utils;
pub mod chart;
pub mod components;
