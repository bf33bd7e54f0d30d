pub mod catalog_service;
pub mod chart_service;
pub mod conversion_service;
pub mod series_service;
