pub mod resource_filter;

pub use resource_filter::filter_resources;
