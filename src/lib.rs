pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod lookup;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;
pub mod view;

pub use client::OpenWeatherClient;
pub use config::Config;
pub use error::{FieldError, LookupError};
pub use lookup::{LookupOutcome, WeatherLookup};
pub use models::{CityQuery, DisplayRecord, GeoLocation};
pub use service::WeatherWidget;
pub use store::{DisplayStore, MergeOutcome, StoreSnapshot};
pub use validation::validate_city;
pub use view::{ViewSnapshot, ViewState};
