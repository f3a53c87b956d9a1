use crate::client::OpenWeatherClient;
use crate::error::LookupError;
use crate::models::{CityQuery, DisplayRecord};
use crate::store::{DisplayStore, MergeOutcome};
use crate::validation::validate_city;
use crate::view::ViewState;

/// Result of a lookup that reached the store
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    /// Name the geocoder returned; the store key
    pub city: String,
    pub record: DisplayRecord,
    pub merge: MergeOutcome,
}

/// Runs lookups against one store and one view. Cheap to clone; clones share
/// the store, the view and the HTTP connection pool.
#[derive(Clone)]
pub struct WeatherLookup {
    client: OpenWeatherClient,
    store: DisplayStore,
    view: ViewState,
}

impl WeatherLookup {
    pub fn new(client: OpenWeatherClient, store: DisplayStore, view: ViewState) -> Self {
        Self {
            client,
            store,
            view,
        }
    }

    pub fn store(&self) -> &DisplayStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Looks up the weather for raw user input.
    ///
    /// Invalid input sets the inline field message and returns before any
    /// request is made. Otherwise the loader is shown for the duration of the
    /// lookup, and afterwards the results are made visible whether or not the
    /// lookup succeeded. A failure merges nothing and is kept as the view's
    /// last error.
    pub async fn submit(&self, input: &str) -> Result<LookupOutcome, LookupError> {
        let query = match validate_city(input) {
            Ok(query) => query,
            Err(errors) => {
                if let Some(first) = errors.first() {
                    self.view.show_field_message(first.message.clone()).await;
                }
                tracing::debug!("Rejected city input {:?}", input);
                return Err(LookupError::Validation(errors));
            }
        };

        self.view.begin_lookup().await;

        let result = match self.fetch_record(&query).await {
            Ok(record) => {
                let city = record.city_name.clone();
                let merge = self.store.merge(&city, record.clone()).await;
                tracing::info!("Weather for {} {:?}", city, merge);
                self.view.record_success().await;
                Ok(LookupOutcome {
                    city,
                    record,
                    merge,
                })
            }
            Err(e) => {
                tracing::error!("Weather lookup for {:?} failed: {}", query.city, e);
                self.view.record_failure(e.to_string()).await;
                Err(e)
            }
        };

        self.view.finish_lookup().await;
        result
    }

    /// Geocodes the query and projects the first forecast sample
    async fn fetch_record(&self, query: &CityQuery) -> Result<DisplayRecord, LookupError> {
        tracing::info!("Geocoding city: {}", query.city);

        let location = self
            .client
            .geocode(&query.city)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::CityNotFound {
                city: query.city.clone(),
            })?;

        tracing::info!(
            "Getting forecast for {} at coordinates: {}, {}",
            location.name,
            location.lat,
            location.lon
        );

        let forecast = self.client.forecast(location.lat, location.lon).await?;
        let sample = forecast
            .list
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NoForecast {
                city: location.name.clone(),
            })?;

        Ok(DisplayRecord::project(&location, &sample))
    }
}
