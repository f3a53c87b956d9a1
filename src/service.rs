use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::OpenWeatherClient;
use crate::config::Config;
use crate::error::LookupError;
use crate::formatters::{format_card, format_cards};
use crate::lookup::WeatherLookup;
use crate::models::CheckWeatherRequest;
use crate::store::DisplayStore;
use crate::view::ViewState;

/// MCP server exposing city weather lookups and the collected cards
#[derive(Clone)]
pub struct WeatherWidget {
    lookup: WeatherLookup,
    tool_router: ToolRouter<Self>,
}

impl WeatherWidget {
    /// Creates a server with an empty store
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = OpenWeatherClient::new(config)?;
        Ok(Self::with_lookup(WeatherLookup::new(
            client,
            DisplayStore::new(),
            ViewState::new(),
        )))
    }

    pub fn with_lookup(lookup: WeatherLookup) -> Self {
        Self {
            lookup,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for WeatherWidget {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-widget".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Looks up current forecasts by city name using OpenWeatherMap. \
                Each checked city is kept as a card; show_weather lists them all."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherWidget {
    /// Looks up a city and stores its weather card
    #[tool(description = "Check the weather for a city by name (e.g. 'Paris', 'Buenos Aires'). The city is geocoded, its next forecast sample is fetched in metric units, and the result is kept as a card.")]
    async fn check_weather(
        &self,
        Parameters(request): Parameters<CheckWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Checking weather for: {}", request.city);

        match self.lookup.submit(&request.city).await {
            Ok(outcome) => {
                let mut text = format_card(&outcome.city, &outcome.record);
                if !outcome.merge.changed() {
                    text.push_str("\n(unchanged since the last check)\n");
                }
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e @ LookupError::Validation(_)) => {
                Err(McpError::invalid_params(e.to_string(), None))
            }
            Err(e) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Weather lookup failed: {}",
                e
            ))])),
        }
    }

    /// Lists every stored weather card
    #[tool(description = "Show the weather cards for every city checked so far, in the order they were first checked.")]
    async fn show_weather(&self) -> Result<CallToolResult, McpError> {
        let store = self.lookup.store().read().await;
        let view = self.lookup.view().snapshot().await;
        tracing::debug!("Rendering {} cards at revision {}", store.entries.len(), store.revision);

        Ok(CallToolResult::success(vec![Content::text(format_cards(
            &store, &view,
        ))]))
    }
}
