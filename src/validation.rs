use crate::constants::CITY_REQUIRED_MESSAGE;
use crate::error::FieldError;
use crate::models::CityQuery;

/// Checks raw form input and builds a [`CityQuery`] from it.
///
/// Surrounding whitespace is trimmed. Input that is empty after trimming is
/// rejected with a message for the `city` field.
pub fn validate_city(input: &str) -> Result<CityQuery, Vec<FieldError>> {
    let city = input.trim();
    if city.is_empty() {
        return Err(vec![FieldError::new("city", CITY_REQUIRED_MESSAGE)]);
    }

    Ok(CityQuery {
        city: city.to_string(),
    })
}
