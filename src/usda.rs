use crate::error::ApiError;

const SEARCH_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods/search";

// Restrict results to the two curated USDA datasets; branded and survey foods
// are noise for ingredient-level lookups.
const DATA_TYPE_FILTER: &str = "Foundation,SR Legacy";

// Proxy one search to FoodData Central. The upstream body is returned
// verbatim as JSON, no reshaping.
pub async fn search_foods(
    client: &reqwest::Client,
    api_key: &str,
    query: &str,
    page_size: u32,
    page_number: u32,
) -> Result<serde_json::Value, ApiError> {
    let page_size = page_size.to_string();
    let page_number = page_number.to_string();

    let response = client
        .get(SEARCH_URL)
        .query(&[
            ("api_key", api_key),
            ("query", query),
            ("pageSize", page_size.as_str()),
            ("pageNumber", page_number.as_str()),
            ("dataType", DATA_TYPE_FILTER),
        ])
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("food database request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(ApiError::Upstream(format!(
            "food database returned status {}",
            response.status().as_u16()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("invalid response from food database: {e}")))
}
