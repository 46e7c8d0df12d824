//! Unwrapping the ERP's product-list response envelopes.
//!
//! Depending on the endpoint (direct ERP, proxy, hosted wrapper) the product
//! array arrives bare or under one of several keys. Callers get a flat
//! `Vec<RawProduct>` regardless.

use serde_json::Value;
use vitrine_core::RawProduct;

use crate::error::ErpError;

/// Object keys that may hold the product array, in lookup order.
const ARRAY_KEYS: [&str; 4] = ["products", "data", "items", "value"];

/// Finds the product array inside `value`.
///
/// Accepts a bare array, an object carrying the array under `products`,
/// `data`, `items`, or `value`, and a proxy wrapper
/// `{"success": false, "body": ...}` whose `body` is any of those.
#[must_use]
pub fn extract_product_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            if let Some(items) = ARRAY_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array))
            {
                return Some(items);
            }
            if map.get("success") == Some(&Value::Bool(false)) {
                return map.get("body").and_then(extract_product_array);
            }
            None
        }
        _ => None,
    }
}

/// Parses a response body into products.
///
/// Array elements that are not JSON objects are skipped with a warning.
///
/// # Errors
///
/// - [`ErpError::Deserialize`] if `body` is not valid JSON.
/// - [`ErpError::UnrecognizedEnvelope`] if no product array can be found.
pub fn decode_products(body: &str, context: &str) -> Result<Vec<RawProduct>, ErpError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ErpError::Deserialize {
        context: context.to_owned(),
        source: e,
    })?;
    let items = extract_product_array(&value).ok_or_else(|| ErpError::UnrecognizedEnvelope {
        context: context.to_owned(),
    })?;

    let mut products = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            tracing::warn!(context, index, "skipping product entry that is not a JSON object");
            continue;
        }
        match serde_json::from_value::<RawProduct>(item.clone()) {
            Ok(product) => products.push(product),
            Err(error) => {
                tracing::warn!(context, index, %error, "skipping undecodable product entry");
            }
        }
    }
    Ok(products)
}

/// Number of products not explicitly marked unpublished.
#[must_use]
pub fn published_count(products: &[RawProduct]) -> usize {
    products.iter().filter(|p| p.is_published()).count()
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
