use crate::error::{ListingError, Result as ListingResult};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property record as it arrives from one of the two upstream shapes.
///
/// The shape is decided once while decoding; only `normalize` looks inside.
/// Every field decodes leniently: a value of the wrong type reads as absent,
/// so a bad record fails in `normalize`, on its own, instead of here.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RawProperty {
    /// Hand-maintained catalogue (`status`, `rentPrice`, `images`, ...)
    Local(LocalProperty),
    /// Backend API item (`listing_type`, nested `location`, `main_image`, ...)
    Remote(RemoteProperty),
}

impl RawProperty {
    /// Decode one record. Only a non-object can fail.
    pub fn from_value(value: Value) -> ListingResult<Self> {
        if !value.is_object() {
            return Err(ListingError::malformed(None, "record"));
        }

        let id = value.get("id").and_then(integer_from_value);
        let decoded = if Self::looks_remote(&value) {
            serde_json::from_value(value).map(Self::Remote)
        } else {
            serde_json::from_value(value).map(Self::Local)
        };
        decoded.map_err(|_| ListingError::malformed(id, "record"))
    }

    /// Best-effort id for log lines, before the record is validated
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Local(local) => local.id,
            Self::Remote(remote) => remote.id,
        }
    }

    fn looks_remote(value: &Value) -> bool {
        value.get("listing_type").is_some()
            || value.get("location").is_some_and(Value::is_object)
            || value.get("main_image").is_some()
            || value.get("area_size").is_some()
    }
}

impl<'de> Deserialize<'de> for RawProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

/// Local catalogue shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalProperty {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    /// `sale` or `rent`
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rent_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub size: Option<f64>,
    /// Entries that are neither a URL nor `{url, label}` are dropped
    #[serde(default, deserialize_with = "lenient_images")]
    pub images: Option<Vec<RawImage>>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: Option<bool>,
}

/// Backend API shape (list and detail serializers)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemoteProperty {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub listing_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub property_type: Option<String>,
    /// Active amount for either listing type; decimals arrive as strings
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<RemoteLocation>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub area_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub main_image: Option<String>,
    /// Only present on the detail endpoint
    #[serde(default, deserialize_with = "lenient_images")]
    pub gallery_images: Option<Vec<RawImage>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub availability: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemoteLocation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
}

/// Gallery entry: either a bare URL or `{url, label}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawImage {
    Url(String),
    Labeled {
        #[serde(default, deserialize_with = "lenient_string")]
        url: Option<String>,
        #[serde(default, deserialize_with = "lenient_string")]
        label: Option<String>,
    },
}

impl RawImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url.as_str()),
            Self::Labeled { url, .. } => url.as_deref(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Url(_) => None,
            Self::Labeled { label, .. } => label.as_deref(),
        }
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Integral numbers only; `5` and `5.0` and `"5"` all read as 5
fn integer_from_value(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    number_from_value(value)
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64)
        .map(|n| n as i64)
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(integer_from_value)
        .and_then(|n| u32::try_from(n).ok()))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn lenient_images<'de, D>(deserializer: D) -> Result<Option<Vec<RawImage>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_location<'de, D>(deserializer: D) -> Result<Option<RemoteLocation>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}
