//! Wire DTOs for the booking REST API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the API returns so serde round-trips stay
//! lossless. The API is backed by a SQL database whose decimal columns
//! serialize as strings, so money, ratings, and counters are decoded
//! leniently from either numbers or numeric strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// MONEY
// =============================================================================

/// A price held in minor currency units (pence).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    minor: i64,
}

impl Price {
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self { minor }
    }

    /// Whole pounds, or `None` when the amount does not fit in pence.
    #[must_use]
    pub const fn from_major(major: i64) -> Option<Self> {
        match major.checked_mul(100) {
            Some(minor) => Some(Self { minor }),
            None => None,
        }
    }

    #[must_use]
    pub const fn minor(self) -> i64 {
        self.minor
    }

    /// Parse a non-negative decimal string such as `"8"`, `"8.5"` or `"8.50"`.
    ///
    /// Digits past the second decimal place are accepted only when they are zeros.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let (cents, rest) = frac.split_at(frac.len().min(2));
        if rest.bytes().any(|b| b != b'0') {
            return None;
        }
        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let cents: i64 = match cents.len() {
            0 => 0,
            1 => cents.parse::<i64>().ok()? * 10,
            _ => cents.parse().ok()?,
        };
        whole.checked_mul(100)?.checked_add(cents).map(Self::from_minor)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Self::from_minor((value * 100.0).round() as i64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        self.minor as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        let (whole, cents) = (abs / 100, abs % 100);
        if cents == 0 { write!(f, "{sign}{whole}") } else { write!(f, "{sign}{whole}.{cents:02}") }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return int
                        .checked_mul(100)
                        .filter(|minor| *minor >= 0)
                        .map(Self::from_minor)
                        .ok_or_else(|| D::Error::custom("price out of range"));
                }
                number
                    .as_f64()
                    .and_then(Self::from_f64)
                    .ok_or_else(|| D::Error::custom("price out of range"))
            }
            serde_json::Value::String(text) => {
                Self::parse(&text).ok_or_else(|| D::Error::custom(format!("invalid price: {text}")))
            }
            serde_json::Value::Null => Ok(Self::default()),
            _ => Err(D::Error::custom("expected price number or string")),
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Account role; decides which dashboards a user may open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Provider,
    Admin,
}

/// An authenticated user as returned by `/auth/me`, `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Token + user pair returned by login and register.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
}

// =============================================================================
// CATALOG
// =============================================================================

/// A bookable salon service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Price,
    /// Length of the appointment in minutes.
    #[serde(default, deserialize_with = "deserialize_u32_or_zero")]
    pub duration: u32,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body for `POST /services` and `PUT /services/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServicePayload {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub duration: u32,
    pub category: String,
}

/// A weekly working-hours window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 0 = Sunday .. 6 = Saturday.
    #[serde(deserialize_with = "deserialize_u8_from_number")]
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// A beauty professional with their offered services and weekly hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub rating: f64,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub total_reviews: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub availability: Vec<AvailabilitySlot>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body for `PUT /providers/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProviderProfile {
    pub bio: String,
    pub specialties: String,
}

/// A retail product sold by the salon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub stock: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Text fields of a product create/update; sent as multipart parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub stock: i64,
}

impl ProductPayload {
    /// Multipart `(name, value)` text parts in submission order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", self.price.to_string()),
            ("category", self.category.clone()),
            ("stock", self.stock.to_string()),
        ]
    }
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// Lifecycle status of an appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Confirmed, Self::Completed, Self::Cancelled];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

/// A booked appointment, including joined display fields from list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub service_id: i64,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub provider_id: i64,
    #[serde(rename = "appointment_date", alias = "date")]
    pub date: String,
    #[serde(rename = "appointment_time", alias = "time")]
    pub time: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u32_or_zero")]
    pub duration: u32,
    #[serde(default)]
    pub price: Option<Price>,
}

/// Body for `POST /appointments`. Status is assigned by the server (pending).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAppointment {
    pub service_id: i64,
    pub provider_id: i64,
    pub appointment_date: String,
    pub appointment_time: String,
    pub notes: String,
}

/// Response of `GET /appointments/slots`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SlotsResponse {
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub slots: Vec<String>,
}

// =============================================================================
// REVIEWS
// =============================================================================

/// A client review of a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub provider_id: i64,
    #[serde(default)]
    pub appointment_id: Option<i64>,
    #[serde(deserialize_with = "deserialize_u8_from_number")]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body for `POST /reviews`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewReview {
    pub provider_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<i64>,
    pub rating: u8,
    pub comment: String,
}

/// One page of a provider's reviews.
///
/// The endpoint answers either `{ "reviews": [...], "page": n, "pages": m }`
/// or a bare array; both decode into this shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewPageWire {
    Paged {
        reviews: Vec<Review>,
        #[serde(default)]
        pagination: Option<PaginationWire>,
        #[serde(default)]
        page: Option<u32>,
        #[serde(default, alias = "totalPages")]
        pages: Option<u32>,
    },
    Bare(Vec<Review>),
}

#[derive(Deserialize)]
struct PaginationWire {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default, alias = "totalPages")]
    pages: Option<u32>,
}

impl<'de> Deserialize<'de> for ReviewPage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ReviewPageWire::deserialize(deserializer)? {
            ReviewPageWire::Paged { reviews, pagination, page, pages } => {
                let page = page.or_else(|| pagination.as_ref().and_then(|p| p.page)).unwrap_or(1);
                let total_pages = pages.or_else(|| pagination.as_ref().and_then(|p| p.pages)).unwrap_or(page);
                Self { reviews, page, total_pages }
            }
            ReviewPageWire::Bare(reviews) => Self { reviews, page: 1, total_pages: 1 },
        })
    }
}

// =============================================================================
// LENIENT NUMBER DECODING
// =============================================================================

fn deserialize_u8_from_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u8::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u8")))
}

fn deserialize_u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_or_zero(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    i64_from_value(&value).map_err(D::Error::custom)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        serde_json::Value::String(text) => text.trim().parse::<i64>().map_err(|_| "expected integer string"),
        _ => Err("expected number"),
    }
}

fn deserialize_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number.as_f64().ok_or_else(|| D::Error::custom("expected number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid number: {text}"))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
