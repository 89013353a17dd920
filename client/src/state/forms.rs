//! Form models and validation for every editable screen.
//!
//! Inputs are held as the raw strings the user typed; `validate` turns them
//! into API payloads or an inline error message.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{
    LoginRequest, NewReview, Price, Product, ProductPayload, ProviderProfile, RegisterRequest, Role, Service,
    ServicePayload,
};

/// Shortest service the salon schedules, in minutes.
pub const MIN_SERVICE_DURATION: u32 = 5;
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub category: String,
}

impl ServiceForm {
    #[must_use]
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone().unwrap_or_default(),
            price: service.price.to_string(),
            duration: service.duration.to_string(),
            category: service.category.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns a message when name, price, or duration is invalid.
    pub fn validate(&self) -> Result<ServicePayload, &'static str> {
        let name = required(&self.name).ok_or("Service name is required.")?;
        let price = Price::parse(&self.price).ok_or("Enter a valid price, e.g. 25 or 25.50.")?;
        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d >= MIN_SERVICE_DURATION)
            .ok_or("Duration must be at least 5 minutes.")?;
        Ok(ServicePayload {
            name,
            description: self.description.trim().to_owned(),
            price,
            duration,
            category: self.category.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

impl ProductForm {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category: product.category.clone().unwrap_or_default(),
            stock: product.stock.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns a message when name, price, or stock is invalid.
    pub fn validate(&self) -> Result<ProductPayload, &'static str> {
        let name = required(&self.name).ok_or("Product name is required.")?;
        let price = Price::parse(&self.price).ok_or("Enter a valid price, e.g. 25 or 25.50.")?;
        let stock = match self.stock.trim() {
            "" => 0,
            raw => raw
                .parse::<i64>()
                .ok()
                .filter(|s| *s >= 0)
                .ok_or("Stock must be a whole number of zero or more.")?,
        };
        Ok(ProductPayload {
            name,
            description: self.description.trim().to_owned(),
            price,
            category: self.category.trim().to_owned(),
            stock,
        })
    }
}

// =============================================================================
// REVIEWS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self { rating: 5, comment: String::new() }
    }
}

impl ReviewForm {
    /// # Errors
    ///
    /// Returns a message when the rating is outside 1-5 or the comment is blank.
    pub fn validate(&self, provider_id: i64, appointment_id: Option<i64>) -> Result<NewReview, &'static str> {
        if !(1..=5).contains(&self.rating) {
            return Err("Rating must be between 1 and 5.");
        }
        let comment = required(&self.comment).ok_or("Please share a few words about your visit.")?;
        Ok(NewReview { provider_id, appointment_id, rating: self.rating, comment })
    }
}

// =============================================================================
// PROVIDER PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub bio: String,
    pub specialties: String,
}

impl ProfileForm {
    #[must_use]
    pub fn to_profile(&self) -> ProviderProfile {
        ProviderProfile { bio: self.bio.trim().to_owned(), specialties: self.specialties.trim().to_owned() }
    }
}

// =============================================================================
// ACCOUNT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns a message when either field is empty.
    pub fn validate(&self) -> Result<LoginRequest, &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Enter your email and password.");
        }
        Ok(LoginRequest { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let name = required(&self.name).ok_or("Name is required.")?;
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err("Enter a valid email address.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters.");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.");
        }
        Ok(RegisterRequest {
            name,
            email: email.to_owned(),
            password: self.password.clone(),
            phone: required(&self.phone),
            role: Role::Client,
        })
    }
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'))
}
