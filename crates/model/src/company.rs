//! Company profile record
//!
//! The record stored by the company profile service, plus the client-side
//! field validation run before a save is attempted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation result type
pub type ValidationResult = Result<(), ValidationError>;

/// Company profile field validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Email")]
    InvalidEmail,
    #[error("Invalid Phone Number")]
    InvalidPhone,
    #[error("Invalid GSTIN")]
    InvalidGstin,
    #[error("Invalid PAN")]
    InvalidPan,
    #[error("Please upload a logo")]
    MissingLogo,
}

/// Company profile as stored by the profile service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub pan: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub logo_url: String,
}

impl CompanyProfile {
    /// True when no field has been filled in yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validate the fields that must be well-formed before saving
    ///
    /// The first failing field wins, matching the order the profile form
    /// reports them in.
    pub fn validate(&self) -> ValidationResult {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !is_valid_gstin(&self.gstin) {
            return Err(ValidationError::InvalidGstin);
        }
        if !is_valid_pan(&self.pan) {
            return Err(ValidationError::InvalidPan);
        }
        if self.logo_url.is_empty() {
            return Err(ValidationError::MissingLogo);
        }
        Ok(())
    }
}

/// local-part@domain.tld, no whitespace, exactly one `@`
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let (Some(tld), Some(host)) = (domain_parts.next(), domain_parts.next()) else {
        return false;
    };
    !tld.is_empty() && !host.is_empty()
}

/// Ten-digit Indian mobile number, leading digit 6-9
fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10
        && phone.chars().all(|c| c.is_ascii_digit())
        && matches!(phone.as_bytes()[0], b'6'..=b'9')
}

/// 15-character GSTIN: 2 digits, 5 letters, 4 digits, 1 letter,
/// 1 alphanumeric (non-zero digit or letter), literal `Z`, 1 alphanumeric
fn is_valid_gstin(gstin: &str) -> bool {
    let bytes = gstin.as_bytes();
    if bytes.len() != 15 {
        return false;
    }
    bytes[0..2].iter().all(u8::is_ascii_digit)
        && bytes[2..7].iter().all(u8::is_ascii_uppercase)
        && bytes[7..11].iter().all(u8::is_ascii_digit)
        && bytes[11].is_ascii_uppercase()
        && (matches!(bytes[12], b'1'..=b'9') || bytes[12].is_ascii_uppercase())
        && bytes[13] == b'Z'
        && (bytes[14].is_ascii_digit() || bytes[14].is_ascii_uppercase())
}

/// 10-character PAN: 5 letters, 4 digits, 1 letter
fn is_valid_pan(pan: &str) -> bool {
    let bytes = pan.as_bytes();
    bytes.len() == 10
        && bytes[0..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}
