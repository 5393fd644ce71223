// src/notify.rs
// =============================================================================
// This module holds the user's notification preferences.
//
// Two channels (email, SMS) and two event types (broken backlinks, expiry
// warnings). Saving only validates and acknowledges - actual delivery
// would go through an email provider and an SMS gateway, neither of which
// this tool talks to.
//
// Rust concepts:
// - Default trait: The settings a fresh account starts with
// - Validation as a method: The struct says whether it makes sense
// =============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Why the preferences could not be saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// Email alerts are enabled but no address was given
    #[error("email notifications are enabled but no email address is set")]
    MissingEmailAddress,
    /// SMS alerts are enabled but no phone number was given
    #[error("SMS notifications are enabled but no phone number is set")]
    MissingPhoneNumber,
}

// The notification preference set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub notify_broken_backlinks: bool,
    pub notify_before_expiry: bool,
    pub email_address: String,
    pub phone_number: String,
}

impl Default for NotificationSettings {
    // A fresh account: email alerts on, SMS off, both event types on
    fn default() -> Self {
        NotificationSettings {
            email_notifications: true,
            sms_notifications: false,
            notify_broken_backlinks: true,
            notify_before_expiry: true,
            email_address: String::new(),
            phone_number: String::new(),
        }
    }
}

impl NotificationSettings {
    // Checks that every enabled channel has somewhere to deliver to
    //
    // A disabled channel may leave its contact field empty.
    pub fn validate(&self) -> Result<(), NotifyError> {
        if self.email_notifications && self.email_address.trim().is_empty() {
            return Err(NotifyError::MissingEmailAddress);
        }
        if self.sms_notifications && self.phone_number.trim().is_empty() {
            return Err(NotifyError::MissingPhoneNumber);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = NotificationSettings::default();
        assert!(settings.email_notifications);
        assert!(!settings.sms_notifications);
        assert!(settings.notify_broken_backlinks);
        assert!(settings.notify_before_expiry);
    }

    #[test]
    fn test_enabled_email_needs_address() {
        let settings = NotificationSettings::default();
        // Defaults enable email with no address, so saving must refuse
        assert_eq!(settings.validate(), Err(NotifyError::MissingEmailAddress));

        let settings = NotificationSettings {
            email_address: "user@example.com".to_string(),
            ..NotificationSettings::default()
        };
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_enabled_sms_needs_phone() {
        let settings = NotificationSettings {
            sms_notifications: true,
            email_address: "user@example.com".to_string(),
            ..NotificationSettings::default()
        };
        assert_eq!(settings.validate(), Err(NotifyError::MissingPhoneNumber));
    }

    #[test]
    fn test_disabled_channels_need_nothing() {
        let settings = NotificationSettings {
            email_notifications: false,
            sms_notifications: false,
            ..NotificationSettings::default()
        };
        assert_eq!(settings.validate(), Ok(()));
    }
}
