//! Local state of the settings form
//!
//! Nothing here is persisted or submitted; the form only keeps its own
//! toggles and can reset them.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// General company settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GeneralSettings {
    /// Company display name
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    /// Administrator contact
    #[validate(email)]
    pub admin_email: String,
    /// Free-text timezone label
    pub timezone: String,
}

/// Notification switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    /// Email notifications
    pub email_notifications: bool,
    /// New employee alerts
    pub new_employee_alerts: bool,
    /// Leave request notifications
    pub leave_requests: bool,
    /// Weekly reports
    pub weekly_reports: bool,
}

/// Placeholder API configuration panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ApiSettings {
    /// Base endpoint URL
    #[validate(url)]
    pub endpoint: String,
    /// Masked key shown in the password field
    pub api_key_mask: String,
    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u32,
}

/// Security switches and policy text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Two-factor authentication
    pub two_factor: bool,
    /// Automatic session timeout
    pub session_timeout: bool,
    /// Password policy description
    pub password_policy: String,
}

/// One of the switches on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingToggle {
    /// Email notifications
    EmailNotifications,
    /// New employee alerts
    NewEmployeeAlerts,
    /// Leave request notifications
    LeaveRequests,
    /// Weekly reports
    WeeklyReports,
    /// Two-factor authentication
    TwoFactor,
    /// Automatic session timeout
    SessionTimeout,
}

impl SettingToggle {
    /// Switches on the notification panel
    pub const NOTIFICATIONS: [Self; 4] = [
        Self::EmailNotifications,
        Self::NewEmployeeAlerts,
        Self::LeaveRequests,
        Self::WeeklyReports,
    ];

    /// Switches on the security panel
    pub const SECURITY: [Self; 2] = [Self::TwoFactor, Self::SessionTimeout];

    /// Label text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::NewEmployeeAlerts => "New Employee Alerts",
            Self::LeaveRequests => "Leave Request Notifications",
            Self::WeeklyReports => "Weekly Reports",
            Self::TwoFactor => "Two-Factor Authentication",
            Self::SessionTimeout => "Auto Session Timeout",
        }
    }

    /// DOM id linking label and switch
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::EmailNotifications => "email-notifications",
            Self::NewEmployeeAlerts => "new-employee",
            Self::LeaveRequests => "leave-requests",
            Self::WeeklyReports => "weekly-reports",
            Self::TwoFactor => "two-factor",
            Self::SessionTimeout => "session-timeout",
        }
    }
}

/// Whole settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    /// General panel
    pub general: GeneralSettings,
    /// Notification panel
    pub notifications: NotificationSettings,
    /// API configuration panel
    pub api: ApiSettings,
    /// Security panel
    pub security: SecuritySettings,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                company_name: "Acme Corporation".to_string(),
                admin_email: "admin@company.com".to_string(),
                timezone: "UTC-5 (Eastern Time)".to_string(),
            },
            notifications: NotificationSettings {
                email_notifications: true,
                new_employee_alerts: true,
                leave_requests: false,
                weekly_reports: true,
            },
            api: ApiSettings {
                endpoint: "https://api.company.com/v1".to_string(),
                api_key_mask: "\u{2022}".repeat(16),
                timeout_seconds: 30,
            },
            security: SecuritySettings {
                two_factor: false,
                session_timeout: true,
                password_policy: "Minimum 8 characters, 1 uppercase, 1 number".to_string(),
            },
        }
    }
}

impl SettingsForm {
    fn slot(&mut self, toggle: SettingToggle) -> &mut bool {
        match toggle {
            SettingToggle::EmailNotifications => &mut self.notifications.email_notifications,
            SettingToggle::NewEmployeeAlerts => &mut self.notifications.new_employee_alerts,
            SettingToggle::LeaveRequests => &mut self.notifications.leave_requests,
            SettingToggle::WeeklyReports => &mut self.notifications.weekly_reports,
            SettingToggle::TwoFactor => &mut self.security.two_factor,
            SettingToggle::SessionTimeout => &mut self.security.session_timeout,
        }
    }

    /// Current value of a switch
    #[must_use]
    pub const fn is_enabled(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::EmailNotifications => self.notifications.email_notifications,
            SettingToggle::NewEmployeeAlerts => self.notifications.new_employee_alerts,
            SettingToggle::LeaveRequests => self.notifications.leave_requests,
            SettingToggle::WeeklyReports => self.notifications.weekly_reports,
            SettingToggle::TwoFactor => self.security.two_factor,
            SettingToggle::SessionTimeout => self.security.session_timeout,
        }
    }

    /// Flip a switch and return its new value
    pub fn toggle(&mut self, toggle: SettingToggle) -> bool {
        let slot = self.slot(toggle);
        *slot = !*slot;
        *slot
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing differs from the defaults
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Check the text fields of the general and API panels
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn check(&self) -> crate::Result<()> {
        self.general.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let form = SettingsForm::default();

        assert_eq!(form.general.company_name, "Acme Corporation");
        assert_eq!(form.api.timeout_seconds, 30);
        assert_eq!(form.api.api_key_mask.chars().count(), 16);

        let enabled: Vec<_> = SettingToggle::NOTIFICATIONS
            .iter()
            .chain(SettingToggle::SECURITY.iter())
            .map(|t| form.is_enabled(*t))
            .collect();
        assert_eq!(enabled, vec![true, true, false, true, false, true]);
    }

    #[test]
    fn test_toggle_flips_one_switch() {
        let mut form = SettingsForm::default();

        assert!(form.toggle(SettingToggle::TwoFactor));
        assert!(form.is_enabled(SettingToggle::TwoFactor));
        assert!(form.is_enabled(SettingToggle::SessionTimeout));
        assert!(!form.is_pristine());

        assert!(!form.toggle(SettingToggle::TwoFactor));
        assert!(form.is_pristine());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = SettingsForm::default();
        form.toggle(SettingToggle::WeeklyReports);
        form.toggle(SettingToggle::LeaveRequests);
        form.general.company_name = "Globex".to_string();

        form.reset();
        assert_eq!(form, SettingsForm::default());
    }

    #[test]
    fn test_check_defaults_pass() {
        assert!(SettingsForm::default().check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_admin_email() {
        let mut form = SettingsForm::default();
        form.general.admin_email = "admin".to_string();
        assert!(form.check().is_err());
    }

    #[test]
    fn test_check_rejects_zero_timeout() {
        let mut form = SettingsForm::default();
        form.api.timeout_seconds = 0;
        assert!(form.check().is_err());
    }

    #[test]
    fn test_element_ids_are_unique() {
        let mut ids: Vec<_> = SettingToggle::NOTIFICATIONS
            .iter()
            .chain(SettingToggle::SECURITY.iter())
            .map(|t| t.element_id())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
