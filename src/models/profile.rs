use serde::{Deserialize, Serialize};

/// Body of `POST /api/profile/settings`.
///
/// Password fields travel together: changing the password requires the
/// current one, and `new_password` must equal `confirm_password`. That rule
/// is checked locally before the request goes out (see
/// [`SettingsInput::validate`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInput {
    pub username: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
    pub email_notifications: bool,
}

impl SettingsInput {
    /// Local validation of the password-change triple.
    ///
    /// Returns a user-facing reason when the input is rejected without a
    /// network call.
    pub fn validate(&self) -> Result<(), String> {
        let wants_change = self.new_password.as_deref().is_some_and(|p| !p.is_empty())
            || self.confirm_password.as_deref().is_some_and(|p| !p.is_empty());
        if !wants_change {
            return Ok(());
        }
        if self.current_password.as_deref().is_none_or(str::is_empty) {
            return Err("请输入当前密码".to_string());
        }
        if self.new_password != self.confirm_password {
            return Err("新密码与确认密码不匹配".to_string());
        }
        Ok(())
    }
}

/// Response of `POST /api/profile/settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub success: bool,
    /// New username when the portal applied a rename.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/profile/avatar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpdate {
    pub success: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_change_requires_the_current_password() {
        let input = SettingsInput {
            new_password: Some("new".to_string()),
            confirm_password: Some("new".to_string()),
            ..SettingsInput::default()
        };
        assert_eq!(input.validate(), Err("请输入当前密码".to_string()));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let input = SettingsInput {
            current_password: Some("old".to_string()),
            new_password: Some("new".to_string()),
            confirm_password: Some("other".to_string()),
            ..SettingsInput::default()
        };
        assert_eq!(input.validate(), Err("新密码与确认密码不匹配".to_string()));
    }

    #[test]
    fn username_only_update_needs_no_passwords() {
        let input = SettingsInput {
            username: Some("华佗".to_string()),
            ..SettingsInput::default()
        };
        assert_eq!(input.validate(), Ok(()));
    }
}
