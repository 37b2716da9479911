//! Required-field checks run before a form is submitted.
//!
//! Each check turns raw form input into the request body the endpoint takes,
//! or a [`FormError`] whose text is shown to the admin as-is.

use thiserror::Error;

use crate::models::{BlockRequest, BlockType, LoginRequest, ReplyRequest, UserType};

/// Longest temporary block the backend accepts: one year.
pub const MAX_BLOCK_HOURS: u32 = 8760;

/// Duration pre-filled in the block form.
pub const DEFAULT_BLOCK_HOURS: &str = "24";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your email and password")]
    MissingCredentials,

    #[error("Please confirm that the documents have been verified")]
    DocumentsNotVerified,

    #[error("Please provide a reason for rejection")]
    MissingRejectReason,

    #[error("Please select a user to block")]
    NoUserSelected,

    #[error("Please provide a reason for blocking")]
    MissingBlockReason,

    #[error("Please provide a valid duration for temporary block")]
    InvalidDuration,

    #[error("Please enter a reply message")]
    EmptyReply,
}

pub fn login(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FormError::MissingCredentials);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn approval(documents_verified: bool) -> Result<(), FormError> {
    if documents_verified {
        Ok(())
    } else {
        Err(FormError::DocumentsNotVerified)
    }
}

/// Returns the trimmed rejection reason.
pub fn rejection(reason: &str) -> Result<String, FormError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(FormError::MissingRejectReason);
    }
    Ok(reason.to_string())
}

pub fn reply(message: &str, is_internal: bool) -> Result<ReplyRequest, FormError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(FormError::EmptyReply);
    }
    Ok(ReplyRequest {
        message: message.to_string(),
        is_internal,
    })
}

/// Raw state of the block-user form.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockForm {
    /// Set once a search result is picked.
    pub user_id: Option<String>,
    pub user_type: UserType,
    pub block_type: BlockType,
    pub reason: String,
    /// As typed in the number input.
    pub duration_hours: String,
}

impl Default for BlockForm {
    fn default() -> Self {
        Self {
            user_id: None,
            user_type: UserType::Helper,
            block_type: BlockType::Temporary,
            reason: String::new(),
            duration_hours: DEFAULT_BLOCK_HOURS.to_string(),
        }
    }
}

impl BlockForm {
    /// Checks run in the order the admin sees the fields.
    pub fn validate(&self) -> Result<BlockRequest, FormError> {
        let user_id = self
            .user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(FormError::NoUserSelected)?;

        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(FormError::MissingBlockReason);
        }

        let duration_hours = match self.block_type {
            BlockType::Permanent => None,
            _ => Some(self.parsed_duration()?),
        };

        Ok(BlockRequest {
            user_id: user_id.to_string(),
            user_type: self.user_type.clone(),
            block_type: self.block_type.clone(),
            reason: reason.to_string(),
            duration_hours,
        })
    }

    fn parsed_duration(&self) -> Result<u32, FormError> {
        self.duration_hours
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|hours| (1..=MAX_BLOCK_HOURS).contains(hours))
            .ok_or(FormError::InvalidDuration)
    }

    /// Warning shown above the submit button.
    pub fn warning(&self) -> String {
        match self.block_type {
            BlockType::Permanent => "This user will be permanently blocked from using the \
                                     platform until manually unblocked."
                .to_string(),
            _ => {
                let hours = self.duration_hours.trim();
                let hours = if hours.is_empty() { "?" } else { hours };
                format!("This user will be blocked for {hours} hours.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BlockForm {
        BlockForm {
            user_id: Some("u-42".into()),
            reason: "  Abusive messages ".into(),
            ..BlockForm::default()
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(login(" ", "x").unwrap_err(), FormError::MissingCredentials);
        assert_eq!(login("a@b.c", "").unwrap_err(), FormError::MissingCredentials);
        let request = login(" a@b.c ", "secret").unwrap();
        assert_eq!(request.email, "a@b.c");
    }

    #[test]
    fn test_approval_and_rejection() {
        assert_eq!(approval(false), Err(FormError::DocumentsNotVerified));
        assert_eq!(approval(true), Ok(()));
        assert_eq!(rejection("   "), Err(FormError::MissingRejectReason));
        assert_eq!(rejection(" Blurry ID ").unwrap(), "Blurry ID");
    }

    #[test]
    fn test_reply_must_not_be_blank() {
        assert_eq!(reply("\n ", false).unwrap_err(), FormError::EmptyReply);
        assert!(reply("Done", true).unwrap().is_internal);
    }

    #[test]
    fn test_block_form_checks_in_order() {
        let mut form = BlockForm::default();
        assert_eq!(form.validate().unwrap_err(), FormError::NoUserSelected);
        form.user_id = Some("u-1".into());
        assert_eq!(form.validate().unwrap_err(), FormError::MissingBlockReason);
        form.reason = "spam".into();
        form.duration_hours = "0".into();
        assert_eq!(form.validate().unwrap_err(), FormError::InvalidDuration);
    }

    #[test]
    fn test_temporary_block_duration_bounds() {
        let mut form = filled();
        for bad in ["", "abc", "-5", "8761", "1.5"] {
            form.duration_hours = bad.into();
            assert_eq!(form.validate().unwrap_err(), FormError::InvalidDuration, "{bad}");
        }
        form.duration_hours = "8760".into();
        let request = form.validate().unwrap();
        assert_eq!(request.duration_hours, Some(8760));
        assert_eq!(request.reason, "Abusive messages");
    }

    #[test]
    fn test_permanent_block_sends_no_duration() {
        let form = BlockForm {
            block_type: BlockType::Permanent,
            duration_hours: String::new(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap().duration_hours, None);
        assert!(form.warning().contains("permanently blocked"));
    }

    #[test]
    fn test_warning_echoes_duration() {
        let mut form = filled();
        assert_eq!(form.warning(), "This user will be blocked for 24 hours.");
        form.duration_hours = String::new();
        assert_eq!(form.warning(), "This user will be blocked for ? hours.");
    }
}
