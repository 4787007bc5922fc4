//! Mock OTP login flow.
//!
//! Two steps: the user enters a mobile number, then a 4-digit code. No code
//! is actually sent; the accepted code comes from configuration. There is no
//! lockout or persistence of failed attempts.

use std::fmt;

/// Minimum accepted length of a mobile number.
pub const MIN_MOBILE_LEN: usize = 10;

/// Required length of the one-time code.
pub const OTP_LEN: usize = 4;

/// Validation failures shown inline in the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Mobile number too short
    InvalidMobile,
    /// Code is not exactly four digits
    MalformedOtp,
    /// Code has the right shape but is wrong
    IncorrectOtp,
    /// Code submitted before a mobile number
    OtpNotRequested,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidMobile => "Please enter a valid mobile number",
            Self::MalformedOtp => "Invalid OTP. Please enter 4 digits.",
            Self::IncorrectOtp => "Incorrect OTP. Please try again.",
            Self::OtpNotRequested => "Please request an OTP with your mobile number first.",
        })
    }
}

/// Where the user is in the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginStep {
    /// Waiting for a mobile number
    #[default]
    EnterMobile,
    /// Code "sent" to `mobile`, waiting for it
    EnterOtp {
        /// Number the code was sent to
        mobile: String,
    },
}

/// Login form state for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFlow {
    step: LoginStep,
}

impl LoginFlow {
    /// Current step.
    #[must_use]
    pub const fn step(&self) -> &LoginStep {
        &self.step
    }

    /// Accepts a mobile number and moves on to the code step.
    ///
    /// # Errors
    /// [`LoginError::InvalidMobile`] when the number is too short; the flow
    /// stays on the mobile step.
    pub fn send_otp(&mut self, mobile: &str) -> Result<(), LoginError> {
        let mobile = mobile.trim();
        if mobile.chars().count() < MIN_MOBILE_LEN {
            return Err(LoginError::InvalidMobile);
        }
        self.step = LoginStep::EnterOtp {
            mobile: mobile.to_string(),
        };
        Ok(())
    }

    /// Checks `otp` against `expected`. On success the flow resets so the
    /// next login starts from the mobile step.
    ///
    /// # Errors
    /// [`LoginError::OtpNotRequested`] before [`Self::send_otp`],
    /// [`LoginError::MalformedOtp`] when the code is not four digits,
    /// [`LoginError::IncorrectOtp`] when it does not match.
    pub fn verify(&mut self, otp: &str, expected: &str) -> Result<(), LoginError> {
        if self.step == LoginStep::EnterMobile {
            return Err(LoginError::OtpNotRequested);
        }

        let otp = otp.trim();
        if otp.len() != OTP_LEN || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(LoginError::MalformedOtp);
        }
        if otp != expected {
            return Err(LoginError::IncorrectOtp);
        }

        self.reset();
        Ok(())
    }

    /// "Change mobile number": back to the first step.
    pub fn reset(&mut self) {
        self.step = LoginStep::EnterMobile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "1234";

    #[test]
    fn test_short_mobile_is_rejected() {
        let mut flow = LoginFlow::default();
        assert_eq!(flow.send_otp("98765"), Err(LoginError::InvalidMobile));
        assert_eq!(flow.step(), &LoginStep::EnterMobile);
    }

    #[test]
    fn test_full_login() {
        let mut flow = LoginFlow::default();
        assert_eq!(flow.send_otp(" 9876543210 "), Ok(()));
        assert_eq!(
            flow.step(),
            &LoginStep::EnterOtp {
                mobile: "9876543210".to_string()
            }
        );

        assert_eq!(flow.verify("1234", CODE), Ok(()));
        assert_eq!(flow.step(), &LoginStep::EnterMobile);
    }

    #[test]
    fn test_malformed_otp() {
        let mut flow = LoginFlow::default();
        flow.send_otp("9876543210").ok();

        assert_eq!(flow.verify("123", CODE), Err(LoginError::MalformedOtp));
        assert_eq!(flow.verify("12a4", CODE), Err(LoginError::MalformedOtp));
        assert_eq!(flow.verify("12345", CODE), Err(LoginError::MalformedOtp));
    }

    #[test]
    fn test_any_four_digits_is_not_accepted() {
        let mut flow = LoginFlow::default();
        flow.send_otp("9876543210").ok();

        assert_eq!(flow.verify("0000", CODE), Err(LoginError::IncorrectOtp));
        // Still waiting for the right code.
        assert!(matches!(flow.step(), LoginStep::EnterOtp { .. }));
    }

    #[test]
    fn test_verify_before_send_is_rejected() {
        let mut flow = LoginFlow::default();
        assert_eq!(flow.verify(CODE, CODE), Err(LoginError::OtpNotRequested));
    }

    #[test]
    fn test_reset_returns_to_mobile_step() {
        let mut flow = LoginFlow::default();
        flow.send_otp("9876543210").ok();
        flow.reset();
        assert_eq!(flow.step(), &LoginStep::EnterMobile);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LoginError::InvalidMobile.to_string(),
            "Please enter a valid mobile number"
        );
        assert_eq!(
            LoginError::MalformedOtp.to_string(),
            "Invalid OTP. Please enter 4 digits."
        );
    }
}
