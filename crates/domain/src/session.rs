//! Visitor session and sign-in input
//!
//! There is no identity backend. A session is either logged out or carries a
//! locally fabricated [`Identity`]; the only durable trace is a pair of storage
//! markers handled by the web crate's auth service.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, RoleParseError};
use crate::ids::UserId;

/// Which side of the marketplace a visitor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Brand,
    Influencer,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[Role::Brand, Role::Influencer]
    }

    /// Tag used in storage and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Brand => "brand",
            Role::Influencer => "influencer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Brand => "Brand",
            Role::Influencer => "Influencer",
        }
    }

    /// The other side of the marketplace, as a plural noun for search copy
    pub fn counterpart_plural(&self) -> &'static str {
        match self {
            Role::Brand => "influencers",
            Role::Influencer => "brands",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brand" => Ok(Role::Brand),
            "influencer" => Ok(Role::Influencer),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// A signed-in visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: Role,
}

impl Identity {
    pub const DEMO_NAME: &'static str = "John Doe";
    pub const DEMO_EMAIL: &'static str = "john@example.com";

    /// Fixed identity re-materialized from the persisted markers.
    ///
    /// The submitted name and email are never persisted, so a restored
    /// session always shows this identity with the stored role.
    pub fn demo(role: Role) -> Self {
        Self {
            id: UserId::from_u128(1),
            display_name: Self::DEMO_NAME.to_string(),
            email: Self::DEMO_EMAIL.to_string(),
            avatar_url: None,
            role,
        }
    }

    /// Initials for the avatar placeholder ("John Doe" -> "JD")
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Client-side session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::LoggedIn(identity) => Some(identity),
            Session::LoggedOut => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn is_email_shaped(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Login form input that passed the shape check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, AuthError> {
        let email = email.trim();
        if !is_email_shaped(email) || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Registration form input that passed the shape check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    credentials: Credentials,
    role: Role,
}

impl Registration {
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Result<Self, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::InvalidRegistration("name is required"));
        }
        if !is_email_shaped(email.trim()) {
            return Err(AuthError::InvalidRegistration("email address is invalid"));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidRegistration("password is required"));
        }
        Ok(Self {
            name: name.to_string(),
            credentials: Credentials {
                email: email.trim().to_string(),
                password: password.to_string(),
            },
            role,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Brand".parse::<Role>(), Ok(Role::Brand));
        assert_eq!(" influencer ".parse::<Role>(), Ok(Role::Influencer));
        assert_eq!(
            "agency".parse::<Role>(),
            Err(RoleParseError("agency".to_string()))
        );
    }

    #[test]
    fn role_round_trips_through_its_tag() {
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>(), Ok(*role));
        }
    }

    #[test]
    fn logged_in_session_always_has_a_role() {
        let session = Session::LoggedIn(Identity::demo(Role::Influencer));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Influencer));

        assert!(!Session::LoggedOut.is_authenticated());
        assert_eq!(Session::LoggedOut.role(), None);
    }

    #[test]
    fn demo_identity_is_fixed() {
        let identity = Identity::demo(Role::Brand);
        assert_eq!(identity.display_name, "John Doe");
        assert_eq!(identity.email, "john@example.com");
        assert_eq!(identity.initials(), "JD");
        assert_eq!(identity, Identity::demo(Role::Brand));
    }

    #[test]
    fn any_well_formed_login_is_accepted() {
        let credentials = Credentials::new(" anything@x.com ", "anything").unwrap();
        assert_eq!(credentials.email(), "anything@x.com");
        assert_eq!(credentials.password(), "anything");
    }

    #[test]
    fn malformed_login_is_rejected() {
        assert_eq!(
            Credentials::new("not-an-email", "pw"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            Credentials::new("a@b.co", ""),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            Credentials::new("", "pw"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn registration_requires_name_email_and_password() {
        assert!(Registration::new("Ada", "ada@x.io", "pw", Role::Influencer).is_ok());
        assert_eq!(
            Registration::new("  ", "ada@x.io", "pw", Role::Brand),
            Err(AuthError::InvalidRegistration("name is required"))
        );
        assert_eq!(
            Registration::new("Ada", "ada", "pw", Role::Brand),
            Err(AuthError::InvalidRegistration("email address is invalid"))
        );
        assert_eq!(
            Registration::new("Ada", "ada@x.io", "", Role::Brand),
            Err(AuthError::InvalidRegistration("password is required"))
        );
    }
}
