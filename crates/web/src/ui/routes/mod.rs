//! Routing for the site
//!
//! Every page renders inside [`SiteLayout`] (navbar, chatbot, notices). The
//! workspace pages additionally sit behind [`RequireSession`].

use dioxus::prelude::*;

use adgorithm_domain::content::PolicyKind;
use adgorithm_domain::Session;

mod require_session;
mod site_layout;

use require_session::RequireSession;
use site_layout::SiteLayout;

use crate::presentation::views::{
    About, AboutSection, Campaigns, CookiePolicy, Dashboard, Home, Login, Messages, NotFound,
    Policies, PrivacyPolicy, Profile, Register, Settings, TermsOfService,
};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        // `role` preselects the account type (`brand` or `influencer`)
        #[route("/register?:role")]
        Register { role: String },
        #[route("/about")]
        About {},
        #[route("/about/:section")]
        AboutSection { section: String },
        #[route("/policies")]
        Policies {},
        #[route("/privacy-policy")]
        PrivacyPolicy {},
        #[route("/terms-of-service")]
        TermsOfService {},
        #[route("/cookie-policy")]
        CookiePolicy {},

        #[layout(RequireSession)]
            #[route("/profile")]
            Profile {},
            #[route("/dashboard")]
            Dashboard {},
            #[route("/campaigns")]
            Campaigns {},
            #[route("/messages")]
            Messages {},
            #[route("/settings")]
            Settings {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// What the guard does with a route for a given session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Render,
    RedirectToLogin,
}

impl Route {
    /// Workspace pages that need a signed-in visitor
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Profile {}
                | Route::Dashboard {}
                | Route::Campaigns {}
                | Route::Messages {}
                | Route::Settings {}
        )
    }

    /// Browser tab title
    pub fn page_title(&self) -> String {
        let page = match self {
            Route::Home {} => return "adgorithm".to_string(),
            Route::Login {} => "Sign in",
            Route::Register { .. } => "Create account",
            Route::About {} => "About Us",
            Route::AboutSection { section } => {
                match adgorithm_domain::content::about_section(section) {
                    Some(found) => found.title,
                    None => "About Us",
                }
            }
            Route::Policies {} => "Policies",
            Route::PrivacyPolicy {} => "Privacy Policy",
            Route::TermsOfService {} => "Terms of Service",
            Route::CookiePolicy {} => "Cookie Policy",
            Route::Profile {} => "Profile",
            Route::Dashboard {} => "Dashboard",
            Route::Campaigns {} => "Campaigns",
            Route::Messages {} => "Messages",
            Route::Settings {} => "Settings",
            Route::NotFound { .. } => "Page not found",
        };
        format!("{page} | adgorithm")
    }
}

impl From<PolicyKind> for Route {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Privacy => Route::PrivacyPolicy {},
            PolicyKind::Terms => Route::TermsOfService {},
            PolicyKind::Cookies => Route::CookiePolicy {},
        }
    }
}

pub fn access_for(route: &Route, session: &Session) -> Access {
    if route.requires_session() && !session.is_authenticated() {
        Access::RedirectToLogin
    } else {
        Access::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adgorithm_domain::{Identity, Role};
    use std::str::FromStr;

    fn protected() -> Vec<Route> {
        vec![
            Route::Profile {},
            Route::Dashboard {},
            Route::Campaigns {},
            Route::Messages {},
            Route::Settings {},
        ]
    }

    #[test]
    fn test_protected_routes_redirect_when_logged_out() {
        for route in protected() {
            assert_eq!(
                access_for(&route, &Session::LoggedOut),
                Access::RedirectToLogin,
                "{route}"
            );
        }
    }

    #[test]
    fn test_protected_routes_render_when_logged_in() {
        let session = Session::LoggedIn(Identity::demo(Role::Influencer));
        for route in protected() {
            assert_eq!(access_for(&route, &session), Access::Render);
        }
    }

    #[test]
    fn test_public_routes_always_render() {
        let public = [
            Route::Home {},
            Route::Login {},
            Route::Register {
                role: String::new(),
            },
            Route::About {},
            Route::Policies {},
            Route::CookiePolicy {},
        ];
        for route in public {
            assert!(!route.requires_session());
            assert_eq!(access_for(&route, &Session::LoggedOut), Access::Render);
        }
    }

    #[test]
    fn test_paths_parse_to_routes() {
        assert_eq!(Route::from_str("/dashboard").ok(), Some(Route::Dashboard {}));
        assert_eq!(
            Route::from_str("/about/team").ok(),
            Some(Route::AboutSection {
                section: "team".to_string()
            })
        );
        assert_eq!(
            Route::from_str("/register?role=brand").ok(),
            Some(Route::Register {
                role: "brand".to_string()
            })
        );
        assert!(matches!(
            Route::from_str("/no/such/page").ok(),
            Some(Route::NotFound { .. })
        ));
    }

    #[test]
    fn test_every_policy_has_its_own_route() {
        let paths: Vec<String> = PolicyKind::all()
            .iter()
            .map(|kind| Route::from(*kind).to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["/privacy-policy", "/terms-of-service", "/cookie-policy"]
        );
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Route::Home {}.page_title(), "adgorithm");
        assert_eq!(
            Route::AboutSection {
                section: "team".to_string()
            }
            .page_title(),
            "Our Team | adgorithm"
        );
    }
}
