// src/app/update/session.rs
//! Login, registration, and logout handlers

use iced::Task;
use tracing::{info, warn};

use crate::app::{App, Message};

impl App {
    /// Handle session-related messages
    pub fn handle_session(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::LoginUsernameChanged(value) => {
                self.ui.login.username = value.clone();
                Some(Task::none())
            }

            Message::LoginPasswordChanged(value) => {
                self.ui.login.password = value.clone();
                Some(Task::none())
            }

            Message::TogglePasswordVisibility => {
                self.ui.login.show_password = !self.ui.login.show_password;
                Some(Task::none())
            }

            Message::ToggleRegistering => {
                self.ui.login.registering = !self.ui.login.registering;
                self.ui.login.show_password = false;
                self.ui.login.status = None;
                Some(Task::none())
            }

            Message::SubmitLogin => {
                let client = self.core.client.clone();
                let username = self.ui.login.username.clone();
                let password = self.ui.login.password.clone();
                Some(Task::perform(
                    async move { client.login_user(&username, &password).await },
                    Message::LoginResult,
                ))
            }

            Message::SubmitRegister => {
                let client = self.core.client.clone();
                let username = self.ui.login.username.clone();
                let password = self.ui.login.password.clone();
                Some(Task::perform(
                    async move { client.register_user(&username, &password).await },
                    Message::RegisterResult,
                ))
            }

            Message::LoginResult(result) => match result {
                Ok(true) => {
                    info!("User '{}' authenticated", self.ui.login.username);
                    self.core.is_logged_in = true;
                    self.ui.login.status = Some("Login successful!".to_string());
                    Some(self.start_session())
                }
                Ok(false) => {
                    self.ui.login.status = Some("Invalid username or password.".to_string());
                    Some(Task::none())
                }
                Err(e) => {
                    warn!("Login failed: {}", e);
                    self.ui.login.status = Some(format!("Error: {}", e));
                    Some(Task::none())
                }
            },

            Message::RegisterResult(result) => {
                match result {
                    Ok(()) => {
                        self.ui.login.status =
                            Some("Registration successful! You can now log in.".to_string());
                        self.ui.login.registering = false;
                    }
                    Err(e) => {
                        warn!("Registration failed: {}", e);
                        self.ui.login.status = Some(format!("Error: {}", e));
                    }
                }
                Some(Task::none())
            }

            Message::LoggedInUserLoaded(user) => {
                self.core.current_user = user.clone();
                Some(Task::none())
            }

            Message::Logout => {
                info!("Session ended by user");
                self.core.is_logged_in = false;
                self.core.current_user = None;
                self.ui.reset();
                self.ui.footer.volume = self.core.settings.playback.volume;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Seed every page from the backend caches once a session starts
    fn start_session(&mut self) -> Task<Message> {
        let client = self.core.client.clone();
        let whoami = Task::perform(
            async move { client.logged_in_user().await },
            |result| match result {
                Ok(user) => Message::LoggedInUserLoaded(user),
                Err(e) => {
                    warn!("Could not resolve logged-in user: {}", e);
                    Message::LoggedInUserLoaded(None)
                }
            },
        );

        Task::batch([
            whoami,
            self.load_browse_caches(),
            self.load_library(),
            self.load_friends(),
            Task::done(Message::PlaybackTick),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::api::BridgeError;
    use crate::app::{App, Message};
    use crate::ui::components::Page;

    fn logged_out_app() -> App {
        App::new().0
    }

    #[test]
    fn truthy_login_starts_a_session_on_the_default_page() {
        let mut app = logged_out_app();
        let _ = app.update(Message::LoginResult(Ok(true)));
        assert!(app.core.is_logged_in);
        assert_eq!(app.ui.page, Page::Home);
    }

    #[test]
    fn falsy_login_stays_logged_out_with_a_status() {
        let mut app = logged_out_app();
        let _ = app.update(Message::LoginResult(Ok(false)));
        assert!(!app.core.is_logged_in);
        assert_eq!(
            app.ui.login.status.as_deref(),
            Some("Invalid username or password.")
        );
    }

    #[test]
    fn login_error_stays_logged_out() {
        let mut app = logged_out_app();
        let _ = app.update(Message::LoginResult(Err(BridgeError::Network(
            "connection refused".into(),
        ))));
        assert!(!app.core.is_logged_in);
        assert!(app.ui.login.status.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn registration_never_changes_session_state() {
        let mut app = logged_out_app();
        let _ = app.update(Message::ToggleRegistering);
        assert!(app.ui.login.registering);

        let _ = app.update(Message::RegisterResult(Ok(())));
        assert!(!app.core.is_logged_in);
        // Success drops back to the login form
        assert!(!app.ui.login.registering);
    }

    #[test]
    fn logout_is_the_symmetric_transition() {
        let mut app = logged_out_app();
        let _ = app.update(Message::LoginResult(Ok(true)));
        let _ = app.update(Message::LoggedInUserLoaded(Some("ada".into())));
        let _ = app.update(Message::Navigate(Page::Profile));

        let _ = app.update(Message::Logout);
        assert!(!app.core.is_logged_in);
        assert!(app.core.current_user.is_none());
        assert_eq!(app.ui.page, Page::Home);
        assert!(app.ui.profile.friends.is_empty());
    }
}
