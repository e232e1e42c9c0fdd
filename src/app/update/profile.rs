// src/app/update/profile.rs
//! Friends list handlers

use iced::Task;
use tracing::{error, info};

use crate::api::BridgeError;
use crate::app::{App, Message};

/// Status line for a failed add-friend call, by failure kind
fn add_friend_status(error: &BridgeError) -> String {
    match error {
        BridgeError::NotFound => "No user found with that username.".to_string(),
        BridgeError::Network(_) => "Could not reach the server. Try again.".to_string(),
        BridgeError::Validation(msg) => format!("Invalid username: {}", msg),
        other => format!("Could not add friend: {}", other),
    }
}

impl App {
    /// Read the cached friend list from the backend
    pub(crate) fn load_friends(&mut self) -> Task<Message> {
        let client = self.core.client.clone();
        Task::perform(
            async move { client.cached_friends().await },
            Message::FriendsLoaded,
        )
    }

    /// Handle profile messages
    pub fn handle_profile(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FriendInputChanged(value) => {
                self.ui.profile.friend_input = value.clone();
                Some(Task::none())
            }

            Message::AddFriend => {
                let client = self.core.client.clone();
                let friend = self.ui.profile.friend_input.clone();
                Some(Task::perform(
                    async move { client.add_friend(&friend).await },
                    Message::FriendAdded,
                ))
            }

            Message::FriendAdded(result) => match result {
                Ok(()) => {
                    info!("Friend added");
                    self.ui.profile.status = Some("User added as a friend!".to_string());
                    self.ui.profile.friend_input.clear();
                    // Re-fetch the authoritative list rather than guessing
                    Some(self.load_friends())
                }
                Err(e) => {
                    error!("Error adding friend: {}", e);
                    self.ui.profile.status = Some(add_friend_status(e));
                    Some(Task::none())
                }
            },

            Message::FriendsLoaded(result) => {
                match result {
                    Ok(friends) => {
                        self.ui.profile.friends = friends.clone();
                    }
                    Err(e) => {
                        error!("Error fetching cached friends: {}", e);
                        self.ui.profile.status = Some("Could not load friends.".to_string());
                    }
                }
                Some(Task::none())
            }

            Message::RemoveFriend(friend) => {
                let client = self.core.client.clone();
                let friend = friend.clone();
                Some(Task::perform(
                    async move {
                        let result = client.remove_friend(&friend).await;
                        (friend, result)
                    },
                    |(friend, result)| Message::FriendRemoved(friend, result),
                ))
            }

            Message::FriendRemoved(friend, result) => match result {
                Ok(()) => {
                    info!("Friend '{}' removed", friend);
                    self.ui.profile.friends.retain(|f| f != friend);
                    Some(Task::none())
                }
                Err(e) => {
                    error!("Error removing friend '{}': {}", friend, e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Could not remove friend.".to_string(),
                    )))
                }
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;

    #[test]
    fn add_failure_messages_follow_the_error_kind() {
        assert_eq!(
            add_friend_status(&BridgeError::NotFound),
            "No user found with that username."
        );
        assert!(
            add_friend_status(&BridgeError::Network("timed out".into()))
                .contains("Could not reach the server")
        );
        assert!(
            add_friend_status(&BridgeError::Validation("empty name".into()))
                .contains("empty name")
        );
    }

    #[test]
    fn add_success_clears_the_input_and_refetches() {
        let mut app = App::new().0;
        app.ui.profile.friend_input = "grace".into();
        let _ = app.update(Message::FriendAdded(Ok(())));
        assert!(app.ui.profile.friend_input.is_empty());
        assert_eq!(
            app.ui.profile.status.as_deref(),
            Some("User added as a friend!")
        );
    }

    #[test]
    fn refetched_list_replaces_local_state() {
        let mut app = App::new().0;
        app.ui.profile.friends = vec!["old".into()];
        let _ = app.update(Message::FriendsLoaded(Ok(vec![
            "ada".into(),
            "grace".into(),
        ])));
        assert_eq!(app.ui.profile.friends, vec!["ada", "grace"]);
    }

    #[test]
    fn removal_filters_locally_without_a_refetch() {
        let mut app = App::new().0;
        app.ui.profile.friends = vec!["ada".into(), "grace".into()];
        let _ = app.update(Message::FriendRemoved("ada".into(), Ok(())));
        assert_eq!(app.ui.profile.friends, vec!["grace"]);
    }

    #[test]
    fn failed_removal_keeps_the_list() {
        let mut app = App::new().0;
        app.ui.profile.friends = vec!["ada".into()];
        let _ = app.update(Message::FriendRemoved(
            "ada".into(),
            Err(BridgeError::Backend("boom".into())),
        ));
        assert_eq!(app.ui.profile.friends, vec!["ada"]);
    }
}
