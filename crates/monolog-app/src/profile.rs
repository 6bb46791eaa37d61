use std::fmt::Write as _;

use monolog_core::models::profile::{Profile, ProfileUpdate};

use crate::api::ProfileApi;

pub const LOAD_ERROR: &str = "Error: failed to load profile";
pub const SAVE_ERROR: &str = "Error: failed to save profile";

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading,
    Error(String),
    Loaded(Profile),
    /// Only the name is editable; the rest of the record is shown as fetched.
    Editing {
        profile: Profile,
        draft: String,
        save_error: Option<String>,
    },
}

/// Profile view/edit component.
///
/// Fetches once on [`mount`](Self::mount), then moves between `Loaded` and
/// `Editing`. A save replaces the whole record with the server's response.
/// Overlapping saves are not guarded; whichever response lands last wins.
pub struct ProfileView<A> {
    api: A,
    state: ProfileState,
}

impl<A: ProfileApi> ProfileView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ProfileState::Loading,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            ProfileState::Loaded(profile) | ProfileState::Editing { profile, .. } => Some(profile),
            ProfileState::Loading | ProfileState::Error(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ProfileState::Loading)
    }

    /// Issue the one profile fetch. Does nothing once the view has left
    /// `Loading`.
    pub async fn mount(&mut self) {
        if !self.is_loading() {
            return;
        }

        self.state = match self.api.fetch_profile().await {
            Ok(profile) => {
                tracing::debug!(name = %profile.name, "profile loaded");
                ProfileState::Loaded(profile)
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile fetch failed");
                ProfileState::Error(LOAD_ERROR.to_string())
            }
        };
    }

    /// Enter edit mode with the current name as the draft.
    pub fn edit(&mut self) -> bool {
        let ProfileState::Loaded(profile) = &self.state else {
            return false;
        };

        let profile = profile.clone();
        self.state = ProfileState::Editing {
            draft: profile.name.clone(),
            profile,
            save_error: None,
        };
        true
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.state {
            ProfileState::Editing { draft, .. } => {
                *draft = text.into();
                true
            }
            _ => false,
        }
    }

    /// Drop the draft and go back to the record as it was.
    pub fn cancel(&mut self) -> bool {
        let ProfileState::Editing { profile, .. } = &self.state else {
            return false;
        };

        self.state = ProfileState::Loaded(profile.clone());
        true
    }

    /// Send the draft. On success the server's record replaces ours and the
    /// view returns to `Loaded`; on failure it stays in `Editing` with an
    /// error.
    pub async fn save(&mut self) -> bool {
        let ProfileState::Editing { draft, .. } = &self.state else {
            return false;
        };
        let update = ProfileUpdate {
            name: draft.clone(),
        };

        match self.api.update_profile(update).await {
            Ok(profile) => {
                tracing::info!(name = %profile.name, "profile saved");
                self.state = ProfileState::Loaded(profile);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile save failed");
                if let ProfileState::Editing { save_error, .. } = &mut self.state {
                    *save_error = Some(SAVE_ERROR.to_string());
                }
                false
            }
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            ProfileState::Loading => "Loading...".to_string(),
            ProfileState::Error(message) => message.clone(),
            ProfileState::Loaded(profile) => {
                let mut out = render_profile(profile);
                out.push_str("[Edit]\n");
                out
            }
            ProfileState::Editing {
                draft, save_error, ..
            } => {
                let mut out = format!("Name: {draft}\n[Save] [Cancel]\n");
                if let Some(error) = save_error {
                    out.push_str(error);
                    out.push('\n');
                }
                out
            }
        }
    }
}

fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    for line in [&profile.title, &profile.email, &profile.description]
        .into_iter()
        .flatten()
    {
        let _ = writeln!(out, "{line}");
    }

    for (heading, items) in [("Skills", &profile.skills), ("Interests", &profile.interests)] {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{heading}:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }
    out
}
