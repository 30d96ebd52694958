//! Card state — the set of display fields the loader writes into
//!
//! The card starts in [`CardPhase::Loading`] with every field blank. The
//! date field is written when the minimum-delay timer resolves; the
//! remaining fields are written together by [`Card::apply_profile`],
//! which also hides the loading indicator. That reveal happens at most
//! once per run.

use crate::api::Profile;
use crate::core::constants::NO_BIO_PLACEHOLDER;

/// Lifecycle of a card. `Loading` is the initial phase; `Displayed` and
/// `Failed` are both terminal — there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardPhase {
    Loading,
    Displayed,
    Failed(String),
}

/// The display target: one field per visible slot on the card.
#[derive(Debug)]
pub struct Card {
    pub phase: CardPhase,
    pub date: String,
    pub name: String,
    pub bio: String,
    pub link: String,
    pub avatar: String,
}

impl Card {
    pub fn new() -> Self {
        Card {
            phase: CardPhase::Loading,
            date: String::new(),
            name: String::new(),
            bio: String::new(),
            link: String::new(),
            avatar: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == CardPhase::Loading
    }

    /// Write the date field. Independent of the reveal: the timer resolves
    /// before the fetch, so the date lands first.
    pub fn set_date(&mut self, date: String) {
        self.date = date;
    }

    /// Reveal the card with the fetched profile.
    ///
    /// Writes the name as given (blank when the profile has none), the
    /// profile link, the avatar source, and the bio — or the fixed
    /// placeholder when the bio is null. Returns `false` without touching
    /// anything if the card already left the loading phase.
    pub fn apply_profile(&mut self, profile: &Profile) -> bool {
        if !self.is_loading() {
            return false;
        }

        self.phase = CardPhase::Displayed;
        self.name = profile.name.clone().unwrap_or_default();
        self.link = profile.html_url.clone();
        self.avatar = profile.avatar_url.clone();
        self.bio = profile
            .bio
            .clone()
            .unwrap_or_else(|| NO_BIO_PLACEHOLDER.to_string());
        true
    }

    /// Record a terminal failure. Only a loading card can fail; a card
    /// that already displayed stays displayed.
    pub fn fail(&mut self, message: String) {
        if self.is_loading() {
            self.phase = CardPhase::Failed(message);
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octocat() -> Profile {
        Profile {
            name: Some("The Octocat".to_string()),
            html_url: "https://github.com/octocat".to_string(),
            avatar_url: "https://img/o.png".to_string(),
            bio: None,
        }
    }

    #[test]
    fn new_card_is_loading_with_blank_fields() {
        let card = Card::new();
        assert!(card.is_loading());
        assert!(card.date.is_empty());
        assert!(card.name.is_empty());
        assert!(card.bio.is_empty());
    }

    #[test]
    fn apply_profile_reveals_all_fields() {
        let mut card = Card::new();
        card.set_date("8/23/2026".to_string());

        assert!(card.apply_profile(&octocat()));
        assert_eq!(card.phase, CardPhase::Displayed);
        assert_eq!(card.date, "8/23/2026");
        assert_eq!(card.name, "The Octocat");
        assert_eq!(card.link, "https://github.com/octocat");
        assert_eq!(card.avatar, "https://img/o.png");
    }

    #[test]
    fn null_bio_renders_the_placeholder() {
        let mut card = Card::new();
        card.apply_profile(&octocat());
        assert_eq!(card.bio, "No data available");
    }

    #[test]
    fn present_bio_renders_verbatim() {
        let mut card = Card::new();
        let profile = Profile {
            bio: Some("Engineer".to_string()),
            ..octocat()
        };
        card.apply_profile(&profile);
        assert_eq!(card.bio, "Engineer");
    }

    #[test]
    fn missing_name_renders_blank() {
        let mut card = Card::new();
        let profile = Profile {
            name: None,
            ..octocat()
        };
        card.apply_profile(&profile);
        assert_eq!(card.name, "");
    }

    #[test]
    fn reveal_happens_at_most_once() {
        let mut card = Card::new();
        assert!(card.apply_profile(&octocat()));

        let other = Profile {
            name: Some("Someone Else".to_string()),
            ..octocat()
        };
        assert!(!card.apply_profile(&other));
        assert_eq!(card.name, "The Octocat");
    }

    #[test]
    fn failure_is_terminal_and_only_from_loading() {
        let mut card = Card::new();
        card.fail("Request failed: offline".to_string());
        assert_eq!(
            card.phase,
            CardPhase::Failed("Request failed: offline".to_string())
        );

        // A displayed card ignores a late failure.
        let mut displayed = Card::new();
        displayed.apply_profile(&octocat());
        displayed.fail("too late".to_string());
        assert_eq!(displayed.phase, CardPhase::Displayed);
    }
}
