use std::time::Duration;

use crate::{Effect, ElementId, FilterButton, ProjectCard, Timer};

pub const SHOW_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Shown,
    /// Displayed, waiting for the fade-in to start.
    FadingIn,
    /// Still displayed while fading out.
    FadingOut,
    Hidden,
}

impl CardVisibility {
    pub fn is_displayed(self) -> bool {
        self != CardVisibility::Hidden
    }

    pub fn is_opaque(self) -> bool {
        self == CardVisibility::Shown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub id: ElementId,
    pub category: String,
    pub visibility: CardVisibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    buttons: Vec<FilterButton>,
    active_button: Option<ElementId>,
    cards: Vec<CardState>,
}

impl ProjectFilter {
    pub fn register(&mut self, buttons: &[FilterButton], cards: &[ProjectCard]) {
        self.buttons = buttons.to_vec();
        self.active_button = buttons
            .iter()
            .find(|button| button.filter == SHOW_ALL)
            .map(|button| button.id.clone());
        self.cards = cards
            .iter()
            .map(|card| CardState {
                id: card.id.clone(),
                category: card.category.clone(),
                visibility: CardVisibility::Shown,
            })
            .collect();
    }

    /// Activates `button` and starts the fade transitions for every card
    /// whose visibility changes.
    pub fn select(
        &mut self,
        button: &str,
        filter: &str,
        fade_in: Duration,
        fade_out: Duration,
    ) -> Vec<Effect> {
        self.active_button = Some(button.to_string());

        let mut effects = Vec::new();
        for card in &mut self.cards {
            let matches = filter == SHOW_ALL || card.category == filter;
            let next = match (matches, card.visibility) {
                (true, CardVisibility::Shown | CardVisibility::FadingIn) => continue,
                (true, _) => (CardVisibility::FadingIn, fade_in),
                (false, CardVisibility::Hidden | CardVisibility::FadingOut) => continue,
                (false, _) => (CardVisibility::FadingOut, fade_out),
            };
            card.visibility = next.0;
            effects.push(Effect::StartTimer {
                timer: Timer::FilterSettle(card.id.clone()),
                after: next.1,
            });
        }
        effects
    }

    /// Completes a pending transition for `card`.
    pub fn settle(&mut self, card: &str) -> bool {
        let Some(state) = self.cards.iter_mut().find(|state| state.id == card) else {
            return false;
        };
        let next = match state.visibility {
            CardVisibility::FadingIn => CardVisibility::Shown,
            CardVisibility::FadingOut => CardVisibility::Hidden,
            settled => settled,
        };
        let changed = next != state.visibility;
        state.visibility = next;
        changed
    }

    pub fn active_button(&self) -> Option<&str> {
        self.active_button.as_deref()
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }
}
