//! Application state for a launchpad front-end.
//!
//! All mutations go through [`Intent`] so a view layer only ever renders a
//! [`Session`] and dispatches intents back into it.

use anchor_lang::prelude::Pubkey;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Known tokens, newest first
    pub tokens: Vec<Pubkey>,
    pub selected: Option<Pubkey>,
    pub create_dialog_open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    OpenCreateDialog,
    CloseCreateDialog,
    /// A token was created; it goes to the front and the dialog closes
    TokenCreated(Pubkey),
    SelectToken(Pubkey),
    ClearSelection,
    /// Fresh token list from the program, in creation order
    TokensRefreshed(Vec<Pubkey>),
}

impl Session {
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::OpenCreateDialog => self.create_dialog_open = true,
            Intent::CloseCreateDialog => self.create_dialog_open = false,
            Intent::TokenCreated(token) => {
                self.tokens.retain(|t| *t != token);
                self.tokens.insert(0, token);
                self.create_dialog_open = false;
            }
            Intent::SelectToken(token) => {
                if self.tokens.contains(&token) {
                    self.selected = Some(token);
                }
            }
            Intent::ClearSelection => self.selected = None,
            Intent::TokensRefreshed(mut tokens) => {
                tokens.reverse();
                self.tokens = tokens;
                if let Some(selected) = self.selected {
                    if !self.tokens.contains(&selected) {
                        self.selected = None;
                    }
                }
            }
        }
    }
}
