//! Application Context
//!
//! Navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// The three pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Quotes,
    ShowList,
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Currently mounted page - read
    pub page: ReadSignal<Page>,
    /// Currently mounted page - write
    set_page: WriteSignal<Page>,
}

impl NavContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch pages; the page being left unmounts and drops its local state
    pub fn goto(&self, page: Page) {
        self.set_page.set(page);
    }
}
