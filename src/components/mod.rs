//! UI Components
//!
//! Leptos components for the three pages and their shared pieces.

mod bar_chart;
mod login_page;
mod nav_bar;
mod quote_page;
mod search_sort_bar;
mod show_list_page;
mod vote_button;

pub use bar_chart::BarChart;
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
pub use quote_page::QuotePage;
pub use search_sort_bar::SearchSortBar;
pub use show_list_page::ShowListPage;
pub use vote_button::VoteButton;
