//! UI Components
//!
//! Leptos components for the tool directory page.

mod new_tool_form;
mod toast;
mod tool_card;
mod tool_list;

pub use new_tool_form::NewToolForm;
pub use toast::Toast;
pub use tool_card::ToolCard;
pub use tool_list::ToolList;
