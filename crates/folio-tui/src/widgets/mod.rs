mod help;
mod hover_preview;
mod page_view;
mod popup;
mod project_detail;
mod status_bar;

pub use help::HelpWidget;
pub use hover_preview::HoverPreviewWidget;
pub use page_view::PageViewWidget;
pub use project_detail::ProjectDetailWidget;
pub use status_bar::StatusBarWidget;
