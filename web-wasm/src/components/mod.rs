pub mod search_panel;
