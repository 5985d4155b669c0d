/*
[INPUT]:  Static navigation entries
[OUTPUT]: Navigation items with per-instance ids
[POS]:    Domain layer - navigation menu data
[UPDATE]: When adding pages to the navigation menu
*/

use serde::Serialize;
use uuid::Uuid;

/// One entry of the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: String,
    pub icon_name: String,
    pub label: String,
    pub link: String,
}

impl NavItem {
    fn new(icon_name: &str, label: &str, link: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            icon_name: icon_name.to_string(),
            label: label.to_string(),
            link: link.to_string(),
        }
    }
}

/// Navigation menu entries, in display order
pub fn nav_items() -> Vec<NavItem> {
    vec![NavItem::new("ic:twotone-task-alt", "Tasks", "/Tasks")]
}
