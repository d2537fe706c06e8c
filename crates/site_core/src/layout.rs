use serde::{Deserialize, Serialize};

pub type ElementId = String;
pub type GroupId = String;

/// Geometry and registrations reported by the host once the page has loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub viewport_height: f64,
    pub nav_height: f64,
    pub hero_height: Option<f64>,
    /// `section[id]` elements in document order.
    pub sections: Vec<Placement>,
    /// Other in-page link targets (job cards, etc).
    pub anchors: Vec<Placement>,
    pub reveal_targets: Vec<Placement>,
    pub lazy_images: Vec<LazyImageLayout>,
    pub stat_groups: Vec<StatGroupLayout>,
    pub filter_buttons: Vec<FilterButton>,
    pub project_cards: Vec<ProjectCard>,
    pub dropdowns: Vec<ElementId>,
    /// Location hash including the leading `#`, if any.
    pub location_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: ElementId,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyImageLayout {
    pub id: ElementId,
    pub data_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatGroupLayout {
    pub id: GroupId,
    /// `(element id, text as authored)` for each stat number.
    pub counters: Vec<(ElementId, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub id: ElementId,
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: ElementId,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}
