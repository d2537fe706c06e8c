use crate::{PageLayout, Placement, SiteSettings};

/// Parallax offsets for the hero block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub content_offset: f64,
    pub content_opacity: f64,
    pub shapes_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    scroll_y: f64,
    scrolled: bool,
    active_section: Option<String>,
    menu_open: bool,
    back_to_top_visible: bool,
    parallax: Option<Parallax>,
    nav_height: f64,
    viewport_height: f64,
    hero_height: Option<f64>,
    sections: Vec<Placement>,
    anchors: Vec<Placement>,
}

impl NavState {
    pub fn apply_layout(&mut self, layout: &PageLayout) {
        self.nav_height = layout.nav_height;
        self.viewport_height = layout.viewport_height;
        self.hero_height = layout.hero_height;
        self.sections = layout.sections.clone();
        self.anchors = layout.anchors.clone();
    }

    /// Recomputes the header, active link and back-to-top state for a new
    /// scroll offset. Returns whether anything visible changed.
    pub fn on_scroll(&mut self, y: f64, settings: &SiteSettings) -> bool {
        self.scroll_y = y;
        let scrolled = y > settings.scrolled_threshold;
        let back_to_top_visible = y > settings.back_to_top_threshold;
        let active_section = self.section_at(y, settings.active_section_offset);

        let changed = scrolled != self.scrolled
            || back_to_top_visible != self.back_to_top_visible
            || active_section != self.active_section;
        self.scrolled = scrolled;
        self.back_to_top_visible = back_to_top_visible;
        self.active_section = active_section;
        changed
    }

    /// Last section, in document order, whose top (less the header and the
    /// lead offset) has been scrolled past.
    fn section_at(&self, y: f64, lead: f64) -> Option<String> {
        self.sections
            .iter()
            .filter(|section| y >= section.top - self.nav_height - lead)
            .last()
            .map(|section| section.id.clone())
    }

    pub fn target_top(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .chain(self.anchors.iter())
            .find(|placement| placement.id == id)
            .map(|placement| placement.top)
    }

    /// Scroll destination for an in-page link such as `#services`.
    pub fn anchor_destination(&self, href: &str) -> Option<f64> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        self.target_top(id).map(|top| top - self.nav_height)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Recomputes the hero parallax for the current offset. Past the hero the
    /// last applied values are kept.
    pub fn update_parallax(&mut self) -> bool {
        let Some(hero_height) = self.hero_height.filter(|h| *h > 0.0) else {
            return false;
        };
        if self.scroll_y >= hero_height {
            return false;
        }
        let next = Parallax {
            content_offset: self.scroll_y * 0.5,
            content_opacity: 1.0 - self.scroll_y / hero_height,
            shapes_offset: self.scroll_y * 0.3,
        };
        let changed = self.parallax != Some(next);
        self.parallax = Some(next);
        changed
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &String> {
        self.sections.iter().map(|section| &section.id)
    }

    pub fn has_hero(&self) -> bool {
        self.hero_height.is_some_and(|h| h > 0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn nav_height(&self) -> f64 {
        self.nav_height
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn parallax(&self) -> Option<Parallax> {
        self.parallax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout {
            nav_height: 80.0,
            hero_height: Some(600.0),
            sections: vec![
                Placement {
                    id: "home".to_string(),
                    top: 0.0,
                },
                Placement {
                    id: "services".to_string(),
                    top: 800.0,
                },
                Placement {
                    id: "contact".to_string(),
                    top: 1600.0,
                },
            ],
            anchors: vec![Placement {
                id: "job-1".to_string(),
                top: 2000.0,
            }],
            ..PageLayout::default()
        }
    }

    #[test]
    fn active_section_follows_scroll() {
        let settings = SiteSettings::default();
        let mut nav = NavState::default();
        nav.apply_layout(&layout());

        nav.on_scroll(0.0, &settings);
        assert_eq!(nav.active_section(), Some("home"));
        assert!(!nav.is_scrolled());

        nav.on_scroll(619.0, &settings);
        assert_eq!(nav.active_section(), Some("home"));

        nav.on_scroll(620.0, &settings);
        assert_eq!(nav.active_section(), Some("services"));
        assert!(nav.is_scrolled());
        assert!(nav.is_back_to_top_visible());
    }

    #[test]
    fn anchor_destination_subtracts_header() {
        let mut nav = NavState::default();
        nav.apply_layout(&layout());
        assert_eq!(nav.anchor_destination("#services"), Some(720.0));
        assert_eq!(nav.anchor_destination("#job-1"), Some(1920.0));
        assert_eq!(nav.anchor_destination("#missing"), None);
        assert_eq!(nav.anchor_destination("#"), None);
        assert_eq!(nav.anchor_destination("services"), None);
    }

    #[test]
    fn parallax_stops_past_hero() {
        let settings = SiteSettings::default();
        let mut nav = NavState::default();
        nav.apply_layout(&layout());

        nav.on_scroll(300.0, &settings);
        assert!(nav.update_parallax());
        let parallax = nav.parallax().unwrap();
        assert_eq!(parallax.content_offset, 150.0);
        assert_eq!(parallax.content_opacity, 0.5);
        assert!((parallax.shapes_offset - 90.0).abs() < 1e-9);

        nav.on_scroll(900.0, &settings);
        assert!(!nav.update_parallax());
        assert_eq!(nav.parallax(), Some(parallax));
    }
}
