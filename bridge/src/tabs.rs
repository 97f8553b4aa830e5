//! Tab link handling

use tracing::debug;

use crate::dom::{ElementRef, Event, ACTIVE_CLASS};

/// Hides tab panels when a tab link is clicked
pub struct TabSwitcher {
    links: Vec<ElementRef>,
    panels: Vec<ElementRef>,
}

impl TabSwitcher {
    pub fn new(links: Vec<ElementRef>, panels: Vec<ElementRef>) -> Self {
        Self { links, panels }
    }

    pub fn links(&self) -> &[ElementRef] {
        &self.links
    }

    pub fn panels(&self) -> &[ElementRef] {
        &self.panels
    }

    /// Link whose `href` is exactly `href`.
    pub fn find_link(&self, href: &str) -> Option<&ElementRef> {
        self.links.iter().find(|link| link.attribute("href").as_deref() == Some(href))
    }

    // TODO: add ACTIVE_CLASS to the resolved panel once the page no longer
    // expects every panel hidden after a click.
    /// Handles a click on `link`.
    ///
    /// Every panel loses the active class. The panel the link points at is
    /// resolved and returned but not activated.
    pub fn click(&self, link: &ElementRef, event: &mut Event) -> Option<ElementRef> {
        event.prevent_default();

        let href = link.attribute("href");
        let target = href.as_deref().and_then(|href| self.resolve(href));
        debug!(href = ?href, resolved = target.is_some(), "Tab clicked");

        for panel in &self.panels {
            panel.remove_class(ACTIVE_CLASS);
        }

        target
    }

    fn resolve(&self, href: &str) -> Option<ElementRef> {
        let id = href.strip_prefix('#')?;
        self.panels.iter().find(|panel| panel.id().as_deref() == Some(id)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Page, TAB_CONTENT_CLASS};

    fn switcher(page: &Page) -> TabSwitcher {
        TabSwitcher::new(page.query_tab_links(), page.query_by_class(TAB_CONTENT_CLASS))
    }

    #[test]
    fn test_click_clears_every_active_panel() {
        let page = Page::standard();
        let panels = page.query_by_class(TAB_CONTENT_CLASS);
        panels[1].add_class(ACTIVE_CLASS);
        let tabs = switcher(&page);

        for link in tabs.links() {
            let mut event = Event::click();
            tabs.click(link, &mut event);
            assert!(event.default_prevented());
            assert!(panels.iter().all(|panel| !panel.has_class(ACTIVE_CLASS)));
        }
    }

    #[test]
    fn test_click_resolves_but_does_not_activate_target() {
        let page = Page::standard();
        let tabs = switcher(&page);
        let link = tabs.find_link("#validateBlock").cloned().unwrap();

        let target = tabs.click(&link, &mut Event::click()).unwrap();

        assert_eq!(target.id().as_deref(), Some("validateBlock"));
        assert!(!target.has_class(ACTIVE_CLASS));
        assert!(target.has_class(TAB_CONTENT_CLASS));
    }

    #[test]
    fn test_unknown_href_still_clears_panels() {
        let page = Page::standard();
        let tabs = switcher(&page);
        let stray = ElementRef::new(crate::dom::Element::new("a").with_attribute("href", "/elsewhere"));

        assert!(tabs.click(&stray, &mut Event::click()).is_none());
        assert!(tabs.panels().iter().all(|panel| !panel.has_class(ACTIVE_CLASS)));
        assert!(tabs.find_link("/elsewhere").is_none());
    }
}
