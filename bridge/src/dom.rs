//! In-memory page model
//!
//! Stands in for the browser document: elements carry an id, a class list,
//! attributes and inner HTML. Handles are shared and thread-safe so a
//! submission running on the runtime can write its result while the page
//! still owns the element.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Class marking the visible tab panel
pub const ACTIVE_CLASS: &str = "active";

/// Class shared by all tab panels
pub const TAB_CONTENT_CLASS: &str = "tab-content";

/// A single page element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_inner_html(mut self, html: &str) -> Self {
        self.inner_html = html.to_string();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds `class` unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }
}

/// Shared handle to an [`Element`]
#[derive(Debug, Clone)]
pub struct ElementRef(Arc<Mutex<Element>>);

impl ElementRef {
    pub fn new(element: Element) -> Self {
        Self(Arc::new(Mutex::new(element)))
    }

    fn lock(&self) -> MutexGuard<'_, Element> {
        // Element state stays consistent even if a writer panicked.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> Option<String> {
        self.lock().id().map(str::to_string)
    }

    pub fn tag(&self) -> String {
        self.lock().tag().to_string()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.lock().has_class(class)
    }

    pub fn add_class(&self, class: &str) {
        self.lock().add_class(class);
    }

    pub fn remove_class(&self, class: &str) {
        self.lock().remove_class(class);
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.lock().attribute(name).map(str::to_string)
    }

    pub fn inner_html(&self) -> String {
        self.lock().inner_html().to_string()
    }

    pub fn set_inner_html(&self, html: impl Into<String>) {
        self.lock().set_inner_html(html);
    }

    /// Copy of the current element state.
    pub fn snapshot(&self) -> Element {
        self.lock().clone()
    }

    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Submit,
    Click,
}

/// A dispatched UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    default_prevented: bool,
}

impl Event {
    pub fn submit() -> Self {
        Self { kind: EventKind::Submit, default_prevented: false }
    }

    pub fn click() -> Self {
        Self { kind: EventKind::Click, default_prevented: false }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Element tree of the certificate page
///
/// Tab links live under `nav ul li`; everything else is a direct child of
/// the body.
#[derive(Debug, Clone, Default)]
pub struct Page {
    nav_links: Vec<ElementRef>,
    body: Vec<ElementRef>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of the certificate page: two tabs, their panels, both forms
    /// and both response areas. The first panel starts out active.
    pub fn standard() -> Self {
        let mut page = Self::new();

        page.push_nav_link(Element::new("a").with_attribute("href", "#addBlock").with_inner_html("Add Block"));
        page.push_nav_link(
            Element::new("a")
                .with_attribute("href", "#validateBlock")
                .with_inner_html("Validate Certificate"),
        );

        page.push(
            Element::new("section")
                .with_id("addBlock")
                .with_class(TAB_CONTENT_CLASS)
                .with_class(ACTIVE_CLASS),
        );
        page.push(Element::new("form").with_id("addBlockForm"));
        page.push(Element::new("div").with_id("addBlockResponse"));

        page.push(Element::new("section").with_id("validateBlock").with_class(TAB_CONTENT_CLASS));
        page.push(Element::new("form").with_id("validateBlockForm"));
        page.push(Element::new("div").with_id("validateBlockResponse"));

        page
    }

    /// Appends an element to the body and returns its handle.
    pub fn push(&mut self, element: Element) -> ElementRef {
        let handle = ElementRef::new(element);
        self.body.push(handle.clone());
        handle
    }

    /// Appends a link to the `nav ul` list.
    pub fn push_nav_link(&mut self, element: Element) -> ElementRef {
        let handle = ElementRef::new(element);
        self.nav_links.push(handle.clone());
        handle
    }

    fn all(&self) -> impl Iterator<Item = &ElementRef> {
        self.nav_links.iter().chain(self.body.iter())
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.all().find(|el| el.id().as_deref() == Some(id)).cloned()
    }

    /// Equivalent of `nav ul li a`.
    pub fn query_tab_links(&self) -> Vec<ElementRef> {
        self.nav_links.iter().filter(|el| el.tag() == "a").cloned().collect()
    }

    pub fn query_by_class(&self, class: &str) -> Vec<ElementRef> {
        self.all().filter(|el| el.has_class(class)).cloned().collect()
    }
}
