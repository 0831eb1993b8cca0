//! A small navigation demo: a sorted list of entries that swap the page shown
//! in a main panel.

use std::rc::Rc;

use flick::prelude::*;
use log::{error, info};

use crate::error::PlaygroundError;

/// Payload of a navigation entry, ordered by `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub order: u32,
    pub title: &'static str,
    pub slug: &'static str,
}

impl Page {
    pub const fn new(order: u32, title: &'static str, slug: &'static str) -> Self {
        Self { order, title, slug }
    }
}

/// A container component with no behavior of its own.
struct Panel {
    base: ComponentBase<Node>,
}

impl Panel {
    fn new(node: Node) -> Rc<Self> {
        Rc::new(Self {
            base: ComponentBase::new(node),
        })
    }
}

impl Component<Node> for Panel {
    fn base(&self) -> &ComponentBase<Node> {
        &self.base
    }

    fn mounted(&self) {
        info!("{} mounted as <{}>", self.id(), self.node().tag().unwrap_or_default());
    }
}

/// Logs what the application context reports.
struct ConsoleListener;

impl AppListener<Node> for ConsoleListener {
    fn toast(&self, info: &str) {
        info!("toast: {}", info);
    }

    fn selected_component(&self, component: Option<&Rc<dyn Component<Node>>>) {
        match component {
            Some(component) => info!("showing {}", component.id()),
            None => info!("showing nothing"),
        }
    }
}

fn page_view(page: &Page) -> Rc<dyn Component<Node>> {
    let node = Node::element("section").attr("data-page", page.slug);
    let heading = Node::element("h1");
    heading.set_text(page.title);
    if let Err(err) = node.append_child(&heading) {
        error!("failed to build the {} page: {}", page.slug, err);
    }
    Panel::new(node)
}

type NavEntry = Rc<dyn PayloadComponent<Page, Node>>;

/// The assembled demo tree.
pub struct Demo {
    root: Rc<Panel>,
    cx: Rc<AppContext<Node>>,
    group: Rc<SelectorGroup>,
    nav: Rc<ListComponent<Page, Node>>,
    entries: Vec<Rc<ListEntry<Page>>>,
    _listener: Rc<ConsoleListener>,
}

impl Demo {
    /// Build a navbar and a main panel under a root node with id `app`.
    pub fn build(pages: &[Page]) -> Result<Self, PlaygroundError> {
        let root = Panel::new(Node::root("app"));
        let navbar = Panel::new(Node::element("nav").class("navbar"));
        let brand = Node::element("a").class("navbar-brand").attr("href", "#");
        brand.set_text("Flick");
        navbar.node().append_child(&brand).map_err(ComponentError::from)?;
        let main = Panel::new(Node::element("main").class("container"));

        let cx = Rc::new(AppContext::new());
        cx.set_host(main.clone());
        let listener = Rc::new(ConsoleListener);
        cx.add_listener(listener.clone());

        let group = Rc::new(SelectorGroup::new());
        let entries = pages
            .iter()
            .map(|page| nav_entry(&group, &cx, page.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let nav = Rc::new(ListComponent::with_compare(
            Node::element("ul").class("navbar-nav"),
            entries.iter().map(|entry| entry.clone() as NavEntry).collect(),
            |a: &Page, b: &Page| a.order.cmp(&b.order),
        )?);

        navbar.add_child(nav.clone())?;
        root.add_child(navbar)?;
        root.add_child(main)?;

        Ok(Self {
            root,
            cx,
            group,
            nav,
            entries,
            _listener: listener,
        })
    }

    /// Add an entry; it lands at its sorted position.
    pub fn add_page(&mut self, page: Page) -> Result<(), PlaygroundError> {
        let entry = nav_entry(&self.group, &self.cx, page)?;
        self.nav.add_child(entry.clone())?;
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry for `slug`, if present.
    pub fn remove_page(&mut self, slug: &str) -> Result<(), PlaygroundError> {
        if let Some(index) = self.entries.iter().position(|e| e.payload().slug == slug) {
            let entry = self.entries.remove(index);
            self.nav.remove_child(&*entry)?;
        }
        Ok(())
    }

    /// Click the entry for `slug`.
    pub fn activate(&self, slug: &str) {
        if let Some(entry) = self.entries.iter().find(|e| e.payload().slug == slug) {
            entry.activate();
        }
    }

    pub fn toast(&self, info: &str) {
        self.cx.toast(info);
    }

    /// Slugs in on-screen order.
    pub fn nav_order(&self) -> Vec<&'static str> {
        self.nav.items().iter().map(|e| e.payload().slug).collect()
    }

    pub fn html(&self) -> String {
        self.root.node().outer_html()
    }
}

fn nav_entry(
    group: &Rc<SelectorGroup>,
    cx: &Rc<AppContext<Node>>,
    page: Page,
) -> Result<Rc<ListEntry<Page>>, PlaygroundError> {
    let title = page.title;
    let icon = Node::element("i").class("bi").class(&format!("bi-{}", page.slug));
    Ok(ListEntry::new(
        group.clone(),
        cx.clone(),
        page,
        icon,
        title,
        page_view,
    )?)
}

/// The pages shown at start-up.
pub fn default_pages() -> Vec<Page> {
    vec![
        Page::new(0, "Home", "home"),
        Page::new(1, "About", "about"),
        Page::new(3, "Contact", "contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mounts_everything() {
        let demo = Demo::build(&default_pages()).unwrap();

        assert!(demo.root.is_mounted());
        assert!(demo.nav.is_mounted());
        assert!(demo.entries.iter().all(|e| e.is_mounted()));
        assert_eq!(demo.nav_order(), vec!["home", "about", "contact"]);
        assert_eq!(demo.group.len(), 3);
    }

    #[test]
    fn test_activation_swaps_page() {
        let demo = Demo::build(&default_pages()).unwrap();

        demo.activate("home");
        assert!(demo.html().contains("<section data-page=\"home\"><h1>Home</h1></section>"));

        demo.activate("contact");
        let html = demo.html();
        assert!(html.contains("data-page=\"contact\""));
        assert!(!html.contains("data-page=\"home\""));
    }

    #[test]
    fn test_added_page_is_sorted_and_removed_page_leaves_group() {
        let mut demo = Demo::build(&default_pages()).unwrap();

        demo.add_page(Page::new(2, "Blog", "blog")).unwrap();
        assert_eq!(demo.nav_order(), vec!["home", "about", "blog", "contact"]);

        demo.remove_page("about").unwrap();
        assert_eq!(demo.nav_order(), vec!["home", "blog", "contact"]);
        assert_eq!(demo.group.len(), 3);
    }
}
