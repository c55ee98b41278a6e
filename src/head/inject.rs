use log::{debug, warn};
use web_sys::{window, Document, Element, HtmlHeadElement};

use crate::error::PageError;
use crate::head::tags::HeadTag;

/// Attribute set on every element the page injects.
pub const MARKER: &str = "data-page-head";

/// The parts of a document head the injector touches.
pub trait HeadSurface {
    type Node;

    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    fn append(&self, tag: &HeadTag) -> Result<Self::Node, PageError>;
    fn remove(&self, node: &Self::Node);
    /// Removes marked elements left behind by an earlier activation.
    fn sweep(&self) -> usize;
}

/// Tags added to the head for the lifetime of this value.
pub struct HeadTags<S: HeadSurface> {
    surface: S,
    nodes: Vec<S::Node>,
    previous_title: String,
}

impl<S: HeadSurface> HeadTags<S> {
    pub fn inject(surface: S, title: &str, tags: &[HeadTag]) -> Result<Self, PageError> {
        let stale = surface.sweep();
        if stale > 0 {
            warn!("Removed {} stale head tags", stale);
        }

        let previous_title = surface.title();
        surface.set_title(title);
        let mut injected = Self {
            surface,
            nodes: Vec::with_capacity(tags.len()),
            previous_title,
        };
        // An early return drops `injected`, which removes whatever was appended.
        for tag in tags {
            let node = injected.surface.append(tag)?;
            injected.nodes.push(node);
        }
        debug!("Injected {} head tags", injected.nodes.len());
        Ok(injected)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<S: HeadSurface> Drop for HeadTags<S> {
    fn drop(&mut self) {
        for node in self.nodes.drain(..) {
            self.surface.remove(&node);
        }
        self.surface.set_title(&self.previous_title);
    }
}

/// The live `document.head`.
pub struct DomHead {
    document: Document,
    head: HtmlHeadElement,
}

impl DomHead {
    pub fn current() -> Result<Self, PageError> {
        let document = window()
            .ok_or(PageError::MissingWindow)?
            .document()
            .ok_or(PageError::MissingDocument)?;
        let head = document
            .head()
            .ok_or_else(|| PageError::Dom("document has no <head>".to_string()))?;
        Ok(Self { document, head })
    }

    fn create(&self, tag: &HeadTag) -> Result<Element, PageError> {
        let element = match tag {
            HeadTag::Meta { attr, key, content } => {
                let element = self.document.create_element("meta")?;
                element.set_attribute(attr.as_str(), key)?;
                element.set_attribute("content", content)?;
                element
            }
            HeadTag::Link { rel, href } => {
                let element = self.document.create_element("link")?;
                element.set_attribute("rel", rel)?;
                element.set_attribute("href", href)?;
                element
            }
            HeadTag::JsonLd(json) => {
                let element = self.document.create_element("script")?;
                element.set_attribute("type", "application/ld+json")?;
                element.set_text_content(Some(json));
                element
            }
        };
        element.set_attribute(MARKER, "")?;
        Ok(element)
    }
}

impl HeadSurface for DomHead {
    type Node = Element;

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn append(&self, tag: &HeadTag) -> Result<Element, PageError> {
        let element = self.create(tag)?;
        self.head.append_child(&element)?;
        Ok(element)
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn sweep(&self) -> usize {
        let stale = match self.head.query_selector_all(&format!("[{}]", MARKER)) {
            Ok(stale) => stale,
            Err(e) => {
                warn!("Could not look for stale head tags: {:?}", e);
                return 0;
            }
        };
        let mut removed = 0;
        for i in 0..stale.length() {
            if let Some(node) = stale.item(i) {
                if self.head.remove_child(&node).is_ok() {
                    removed += 1;
                }
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::head::tags::{page_head, PageLocation};

    #[derive(Default)]
    struct Doc {
        title: String,
        next_id: usize,
        // (id, tag, marked)
        head: Vec<(usize, HeadTag, bool)>,
    }

    #[derive(Clone, Default)]
    struct FakeHead(Rc<RefCell<Doc>>);

    impl FakeHead {
        fn tags(&self) -> usize {
            self.0.borrow().head.len()
        }

        fn title_now(&self) -> String {
            self.0.borrow().title.clone()
        }

        fn add_unmarked(&self, tag: HeadTag) {
            let mut doc = self.0.borrow_mut();
            let id = doc.next_id;
            doc.next_id += 1;
            doc.head.push((id, tag, false));
        }
    }

    impl HeadSurface for FakeHead {
        type Node = usize;

        fn title(&self) -> String {
            self.title_now()
        }

        fn set_title(&self, title: &str) {
            self.0.borrow_mut().title = title.to_string();
        }

        fn append(&self, tag: &HeadTag) -> Result<usize, PageError> {
            let mut doc = self.0.borrow_mut();
            let id = doc.next_id;
            doc.next_id += 1;
            doc.head.push((id, tag.clone(), true));
            Ok(id)
        }

        fn remove(&self, node: &usize) {
            self.0.borrow_mut().head.retain(|(id, _, _)| id != node);
        }

        fn sweep(&self) -> usize {
            let mut doc = self.0.borrow_mut();
            let before = doc.head.len();
            doc.head.retain(|(_, _, marked)| !marked);
            before - doc.head.len()
        }
    }

    /// Fails once `limit` tags have been appended.
    struct FlakyHead {
        inner: FakeHead,
        limit: usize,
    }

    impl HeadSurface for FlakyHead {
        type Node = usize;

        fn title(&self) -> String {
            self.inner.title()
        }

        fn set_title(&self, title: &str) {
            self.inner.set_title(title)
        }

        fn append(&self, tag: &HeadTag) -> Result<usize, PageError> {
            if self.inner.tags() >= self.limit {
                return Err(PageError::Dom("quota".to_string()));
            }
            self.inner.append(tag)
        }

        fn remove(&self, node: &usize) {
            self.inner.remove(node)
        }

        fn sweep(&self) -> usize {
            self.inner.sweep()
        }
    }

    fn declared() -> (&'static str, Vec<HeadTag>) {
        let location = PageLocation {
            href: "https://purevision.ie/".to_string(),
            origin: "https://purevision.ie".to_string(),
        };
        page_head(&location, "/assets/logo.png").unwrap()
    }

    #[test]
    fn one_element_per_declared_tag() {
        let head = FakeHead::default();
        let (title, tags) = declared();
        let injected = HeadTags::inject(head.clone(), title, &tags).unwrap();
        assert_eq!(injected.len(), tags.len());
        assert_eq!(head.tags(), tags.len());
        assert_eq!(head.title_now(), title);
    }

    #[test]
    fn drop_removes_only_injected_tags_and_restores_title() {
        let head = FakeHead::default();
        head.set_title("Loading");
        head.add_unmarked(HeadTag::Link {
            rel: "icon",
            href: "/favicon.ico".to_string(),
        });
        let (title, tags) = declared();

        let injected = HeadTags::inject(head.clone(), title, &tags).unwrap();
        assert_eq!(head.tags(), tags.len() + 1);
        drop(injected);

        assert_eq!(head.tags(), 1);
        assert_eq!(head.title_now(), "Loading");
    }

    #[test]
    fn repeated_cycles_leave_nothing_behind() {
        let head = FakeHead::default();
        let (title, tags) = declared();
        for _ in 0..2 {
            let injected = HeadTags::inject(head.clone(), title, &tags).unwrap();
            assert_eq!(head.tags(), tags.len());
            drop(injected);
            assert_eq!(head.tags(), 0);
        }
    }

    #[test]
    fn reactivation_sweeps_leaked_tags() {
        let head = FakeHead::default();
        let (title, tags) = declared();
        std::mem::forget(HeadTags::inject(head.clone(), title, &tags).unwrap());
        let injected = HeadTags::inject(head.clone(), title, &tags).unwrap();
        assert_eq!(head.tags(), tags.len());
        drop(injected);
        assert_eq!(head.tags(), 0);
    }

    #[test]
    fn failed_injection_rolls_back() {
        let inner = FakeHead::default();
        inner.set_title("Before");
        let (title, tags) = declared();
        let flaky = FlakyHead {
            inner: inner.clone(),
            limit: 4,
        };
        let result = HeadTags::inject(flaky, title, &tags);
        assert!(matches!(result, Err(PageError::Dom(_))));
        assert_eq!(inner.tags(), 0);
        assert_eq!(inner.title_now(), "Before");
    }
}
