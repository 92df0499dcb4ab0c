mod content;
mod node;

pub use content::{Content, Span};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID and return it mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the text of every text and span node in tree order.
pub fn collect_text(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    collect_text_recursive(root, &mut out);
    out
}

fn collect_text_recursive(element: &Element, out: &mut Vec<String>) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push(text.clone()),
        Content::Spans(spans) => out.push(spans.iter().map(|s| s.text.as_str()).collect()),
        Content::Children(children) => {
            for child in children {
                collect_text_recursive(child, out);
            }
        }
    }
}
