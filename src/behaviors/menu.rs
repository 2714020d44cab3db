//! Hamburger menu toggle

use page_bindings::{query_one, Bindings};
use web_sys::{Document, Element};

pub fn bind(document: &Document, bindings: &mut Bindings) {
    let hamburger = query_one::<Element>(document, ".hamburger");
    let nav_links = query_one::<Element>(document, ".navbar-links");
    let (Some(hamburger), Some(nav_links)) = (hamburger, nav_links) else {
        return;
    };

    bindings.listen(&hamburger, "click", move |_| {
        let _ = nav_links.class_list().toggle("open");
    });
}
