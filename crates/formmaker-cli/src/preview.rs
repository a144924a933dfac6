//! Full-page preview around rendered form markup.

use ironhtml::html;
use ironhtml::typed::Document;
use ironhtml_elements::{Body, Div, Head, Html, Link, Meta, Title};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

/// Wraps `content` in a Bootstrap page titled `title`.
pub fn render_page(title: &str, content: &str) -> String {
    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(title))
                        .child::<Link, _>(|l| l.attr("href", BOOTSTRAP_CSS).attr("rel", "stylesheet"))
                })
                .child::<Body, _>(|body| {
                    body.child::<Div, _>(|container| {
                        let heading = html! {
                            h1.class("h3 mb-4") {
                                #title
                            }
                        };
                        container
                            .class("container py-4")
                            .raw(heading.render())
                            .raw(content)
                    })
                })
        })
        .build()
}
