use yew::prelude::*;

use crate::page::{self, DisplayTree, Element, Level, Node};

pub fn view_node(node: &Node) -> Html {
    match node {
        Node::Group { element, class, children } => {
            let class = *class;
            let children = children.iter().map(view_node);
            match element {
                Element::Div => html! { <div {class}>{ for children }</div> },
                Element::Header => html! { <header {class}>{ for children }</header> },
            }
        }
        Node::Heading { level, text, class } => {
            let class = *class;
            match level {
                Level::H1 => html! { <h1 {class}>{ *text }</h1> },
                Level::H2 => html! { <h2 {class}>{ *text }</h2> },
            }
        }
        Node::Paragraph { text, class } => {
            let class = *class;
            html! { <p {class}>{ *text }</p> }
        }
        Node::List { items } => html! {
            <ul>{ for items.iter().map(view_node) }</ul>
        },
        // marker and label stay one text run
        Node::ListItem { .. } => html! { <li>{ node.line().unwrap_or_default() }</li> },
        Node::Text { text } => html! { <>{ *text }</> },
    }
}

pub fn view_tree(tree: &DisplayTree) -> Html {
    view_node(&tree.root)
}

#[function_component(App)]
pub fn app() -> Html {
    view_tree(&page::render())
}
