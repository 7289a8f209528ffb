//! The page content as plain data.
//!
//! `render()` builds the whole page as a [`DisplayTree`]. Nothing here touches
//! the DOM; `crate::view` turns the tree into `Html`.

use serde::Serialize;

pub const TITLE: &str = "🐳 React Docker App";
pub const WELCOME: &str = "Welcome to your Dockerized React application!";
pub const TAGLINE: &str = "Perfect for learning CI/CD with AWS 🚀";
pub const FEATURES_HEADING: &str = "Features Ready for CI/CD:";
pub const FEATURE_MARKER: &str = "✅";
pub const VERSION_LINE: &str = concat!("Version: ", env!("CARGO_PKG_VERSION"));

pub const FEATURES: [&str; 4] = [
    "Dockerized React Application",
    "Multi-stage Docker Build",
    "Production-ready Nginx Serving",
    "Optimized for AWS Deployment",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Div,
    Header,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    H1,
    H2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Group {
        element: Element,
        class: Option<&'static str>,
        children: Vec<Node>,
    },
    Heading {
        level: Level,
        text: &'static str,
        class: Option<&'static str>,
    },
    Paragraph {
        text: &'static str,
        class: Option<&'static str>,
    },
    List {
        items: Vec<Node>,
    },
    ListItem {
        marker: Option<&'static str>,
        text: &'static str,
    },
    Text {
        text: &'static str,
    },
}

impl Node {
    /// The visible text of a leaf node. Containers have none of their own.
    pub fn line(&self) -> Option<String> {
        match self {
            Node::Heading { text, .. } | Node::Paragraph { text, .. } | Node::Text { text } => {
                Some((*text).to_string())
            }
            Node::ListItem { marker: Some(m), text } => Some(format!("{m} {text}")),
            Node::ListItem { marker: None, text } => Some((*text).to_string()),
            Node::Group { .. } | Node::List { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group { children, .. } => children,
            Node::List { items } => items,
            _ => &[],
        }
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        if let Some(line) = self.line() {
            out.push(line);
        }
        for child in self.children() {
            child.collect_lines(out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTree {
    pub root: Node,
}

impl DisplayTree {
    /// Depth-first visible text, one entry per leaf, in display order.
    pub fn text_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.collect_lines(&mut out);
        out
    }

    /// Lines of every list item in the tree.
    pub fn features(&self) -> Vec<String> {
        fn walk(node: &Node, out: &mut Vec<String>) {
            if let Node::ListItem { .. } = node {
                out.extend(node.line());
            }
            for child in node.children() {
                walk(child, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn render() -> DisplayTree {
    let items = FEATURES
        .into_iter()
        .map(|text| Node::ListItem {
            marker: Some(FEATURE_MARKER),
            text,
        })
        .collect();

    let header = Node::Group {
        element: Element::Header,
        class: Some("App-header"),
        children: vec![
            Node::Heading { level: Level::H1, text: TITLE, class: None },
            Node::Paragraph { text: WELCOME, class: None },
            Node::Paragraph { text: TAGLINE, class: None },
            Node::Group {
                element: Element::Div,
                class: Some("features"),
                children: vec![
                    Node::Heading { level: Level::H2, text: FEATURES_HEADING, class: None },
                    Node::List { items },
                ],
            },
            Node::Paragraph { text: VERSION_LINE, class: Some("version") },
        ],
    };

    DisplayTree {
        root: Node::Group {
            element: Element::Div,
            class: Some("App"),
            children: vec![header],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_text_is_in_display_order() {
        let lines = render().text_lines();
        assert_eq!(
            lines,
            vec![
                "🐳 React Docker App",
                "Welcome to your Dockerized React application!",
                "Perfect for learning CI/CD with AWS 🚀",
                "Features Ready for CI/CD:",
                "✅ Dockerized React Application",
                "✅ Multi-stage Docker Build",
                "✅ Production-ready Nginx Serving",
                "✅ Optimized for AWS Deployment",
                "Version: 1.0.0",
            ]
        );
    }

    #[test]
    fn exactly_four_features_share_the_marker() {
        let features = render().features();
        assert_eq!(features.len(), 4);
        for (line, label) in features.iter().zip(FEATURES) {
            assert_eq!(line, &format!("✅ {label}"));
        }
    }

    #[test]
    fn version_is_the_last_line() {
        let lines = render().text_lines();
        assert_eq!(lines.last().map(String::as_str), Some("Version: 1.0.0"));
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(render(), render());
    }

    #[test]
    fn features_block_is_tagged() {
        let tree = render();
        let header = &tree.root.children()[0];
        let block = header
            .children()
            .iter()
            .find(|n| matches!(n, Node::Group { class: Some("features"), .. }));
        assert!(block.is_some(), "no features group in {header:?}");
        assert_eq!(block.unwrap().children().len(), 2);
    }

    #[test]
    fn containers_have_no_text() {
        let list = Node::List { items: vec![] };
        assert_eq!(list.line(), None);
        let item = Node::ListItem { marker: None, text: "plain" };
        assert_eq!(item.line().as_deref(), Some("plain"));
    }

    #[test]
    fn json_view_names_node_kinds() {
        let json = render().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"]["kind"], "group");
        assert_eq!(value["root"]["class"], "App");
        assert_eq!(value["root"]["children"][0]["element"], "header");
        assert!(json.contains("\"kind\": \"list_item\""));
        assert!(json.contains("Version: 1.0.0"));
    }
}
