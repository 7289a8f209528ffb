pub mod page;
pub mod view;

pub use page::{render, DisplayTree, Node};
pub use view::App;
