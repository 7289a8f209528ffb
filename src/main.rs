use gloo::console::log;
use react_docker_app::App;

fn main() {
    log!(format!(
        "{} v{} mounting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    yew::Renderer::<App>::new().render();
}
