use reproductor_frontend::App;

fn main() {
    reproductor_frontend::logging::init_logging();
    yew::Renderer::<App>::new().render();
}
