use folio_cursor::components::App;

fn main() {
    folio_cursor::util::init_logging();
    yew::Renderer::<App>::new().render();
}
