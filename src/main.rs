mod app;
mod background;
mod canvas;
mod config;
mod constants;
mod form;
mod frame_loop;
mod landing;
mod pages;
mod reveal;
mod rng;
mod starfield;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
